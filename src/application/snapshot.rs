//! Snapshot conversion
//!
//! Turns a raw [`FeedSnapshot`] into typed entities, applying the
//! exclude-and-report policy: a record that fails validation is dropped
//! from the evaluation and surfaced as an error diagnostic, never
//! silently coerced to a plausible default.

use chrono::NaiveDateTime;

use crate::application::dto::{
    AgentRecord, DispatchRecord, FeedSnapshot, ScheduleRecord, VisitRecord,
};
use crate::domain::entities::{
    ActivityCounters, AgentActivity, AgentLiveStatus, CallStatus, DispatchTask, Feedback,
    FieldAgent, ScheduleEntry, SlotState, StageDetails, TokenStatus, Visit, VisitKind,
    VisitStatus,
};
use crate::domain::value_objects::{
    AgentId, BusinessDate, ClockTime, LeadId, MinuteOfDay, Rating, TaskId, VisitId,
};
use crate::error::{Diagnostic, HubError, HubResult};

/// Typed, immutable input to one evaluation pass
#[derive(Debug, Clone)]
pub struct EntitySnapshot {
    /// Dashboard day
    pub as_of: BusinessDate,
    /// Evaluation instant as minute-of-day
    pub now: MinuteOfDay,
    /// The day's visits
    pub visits: Vec<Visit>,
    /// The day's dispatch tasks
    pub tasks: Vec<DispatchTask>,
    /// The agent roster
    pub agents: Vec<FieldAgent>,
}

impl EntitySnapshot {
    /// Convert a raw feed delivery.
    ///
    /// The envelope's date and clock must parse or the whole snapshot is
    /// rejected; individual records fail closed and are reported in the
    /// returned diagnostics. Visits dated outside the dashboard day are
    /// not part of the day view and are dropped without a diagnostic.
    pub fn from_feed(feed: &FeedSnapshot) -> HubResult<(Self, Vec<Diagnostic>)> {
        let as_of = BusinessDate::parse(&feed.as_of_date)?;
        let now = ClockTime::parse(&feed.now)?.minute_of_day();

        let mut diagnostics = Vec::new();

        let mut visits = Vec::with_capacity(feed.visits.len());
        for record in &feed.visits {
            match convert_visit(record) {
                Ok(visit) if visit.date() == as_of => visits.push(visit),
                Ok(_) => {} // other-day record, not part of this view
                Err(error) => diagnostics.push(Diagnostic::error(record.id.clone(), error)),
            }
        }

        let mut tasks = Vec::with_capacity(feed.tasks.len());
        for record in &feed.tasks {
            match convert_task(record) {
                Ok(task) => tasks.push(task),
                Err(error) => diagnostics.push(Diagnostic::error(record.lead_id.clone(), error)),
            }
        }

        let mut agents = Vec::with_capacity(feed.agents.len());
        for record in &feed.agents {
            match convert_agent(record) {
                Ok(agent) => agents.push(agent),
                Err(error) => diagnostics.push(Diagnostic::error(record.id.clone(), error)),
            }
        }

        Ok((
            Self {
                as_of,
                now,
                visits,
                tasks,
                agents,
            },
            diagnostics,
        ))
    }

    /// The evaluation instant as a full timestamp on the dashboard day
    pub fn now_timestamp(&self) -> NaiveDateTime {
        let minutes = self.now.get();
        self.as_of
            .date()
            .and_hms_opt(u32::from(minutes / 60), u32::from(minutes % 60), 0)
            .expect("minute-of-day is always a valid wall-clock time")
    }
}

fn convert_visit(record: &VisitRecord) -> HubResult<Visit> {
    let status = parse_visit_status(&record.status)?;
    let feedback = match (record.feedback_rating, &record.feedback_text) {
        (Some(rating), text) => Some(Feedback {
            rating: Rating::new(rating)?,
            text: text.clone(),
        }),
        (None, _) => None,
    };
    Visit::new(
        VisitId::new(record.id.clone())?,
        LeadId::new(record.lead_id.clone())?,
        parse_visit_kind(&record.kind)?,
        BusinessDate::parse(&record.date_iso)?,
        ClockTime::parse(&record.time)?,
        record.customer.clone(),
        record.car.clone(),
        record.rm.clone(),
        status,
        feedback,
    )
}

fn convert_task(record: &DispatchRecord) -> HubResult<DispatchTask> {
    let call = match record.call.as_deref() {
        Some(raw) => parse_call_status(raw)?,
        None => CallStatus::NotApplicable,
    };
    // No live-status evidence counts as "not en route", the same reading
    // the original dashboard applied to an absent status.
    let agent_status = match record.rm_status.as_deref() {
        Some(raw) => parse_agent_live_status(raw)?,
        None => AgentLiveStatus::Idle,
    };

    let details = match record.stage.as_str() {
        "upcoming" => StageDetails::Upcoming {
            travel_mins: record.travel_mins,
            call,
            agent_status,
        },
        "ongoing" => StageDetails::Ongoing {
            est_travel_mins: record.est_travel_mins,
            checkout_time: parse_optional_time(record.checkout_time.as_deref())?,
            checkin_time: parse_optional_time(record.checkin_time.as_deref())?,
            reach_customer_mins: record.reach_customer_mins,
            return_to_hub_mins: record.return_to_hub_mins,
            visit_duration_mins: record.visit_duration_mins,
            call,
            agent_status,
        },
        "completed" => {
            let actual_mins = record.actual_mins.ok_or_else(|| HubError::IncompleteEntity {
                id: record.lead_id.clone(),
                reason: "completed without actualMins".into(),
            })?;
            let token = record.token.as_deref().ok_or_else(|| {
                HubError::IncompleteEntity {
                    id: record.lead_id.clone(),
                    reason: "completed without token".into(),
                }
            })?;
            StageDetails::Completed {
                est_total_mins: record.est_total_mins,
                actual_mins,
                token: parse_token_status(token)?,
                feedback_rating: record.feedback_rating.map(Rating::new).transpose()?,
                did_follow_up: record.did_follow_up.unwrap_or(false),
            }
        }
        "cancelled" => StageDetails::Cancelled {
            reason: record.cancel_reason.clone(),
        },
        other => {
            return Err(HubError::InvalidValue(format!(
                "unknown dispatch stage: {other:?}"
            )))
        }
    };

    Ok(DispatchTask::new(
        TaskId::new(record.lead_id.clone())?,
        LeadId::new(record.lead_id.clone())?,
        record.customer_name.clone(),
        record.rm_name.clone(),
        ClockTime::parse(&record.slot)?,
        record.notes.clone(),
        details,
    ))
}

fn convert_agent(record: &AgentRecord) -> HubResult<FieldAgent> {
    let schedule = record
        .schedule
        .iter()
        .map(convert_schedule_entry)
        .collect::<HubResult<Vec<_>>>()?;

    Ok(FieldAgent::new(
        AgentId::new(record.id.clone())?,
        record.name.clone(),
        parse_agent_activity(&record.now)?,
        record.customer.clone(),
        record
            .current_lead_id
            .clone()
            .map(LeadId::new)
            .transpose()?,
        parse_timestamp(&record.started_at)?,
        parse_timestamp(&record.frc)?,
        record.location.clone(),
        ActivityCounters {
            visits: record.visits_today,
            tokens: record.tokens_today,
            deliveries: record.deliveries_today,
            feedback_filled: record.feedback_filled_today,
        },
        ActivityCounters {
            visits: record.visits_mtd,
            tokens: record.tokens_mtd,
            deliveries: record.deliveries_mtd,
            feedback_filled: record.feedback_filled_mtd,
        },
        schedule,
    ))
}

fn convert_schedule_entry(record: &ScheduleRecord) -> HubResult<ScheduleEntry> {
    Ok(ScheduleEntry {
        at: ClockTime::parse(&record.at)?,
        activity: parse_agent_activity(&record.activity)?,
        state: parse_slot_state(&record.state)?,
        lead_id: LeadId::new(record.lead_id.clone())?,
        duration_mins: record.duration_min,
        token: record
            .token
            .as_deref()
            .map(parse_token_status)
            .transpose()?,
        feedback_rating: record.feedback_rating.map(Rating::new).transpose()?,
    })
}

fn parse_optional_time(raw: Option<&str>) -> HubResult<Option<ClockTime>> {
    raw.map(ClockTime::parse).transpose()
}

fn parse_timestamp(raw: &str) -> HubResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| HubError::InvalidTimeFormat(raw.to_string()))
}

fn parse_visit_kind(raw: &str) -> HubResult<VisitKind> {
    match raw {
        "HV" => Ok(VisitKind::HomeVisit),
        "HTD" => Ok(VisitKind::HomeTestDrive),
        other => Err(HubError::InvalidValue(format!("unknown visit type: {other:?}"))),
    }
}

fn parse_visit_status(raw: &str) -> HubResult<VisitStatus> {
    match raw {
        "SCHEDULED" => Ok(VisitStatus::Scheduled),
        "ONGOING" => Ok(VisitStatus::Ongoing),
        "COMPLETED" => Ok(VisitStatus::Completed),
        "CANCELLED" => Ok(VisitStatus::Cancelled),
        other => Err(HubError::InvalidValue(format!(
            "unknown visit status: {other:?}"
        ))),
    }
}

fn parse_call_status(raw: &str) -> HubResult<CallStatus> {
    match raw {
        "yes" => Ok(CallStatus::Yes),
        "no" => Ok(CallStatus::No),
        "late" => Ok(CallStatus::Late),
        "na" => Ok(CallStatus::NotApplicable),
        other => Err(HubError::InvalidValue(format!(
            "unknown call status: {other:?}"
        ))),
    }
}

fn parse_agent_live_status(raw: &str) -> HubResult<AgentLiveStatus> {
    match raw {
        "Idle" => Ok(AgentLiveStatus::Idle),
        "At Hub" => Ok(AgentLiveStatus::AtHub),
        "Driving" => Ok(AgentLiveStatus::Driving),
        "Checked-out" => Ok(AgentLiveStatus::CheckedOut),
        "At Customer" => Ok(AgentLiveStatus::AtCustomer),
        "Returning" => Ok(AgentLiveStatus::Returning),
        "Visit Running" => Ok(AgentLiveStatus::VisitRunning),
        other => Err(HubError::InvalidValue(format!(
            "unknown agent status: {other:?}"
        ))),
    }
}

fn parse_token_status(raw: &str) -> HubResult<TokenStatus> {
    match raw {
        "yes" => Ok(TokenStatus::Yes),
        "no" => Ok(TokenStatus::No),
        other => Err(HubError::InvalidValue(format!("unknown token flag: {other:?}"))),
    }
}

fn parse_agent_activity(raw: &str) -> HubResult<AgentActivity> {
    match raw {
        "HV" => Ok(AgentActivity::HomeVisit),
        "HTD" => Ok(AgentActivity::HomeTestDrive),
        "IDLE" => Ok(AgentActivity::Idle),
        other => Err(HubError::InvalidValue(format!(
            "unknown agent activity: {other:?}"
        ))),
    }
}

fn parse_slot_state(raw: &str) -> HubResult<SlotState> {
    match raw {
        "done" => Ok(SlotState::Done),
        "ongoing" => Ok(SlotState::Ongoing),
        "upcoming" => Ok(SlotState::Upcoming),
        other => Err(HubError::InvalidValue(format!(
            "unknown slot state: {other:?}"
        ))),
    }
}
