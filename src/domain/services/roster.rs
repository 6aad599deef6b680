//! Agent status aggregation
//!
//! Derives a field agent's live status and elapsed runtime from the
//! snapshot. No inference beyond what the feed states; the only
//! computed value is the runtime figure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AgentActivity, FieldAgent, SlotState};
use crate::error::HubError;

/// What an agent is doing, as shown on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiveStatus {
    /// Idle, i.e. available for assignment at the hub
    AvailableAtHub,
    /// Occupied by the named activity
    Busy {
        /// The activity in progress
        activity: AgentActivity,
        /// Customer being served, when the feed names one
        customer: Option<String>,
    },
}

/// Derived roster figures for one agent at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatus {
    /// Live status read from the agent's current activity
    pub live: LiveStatus,
    /// Whole minutes since the current activity started, clamped at zero
    pub runtime_minutes: i64,
}

/// Agent status aggregation domain service
pub struct AgentStatusAggregator;

impl AgentStatusAggregator {
    /// Derive the roster view of one agent at `now`.
    ///
    /// The runtime clamp keeps the figure non-negative even when the
    /// feed's clocks are inconsistent.
    pub fn derive_status(agent: &FieldAgent, now: NaiveDateTime) -> AgentStatus {
        let live = match agent.activity() {
            AgentActivity::Idle => LiveStatus::AvailableAtHub,
            activity => LiveStatus::Busy {
                activity,
                customer: agent.customer().map(str::to_owned),
            },
        };
        AgentStatus {
            live,
            runtime_minutes: (now - agent.activity_start()).num_minutes().max(0),
        }
    }

    /// Number of schedule entries currently marked ongoing.
    ///
    /// A well-formed agent has exactly one while busy and zero while
    /// idle; callers and tests may assert against this.
    pub fn count_ongoing_entries(agent: &FieldAgent) -> usize {
        agent
            .schedule()
            .iter()
            .filter(|e| e.state == SlotState::Ongoing)
            .count()
    }

    /// Consistency probe: report (never correct) a schedule that
    /// disagrees with the agent's top-level activity.
    pub fn check_schedule_consistency(agent: &FieldAgent) -> Option<HubError> {
        let ongoing = Self::count_ongoing_entries(agent);
        let expected = usize::from(agent.activity().is_busy());
        if ongoing == expected {
            return None;
        }
        Some(HubError::InconsistentScheduleState {
            agent: agent.id().to_string(),
            ongoing,
            activity: format!("{:?}", agent.activity()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ActivityCounters, ScheduleEntry};
    use crate::domain::value_objects::{AgentId, ClockTime, LeadId};
    use chrono::NaiveDate;

    fn ts(date: &str, time: &str) -> NaiveDateTime {
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let t = ClockTime::parse(time).unwrap();
        d.and_hms_opt(u32::from(t.minutes() / 60), u32::from(t.minutes() % 60), 0)
            .unwrap()
    }

    fn agent(activity: AgentActivity, started: NaiveDateTime, schedule: Vec<ScheduleEntry>) -> FieldAgent {
        let customer = if activity.is_busy() {
            Some("Sahil Verma".to_string())
        } else {
            None
        };
        FieldAgent::new(
            AgentId::new("1").unwrap(),
            "Mehul Singh",
            activity,
            customer,
            None,
            started,
            started,
            "At Customer",
            ActivityCounters::default(),
            ActivityCounters::default(),
            schedule,
        )
    }

    fn slot(at: &str, state: SlotState) -> ScheduleEntry {
        ScheduleEntry {
            at: ClockTime::parse(at).unwrap(),
            activity: AgentActivity::HomeTestDrive,
            state,
            lead_id: LeadId::new("LD-10107").unwrap(),
            duration_mins: None,
            token: None,
            feedback_rating: None,
        }
    }

    #[test]
    fn test_runtime_minutes() {
        let a = agent(
            AgentActivity::HomeTestDrive,
            ts("2026-02-11", "15:20"),
            vec![slot("16:00", SlotState::Ongoing)],
        );
        let status = AgentStatusAggregator::derive_status(&a, ts("2026-02-11", "16:30"));
        assert_eq!(status.runtime_minutes, 70);
        assert!(matches!(status.live, LiveStatus::Busy { .. }));
    }

    #[test]
    fn test_runtime_clamped_when_clock_runs_backwards() {
        let a = agent(AgentActivity::HomeVisit, ts("2026-02-11", "15:20"), vec![]);
        let status = AgentStatusAggregator::derive_status(&a, ts("2026-02-11", "15:00"));
        assert_eq!(status.runtime_minutes, 0);
    }

    #[test]
    fn test_idle_agent_is_available_at_hub() {
        let a = agent(AgentActivity::Idle, ts("2026-02-11", "14:30"), vec![]);
        let status = AgentStatusAggregator::derive_status(&a, ts("2026-02-11", "16:30"));
        assert_eq!(status.live, LiveStatus::AvailableAtHub);
    }

    #[test]
    fn test_consistency_busy_agent_needs_one_ongoing_slot() {
        let consistent = agent(
            AgentActivity::HomeTestDrive,
            ts("2026-02-11", "15:20"),
            vec![slot("14:30", SlotState::Done), slot("16:00", SlotState::Ongoing)],
        );
        assert_eq!(AgentStatusAggregator::count_ongoing_entries(&consistent), 1);
        assert!(AgentStatusAggregator::check_schedule_consistency(&consistent).is_none());

        let stale = agent(AgentActivity::HomeTestDrive, ts("2026-02-11", "15:20"), vec![]);
        assert!(matches!(
            AgentStatusAggregator::check_schedule_consistency(&stale),
            Some(HubError::InconsistentScheduleState { ongoing: 0, .. })
        ));
    }

    #[test]
    fn test_consistency_idle_agent_needs_zero_ongoing_slots() {
        let busy_looking = agent(
            AgentActivity::Idle,
            ts("2026-02-11", "14:30"),
            vec![slot("16:00", SlotState::Ongoing)],
        );
        assert!(matches!(
            AgentStatusAggregator::check_schedule_consistency(&busy_looking),
            Some(HubError::InconsistentScheduleState { ongoing: 1, .. })
        ));
    }
}
