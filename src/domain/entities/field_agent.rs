//! FieldAgent entity
//!
//! A relationship manager executing visits and dispatches, with the
//! day's schedule and productivity counters as reported by the feed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::dispatch_task::TokenStatus;
use crate::domain::value_objects::{AgentId, ClockTime, LeadId, Rating};

/// What the agent is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentActivity {
    /// Executing a home visit
    HomeVisit,
    /// Executing a home test drive
    HomeTestDrive,
    /// No current assignment
    Idle,
}

impl AgentActivity {
    /// Whether this activity occupies the agent
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// State of one schedule slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// Finished
    Done,
    /// Running now
    Ongoing,
    /// Not yet started
    Upcoming,
}

/// One slot in an agent's day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Slot clock time
    pub at: ClockTime,
    /// Activity kind for the slot
    pub activity: AgentActivity,
    /// Slot state at evaluation time
    pub state: SlotState,
    /// Lead the slot serves
    pub lead_id: LeadId,
    /// Duration in minutes, once known
    pub duration_mins: Option<u32>,
    /// Token outcome, once known
    pub token: Option<TokenStatus>,
    /// Feedback rating, once filled
    pub feedback_rating: Option<Rating>,
}

/// Same-day or month-to-date productivity counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounters {
    /// Visits executed
    pub visits: u32,
    /// Tokens collected
    pub tokens: u32,
    /// Deliveries made
    pub deliveries: u32,
    /// Feedback forms filled
    pub feedback_filled: u32,
}

/// FieldAgent entity (read-only snapshot record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAgent {
    id: AgentId,
    name: String,
    activity: AgentActivity,
    customer: Option<String>,
    current_lead_id: Option<LeadId>,
    activity_start: NaiveDateTime,
    first_activity: NaiveDateTime,
    location: String,
    today: ActivityCounters,
    month_to_date: ActivityCounters,
    schedule: Vec<ScheduleEntry>,
}

impl FieldAgent {
    /// Build an agent record. The schedule is kept in the feed's order,
    /// which is clock-time ascending for a well-formed agent.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        activity: AgentActivity,
        customer: Option<String>,
        current_lead_id: Option<LeadId>,
        activity_start: NaiveDateTime,
        first_activity: NaiveDateTime,
        location: impl Into<String>,
        today: ActivityCounters,
        month_to_date: ActivityCounters,
        schedule: Vec<ScheduleEntry>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            activity,
            customer,
            current_lead_id,
            activity_start,
            first_activity,
            location: location.into(),
            today,
            month_to_date,
            schedule,
        }
    }

    pub fn id(&self) -> &AgentId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn activity(&self) -> AgentActivity { self.activity }
    pub fn customer(&self) -> Option<&str> { self.customer.as_deref() }
    pub fn current_lead_id(&self) -> Option<&LeadId> { self.current_lead_id.as_ref() }
    pub fn activity_start(&self) -> NaiveDateTime { self.activity_start }
    pub fn first_activity(&self) -> NaiveDateTime { self.first_activity }
    pub fn location(&self) -> &str { &self.location }
    pub fn today(&self) -> ActivityCounters { self.today }
    pub fn month_to_date(&self) -> ActivityCounters { self.month_to_date }
    pub fn schedule(&self) -> &[ScheduleEntry] { &self.schedule }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_busy_activities() {
        assert!(AgentActivity::HomeVisit.is_busy());
        assert!(AgentActivity::HomeTestDrive.is_busy());
        assert!(!AgentActivity::Idle.is_busy());
    }

    #[test]
    fn test_agent_record_round_trip() {
        let start = NaiveDate::from_ymd_opt(2026, 2, 11)
            .unwrap()
            .and_hms_opt(15, 20, 0)
            .unwrap();
        let agent = FieldAgent::new(
            AgentId::new("1").unwrap(),
            "Mehul Singh",
            AgentActivity::HomeTestDrive,
            Some("Sahil Verma".into()),
            Some(LeadId::new("LD-10107").unwrap()),
            start,
            start,
            "At Customer",
            ActivityCounters { visits: 2, ..Default::default() },
            ActivityCounters { visits: 26, tokens: 8, deliveries: 3, feedback_filled: 14 },
            vec![],
        );
        assert_eq!(agent.name(), "Mehul Singh");
        assert_eq!(agent.today().visits, 2);
        assert!(agent.activity().is_busy());
    }
}
