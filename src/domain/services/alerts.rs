//! Alert engine
//!
//! Scans the day's dispatch tasks and produces the ranked late-dispatch
//! alert list. Re-entrant and idempotent: no hidden counters, no side
//! effects on the input.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DispatchTask;
use crate::domain::services::classifier::StageClassifier;
use crate::domain::value_objects::{ClockTime, LeadId, MinuteOfDay, TaskId};

/// A late-dispatch alert, ready for the banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Task the alert is about
    pub task_id: TaskId,
    /// Lead the task serves
    pub lead_id: LeadId,
    /// Human-readable banner message
    pub message: String,
    /// Minute by which the agent had to leave, clamped to the day start
    pub must_leave_by: ClockTime,
    /// Whole minutes past the must-leave instant
    pub minutes_overdue: u32,
}

/// Alert derivation domain service
pub struct AlertEngine;

impl AlertEngine {
    /// Collect every late dispatch at `now`, most overdue first.
    ///
    /// Ordering: ascending must-leave minute (most-negative "minutes
    /// until must-leave" sorts first), ties broken by ascending lead id
    /// for determinism.
    pub fn compute_alerts(tasks: &[DispatchTask], now: MinuteOfDay) -> Vec<Alert> {
        let mut late: Vec<(i32, &DispatchTask)> = tasks
            .iter()
            .filter(|t| StageClassifier::classify(t, now).late_dispatch)
            .filter_map(|t| StageClassifier::must_leave_by(t).map(|leave_by| (leave_by, t)))
            .collect();

        late.sort_by(|(a_leave, a), (b_leave, b)| {
            a_leave.cmp(b_leave).then_with(|| a.lead_id().cmp(b.lead_id()))
        });

        late.into_iter()
            .map(|(leave_by, task)| Alert {
                task_id: task.id().clone(),
                lead_id: task.lead_id().clone(),
                message: format!("Late Dispatch: {}", task.customer()),
                must_leave_by: ClockTime::from_minutes(leave_by.max(0) as u16)
                    .unwrap_or(task.slot()),
                minutes_overdue: (now.as_i32() - leave_by).max(0) as u32,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AgentLiveStatus, CallStatus, StageDetails};

    fn upcoming(lead: &str, slot: &str, travel: u32, status: AgentLiveStatus) -> DispatchTask {
        DispatchTask::new(
            TaskId::new(lead).unwrap(),
            LeadId::new(lead).unwrap(),
            format!("Customer {lead}"),
            "Aman Sharma",
            ClockTime::parse(slot).unwrap(),
            None,
            StageDetails::Upcoming {
                travel_mins: Some(travel),
                call: CallStatus::NotApplicable,
                agent_status: status,
            },
        )
    }

    fn now(hhmm: &str) -> MinuteOfDay {
        ClockTime::parse(hhmm).unwrap().minute_of_day()
    }

    #[test]
    fn test_single_late_dispatch_alert() {
        let tasks = vec![upcoming("LD-10109", "17:00", 35, AgentLiveStatus::AtHub)];
        let alerts = AlertEngine::compute_alerts(&tasks, now("16:30"));

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.message, "Late Dispatch: Customer LD-10109");
        assert_eq!(alert.must_leave_by.to_string(), "16:25");
        assert_eq!(alert.minutes_overdue, 5);
    }

    #[test]
    fn test_checked_out_agent_raises_no_alert() {
        let tasks = vec![upcoming("LD-2002", "17:00", 35, AgentLiveStatus::CheckedOut)];
        assert!(AlertEngine::compute_alerts(&tasks, now("16:30")).is_empty());
    }

    #[test]
    fn test_most_overdue_sorts_first() {
        let tasks = vec![
            upcoming("LD-2003", "20:30", 25, AgentLiveStatus::Idle), // leave by 20:05
            upcoming("LD-10109", "17:00", 35, AgentLiveStatus::AtHub), // leave by 16:25
        ];
        let alerts = AlertEngine::compute_alerts(&tasks, now("20:30"));
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].lead_id.as_str(), "LD-10109");
        assert_eq!(alerts[1].lead_id.as_str(), "LD-2003");
    }

    #[test]
    fn test_tie_breaks_by_ascending_lead_id() {
        // Identical must-leave minute; LD-99 must precede LD-100
        let tasks = vec![
            upcoming("LD-100", "17:00", 30, AgentLiveStatus::AtHub),
            upcoming("LD-99", "17:10", 40, AgentLiveStatus::AtHub),
        ];
        let alerts = AlertEngine::compute_alerts(&tasks, now("17:00"));
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].lead_id.as_str(), "LD-99");
        assert_eq!(alerts[1].lead_id.as_str(), "LD-100");
    }

    #[test]
    fn test_idempotent_over_identical_inputs() {
        let tasks = vec![
            upcoming("LD-10109", "17:00", 35, AgentLiveStatus::AtHub),
            upcoming("LD-2003", "20:30", 25, AgentLiveStatus::Idle),
        ];
        let first = AlertEngine::compute_alerts(&tasks, now("20:30"));
        let second = AlertEngine::compute_alerts(&tasks, now("20:30"));
        assert_eq!(first, second);
    }
}
