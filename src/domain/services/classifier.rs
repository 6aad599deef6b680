//! Stage classifier
//!
//! Derives attention flags from a dispatch task and the evaluation
//! instant. Pure reads only; the task is never mutated and stage
//! transitions are never performed here.

use crate::domain::entities::{DispatchTask, StageDetails};
use crate::domain::value_objects::MinuteOfDay;

/// Attention flags derived for one task at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageFlags {
    /// The agent should already have left to make the slot, and the
    /// feed shows no evidence of movement
    pub late_dispatch: bool,
    /// The dispatch is nominally running but the agent is still at base
    /// past a recorded checkout, with no check-in
    pub stalled_checkout: bool,
}

/// Stage classification domain service
pub struct StageClassifier;

impl StageClassifier {
    /// Classify one task at the given minute-of-day.
    ///
    /// A task outside the Upcoming stage is never late-dispatch; an
    /// upcoming task with no travel estimate is treated as unknown,
    /// never as on time.
    pub fn classify(task: &DispatchTask, now: MinuteOfDay) -> StageFlags {
        StageFlags {
            late_dispatch: Self::is_late_dispatch(task, now),
            stalled_checkout: Self::is_stalled_checkout(task, now),
        }
    }

    /// Minute by which the agent must leave to make the slot, when the
    /// travel estimate is known. Negative when the slot is closer to
    /// midnight than the travel time.
    pub fn must_leave_by(task: &DispatchTask) -> Option<i32> {
        match task.details() {
            StageDetails::Upcoming {
                travel_mins: Some(travel),
                ..
            } => Some(task.slot().minutes() as i32 - *travel as i32),
            _ => None,
        }
    }

    fn is_late_dispatch(task: &DispatchTask, now: MinuteOfDay) -> bool {
        let StageDetails::Upcoming {
            travel_mins: Some(_),
            agent_status,
            ..
        } = task.details()
        else {
            return false;
        };
        let leave_by = match Self::must_leave_by(task) {
            Some(m) => m,
            None => return false,
        };
        now.as_i32() >= leave_by && !agent_status.is_en_route()
    }

    fn is_stalled_checkout(task: &DispatchTask, now: MinuteOfDay) -> bool {
        let StageDetails::Ongoing {
            checkout_time: Some(checkout),
            checkin_time,
            agent_status,
            ..
        } = task.details()
        else {
            return false;
        };
        checkin_time.is_none()
            && agent_status.is_at_base()
            && checkout.minutes() as i32 <= now.as_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AgentLiveStatus, CallStatus, StageDetails, TokenStatus};
    use crate::domain::value_objects::{ClockTime, LeadId, Rating, TaskId};

    fn upcoming(
        slot: &str,
        travel_mins: Option<u32>,
        agent_status: AgentLiveStatus,
    ) -> DispatchTask {
        DispatchTask::new(
            TaskId::new("LD-10109").unwrap(),
            LeadId::new("LD-10109").unwrap(),
            "Priya G.",
            "Aman Sharma",
            ClockTime::parse(slot).unwrap(),
            None,
            StageDetails::Upcoming {
                travel_mins,
                call: CallStatus::NotApplicable,
                agent_status,
            },
        )
    }

    fn now(hhmm: &str) -> MinuteOfDay {
        ClockTime::parse(hhmm).unwrap().minute_of_day()
    }

    #[test]
    fn test_late_dispatch_when_agent_still_at_hub() {
        // slot 17:00, travel 35 -> must leave by 16:25; now 16:30
        let task = upcoming("17:00", Some(35), AgentLiveStatus::AtHub);
        let flags = StageClassifier::classify(&task, now("16:30"));
        assert!(flags.late_dispatch);
        assert_eq!(StageClassifier::must_leave_by(&task), Some(985));
    }

    #[test]
    fn test_not_late_before_threshold() {
        let task = upcoming("17:00", Some(35), AgentLiveStatus::AtHub);
        assert!(!StageClassifier::classify(&task, now("16:20")).late_dispatch);
        // Exactly at the threshold counts as late
        assert!(StageClassifier::classify(&task, now("16:25")).late_dispatch);
    }

    #[test]
    fn test_checked_out_agent_is_not_late() {
        let task = upcoming("17:00", Some(35), AgentLiveStatus::CheckedOut);
        assert!(!StageClassifier::classify(&task, now("16:30")).late_dispatch);
        let task = upcoming("17:00", Some(35), AgentLiveStatus::Driving);
        assert!(!StageClassifier::classify(&task, now("16:30")).late_dispatch);
    }

    #[test]
    fn test_unknown_travel_estimate_never_late() {
        let task = upcoming("17:00", None, AgentLiveStatus::AtHub);
        assert!(!StageClassifier::classify(&task, now("23:59")).late_dispatch);
    }

    #[test]
    fn test_non_upcoming_never_late() {
        let completed = DispatchTask::new(
            TaskId::new("LD-10104").unwrap(),
            LeadId::new("LD-10104").unwrap(),
            "Neeraj V.",
            "Chetan Arora",
            ClockTime::parse("13:00").unwrap(),
            None,
            StageDetails::Completed {
                est_total_mins: Some(70),
                actual_mins: 65,
                token: TokenStatus::Yes,
                feedback_rating: Some(Rating::new(5).unwrap()),
                did_follow_up: false,
            },
        );
        assert!(!StageClassifier::classify(&completed, now("23:59")).late_dispatch);
    }

    fn ongoing(
        checkout: Option<&str>,
        checkin: Option<&str>,
        agent_status: AgentLiveStatus,
    ) -> DispatchTask {
        DispatchTask::new(
            TaskId::new("LD-10107").unwrap(),
            LeadId::new("LD-10107").unwrap(),
            "Sahil Verma",
            "Mehul Singh",
            ClockTime::parse("16:00").unwrap(),
            None,
            StageDetails::Ongoing {
                est_travel_mins: Some(25),
                checkout_time: checkout.map(|t| ClockTime::parse(t).unwrap()),
                checkin_time: checkin.map(|t| ClockTime::parse(t).unwrap()),
                reach_customer_mins: None,
                return_to_hub_mins: None,
                visit_duration_mins: None,
                call: CallStatus::NotApplicable,
                agent_status,
            },
        )
    }

    #[test]
    fn test_stalled_checkout_flags_idle_agent() {
        let task = ongoing(Some("15:20"), None, AgentLiveStatus::AtHub);
        assert!(StageClassifier::classify(&task, now("15:30")).stalled_checkout);
    }

    #[test]
    fn test_checked_in_dispatch_is_not_stalled() {
        let task = ongoing(Some("15:20"), Some("15:55"), AgentLiveStatus::VisitRunning);
        assert!(!StageClassifier::classify(&task, now("16:10")).stalled_checkout);
    }

    #[test]
    fn test_future_checkout_is_not_stalled() {
        let task = ongoing(Some("17:40"), None, AgentLiveStatus::AtHub);
        assert!(!StageClassifier::classify(&task, now("15:30")).stalled_checkout);
    }

    #[test]
    fn test_moving_agent_is_not_stalled() {
        let task = ongoing(Some("15:20"), None, AgentLiveStatus::Driving);
        assert!(!StageClassifier::classify(&task, now("15:30")).stalled_checkout);
    }
}
