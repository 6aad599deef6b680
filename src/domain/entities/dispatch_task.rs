//! DispatchTask entity
//!
//! A home-test-drive logistics record tracking agent travel. Fields that
//! are only meaningful in one lifecycle stage live on that stage's
//! variant, so a completed task without its actuals is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ClockTime, LeadId, Rating, TaskId};

/// Call-confirmation status for a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallStatus {
    /// Customer confirmed
    Yes,
    /// Customer did not confirm
    No,
    /// Confirmed after the cutoff
    Late,
    /// Confirmation not required
    NotApplicable,
}

/// Live status of the agent executing a dispatch, as reported by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentLiveStatus {
    /// No current assignment
    Idle,
    /// Present at the hub
    AtHub,
    /// En route to the customer
    Driving,
    /// Left the hub with the vehicle
    CheckedOut,
    /// Arrived at the customer's location
    AtCustomer,
    /// Heading back to the hub
    Returning,
    /// Visit in progress at the customer's location
    VisitRunning,
}

impl AgentLiveStatus {
    /// The agent is demonstrably on the move toward (or with) the customer
    pub fn is_en_route(self) -> bool {
        matches!(self, Self::Driving | Self::CheckedOut)
    }

    /// The agent is still at base despite an assignment
    pub fn is_at_base(self) -> bool {
        matches!(self, Self::Idle | Self::AtHub)
    }
}

/// Token (deposit) collection outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
    /// Token collected
    Yes,
    /// No token collected
    No,
}

/// Lifecycle stage of a dispatch task
///
/// Monotonic along Upcoming → Ongoing → Completed, with an escape to
/// Cancelled from Upcoming or Ongoing. Transitions are externally
/// driven; the engine only reads the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Slot booked, agent not yet dispatched
    Upcoming,
    /// Agent checked out or on site
    Ongoing,
    /// Dispatch finished and reconciled
    Completed,
    /// Called off
    Cancelled,
}

/// Stage-specific fields of a dispatch task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDetails {
    /// Before dispatch: the static travel estimate drives the
    /// late-dispatch rule
    Upcoming {
        /// Dispatcher's travel estimate in minutes; None means unknown,
        /// which suppresses lateness evaluation entirely
        travel_mins: Option<u32>,
        /// Call-confirmation status
        call: CallStatus,
        /// Agent's live status
        agent_status: AgentLiveStatus,
    },
    /// In flight: checkout/check-in evidence drives the stalled-checkout
    /// rule
    Ongoing {
        /// In-flight remaining-drive estimate in minutes (distinct input
        /// from the upcoming-stage travel estimate; see DESIGN.md)
        est_travel_mins: Option<u32>,
        /// When the agent left the hub
        checkout_time: Option<ClockTime>,
        /// When the agent arrived at the customer
        checkin_time: Option<ClockTime>,
        /// Minutes taken to reach the customer
        reach_customer_mins: Option<u32>,
        /// Minutes estimated for the return leg
        return_to_hub_mins: Option<u32>,
        /// Minutes spent with the customer so far
        visit_duration_mins: Option<u32>,
        /// Call-confirmation status
        call: CallStatus,
        /// Agent's live status
        agent_status: AgentLiveStatus,
    },
    /// Reconciled outcome of a finished dispatch
    Completed {
        /// Estimated end-to-end minutes
        est_total_mins: Option<u32>,
        /// Actual end-to-end minutes (required once completed)
        actual_mins: u32,
        /// Whether a token was collected
        token: TokenStatus,
        /// Customer rating, if filled
        feedback_rating: Option<Rating>,
        /// Whether a follow-up was made
        did_follow_up: bool,
    },
    /// Called off
    Cancelled {
        /// Free-text reason, if given
        reason: Option<String>,
    },
}

impl StageDetails {
    /// The stage discriminator for these details
    pub fn stage(&self) -> Stage {
        match self {
            Self::Upcoming { .. } => Stage::Upcoming,
            Self::Ongoing { .. } => Stage::Ongoing,
            Self::Completed { .. } => Stage::Completed,
            Self::Cancelled { .. } => Stage::Cancelled,
        }
    }
}

/// DispatchTask entity (read-only snapshot record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchTask {
    id: TaskId,
    lead_id: LeadId,
    customer: String,
    agent: String,
    slot: ClockTime,
    notes: Option<String>,
    details: StageDetails,
}

impl DispatchTask {
    /// Build a dispatch task record
    pub fn new(
        id: TaskId,
        lead_id: LeadId,
        customer: impl Into<String>,
        agent: impl Into<String>,
        slot: ClockTime,
        notes: Option<String>,
        details: StageDetails,
    ) -> Self {
        Self {
            id,
            lead_id,
            customer: customer.into(),
            agent: agent.into(),
            slot,
            notes,
            details,
        }
    }

    pub fn id(&self) -> &TaskId { &self.id }
    pub fn lead_id(&self) -> &LeadId { &self.lead_id }
    pub fn customer(&self) -> &str { &self.customer }
    pub fn agent(&self) -> &str { &self.agent }
    pub fn slot(&self) -> ClockTime { self.slot }
    pub fn notes(&self) -> Option<&str> { self.notes.as_deref() }
    pub fn details(&self) -> &StageDetails { &self.details }

    /// Current lifecycle stage
    pub fn stage(&self) -> Stage {
        self.details.stage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_follows_details() {
        let task = DispatchTask::new(
            TaskId::new("LD-10109").unwrap(),
            LeadId::new("LD-10109").unwrap(),
            "Priya G.",
            "Aman Sharma",
            ClockTime::parse("17:00").unwrap(),
            Some("EV Demo".into()),
            StageDetails::Upcoming {
                travel_mins: Some(35),
                call: CallStatus::NotApplicable,
                agent_status: AgentLiveStatus::AtHub,
            },
        );
        assert_eq!(task.stage(), Stage::Upcoming);
    }

    #[test]
    fn test_agent_status_partitions() {
        assert!(AgentLiveStatus::Driving.is_en_route());
        assert!(AgentLiveStatus::CheckedOut.is_en_route());
        assert!(!AgentLiveStatus::AtHub.is_en_route());
        assert!(AgentLiveStatus::Idle.is_at_base());
        assert!(!AgentLiveStatus::Returning.is_at_base());
    }
}
