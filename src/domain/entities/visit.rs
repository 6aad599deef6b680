//! Visit entity
//!
//! A scheduled or completed customer interaction, read from the feed.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BusinessDate, ClockTime, LeadId, Rating, VisitId};
use crate::error::{HubError, HubResult};

/// Kind of customer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitKind {
    /// Sales visit at the customer's location
    HomeVisit,
    /// Test drive delivered to the customer's location
    HomeTestDrive,
}

/// Visit lifecycle status
///
/// Transitions (externally driven): Scheduled → Ongoing → Completed,
/// or Scheduled → Cancelled. Completed and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitStatus {
    /// Booked, not started
    Scheduled,
    /// In progress right now
    Ongoing,
    /// Finished; feedback may be recorded
    Completed,
    /// Called off before completion
    Cancelled,
}

/// Customer feedback recorded against a completed visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// 1..=5 star rating
    pub rating: Rating,
    /// Optional free-text comment
    pub text: Option<String>,
}

/// Visit entity (read-only snapshot record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    id: VisitId,
    lead_id: LeadId,
    kind: VisitKind,
    date: BusinessDate,
    time: ClockTime,
    customer: String,
    vehicle: String,
    agent: Option<String>,
    status: VisitStatus,
    feedback: Option<Feedback>,
}

impl Visit {
    /// Build a visit record, enforcing that feedback is present only
    /// when the visit is completed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VisitId,
        lead_id: LeadId,
        kind: VisitKind,
        date: BusinessDate,
        time: ClockTime,
        customer: impl Into<String>,
        vehicle: impl Into<String>,
        agent: Option<String>,
        status: VisitStatus,
        feedback: Option<Feedback>,
    ) -> HubResult<Self> {
        if feedback.is_some() && status != VisitStatus::Completed {
            return Err(HubError::IncompleteEntity {
                id: id.to_string(),
                reason: format!("feedback recorded while status is {status:?}"),
            });
        }
        Ok(Self {
            id,
            lead_id,
            kind,
            date,
            time,
            customer: customer.into(),
            vehicle: vehicle.into(),
            agent,
            status,
            feedback,
        })
    }

    pub fn id(&self) -> &VisitId { &self.id }
    pub fn lead_id(&self) -> &LeadId { &self.lead_id }
    pub fn kind(&self) -> VisitKind { self.kind }
    pub fn date(&self) -> BusinessDate { self.date }
    pub fn time(&self) -> ClockTime { self.time }
    pub fn customer(&self) -> &str { &self.customer }
    pub fn vehicle(&self) -> &str { &self.vehicle }
    pub fn agent(&self) -> Option<&str> { self.agent.as_deref() }
    pub fn status(&self) -> VisitStatus { self.status }
    pub fn feedback(&self) -> Option<&Feedback> { self.feedback.as_ref() }

    /// Scheduled or ongoing, i.e. counted as active on the scorecards
    pub fn is_active(&self) -> bool {
        matches!(self.status, VisitStatus::Scheduled | VisitStatus::Ongoing)
    }
}
