//! Application layer
//!
//! Feed DTOs, snapshot conversion, view models and the one-pass
//! dashboard evaluation.

pub mod dto;
pub mod engine;
pub mod snapshot;
pub mod views;

pub use dto::{AgentRecord, DispatchRecord, FeedSnapshot, ScheduleRecord, VisitRecord};
pub use engine::DashboardEngine;
pub use snapshot::EntitySnapshot;
pub use views::{
    AgentRoster, DashboardView, DispatchBoard, RosterEntry, VisitSummary, VisitView,
};
