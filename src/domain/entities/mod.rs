//! Snapshot entities
//!
//! Read-only records consumed for the duration of one evaluation pass.
//! The engine never mutates them; all derived values are produced as
//! new, independent structures.

pub mod dispatch_task;
pub mod field_agent;
pub mod visit;

pub use dispatch_task::{
    AgentLiveStatus, CallStatus, DispatchTask, Stage, StageDetails, TokenStatus,
};
pub use field_agent::{
    ActivityCounters, AgentActivity, FieldAgent, ScheduleEntry, SlotState,
};
pub use visit::{Feedback, Visit, VisitKind, VisitStatus};
