//! Dealer Hub Dispatch & Status Engine
//!
//! The shared computation behind the dealership operations dashboard:
//! classifies dispatch lifecycle stages, derives late-dispatch alerts,
//! orders visit and dispatch lists for presentation, and aggregates
//! field-agent live status. Presentation adapters (desktop, mobile)
//! consume the view models produced here and hold no logic of their own.
//!
//! ## Architecture
//!
//! - **Domain layer**: validated value objects, read-only snapshot
//!   entities, pure derivation services
//! - **Application layer**: feed DTOs, fail-closed snapshot conversion,
//!   view models, one-pass evaluation
//!
//! Every evaluation takes the snapshot and the "now" instant as explicit
//! arguments and retains no state, so calls are deterministic and
//! trivially parallelizable across independent snapshots.

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{
    DashboardEngine, DashboardView, DispatchBoard, EntitySnapshot, FeedSnapshot, VisitView,
};
pub use domain::entities::{
    AgentLiveStatus, DispatchTask, FieldAgent, Stage, StageDetails, Visit, VisitStatus,
};
pub use domain::services::{
    Alert, AlertEngine, AgentStatusAggregator, LiveStatus, OrderingService, StageClassifier,
    StageFlags,
};
pub use domain::value_objects::{BusinessDate, ClockTime, LeadId, MinuteOfDay};
pub use error::{Diagnostic, HubError, HubResult, Severity};
