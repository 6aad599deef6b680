//! Domain services
//!
//! Pure, stateless computation over snapshot entities.

pub mod alerts;
pub mod classifier;
pub mod ordering;
pub mod roster;

pub use alerts::{Alert, AlertEngine};
pub use classifier::{StageClassifier, StageFlags};
pub use ordering::OrderingService;
pub use roster::{AgentStatus, AgentStatusAggregator, LiveStatus};
