//! Domain module
//!
//! Value objects, snapshot entities and the pure services that derive
//! stages, alerts, orderings and roster figures from them.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
