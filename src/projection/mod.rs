//! Read-side projection subsystem.
//!
//! # Data Flow
//! ```text
//! SettingsStore snapshot
//!     → service.rs (walk projects & services in document order)
//!     → model.rs (ProjectModel / ServiceModel)
//!     → returned to the host (serialized by its HTTP layer)
//! ```
//!
//! # Design Decisions
//! - Projection is a pure transform; it performs no I/O and cannot fail
//! - Output is rebuilt on every call, never cached
//! - An uninitialized store projects as an empty list

pub mod model;
pub mod service;

pub use model::{ProjectModel, ServiceModel};
pub use service::ProjectionService;
