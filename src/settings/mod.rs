//! Deployment settings ingestion subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (JSON)
//!     → loader.rs (read & deserialize)
//!     → GlobalDeploymentSettings (parsed, immutable)
//!     → store.rs (atomic swap of Arc snapshot)
//!     → read by the projection subsystem
//!
//! On reload failure:
//!     loader logs the cause
//!     → caller receives an opaque ReloadError
//!     → store keeps the current document
//! ```
//!
//! # Design Decisions
//! - A document is immutable once parsed; updates replace it wholesale
//! - The store never holds a partially parsed document
//! - Reload is a single attempt; retry policy belongs to the caller

pub mod loader;
pub mod schema;
pub mod store;

pub use loader::{ReloadError, SettingsLoader};
pub use schema::{GlobalDeploymentSettings, ProjectSettings, ServiceSettings};
pub use store::SettingsStore;
