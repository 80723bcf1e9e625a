//! Deployment Settings Library
//!
//! Loads a deployment-settings document (JSON) from a configured file path,
//! publishes the parsed result into a shared store, and projects that store
//! into the projects/services view returned to consumers. The web transport
//! that calls into this crate is owned by the host application.

pub mod options;
pub mod projection;
pub mod settings;

pub use options::ConfigurationOptions;
pub use projection::{ProjectModel, ProjectionService, ServiceModel};
pub use settings::{GlobalDeploymentSettings, ReloadError, SettingsLoader, SettingsStore};
