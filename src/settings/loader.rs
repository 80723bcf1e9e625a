//! Settings loading from disk.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::options::ConfigurationOptions;
use crate::settings::schema::GlobalDeploymentSettings;
use crate::settings::store::SettingsStore;

/// Opaque reload failure returned to callers.
///
/// The underlying cause (IO vs parse, file path, parser position) goes to
/// the log only; callers observe a single generic failure and decide
/// whether to retry.
#[derive(Debug, Error)]
#[error("failed to reload deployment settings from file")]
pub struct ReloadError;

/// What went wrong during a reload attempt. Logged, never returned.
#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the settings document from disk and publishes it into the store.
pub struct SettingsLoader {
    path: PathBuf,
    store: Arc<SettingsStore>,
}

impl SettingsLoader {
    /// Create a loader reading the path configured by the host.
    pub fn new(options: &ConfigurationOptions, store: Arc<SettingsStore>) -> Self {
        Self {
            path: options.deploy_settings_path.clone(),
            store,
        }
    }

    /// Reload the settings document from disk.
    ///
    /// A single attempt: read the file, deserialize it, replace the store's
    /// document wholesale. On failure the store keeps its current document
    /// and the caller receives an opaque [`ReloadError`]; the cause is
    /// logged here with full detail.
    pub fn reload_from_file(&self) -> Result<(), ReloadError> {
        match self.load() {
            Ok(settings) => {
                tracing::info!(
                    path = %self.path.display(),
                    projects = settings.len(),
                    "Deployment settings reloaded"
                );
                self.store.set_global_deployment_settings(settings);
                Ok(())
            }
            Err(error) => {
                tracing::error!(
                    path = %self.path.display(),
                    %error,
                    "Failed to reload deployment settings from file. Keeping current document."
                );
                Err(ReloadError)
            }
        }
    }

    fn load(&self) -> Result<GlobalDeploymentSettings, LoadError> {
        let content = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }
}
