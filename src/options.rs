//! Host-facing configuration options.
//!
//! The host application owns the physical options loader (file, env,
//! whatever its configuration framework provides); this type is the
//! boundary it fills in before constructing the loader.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Options supplied by the host application's configuration layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigurationOptions {
    /// Path to the deployment-settings document.
    pub deploy_settings_path: PathBuf,
}

impl Default for ConfigurationOptions {
    fn default() -> Self {
        Self {
            deploy_settings_path: PathBuf::from("deploy-settings.json"),
        }
    }
}

impl ConfigurationOptions {
    /// Build options pointing at an explicit settings file.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            deploy_settings_path: path.as_ref().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let options = ConfigurationOptions::default();
        assert_eq!(
            options.deploy_settings_path,
            PathBuf::from("deploy-settings.json")
        );
    }

    #[test]
    fn test_with_path() {
        let options = ConfigurationOptions::with_path("/etc/deploy/settings.json");
        assert_eq!(
            options.deploy_settings_path,
            PathBuf::from("/etc/deploy/settings.json")
        );
    }

    #[test]
    fn test_deserialize_with_missing_field_uses_default() {
        let options: ConfigurationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(
            options.deploy_settings_path,
            PathBuf::from("deploy-settings.json")
        );
    }
}
