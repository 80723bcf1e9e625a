//! Shared utilities for integration testing.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use deploy_settings::{ConfigurationOptions, ProjectionService, SettingsLoader, SettingsStore};

/// A wired-up reload/projection pipeline backed by a temp directory.
pub struct Harness {
    // Held so the settings file outlives the test body.
    _dir: TempDir,
    pub path: PathBuf,
    pub store: Arc<SettingsStore>,
    pub loader: SettingsLoader,
    pub projection: ProjectionService,
}

impl Harness {
    /// Overwrite the settings file with the given document.
    pub fn write_settings(&self, content: &str) {
        fs::write(&self.path, content).unwrap();
    }

    /// Remove the settings file, as if deleted between reloads.
    pub fn remove_settings(&self) {
        fs::remove_file(&self.path).unwrap();
    }
}

/// Build a store, loader, and projection sharing one settings file.
pub fn harness() -> Harness {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deploy-settings.json");

    let store = Arc::new(SettingsStore::new());
    let options = ConfigurationOptions::with_path(&path);
    let loader = SettingsLoader::new(&options, Arc::clone(&store));
    let projection = ProjectionService::new(Arc::clone(&store));

    Harness {
        _dir: dir,
        path,
        store,
        loader,
        projection,
    }
}
