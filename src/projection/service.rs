//! Projection of the settings store into output models.

use std::sync::Arc;

use crate::projection::model::{ProjectModel, ServiceModel};
use crate::settings::store::SettingsStore;

/// Builds the external projects view from the current settings snapshot.
pub struct ProjectionService {
    store: Arc<SettingsStore>,
}

impl ProjectionService {
    /// Create a projection over the given store.
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self { store }
    }

    /// Project the current document into the output model.
    ///
    /// Returns one [`ProjectModel`] per project, in document order; a
    /// service without display text gets an empty description. An
    /// uninitialized or empty store yields an empty vec. This method
    /// performs no I/O and does not fail.
    pub fn projects_model(&self) -> Vec<ProjectModel> {
        let settings = match self.store.projects() {
            Some(settings) => settings,
            None => return Vec::new(),
        };

        settings
            .projects()
            .map(|(name, project)| ProjectModel {
                name: name.to_string(),
                services: project
                    .services
                    .iter()
                    .map(|(service_name, service)| ServiceModel {
                        name: service_name.clone(),
                        description: service.display_text.clone().unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect()
    }
}
