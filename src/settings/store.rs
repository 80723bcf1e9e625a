//! Shared holder for the last successfully parsed settings document.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::settings::schema::GlobalDeploymentSettings;

/// Process-wide store for the current deployment settings document.
///
/// The store holds either no document (before the first successful reload)
/// or the last successfully parsed one. Reads are lock-free snapshots; a
/// reload replaces the document wholesale with an atomic swap, so a reader
/// racing a reload observes either the fully-old or fully-new document,
/// never a torn one.
#[derive(Default)]
pub struct SettingsStore {
    current: ArcSwapOption<GlobalDeploymentSettings>,
}

impl SettingsStore {
    /// Create an empty (uninitialized) store.
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Replace the stored document wholesale.
    ///
    /// The store performs no validation; the loader only publishes
    /// documents that already parsed successfully.
    pub fn set_global_deployment_settings(&self, settings: GlobalDeploymentSettings) {
        self.current.store(Some(Arc::new(settings)));
    }

    /// Snapshot of the current project mapping.
    ///
    /// Returns `None` until the first successful reload; the projection
    /// layer renders that as an empty project list.
    pub fn projects(&self) -> Option<Arc<GlobalDeploymentSettings>> {
        self.current.load_full()
    }
}
