//! Settings document schema definitions.
//!
//! This module defines the parsed shape of the on-disk settings document:
//! a mapping from project name to project definition, each project holding
//! a mapping from service name to service definition.
//!
//! Wire contract (the host's clients depend on these rules):
//! - Field names are camelCase and matched case-insensitively
//!   (`services`, `displayText` in any casing).
//! - A field set to `null` deserializes the same as an absent field.
//! - Unknown fields are ignored, never an error.
//! - Key order of the document is preserved; duplicate keys keep the last
//!   value.
//!
//! Derived serde cannot express case-insensitive field matching, so
//! [`ProjectSettings`] and [`ServiceSettings`] carry manual `Deserialize`
//! impls.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Root of the settings document: project name → project definition.
///
/// The document root IS this mapping; there is no wrapper object around it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GlobalDeploymentSettings {
    projects: IndexMap<String, ProjectSettings>,
}

impl GlobalDeploymentSettings {
    /// Iterate projects in document order.
    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectSettings)> {
        self.projects
            .iter()
            .map(|(name, project)| (name.as_str(), project))
    }

    /// Number of projects in the document.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True when the document defines no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by name.
    pub fn get(&self, name: &str) -> Option<&ProjectSettings> {
        self.projects.get(name)
    }
}

/// A single project: service name → service definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSettings {
    /// Services defined for this project, in document order. A project
    /// whose `services` field is absent or `null` has no services.
    pub services: IndexMap<String, ServiceSettings>,
}

/// A single service entry within a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceSettings {
    /// Human-readable display text. `None` when the document omits the
    /// field or sets it to `null`; consumers cannot tell the two apart.
    pub display_text: Option<String>,
}

impl<'de> Deserialize<'de> for ProjectSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ProjectVisitor;

        impl<'de> Visitor<'de> for ProjectVisitor {
            type Value = ProjectSettings;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a project object with a services map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut services: Option<IndexMap<String, ServiceSettings>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("services") {
                        // null counts as absent
                        if let Some(value) = map.next_value()? {
                            services = Some(value);
                        }
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(ProjectSettings {
                    services: services.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(ProjectVisitor)
    }
}

impl<'de> Deserialize<'de> for ServiceSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ServiceVisitor;

        impl<'de> Visitor<'de> for ServiceVisitor {
            type Value = ServiceSettings;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a service object with an optional displayText")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut display_text: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("displayText") {
                        // null counts as absent
                        if let Some(value) = map.next_value()? {
                            display_text = Some(value);
                        }
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(ServiceSettings { display_text })
            }
        }

        deserializer.deserialize_map(ServiceVisitor)
    }
}
