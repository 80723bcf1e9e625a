//! Output models returned to consumers.

use serde::Serialize;

/// A project and its services, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    /// Project name (the document key).
    pub name: String,

    /// Services defined for this project.
    pub services: Vec<ServiceModel>,
}

/// A single service within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    /// Service name (the document key).
    pub name: String,

    /// Display text from the document, or empty when absent.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_serialize_with_camel_case_fields() {
        let project = ProjectModel {
            name: "alpha".to_string(),
            services: vec![ServiceModel {
                name: "web".to_string(),
                description: "Web Frontend".to_string(),
            }],
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "alpha",
                "services": [{"name": "web", "description": "Web Frontend"}]
            })
        );
    }
}
