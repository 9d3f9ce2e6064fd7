//! Operations: one HTTP method bound to one path template.

use serde::Serialize;

use apigen_core::path_placeholders;

use crate::{HttpMethod, SchemaNode, schema::description_lines};

/// A single operation, one per (path, method) pair in document order.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub method: HttpMethod,
    /// Path template containing `{param}` placeholders.
    pub path: String,
    /// Explicit `operationId`, if the document declares one.
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Path and query parameters in declared order.
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    /// Schema of the `200` JSON response.
    pub response: Option<SchemaNode>,
}

impl Operation {
    /// Path parameters in declared order.
    pub fn path_params(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Path)
    }

    /// Query parameters in declared order.
    pub fn query_params(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
    }

    /// Placeholder names in the path template, in order of appearance.
    pub fn path_placeholders(&self) -> Vec<&str> {
        path_placeholders(&self.path)
    }

    /// One-line label for the operation.
    ///
    /// The summary if present, else the description lines joined by
    /// spaces, else `METHOD /path`.
    pub fn label(&self) -> String {
        if let Some(summary) = self.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            return summary.trim().to_string();
        }

        let joined = description_lines(self.description.as_deref()).join(" ");
        if !joined.trim().is_empty() {
            return joined.trim().to_string();
        }

        format!("{} {}", self.method.as_upper(), self.path)
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
}

/// A path or query parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
    pub schema: Option<SchemaNode>,
    pub description: Option<String>,
}

impl Parameter {
    pub fn description_lines(&self) -> Vec<String> {
        description_lines(self.description.as_deref())
    }
}

/// A request body. The schema is the `application/json` one, if any.
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub schema: Option<SchemaNode>,
    pub required: bool,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation(path: &str) -> Operation {
        Operation {
            method: HttpMethod::Get,
            path: path.to_string(),
            operation_id: None,
            summary: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            response: None,
        }
    }

    #[test]
    fn test_path_placeholders() {
        let op = operation("/users/{userId}/posts/{postId}");
        assert_eq!(op.path_placeholders(), vec!["userId", "postId"]);
    }

    #[test]
    fn test_label_prefers_summary() {
        let mut op = operation("/pets");
        op.summary = Some("List pets".into());
        op.description = Some("Ignored".into());
        assert_eq!(op.label(), "List pets");
    }

    #[test]
    fn test_label_joins_description_lines() {
        let mut op = operation("/pets");
        op.description = Some("Returns all pets\n  from the store.".into());
        assert_eq!(op.label(), "Returns all pets from the store.");
    }

    #[test]
    fn test_label_falls_back_to_method_and_path() {
        let mut op = operation("/pets/{id}");
        op.method = HttpMethod::Delete;
        assert_eq!(op.label(), "DELETE /pets/{id}");
    }

    #[test]
    fn test_param_filters() {
        let mut op = operation("/pets/{id}");
        op.parameters = vec![
            Parameter {
                name: "id".into(),
                location: ParamLocation::Path,
                required: true,
                schema: Some(SchemaNode::string()),
                description: None,
            },
            Parameter {
                name: "limit".into(),
                location: ParamLocation::Query,
                required: false,
                schema: Some(SchemaNode::integer()),
                description: None,
            },
        ];

        assert_eq!(op.path_params().count(), 1);
        assert_eq!(op.query_params().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["limit"]);
    }
}
