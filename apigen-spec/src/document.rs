//! Serde model of the accepted OpenAPI subset.
//!
//! The model is lenient: every key is optional and unknown keys are
//! ignored. Only a value of the wrong JSON type is an error. Maps use
//! [`IndexMap`] so declaration order survives parsing.

use std::fmt;

use apigen_core::HttpMethod;
use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{IgnoredAny, MapAccess, Visitor},
};
use serde_json::Value;

/// Prefix of local schema references.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Prefix of local parameter references.
pub const PARAMETER_REF_PREFIX: &str = "#/components/parameters/";

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root of an OpenAPI (or Swagger-style) JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDocument {
    pub openapi: Option<String>,
    pub swagger: Option<String>,
    pub info: Info,
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
}

/// The `info` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// The `components` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
    pub parameters: IndexMap<String, Parameter>,
}

/// A path item: operations keyed by method, plus shared parameters.
///
/// Operations keep the order in which their methods are declared. Keys
/// that are neither methods nor `parameters` are recorded in
/// `ignored_keys` and otherwise skipped.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    pub parameters: Vec<Parameter>,
    pub operations: Vec<(HttpMethod, Operation)>,
    pub ignored_keys: Vec<String>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a path item object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut item = PathItem::default();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "parameters" {
                        item.parameters = map.next_value()?;
                    } else if let Some(method) = HttpMethod::from_key(&key) {
                        item.operations.push((method, map.next_value()?));
                    } else {
                        map.next_value::<IgnoredAny>()?;
                        item.ignored_keys.push(key);
                    }
                }

                Ok(item)
            }
        }

        deserializer.deserialize_map(PathItemVisitor)
    }
}

/// An operation object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Schema of the `200` response's `application/json` content.
    pub fn success_schema(&self) -> Option<&Schema> {
        self.responses.get("200")?.json_schema()
    }
}

/// A parameter object, or a `$ref` to one in `components.parameters`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "in")]
    pub location: Option<ParameterLocation>,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    pub description: Option<String>,
    pub schema: Option<Schema>,
}

impl Parameter {
    /// Whether two parameters share a name and location.
    pub fn same_slot(&self, other: &Parameter) -> bool {
        self.name == other.name && self.location == other.location
    }
}

/// Where a parameter lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    /// Anything else (e.g. Swagger 2 `body` or `formData`).
    #[serde(other)]
    Other,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Other => "other",
        }
    }
}

/// A request body object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// Schema of the `application/json` content, if any.
    pub fn json_schema(&self) -> Option<&Schema> {
        self.content.get("application/json")?.schema.as_ref()
    }
}

/// A response object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: Option<String>,
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    /// Schema of the `application/json` content, if any.
    pub fn json_schema(&self) -> Option<&Schema> {
        self.content.get("application/json")?.schema.as_ref()
    }
}

/// A media type object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

/// A schema object, restricted to the keys the generator understands.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    pub format: Option<String>,
    pub description: Option<String>,
    pub items: Option<Box<Schema>>,
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(deserialize_with = "null_as_default")]
    pub required: Vec<String>,
    #[serde(rename = "allOf")]
    pub all_of: Option<Vec<Schema>>,
    #[serde(rename = "oneOf")]
    pub one_of: Option<Vec<Schema>>,
    #[serde(rename = "anyOf")]
    pub any_of: Option<Vec<Schema>>,
}

/// The `type` keyword: a single name or, in OpenAPI 3.1, a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    /// The first non-`null` type name.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name.as_str()),
            Self::Multiple(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null"),
        }
    }
}

impl Schema {
    /// The primary type name, if declared.
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(SchemaType::primary)
    }

    /// Name of the schema a `#/components/schemas/` reference points to.
    ///
    /// Other references resolve to their last path segment.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference.as_deref().map(reference_name)
    }

    /// Visit this schema and every nested schema, depth first.
    ///
    /// `location` is a dotted path used in diagnostics.
    pub fn walk<'a>(&'a self, location: &str, f: &mut dyn FnMut(&str, &'a Schema)) {
        f(location, self);

        if let Some(items) = &self.items {
            items.walk(&format!("{}.items", location), f);
        }
        if let Some(properties) = &self.properties {
            for (name, property) in properties {
                property.walk(&format!("{}.properties.{}", location, name), f);
            }
        }
        for (keyword, branches) in [
            ("allOf", &self.all_of),
            ("oneOf", &self.one_of),
            ("anyOf", &self.any_of),
        ] {
            for (i, branch) in branches.iter().flatten().enumerate() {
                branch.walk(&format!("{}.{}[{}]", location, keyword, i), f);
            }
        }
    }
}

/// Last segment of a `$ref` pointer.
pub fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

impl ApiDocument {
    /// Iterate operations as `(path, method, operation, path item)` in
    /// document order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation, &PathItem)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations
                .iter()
                .map(move |(method, op)| (path.as_str(), *method, op, item))
        })
    }

    /// Follow a `#/components/parameters/` reference.
    ///
    /// Inline parameters resolve to themselves; dangling or foreign
    /// references resolve to `None`.
    pub fn resolve_parameter<'a>(&'a self, param: &'a Parameter) -> Option<&'a Parameter> {
        match &param.reference {
            None => Some(param),
            Some(reference) => reference
                .strip_prefix(PARAMETER_REF_PREFIX)
                .and_then(|name| self.components.parameters.get(name)),
        }
    }

    /// Parameters that apply to an operation.
    ///
    /// Path-item parameters come first unless the operation redeclares the
    /// same name and location, then the operation's own parameters in
    /// declared order. References are resolved; unresolvable ones are
    /// dropped.
    pub fn effective_parameters<'a>(
        &'a self,
        item: &'a PathItem,
        op: &'a Operation,
    ) -> Vec<&'a Parameter> {
        let own: Vec<&Parameter> = op
            .parameters
            .iter()
            .filter_map(|p| self.resolve_parameter(p))
            .collect();

        let mut params: Vec<&Parameter> = item
            .parameters
            .iter()
            .filter_map(|p| self.resolve_parameter(p))
            .filter(|shared| !own.iter().any(|p| p.same_slot(shared)))
            .collect();
        params.extend(own);
        params
    }

    /// Visit every schema reachable from components and operations.
    pub fn walk_schemas<'a>(&'a self, f: &mut dyn FnMut(&str, &'a Schema)) {
        for (name, schema) in &self.components.schemas {
            schema.walk(&format!("components.schemas.{}", name), f);
        }
        for (name, param) in &self.components.parameters {
            if let Some(schema) = &param.schema {
                schema.walk(&format!("components.parameters.{}.schema", name), f);
            }
        }

        for (path, item) in &self.paths {
            for (i, param) in item.parameters.iter().enumerate() {
                if let Some(schema) = &param.schema {
                    schema.walk(&format!("paths.{}.parameters[{}].schema", path, i), f);
                }
            }

            for (method, op) in &item.operations {
                let base = format!("paths.{}.{}", path, method.as_str());
                for (i, param) in op.parameters.iter().enumerate() {
                    if let Some(schema) = &param.schema {
                        schema.walk(&format!("{}.parameters[{}].schema", base, i), f);
                    }
                }
                if let Some(schema) = op.request_body.as_ref().and_then(RequestBody::json_schema) {
                    schema.walk(&format!("{}.requestBody", base), f);
                }
                for (status, response) in &op.responses {
                    if let Some(schema) = response.json_schema() {
                        schema.walk(&format!("{}.responses.{}", base, status), f);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_item_keeps_method_order() {
        let item: PathItem = serde_json::from_str(
            r#"{
                "summary": "ignored",
                "post": { "operationId": "create" },
                "parameters": [{ "name": "id", "in": "path", "required": true }],
                "get": { "operationId": "read" }
            }"#,
        )
        .unwrap();

        let methods: Vec<HttpMethod> = item.operations.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(item.parameters.len(), 1);
        assert_eq!(item.ignored_keys, vec!["summary"]);
    }

    #[test]
    fn test_schema_type_list() {
        let schema: Schema = serde_json::from_str(r#"{ "type": ["null", "integer"] }"#).unwrap();
        assert_eq!(schema.type_name(), Some("integer"));

        let schema: Schema = serde_json::from_str(r#"{ "type": "string" }"#).unwrap();
        assert_eq!(schema.type_name(), Some("string"));
    }

    #[test]
    fn test_unknown_parameter_location() {
        let param: Parameter = serde_json::from_str(r#"{ "name": "b", "in": "body" }"#).unwrap();
        assert_eq!(param.location, Some(ParameterLocation::Other));
    }

    #[test]
    fn test_explicit_nulls_read_as_defaults() {
        let op: Operation = serde_json::from_str(
            r#"{ "parameters": null, "requestBody": { "required": null } }"#,
        )
        .unwrap();
        assert!(op.parameters.is_empty());
        assert!(!op.request_body.unwrap().required);

        let param: Parameter =
            serde_json::from_str(r#"{ "name": "id", "in": "path", "required": null }"#).unwrap();
        assert!(!param.required);

        let schema: Schema =
            serde_json::from_str(r#"{ "type": "object", "required": null }"#).unwrap();
        assert!(schema.required.is_empty());
    }

    #[test]
    fn test_reference_name() {
        assert_eq!(reference_name("#/components/schemas/Pet"), "Pet");
        assert_eq!(reference_name("#/definitions/Pet"), "Pet");
        assert_eq!(reference_name("Pet"), "Pet");
    }

    #[test]
    fn test_success_schema() {
        let op: Operation = serde_json::from_str(
            r##"{
                "responses": {
                    "404": { "description": "missing" },
                    "200": {
                        "content": {
                            "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
                        }
                    }
                }
            }"##,
        )
        .unwrap();

        let schema = op.success_schema().unwrap();
        assert_eq!(schema.reference_name(), Some("Pet"));
    }

    #[test]
    fn test_effective_parameters_merge_and_resolve() {
        let doc: ApiDocument = serde_json::from_str(
            r##"{
                "paths": {
                    "/pets/{id}": {
                        "parameters": [
                            { "name": "id", "in": "path", "required": true, "description": "shared" },
                            { "$ref": "#/components/parameters/Trace" }
                        ],
                        "get": {
                            "parameters": [
                                { "name": "id", "in": "path", "required": true, "description": "own" },
                                { "$ref": "#/components/parameters/Missing" },
                                { "$ref": "#/components/parameters/Limit" }
                            ]
                        }
                    }
                },
                "components": {
                    "parameters": {
                        "Limit": { "name": "limit", "in": "query" },
                        "Trace": { "name": "X-Trace", "in": "header" }
                    }
                }
            }"##,
        )
        .unwrap();

        let (_, _, op, item) = doc.operations().next().unwrap();
        let params = doc.effective_parameters(item, op);
        let names: Vec<(&str, Option<&str>)> = params
            .iter()
            .map(|p| (p.name.as_deref().unwrap_or(""), p.description.as_deref()))
            .collect();

        assert_eq!(
            names,
            vec![("X-Trace", None), ("id", Some("own")), ("limit", None)]
        );
    }

    #[test]
    fn test_walk_visits_nested_schemas() {
        let schema: Schema = serde_json::from_str(
            r##"{
                "type": "object",
                "properties": {
                    "tags": { "type": "array", "items": { "$ref": "#/components/schemas/Tag" } }
                },
                "allOf": [{ "$ref": "#/components/schemas/Base" }]
            }"##,
        )
        .unwrap();

        let mut seen = Vec::new();
        schema.walk("root", &mut |location, _| seen.push(location.to_string()));

        assert_eq!(
            seen,
            vec![
                "root",
                "root.properties.tags",
                "root.properties.tags.items",
                "root.allOf[0]",
            ]
        );
    }
}
