//! Lower phase - transforms the API document into the IR.
//!
//! Lowering never fails. Constructs outside the supported grammar become
//! [`SchemaKind::Unknown`], and parameters that cannot be carried by the
//! client (headers, cookies) are skipped with an info diagnostic.

use apigen_core::HttpMethod;
use apigen_ir::{
    ApiIR, ApiMeta, ObjectSchema, Operation, ParamLocation, Parameter, PrimitiveKind,
    RequestBody, SchemaCatalog, SchemaKind, SchemaNode,
};
use apigen_spec::{self as spec, ApiDocument, ParameterLocation};
use eyre::Result;
use serde_json::Value;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Title used when the document has no `info.title`.
const DEFAULT_TITLE: &str = "API";

/// Phase that transforms the document into the IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the API document into the IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let (ir, diagnostics) = lower_document(&ctx.document);
        ctx.diagnostics.extend(diagnostics);
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Lower a document into the IR, returning the diagnostics it produced.
pub fn lower_document(document: &ApiDocument) -> (ApiIR, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let mut catalog = SchemaCatalog::new();
    for (name, schema) in &document.components.schemas {
        catalog.insert(name.clone(), lower_schema(schema), lower_object(schema));
    }

    let operations = document
        .operations()
        .map(|(path, method, op, item)| {
            lower_operation(document, path, method, op, item, &mut diagnostics)
        })
        .collect();

    for (path, item) in &document.paths {
        for key in &item.ignored_keys {
            tracing::trace!(path = %path, key = %key, "ignoring path item key");
        }
    }

    let ir = ApiIR {
        meta: lower_meta(&document.info),
        catalog,
        operations,
    };
    (ir, diagnostics)
}

fn lower_meta(info: &spec::Info) -> ApiMeta {
    ApiMeta {
        title: info
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        version: info.version.clone().unwrap_or_default(),
        description: info.description.clone(),
    }
}

fn lower_operation(
    document: &ApiDocument,
    path: &str,
    method: HttpMethod,
    op: &spec::Operation,
    item: &spec::PathItem,
    diagnostics: &mut Vec<Diagnostic>,
) -> Operation {
    let location = format!("paths.{}.{}", path, method.as_str());

    let parameters = document
        .effective_parameters(item, op)
        .into_iter()
        .filter_map(|param| lower_parameter(param, &location, diagnostics))
        .collect();

    Operation {
        method,
        path: path.to_string(),
        operation_id: op.operation_id.clone(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        parameters,
        request_body: op.request_body.as_ref().map(|body| RequestBody {
            schema: body.json_schema().map(lower_schema),
            required: body.required,
            description: body.description.clone(),
        }),
        response: op.success_schema().map(lower_schema),
    }
}

/// Lower a path or query parameter; anything else is skipped.
fn lower_parameter(
    param: &spec::Parameter,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Parameter> {
    let Some(name) = param.name.as_deref().filter(|n| !n.is_empty()) else {
        tracing::trace!(location, "skipping parameter without a name");
        return None;
    };

    let param_location = match param.location {
        Some(ParameterLocation::Path) => ParamLocation::Path,
        Some(ParameterLocation::Query) => ParamLocation::Query,
        other => {
            let kind = other.map(|l| l.as_str()).unwrap_or("unplaced");
            diagnostics.push(
                Diagnostic::info(
                    "lower",
                    format!("{} parameter '{}' is not supported and is skipped", kind, name),
                )
                .at(location),
            );
            return None;
        }
    };

    Some(Parameter {
        name: name.to_string(),
        location: param_location,
        // Path parameters are always required
        required: param.required || param_location == ParamLocation::Path,
        schema: param.schema.as_ref().map(lower_schema),
        description: param.description.clone(),
    })
}

/// Lower a schema into a node.
pub(crate) fn lower_schema(schema: &spec::Schema) -> SchemaNode {
    let node = SchemaNode::new(lower_kind(schema));
    match &schema.description {
        Some(description) => node.with_description(description.clone()),
        None => node,
    }
}

fn lower_kind(schema: &spec::Schema) -> SchemaKind {
    if let Some(name) = schema.reference_name() {
        return SchemaKind::Reference {
            name: name.to_string(),
        };
    }

    if let Some(branches) = schema.all_of.as_ref().filter(|b| !b.is_empty()) {
        let mut branches: Vec<SchemaNode> = branches.iter().map(lower_schema).collect();
        // Properties declared next to `allOf` form one more branch
        if schema.properties.as_ref().is_some_and(|p| !p.is_empty()) {
            branches.push(SchemaNode::object(lower_object(schema)));
        }
        return SchemaKind::Composed { branches };
    }

    match schema.type_name() {
        Some("string") => match &schema.enum_values {
            Some(values) if !values.is_empty() => SchemaKind::EnumString {
                values: values.iter().map(enum_literal).collect(),
            },
            _ => primitive(PrimitiveKind::String),
        },
        Some("number") => primitive(PrimitiveKind::Number),
        Some("integer") => primitive(PrimitiveKind::Integer),
        Some("boolean") => primitive(PrimitiveKind::Boolean),
        Some("array") => SchemaKind::ArrayOf {
            item: Box::new(
                schema
                    .items
                    .as_deref()
                    .map(lower_schema)
                    .unwrap_or_else(SchemaNode::unknown),
            ),
        },
        Some("object") => SchemaKind::Object(lower_object(schema)),
        // Properties without a type still describe an object
        None if schema.properties.is_some() => SchemaKind::Object(lower_object(schema)),
        _ => SchemaKind::Unknown,
    }
}

fn primitive(primitive: PrimitiveKind) -> SchemaKind {
    SchemaKind::Primitive { primitive }
}

fn lower_object(schema: &spec::Schema) -> ObjectSchema {
    ObjectSchema {
        properties: schema
            .properties
            .iter()
            .flatten()
            .map(|(name, property)| (name.clone(), lower_schema(property)))
            .collect(),
        required: schema.required.clone(),
    }
}

/// Literal text of an enum value. Non-string values use their JSON form.
fn enum_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(json: &str) -> (ApiIR, Vec<Diagnostic>) {
        lower_document(&json.parse().unwrap())
    }

    fn schema(json: &str) -> SchemaNode {
        lower_schema(&serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_enum_schema() {
        assert_eq!(
            schema(r#"{ "type": "string", "enum": ["A", "B"] }"#),
            SchemaNode::enum_string(["A", "B"])
        );
        assert_eq!(
            schema(r#"{ "type": "string", "enum": [] }"#),
            SchemaNode::string()
        );
    }

    #[test]
    fn test_object_schema_keeps_order_and_required() {
        let node = schema(
            r#"{
                "type": "object",
                "description": "An item",
                "required": ["id"],
                "properties": {
                    "id": { "type": "integer" },
                    "tags": { "type": "array", "items": { "type": "string" } }
                }
            }"#,
        );

        assert_eq!(node.description.as_deref(), Some("An item"));
        let object = node.as_object().unwrap();
        let names: Vec<&str> = object.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["id", "tags"]);
        assert!(object.is_required("id"));
        assert_eq!(
            object.properties["tags"],
            SchemaNode::array_of(SchemaNode::string())
        );
    }

    #[test]
    fn test_untyped_properties_are_an_object() {
        let node = schema(r#"{ "properties": { "a": { "type": "boolean" } } }"#);
        assert!(node.as_object().is_some());
    }

    #[test]
    fn test_reference_wins_over_siblings() {
        assert_eq!(
            schema(r##"{ "$ref": "#/components/schemas/Pet", "type": "object" }"##),
            SchemaNode::reference("Pet")
        );
    }

    #[test]
    fn test_unsupported_shapes_are_unknown() {
        assert_eq!(schema(r#"{ "oneOf": [{ "type": "string" }] }"#), SchemaNode::unknown());
        assert_eq!(schema(r#"{ "type": "file" }"#), SchemaNode::unknown());
        assert_eq!(schema("{}"), SchemaNode::unknown());
        assert_eq!(
            schema(r#"{ "type": "array" }"#),
            SchemaNode::array_of(SchemaNode::unknown())
        );
    }

    #[test]
    fn test_all_of_is_composed() {
        let node = schema(
            r##"{ "allOf": [{ "$ref": "#/components/schemas/Base" }, { "type": "object" }] }"##,
        );
        match node.kind {
            SchemaKind::Composed { branches } => assert_eq!(branches.len(), 2),
            other => panic!("expected composed, got {:?}", other),
        }
    }

    #[test]
    fn test_all_of_keeps_sibling_properties() {
        let (ir, _) = lower(
            r##"{ "components": { "schemas": {
                "Dog": {
                    "allOf": [{ "$ref": "#/components/schemas/Base" }],
                    "required": ["name"],
                    "properties": { "name": { "type": "string" } }
                },
                "Tags": { "type": "array", "items": { "type": "string" } }
            } } }"##,
        );

        let fields = ir.catalog.fields("Dog").unwrap();
        assert!(fields.is_required("name"));
        assert_eq!(fields.properties["name"], SchemaNode::string());
        match &ir.catalog.get("Dog").unwrap().kind {
            SchemaKind::Composed { branches } => {
                assert_eq!(branches.len(), 2);
                assert_eq!(branches[1].as_object(), Some(fields));
            }
            other => panic!("expected composed, got {:?}", other),
        }

        assert!(ir.catalog.fields("Tags").unwrap().properties.is_empty());
    }

    #[test]
    fn test_operations_in_document_order() {
        let (ir, _) = lower(
            r#"{
                "paths": {
                    "/b": { "post": {}, "get": {} },
                    "/a": { "get": {} }
                }
            }"#,
        );

        let order: Vec<(HttpMethod, &str)> = ir
            .operations
            .iter()
            .map(|op| (op.method, op.path.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (HttpMethod::Post, "/b"),
                (HttpMethod::Get, "/b"),
                (HttpMethod::Get, "/a"),
            ]
        );
        assert_eq!(ir.meta.title, "API");
    }

    #[test]
    fn test_parameters_lowered_and_skipped() {
        let (ir, diagnostics) = lower(
            r##"{
                "paths": {
                    "/users/{id}": {
                        "parameters": [{ "name": "id", "in": "path", "schema": { "type": "string" } }],
                        "get": {
                            "parameters": [
                                { "name": "X-Request-Id", "in": "header" },
                                { "$ref": "#/components/parameters/Limit" }
                            ]
                        }
                    }
                },
                "components": {
                    "parameters": {
                        "Limit": { "name": "limit", "in": "query", "schema": { "type": "integer" } }
                    }
                }
            }"##,
        );

        let op = &ir.operations[0];
        let params: Vec<(&str, ParamLocation, bool)> = op
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.location, p.required))
            .collect();
        assert_eq!(
            params,
            vec![
                ("id", ParamLocation::Path, true),
                ("limit", ParamLocation::Query, false),
            ]
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "header parameter 'X-Request-Id' is not supported and is skipped"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("paths./users/{id}.get"));
    }

    #[test]
    fn test_body_and_response() {
        let (ir, _) = lower(
            r##"{
                "info": { "title": "Pets", "version": "2.0" },
                "paths": {
                    "/pets": {
                        "post": {
                            "requestBody": {
                                "required": true,
                                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewPet" } } }
                            },
                            "responses": {
                                "200": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } } }
                            }
                        }
                    }
                }
            }"##,
        );

        let op = &ir.operations[0];
        let body = op.request_body.as_ref().unwrap();
        assert!(body.required);
        assert_eq!(body.schema, Some(SchemaNode::reference("NewPet")));
        assert_eq!(op.response, Some(SchemaNode::reference("Pet")));
        assert_eq!(ir.meta.title, "Pets");
        assert_eq!(ir.meta.version, "2.0");
    }
}
