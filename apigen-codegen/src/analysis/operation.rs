//! Per-operation analysis.

use apigen_ir::{HttpMethod, Operation, Parameter};
use apigen_spec::QueryField;

use crate::{
    language::{NamingConvention, TypeMapper},
    naming::operation_id,
    resolve::SchemaResolver,
};

/// A path or query parameter with its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedParam {
    pub name: String,
    pub ty: String,
    pub required: bool,
    /// Description split into trimmed lines.
    pub description: Vec<String>,
}

/// Everything a generator needs to emit one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedOperation {
    pub method: HttpMethod,
    pub path: String,
    /// Explicit or derived operation id.
    pub operation_id: String,
    pub function_name: String,
    /// PascalCase prefix shared by the request and response types.
    pub type_name: String,
    pub request_type_name: String,
    pub response_type_name: String,
    /// A request type exists iff there is a path param, a query param, or a body.
    pub needs_request_type: bool,
    pub path_params: Vec<AnalyzedParam>,
    pub query_params: Vec<AnalyzedParam>,
    pub has_query: bool,
    /// Whether the nested `query` field itself is optional.
    pub query_optional: bool,
    pub has_body: bool,
    /// Resolved body type, when there is a body.
    pub body_type: Option<String>,
    /// Resolved `200` JSON response type, or the unknown type.
    pub response_type: String,
    /// One-line comment for the client function.
    pub label: String,
}

/// Whether an operation takes a request argument at all.
pub fn needs_request_type(op: &Operation) -> bool {
    !op.parameters.is_empty() || op.request_body.is_some()
}

/// Extracts the request/response shape of operations.
pub struct OperationAnalyzer<'a, M: TypeMapper> {
    resolver: &'a SchemaResolver<'a, M>,
    naming: &'a NamingConvention,
    query_field: QueryField,
}

impl<'a, M: TypeMapper> OperationAnalyzer<'a, M> {
    pub fn new(resolver: &'a SchemaResolver<'a, M>, naming: &'a NamingConvention) -> Self {
        Self {
            resolver,
            naming,
            query_field: QueryField::default(),
        }
    }

    pub fn with_query_field(mut self, query_field: QueryField) -> Self {
        self.query_field = query_field;
        self
    }

    pub fn analyze(&self, op: &Operation) -> AnalyzedOperation {
        let operation_id = operation_id(op.method, &op.path, op.operation_id.as_deref());
        let type_name = self.naming.type_name(&operation_id);

        let path_params: Vec<AnalyzedParam> =
            op.path_params().map(|p| self.analyze_param(p)).collect();
        let query_params: Vec<AnalyzedParam> =
            op.query_params().map(|p| self.analyze_param(p)).collect();
        let has_query = !query_params.is_empty();

        let query_optional = match self.query_field {
            QueryField::Required => false,
            QueryField::OptionalWhenAllOptional => {
                has_query && query_params.iter().all(|p| !p.required)
            }
        };

        let body_type = op
            .request_body
            .as_ref()
            .map(|body| self.resolver.resolve_opt(body.schema.as_ref()));

        AnalyzedOperation {
            method: op.method,
            path: op.path.clone(),
            function_name: self.naming.function_name(&operation_id),
            request_type_name: format!("{}Request", type_name),
            response_type_name: format!("{}Response", type_name),
            type_name,
            operation_id,
            needs_request_type: needs_request_type(op),
            path_params,
            query_params,
            has_query,
            query_optional,
            has_body: body_type.is_some(),
            body_type,
            response_type: self.resolver.resolve_opt(op.response.as_ref()),
            label: op.label(),
        }
    }

    fn analyze_param(&self, param: &Parameter) -> AnalyzedParam {
        AnalyzedParam {
            name: param.name.clone(),
            ty: self.resolver.resolve_opt(param.schema.as_ref()),
            required: param.required,
            description: param.description_lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use apigen_core::{to_camel_case, to_pascal_case};
    use apigen_ir::{ParamLocation, PrimitiveKind, RequestBody, SchemaCatalog, SchemaNode};

    use super::*;
    use crate::language::ObjectField;

    struct Ts;

    impl TypeMapper for Ts {
        fn primitive(&self, kind: PrimitiveKind) -> &'static str {
            match kind {
                PrimitiveKind::String => "string",
                PrimitiveKind::Number | PrimitiveKind::Integer => "number",
                PrimitiveKind::Boolean => "boolean",
            }
        }
        fn unknown(&self) -> &'static str {
            "any"
        }
        fn string_literal_union(&self, values: &[String]) -> String {
            values.join(" | ")
        }
        fn array(&self, item: &str) -> String {
            format!("{}[]", item)
        }
        fn object_literal(&self, _fields: &[ObjectField]) -> String {
            "{}".into()
        }
        fn open_map(&self) -> &'static str {
            "Record<string, any>"
        }
        fn intersection(&self, parts: &[String]) -> String {
            parts.join(" & ")
        }
    }

    const NAMING: NamingConvention = NamingConvention {
        operation_to_type: to_pascal_case,
        operation_to_function: to_camel_case,
        reserved_words: &["delete"],
        escape_reserved: escape,
    };

    fn escape(name: &str) -> String {
        format!("_{}", name)
    }

    fn param(name: &str, location: ParamLocation, required: bool, schema: SchemaNode) -> Parameter {
        Parameter {
            name: name.into(),
            location,
            required,
            schema: Some(schema),
            description: None,
        }
    }

    fn operation(method: HttpMethod, path: &str) -> Operation {
        Operation {
            method,
            path: path.into(),
            operation_id: None,
            summary: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            response: None,
        }
    }

    fn analyze(op: &Operation, query_field: QueryField) -> AnalyzedOperation {
        let catalog = SchemaCatalog::new();
        let resolver = SchemaResolver::new(&Ts, &catalog);
        OperationAnalyzer::new(&resolver, &NAMING)
            .with_query_field(query_field)
            .analyze(op)
    }

    #[test]
    fn test_path_param_operation() {
        let mut op = operation(HttpMethod::Get, "/users/{id}");
        op.parameters
            .push(param("id", ParamLocation::Path, true, SchemaNode::string()));
        op.response = Some(SchemaNode::reference("User"));

        let analyzed = analyze(&op, QueryField::Required);

        assert_eq!(analyzed.operation_id, "getUsersBy");
        assert_eq!(analyzed.function_name, "getUsersBy");
        assert_eq!(analyzed.request_type_name, "GetUsersByRequest");
        assert_eq!(analyzed.response_type_name, "GetUsersByResponse");
        assert!(analyzed.needs_request_type);
        assert_eq!(analyzed.path_params[0].ty, "string");
        assert!(!analyzed.has_query);
        assert!(!analyzed.has_body);
        assert_eq!(analyzed.response_type, "User");
        assert_eq!(analyzed.label, "GET /users/{id}");
    }

    #[test]
    fn test_query_field_optionality() {
        let mut op = operation(HttpMethod::Get, "/pets");
        op.parameters
            .push(param("limit", ParamLocation::Query, false, SchemaNode::integer()));

        let literal = analyze(&op, QueryField::Required);
        assert!(literal.has_query);
        assert!(!literal.query_optional);
        assert_eq!(literal.query_params[0].ty, "number");

        let relaxed = analyze(&op, QueryField::OptionalWhenAllOptional);
        assert!(relaxed.query_optional);
    }

    #[test]
    fn test_body_without_json_schema_is_any() {
        let mut op = operation(HttpMethod::Post, "/upload");
        op.operation_id = Some("upload_file".into());
        op.request_body = Some(RequestBody {
            schema: None,
            required: true,
            description: None,
        });

        let analyzed = analyze(&op, QueryField::Required);
        assert_eq!(analyzed.type_name, "UploadFile");
        assert_eq!(analyzed.function_name, "uploadFile");
        assert!(analyzed.has_body);
        assert_eq!(analyzed.body_type.as_deref(), Some("any"));
        assert_eq!(analyzed.response_type, "any");
    }

    #[test]
    fn test_no_params_no_request_type() {
        let op = operation(HttpMethod::Get, "/health");
        let analyzed = analyze(&op, QueryField::Required);
        assert!(!analyzed.needs_request_type);
        assert!(analyzed.body_type.is_none());
    }

    #[test]
    fn test_reserved_function_name_escaped() {
        let mut op = operation(HttpMethod::Delete, "/pets");
        op.operation_id = Some("delete".into());
        assert_eq!(analyze(&op, QueryField::Required).function_name, "_delete");
    }
}
