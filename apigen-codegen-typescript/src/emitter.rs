//! Declarations for schemas and operations.
//!
//! [`DeclarationEmitter`] is where resolved types meet the AST builders:
//! schemas become interfaces (string enums become aliases), analyzed operations become
//! request interfaces, response aliases, and client functions.

use apigen_codegen::{
    analysis::{AnalyzedOperation, AnalyzedParam},
    builder::{CodeFragment, Renderable},
    resolve::SchemaResolver,
};
use apigen_ir::{ObjectSchema, SchemaKind, SchemaNode};

use crate::{
    TypeScriptTypeMapper,
    ast::{ArrowFn, Interface, InterfaceField, JsObject, Param, TypeAlias},
    naming::property_access,
};

/// Namespace the client document imports the types document under.
pub const TYPES_NAMESPACE: &str = "ApiTypes";

/// Name of the helper every client function calls.
pub const SERVICE_FN: &str = "useApiService";

/// A top-level type declaration.
#[derive(Debug, Clone)]
pub enum Declaration {
    Interface(Interface),
    Alias(TypeAlias),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Interface(interface) => interface.to_fragments(),
            Self::Alias(alias) => alias.to_fragments(),
        }
    }
}

/// Renders schemas and analyzed operations as TypeScript declarations.
pub struct DeclarationEmitter<'a> {
    resolver: &'a SchemaResolver<'a, TypeScriptTypeMapper>,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(resolver: &'a SchemaResolver<'a, TypeScriptTypeMapper>) -> Self {
        Self { resolver }
    }

    /// Declaration for a named schema.
    ///
    /// String enums become aliases of their literal union; every other
    /// schema becomes an interface listing its own `fields`, whatever its
    /// kind. Arrays, primitives and `allOf` compositions without
    /// properties therefore render as empty interfaces.
    pub fn schema(&self, name: &str, node: &SchemaNode, fields: &ObjectSchema) -> Declaration {
        let comments = node.description_lines();

        if let SchemaKind::EnumString { .. } = node.kind {
            return Declaration::Alias(
                TypeAlias::new(name, self.resolver.resolve(node)).comments(comments),
            );
        }

        let interface = fields.properties.iter().fold(
            Interface::new(name).comments(comments),
            |interface, (prop, schema)| {
                interface.field_with(
                    InterfaceField::new(prop, self.resolver.resolve(schema))
                        .optional_if(!fields.is_required(prop))
                        .comments(schema.description_lines()),
                )
            },
        );
        Declaration::Interface(interface)
    }

    /// Request interface for an operation, if it takes any input.
    pub fn request(&self, op: &AnalyzedOperation) -> Option<Interface> {
        if !op.needs_request_type {
            return None;
        }

        let mut interface = op
            .path_params
            .iter()
            .fold(Interface::new(&op.request_type_name), |interface, param| {
                interface.field_with(param_field(param).optional_if(false))
            });

        if op.has_query {
            let fields = op.query_params.iter().map(param_field).collect();
            interface = interface
                .field_with(InterfaceField::object("query", fields).optional_if(op.query_optional));
        }

        if let Some(body) = &op.body_type {
            interface = interface.field("body", body);
        }

        Some(interface)
    }

    /// Response alias for an operation.
    pub fn response(&self, op: &AnalyzedOperation) -> TypeAlias {
        TypeAlias::new(&op.response_type_name, &op.response_type)
    }

    /// Client function calling the service helper once.
    pub fn client_function(&self, op: &AnalyzedOperation) -> ArrowFn {
        let response = format!("{}.{}", TYPES_NAMESPACE, op.response_type_name);

        let options = JsObject::new()
            .shorthand("baseURL")
            .string("method", op.method.as_upper())
            .expr_if(op.has_query, "query", "params.query")
            .expr_if(op.has_body, "body", "params.body");

        let call = CodeFragment::block(
            format!(
                "return await {}<{}>({}, {{",
                SERVICE_FN,
                response,
                path_template(&op.path, &op.path_params)
            ),
            options.property_fragments(),
            Some("})".to_string()),
        );

        let function = ArrowFn::new(&op.function_name)
            .async_()
            .comments([op.label.as_str()])
            .returns(format!("Promise<{}>", response))
            .body_fragment(call);

        if op.needs_request_type {
            function.param(
                Param::new("params").ty(format!("{}.{}", TYPES_NAMESPACE, op.request_type_name)),
            )
        } else {
            function
        }
    }
}

fn param_field(param: &AnalyzedParam) -> InterfaceField {
    InterfaceField::new(&param.name, &param.ty)
        .optional_if(!param.required)
        .comments(param.description.iter().cloned())
}

/// Template literal for a path, substituting every placeholder that names
/// a path parameter with `${params.name}`.
///
/// Placeholders without a matching parameter stay as written.
pub fn path_template(path: &str, path_params: &[AnalyzedParam]) -> String {
    let mut out = String::with_capacity(path.len() + 2);
    out.push('`');

    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];

        push_template_text(&mut out, &rest[..start]);
        if path_params.iter().any(|p| p.name == name) {
            out.push_str("${");
            out.push_str(&property_access("params", name));
            out.push('}');
        } else {
            push_template_text(&mut out, &rest[start..=start + len]);
        }
        rest = &rest[start + len + 1..];
    }

    push_template_text(&mut out, rest);
    out.push('`');
    out
}

fn push_template_text(out: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '`' | '\\' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
}
