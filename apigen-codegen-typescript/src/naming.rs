//! TypeScript-specific naming conventions.

use apigen_codegen::language::NamingConvention;
use apigen_core::{to_camel_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Request/response types use PascalCase
    operation_to_type: to_pascal_case,
    // Client functions use camelCase
    operation_to_function: to_camel_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
    ],
    escape_reserved: escape_ts_reserved,
};

/// Whether `name` can be written as a bare identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A single-quoted string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// A property key, quoted when it is not a valid identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Member access on `object` (e.g., `params.id` or `params['x-id']`).
pub fn property_access(object: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", object, name)
    } else {
        format!("{}[{}]", object, string_literal(name))
    }
}
