//! TypeScript type mapper implementation.

use apigen_codegen::language::{ObjectField, TypeMapper};
use apigen_ir::PrimitiveKind;

use crate::naming::{property_key, string_literal};

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Integer => "number",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    fn unknown(&self) -> &'static str {
        "any"
    }

    fn string_literal_union(&self, values: &[String]) -> String {
        if values.is_empty() {
            return "never".to_string();
        }
        values
            .iter()
            .map(|v| string_literal(v))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn array(&self, item: &str) -> String {
        if has_top_level_operator(item) {
            format!("({})[]", item)
        } else {
            format!("{}[]", item)
        }
    }

    fn object_literal(&self, fields: &[ObjectField]) -> String {
        if fields.is_empty() {
            return "{}".to_string();
        }

        let fields: Vec<String> = fields
            .iter()
            .map(|field| {
                let optional = if field.optional { "?" } else { "" };
                format!("{}{}: {}", property_key(&field.name), optional, field.ty)
            })
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }

    fn open_map(&self) -> &'static str {
        "Record<string, any>"
    }

    fn intersection(&self, parts: &[String]) -> String {
        parts.join(" & ")
    }
}

/// Whether a type expression has a `|` or `&` outside any brackets or
/// string literal, so `[]` would bind to its last operand only.
fn has_top_level_operator(expr: &str) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for c in expr.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '\'' => in_string = true,
            '{' | '(' | '[' | '<' => depth += 1,
            '}' | ')' | ']' | '>' => depth = depth.saturating_sub(1),
            '|' | '&' if depth == 0 => return true,
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_primitives() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.primitive(PrimitiveKind::String), "string");
        assert_eq!(mapper.primitive(PrimitiveKind::Number), "number");
        assert_eq!(mapper.primitive(PrimitiveKind::Integer), "number");
        assert_eq!(mapper.primitive(PrimitiveKind::Boolean), "boolean");
        assert_eq!(mapper.unknown(), "any");
    }

    #[test]
    fn test_string_literal_union() {
        let mapper = TypeScriptTypeMapper;
        let values = vec!["A".to_string(), "B".to_string(), "it's".to_string()];
        assert_eq!(mapper.string_literal_union(&values), "'A' | 'B' | 'it\\'s'");
    }

    #[test]
    fn test_array_of_union_is_parenthesized() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.array("string"), "string[]");
        assert_eq!(mapper.array("'a' | 'b'"), "('a' | 'b')[]");
        assert_eq!(mapper.array("Base & Extra"), "(Base & Extra)[]");
        assert_eq!(mapper.array("{ kind?: 'a' | 'b' }"), "{ kind?: 'a' | 'b' }[]");
        assert_eq!(mapper.array("'a|b'"), "'a|b'[]");
    }

    #[test]
    fn test_object_literal() {
        let mapper = TypeScriptTypeMapper;
        let fields = vec![
            ObjectField {
                name: "a".into(),
                optional: false,
                ty: "string".into(),
            },
            ObjectField {
                name: "b-c".into(),
                optional: true,
                ty: "number".into(),
            },
        ];

        assert_eq!(mapper.object_literal(&fields), "{ a: string, 'b-c'?: number }");
        assert_eq!(mapper.object_literal(&[]), "{}");
        assert_eq!(mapper.open_map(), "Record<string, any>");
    }

    #[test]
    fn test_intersection() {
        let mapper = TypeScriptTypeMapper;
        let parts = vec!["Base".to_string(), "{ extra?: string }".to_string()];
        assert_eq!(mapper.intersection(&parts), "Base & { extra?: string }");
    }
}
