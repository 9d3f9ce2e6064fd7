//! Schema-to-type resolution.
//!
//! [`SchemaResolver`] maps a [`SchemaNode`] to a type expression by walking
//! it recursively and asking a [`TypeMapper`] to spell each shape. It is
//! total: every node yields some expression, and references are emitted by
//! name without being followed. There is no cycle detection, so the only
//! way to recurse forever is a self-containing node, which lowering never
//! builds.

use apigen_ir::{SchemaCatalog, SchemaKind, SchemaNode};
use apigen_spec::ComposeStrategy;

use crate::language::{ObjectField, TypeMapper};

/// Resolves schema nodes to type expressions for one target language.
pub struct SchemaResolver<'a, M: TypeMapper> {
    mapper: &'a M,
    catalog: &'a SchemaCatalog,
    compose: ComposeStrategy,
}

impl<'a, M: TypeMapper> SchemaResolver<'a, M> {
    pub fn new(mapper: &'a M, catalog: &'a SchemaCatalog) -> Self {
        Self {
            mapper,
            catalog,
            compose: ComposeStrategy::default(),
        }
    }

    /// Choose how `allOf` compositions resolve.
    pub fn with_compose(mut self, compose: ComposeStrategy) -> Self {
        self.compose = compose;
        self
    }

    pub fn mapper(&self) -> &M {
        self.mapper
    }

    /// Resolve an optional node. A missing node is the unknown type.
    pub fn resolve_opt(&self, node: Option<&SchemaNode>) -> String {
        match node {
            Some(node) => self.resolve(node),
            None => self.mapper.unknown().to_string(),
        }
    }

    /// Resolve a node to a type expression.
    pub fn resolve(&self, node: &SchemaNode) -> String {
        match &node.kind {
            SchemaKind::Reference { name } => {
                if !self.catalog.contains(name) {
                    tracing::trace!(reference = %name, "reference not in catalog");
                }
                self.mapper.reference(name)
            }
            SchemaKind::Composed { branches } => self.resolve_composed(branches),
            SchemaKind::EnumString { values } => self.mapper.string_literal_union(values),
            SchemaKind::Primitive { primitive } => self.mapper.primitive(*primitive).to_string(),
            SchemaKind::ArrayOf { item } => self.mapper.array(&self.resolve(item)),
            SchemaKind::Object(object) if object.properties.is_empty() => {
                self.mapper.open_map().to_string()
            }
            SchemaKind::Object(object) => {
                let fields: Vec<ObjectField> = object
                    .properties
                    .iter()
                    .map(|(name, property)| ObjectField {
                        name: name.clone(),
                        optional: !object.is_required(name),
                        ty: self.resolve(property),
                    })
                    .collect();
                self.mapper.object_literal(&fields)
            }
            SchemaKind::Unknown => self.mapper.unknown().to_string(),
        }
    }

    fn resolve_composed(&self, branches: &[SchemaNode]) -> String {
        match (self.compose, branches) {
            (_, []) => self.mapper.unknown().to_string(),
            (ComposeStrategy::First, [first, ..]) | (ComposeStrategy::Intersection, [first]) => {
                self.resolve(first)
            }
            (ComposeStrategy::Intersection, _) => {
                let parts: Vec<String> = branches.iter().map(|b| self.resolve(b)).collect();
                self.mapper.intersection(&parts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use apigen_ir::{ObjectSchema, PrimitiveKind};

    use super::*;

    /// Minimal mapper with distinctive spellings so tests see every callback.
    struct Plain;

    impl TypeMapper for Plain {
        fn primitive(&self, kind: PrimitiveKind) -> &'static str {
            match kind {
                PrimitiveKind::String => "str",
                PrimitiveKind::Number | PrimitiveKind::Integer => "num",
                PrimitiveKind::Boolean => "bool",
            }
        }

        fn unknown(&self) -> &'static str {
            "?"
        }

        fn string_literal_union(&self, values: &[String]) -> String {
            values.join("|")
        }

        fn array(&self, item: &str) -> String {
            format!("[{}]", item)
        }

        fn object_literal(&self, fields: &[ObjectField]) -> String {
            let fields: Vec<String> = fields
                .iter()
                .map(|f| format!("{}{}={}", f.name, if f.optional { "?" } else { "" }, f.ty))
                .collect();
            format!("{{{}}}", fields.join(","))
        }

        fn open_map(&self) -> &'static str {
            "map"
        }

        fn intersection(&self, parts: &[String]) -> String {
            parts.join("&")
        }
    }

    fn resolve(node: &SchemaNode) -> String {
        let catalog = SchemaCatalog::new();
        SchemaResolver::new(&Plain, &catalog).resolve(node)
    }

    #[test]
    fn test_dangling_reference_resolves_by_name() {
        assert_eq!(resolve(&SchemaNode::reference("Missing")), "Missing");
    }

    #[test]
    fn test_missing_node_is_unknown() {
        let catalog = SchemaCatalog::new();
        assert_eq!(SchemaResolver::new(&Plain, &catalog).resolve_opt(None), "?");
    }

    #[test]
    fn test_nested_array_of_object() {
        let mut object = ObjectSchema::default();
        object.properties.insert("id".into(), SchemaNode::integer());
        object
            .properties
            .insert("tags".into(), SchemaNode::array_of(SchemaNode::string()));
        object.required.push("id".into());

        let node = SchemaNode::array_of(SchemaNode::object(object));
        assert_eq!(resolve(&node), "[{id=num,tags?=[str]}]");
    }

    #[test]
    fn test_empty_object_is_open_map() {
        assert_eq!(resolve(&SchemaNode::object(ObjectSchema::default())), "map");
    }

    #[test]
    fn test_compose_first_uses_first_branch() {
        let node = SchemaNode::composed(vec![
            SchemaNode::reference("Base"),
            SchemaNode::reference("Extra"),
        ]);
        assert_eq!(resolve(&node), "Base");
    }

    #[test]
    fn test_compose_intersection() {
        let catalog = SchemaCatalog::new();
        let resolver =
            SchemaResolver::new(&Plain, &catalog).with_compose(ComposeStrategy::Intersection);

        let node = SchemaNode::composed(vec![
            SchemaNode::reference("Base"),
            SchemaNode::reference("Extra"),
        ]);
        assert_eq!(resolver.resolve(&node), "Base&Extra");

        let single = SchemaNode::composed(vec![SchemaNode::reference("Base")]);
        assert_eq!(resolver.resolve(&single), "Base");
    }

    #[test]
    fn test_empty_composition_is_unknown() {
        assert_eq!(resolve(&SchemaNode::composed(Vec::new())), "?");
    }

    #[test]
    fn test_enum_keeps_order() {
        assert_eq!(resolve(&SchemaNode::enum_string(["B", "A"])), "B|A");
    }

    #[test]
    fn test_structurally_equal_nodes_render_identically() {
        let a = SchemaNode::array_of(SchemaNode::number());
        let b = SchemaNode::array_of(SchemaNode::number()).with_description("ignored");
        assert_eq!(resolve(&a), resolve(&b));
    }
}
