//! Named schema catalog.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{ObjectSchema, SchemaKind, SchemaNode};

/// Ordered mapping of schema name to node.
///
/// Built once from `components.schemas`; insertion order is document order.
/// Besides the node used for type resolution, every entry keeps the
/// schema's own `properties`, which is what its declaration lists
/// whatever the schema's kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaCatalog {
    schemas: IndexMap<String, SchemaNode>,
    #[serde(skip)]
    fields: IndexMap<String, ObjectSchema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, node: SchemaNode, fields: ObjectSchema) {
        let name = name.into();
        self.fields.insert(name.clone(), fields);
        self.schemas.insert(name, node);
    }

    /// The schema's own properties; empty for schemas that declare none.
    pub fn fields(&self, name: &str) -> Option<&ObjectSchema> {
        self.fields.get(name)
    }

    /// Look up a schema by exact name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Check whether a name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.schemas.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Entries collected this way take their fields from object nodes only.
impl FromIterator<(String, SchemaNode)> for SchemaCatalog {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, node) in iter {
            let fields = match &node.kind {
                SchemaKind::Object(object) => object.clone(),
                _ => ObjectSchema::default(),
            };
            catalog.insert(name, node, fields);
        }
        catalog
    }
}
