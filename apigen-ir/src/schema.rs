//! Schema nodes.
//!
//! A [`SchemaNode`] is one unit of the type-description grammar after
//! lowering. Anything outside the supported grammar lowers to
//! [`SchemaKind::Unknown`] instead of failing.

use indexmap::IndexMap;
use serde::Serialize;

/// A lowered schema with its optional description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaNode {
    pub kind: SchemaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The shape of a schema node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaKind {
    /// A named pointer into the catalog, resolved by name only.
    Reference { name: String },
    /// A scalar type.
    Primitive { primitive: PrimitiveKind },
    /// A string restricted to a set of literals, in declared order.
    EnumString { values: Vec<String> },
    /// A homogeneous array.
    ArrayOf { item: Box<SchemaNode> },
    /// An object with ordered properties.
    Object(ObjectSchema),
    /// An `allOf` composition, branches in declared order.
    Composed { branches: Vec<SchemaNode> },
    /// Absent or unsupported type.
    Unknown,
}

/// Scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Integer,
    Boolean,
}

/// Properties of an object schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectSchema {
    /// Properties in declared order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Names of required properties, in declared order.
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// Check if a property is listed as required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(SchemaKind::Reference { name: name.into() })
    }

    pub fn primitive(primitive: PrimitiveKind) -> Self {
        Self::new(SchemaKind::Primitive { primitive })
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn integer() -> Self {
        Self::primitive(PrimitiveKind::Integer)
    }

    pub fn number() -> Self {
        Self::primitive(PrimitiveKind::Number)
    }

    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub fn enum_string(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(SchemaKind::EnumString {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn array_of(item: SchemaNode) -> Self {
        Self::new(SchemaKind::ArrayOf {
            item: Box::new(item),
        })
    }

    pub fn object(object: ObjectSchema) -> Self {
        Self::new(SchemaKind::Object(object))
    }

    pub fn composed(branches: Vec<SchemaNode>) -> Self {
        Self::new(SchemaKind::Composed { branches })
    }

    pub fn unknown() -> Self {
        Self::new(SchemaKind::Unknown)
    }

    /// Whether this node is a string enum.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, SchemaKind::EnumString { .. })
    }

    /// The object body, if this node is an object.
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match &self.kind {
            SchemaKind::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Description split into trimmed lines, empty when there is none.
    pub fn description_lines(&self) -> Vec<String> {
        description_lines(self.description.as_deref())
    }
}

/// Split a description on line breaks and trim each line.
///
/// Both `\n` and `\r\n` separate lines.
pub(crate) fn description_lines(description: Option<&str>) -> Vec<String> {
    description
        .map(|d| d.lines().map(|line| line.trim().to_string()).collect())
        .unwrap_or_default()
}
