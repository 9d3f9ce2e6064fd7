//! TypeScript interface builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::property_key;

/// The type of an interface field.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// An inline type expression.
    Expr(String),
    /// A nested object literal type, rendered one field per line.
    Object(Vec<InterfaceField>),
}

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: FieldType,
    pub optional: bool,
    /// Comment lines rendered above the field.
    pub comments: Vec<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Expr(ty.into()),
            optional: false,
            comments: Vec::new(),
        }
    }

    /// A field whose type is a nested object.
    pub fn object(name: impl Into<String>, fields: Vec<InterfaceField>) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Object(fields),
            optional: false,
            comments: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the field optional when `optional` holds.
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn comments(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.comments.extend(lines.into_iter().map(Into::into));
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.comments.iter().cloned());
        let optional = if self.optional { "?" } else { "" };
        let key = property_key(&self.name);

        match &self.ty {
            FieldType::Expr(ty) => {
                fragments.push(CodeFragment::line(format!("{}{}: {}", key, optional, ty)));
            }
            FieldType::Object(fields) if fields.is_empty() => {
                fragments.push(CodeFragment::line(format!("{}{}: {{}}", key, optional)));
            }
            FieldType::Object(fields) => {
                fragments.push(CodeFragment::block(
                    format!("{}{}: {{", key, optional),
                    fields.iter().flat_map(InterfaceField::to_fragments).collect(),
                    Some("}".to_string()),
                ));
            }
        }

        fragments
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    comments: Vec<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Comment lines rendered above the declaration.
    pub fn comments(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.comments.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.comments.iter().cloned());

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("export interface {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body: self.fields.iter().flat_map(InterfaceField::to_fragments).collect(),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}
