//! Language-agnostic code generation traits.

use std::path::Path;

use apigen_ir::PrimitiveKind;
use eyre::Result;

/// A client generator for one target language.
pub trait LanguageCodegen {
    /// Shown in logs, e.g. `typescript`.
    fn language(&self) -> &'static str;

    /// Render every file in memory; nothing touches the disk.
    fn preview(&self) -> Vec<PreviewFile>;

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Paths are relative to the output directory.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<String>,
    /// Present on disk already and protected by their write rules.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewFile {
    /// Relative to the output directory.
    pub path: String,
    pub content: String,
}

/// One field of an inline object type, already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    /// Property name as written in the document.
    pub name: String,
    pub optional: bool,
    /// Rendered type expression.
    pub ty: String,
}

/// Renders resolved schema shapes as type expressions in a target language.
///
/// The resolver walks the schema tree and calls back into the mapper for
/// every node, so a mapper only decides spelling, never structure.
pub trait TypeMapper {
    /// A named reference into the schema catalog.
    fn reference(&self, name: &str) -> String {
        name.to_string()
    }

    /// A scalar type.
    fn primitive(&self, kind: PrimitiveKind) -> &'static str;

    /// The type used for absent or unsupported schemas.
    fn unknown(&self) -> &'static str;

    /// A union of string literals, in declared order.
    fn string_literal_union(&self, values: &[String]) -> String;

    /// An array of `item`.
    fn array(&self, item: &str) -> String;

    /// An inline object type with the given fields.
    fn object_literal(&self, fields: &[ObjectField]) -> String;

    /// An object with no declared properties.
    fn open_map(&self) -> &'static str;

    /// An intersection of the given parts.
    fn intersection(&self, parts: &[String]) -> String;
}
