//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how operation ids become type and function names, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an operation id to a type name prefix (e.g., "get_pet" -> "GetPet")
    pub operation_to_type: fn(&str) -> String,
    /// Transform an operation id to a function name (e.g., "GetPet" -> "getPet")
    pub operation_to_function: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Type name prefix for an operation.
    pub fn type_name(&self, operation_id: &str) -> String {
        let transformed = (self.operation_to_type)(operation_id);
        self.safe_name(&transformed)
    }

    /// Function name for an operation.
    pub fn function_name(&self, operation_id: &str) -> String {
        let transformed = (self.operation_to_function)(operation_id);
        self.safe_name(&transformed)
    }
}
