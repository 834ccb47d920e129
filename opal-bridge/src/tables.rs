//!
//! In-Memory Symbol Tables
//!
//! A concrete backing store for the resolver's query traits, populated
//! once during bootstrap and read-only afterwards. Embedders that load
//! symbol dumps use this directly; tests use it as a drop-in double for
//! the live runtime's tables. Insertion order is preserved so iteration
//! and diagnostics stay deterministic.
//!

use indexmap::IndexMap;

use crate::resolver::{CodeAddress, CodeTable, SignatureTable};

/// Symbol tables held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTables {
    functions: IndexMap<String, String>,
    methods: IndexMap<String, String>,
    global_variables: IndexMap<String, String>,
    storage_slots: IndexMap<String, String>,
    function_code: IndexMap<String, CodeAddress>,
    method_code: IndexMap<String, CodeAddress>,
    library_functions: IndexMap<String, CodeAddress>,
}

impl InMemoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the encoded signature of a function.
    pub fn register_function(
        &mut self,
        qual_name: impl Into<String>,
        encoded: impl Into<String>,
    ) {
        self.functions.insert(qual_name.into(), encoded.into());
    }

    /// Register the encoded signature of a method.
    pub fn register_method(
        &mut self,
        qual_name: impl Into<String>,
        encoded: impl Into<String>,
    ) {
        self.methods.insert(qual_name.into(), encoded.into());
    }

    /// Register the encoded signature of a global variable.
    pub fn register_global_variable(
        &mut self,
        qual_name: impl Into<String>,
        encoded: impl Into<String>,
    ) {
        self.global_variables
            .insert(qual_name.into(), encoded.into());
    }

    /// Register the encoded signature of a storage slot.
    pub fn register_storage_slot(
        &mut self,
        qual_name: impl Into<String>,
        encoded: impl Into<String>,
    ) {
        self.storage_slots.insert(qual_name.into(), encoded.into());
    }

    /// Register a dynamic function-code address under a qualified name.
    pub fn register_function_code(&mut self, qual_name: impl Into<String>, addr: CodeAddress) {
        self.function_code.insert(qual_name.into(), addr);
    }

    /// Register a dynamic method-code address under a qualified name.
    pub fn register_method_code(&mut self, qual_name: impl Into<String>, addr: CodeAddress) {
        self.method_code.insert(qual_name.into(), addr);
    }

    /// Register a preloaded library address under a bare wrapper name.
    pub fn register_library_function(
        &mut self,
        bare_name: impl Into<String>,
        addr: CodeAddress,
    ) {
        self.library_functions.insert(bare_name.into(), addr);
    }

    /// Total number of registered entries across all spaces.
    pub fn len(&self) -> usize {
        self.functions.len()
            + self.methods.len()
            + self.global_variables.len()
            + self.storage_slots.len()
            + self.function_code.len()
            + self.method_code.len()
            + self.library_functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SignatureTable for InMemoryTables {
    fn function(&self, qual_name: &str) -> Option<String> {
        self.functions.get(qual_name).cloned()
    }

    fn method(&self, qual_name: &str) -> Option<String> {
        self.methods.get(qual_name).cloned()
    }

    fn global_variable(&self, qual_name: &str) -> Option<String> {
        self.global_variables.get(qual_name).cloned()
    }

    fn storage_slot(&self, qual_name: &str) -> Option<String> {
        self.storage_slots.get(qual_name).cloned()
    }
}

impl CodeTable for InMemoryTables {
    fn function_code(&self, qual_name: &str) -> Option<CodeAddress> {
        self.function_code.get(qual_name).copied()
    }

    fn method_code(&self, qual_name: &str) -> Option<CodeAddress> {
        self.method_code.get(qual_name).copied()
    }

    fn library_function(&self, bare_name: &str) -> Option<CodeAddress> {
        self.library_functions.get(bare_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_do_not_alias() {
        let mut tables = InMemoryTables::new();
        tables.register_function("f", "f\tint\t/OPAL/@INTEGER");
        assert!(tables.function("f").is_some());
        assert!(tables.method("f").is_none());
        assert!(tables.global_variable("f").is_none());
        assert!(tables.storage_slot("f").is_none());
    }

    #[test]
    fn code_spaces_are_keyed_separately() {
        let mut tables = InMemoryTables::new();
        tables.register_function_code("opal/f", CodeAddress::new(1));
        tables.register_method_code("opal/f", CodeAddress::new(2));
        tables.register_library_function("wrap_f", CodeAddress::new(3));
        assert_eq!(tables.function_code("opal/f"), Some(CodeAddress::new(1)));
        assert_eq!(tables.method_code("opal/f"), Some(CodeAddress::new(2)));
        assert_eq!(tables.library_function("wrap_f"), Some(CodeAddress::new(3)));
        assert_eq!(tables.library_function("opal/f"), None);
        assert_eq!(tables.len(), 3);
    }

    #[test]
    fn empty_tables_report_empty() {
        assert!(InMemoryTables::new().is_empty());
    }
}
