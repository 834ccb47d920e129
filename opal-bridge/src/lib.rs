//!
//! opal-bridge - Dynamic Symbol Bridge for the Opal Runtime
//!
//! The Opal runtime is compiled separately from its hosts, so none of its
//! functions, methods, global variables or storage slots are bound ahead
//! of time. This crate is the translation core that makes them callable
//! anyway: given a qualified symbol name it resolves the compact encoded
//! description of the symbol's native calling convention, translates the
//! foreign ABI quirks (integer-encoded booleans, reference-typed return
//! slots) into a form the host FFI layer understands, and synthesizes the
//! exact function-pointer type needed to invoke a raw code address.
//!
//! Everything happens lazily, at first use of a symbol; no bindings are
//! generated ahead of time and nothing is cached. The pieces:
//!
//! - [`Signature`] decodes the tab-separated signature wire format
//! - [`names`] escapes reserved-word collisions and splits qualified names
//! - [`typemap`] recovers boolean types from the integer ABI encoding
//! - [`descriptor`] builds the function-pointer [`TypeDescriptor`]
//! - [`SymbolResolver`] queries the bootstrap-populated symbol spaces
//! - [`CallWrapper`] turns a resolved address into a typed callable via
//!   an embedder-supplied [`FfiBridge`]
//!
//! Bootstrap itself, garbage protection for values crossing the boundary,
//! and the call mechanism are external collaborators. All tables are
//! immutable once bootstrap completes, so everything here is safe to use
//! from multiple threads without locking.
//!

pub mod config;
pub mod descriptor;
pub mod names;
pub mod resolver;
pub mod signature;
pub mod tables;
pub mod typemap;
pub mod wrapper;

pub use config::{BridgeConfig, ConfigError, ReservedWords};
pub use descriptor::{build_type_descriptor, input_parameter_names, TypeDescriptor};
pub use names::{parse_qualified_name, to_host_identifier, QualifiedName};
pub use resolver::{
    CodeAddress, CodeTable, LookupError, SignatureTable, SymbolKind, SymbolResolver,
};
pub use signature::{Parameter, Signature, SignatureError};
pub use tables::InMemoryTables;
pub use wrapper::{CallWrapper, CodeHandle, FfiBridge};
