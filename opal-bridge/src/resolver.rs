//!
//! Symbol Resolution
//!
//! The Opal bootstrap phase populates several disjoint symbol spaces:
//! encoded signatures for functions, methods, global variables and
//! storage slots, plus raw code addresses for function and method
//! wrappers. This module resolves qualified names against those spaces
//! through injected read-only query traits, so each space can be backed
//! by the live runtime or by a test double independently.
//!
//! Function code uses a two-step policy: the preloaded library table is
//! consulted first by the bare wrapper name taken from the signature,
//! and the runtime's dynamic function-code table is the fallback. A name
//! absent from one symbol space may still exist in another; spaces are
//! never cross-queried.
//!
//! All lookups either return immediately or fail immediately. The tables
//! are immutable once bootstrap completes, so a failed lookup cannot
//! succeed later and nothing here retries.
//!

use std::ffi::c_void;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::signature::{Signature, SignatureError};

/// A raw native code address. The backing compiled code is owned by the
/// Opal runtime for the life of the process; this crate only types it,
/// never frees or relocates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeAddress(usize);

impl CodeAddress {
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    pub const fn as_usize(self) -> usize {
        self.0
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0 as *const c_void
    }
}

/// The symbol space a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Method,
    GlobalVariable,
    StorageSlot,
    FunctionCode,
    MethodCode,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SymbolKind::Function => "function",
            SymbolKind::Method => "method",
            SymbolKind::GlobalVariable => "global variable",
            SymbolKind::StorageSlot => "storage slot",
            SymbolKind::FunctionCode => "function code",
            SymbolKind::MethodCode => "method code",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("no {kind} registered under '{qual_name}'")]
    SymbolNotFound { kind: SymbolKind, qual_name: String },

    #[error(transparent)]
    Signature(#[from] SignatureError),
}

impl LookupError {
    fn not_found(kind: SymbolKind, qual_name: &str) -> Self {
        Self::SymbolNotFound {
            kind,
            qual_name: qual_name.to_string(),
        }
    }
}

/// Read-only access to the four encoded-signature spaces.
pub trait SignatureTable {
    fn function(&self, qual_name: &str) -> Option<String>;
    fn method(&self, qual_name: &str) -> Option<String>;
    fn global_variable(&self, qual_name: &str) -> Option<String>;
    fn storage_slot(&self, qual_name: &str) -> Option<String>;
}

/// Read-only access to the code-address spaces. `library_function` is the
/// preloaded fast-path table keyed by bare wrapper name; the other two are
/// the runtime's dynamic tables keyed by qualified name.
pub trait CodeTable {
    fn function_code(&self, qual_name: &str) -> Option<CodeAddress>;
    fn method_code(&self, qual_name: &str) -> Option<CodeAddress>;
    fn library_function(&self, bare_name: &str) -> Option<CodeAddress>;
}

/// Resolves qualified names against externally owned symbol spaces.
/// Holds no mutable state; safe to share across threads whenever the
/// injected tables are.
pub struct SymbolResolver<S, C> {
    signatures: S,
    code: C,
}

impl<S: SignatureTable, C: CodeTable> SymbolResolver<S, C> {
    pub fn new(signatures: S, code: C) -> Self {
        Self { signatures, code }
    }

    fn decode(
        &self,
        encoded: Option<String>,
        kind: SymbolKind,
        qual_name: &str,
    ) -> Result<Signature, LookupError> {
        match encoded {
            Some(raw) => Ok(Signature::decode(&raw)?),
            None => Err(LookupError::not_found(kind, qual_name)),
        }
    }

    /// Resolve the signature of the function `qual_name`.
    pub fn function_signature(&self, qual_name: &str) -> Result<Signature, LookupError> {
        self.decode(
            self.signatures.function(qual_name),
            SymbolKind::Function,
            qual_name,
        )
    }

    /// Resolve the signature of the method `qual_name`.
    pub fn method_signature(&self, qual_name: &str) -> Result<Signature, LookupError> {
        self.decode(
            self.signatures.method(qual_name),
            SymbolKind::Method,
            qual_name,
        )
    }

    /// Resolve the signature of the global variable `qual_name`.
    pub fn global_variable_signature(
        &self,
        qual_name: &str,
    ) -> Result<Signature, LookupError> {
        self.decode(
            self.signatures.global_variable(qual_name),
            SymbolKind::GlobalVariable,
            qual_name,
        )
    }

    /// Resolve the signature of the storage slot `qual_name`.
    pub fn storage_slot_signature(&self, qual_name: &str) -> Result<Signature, LookupError> {
        self.decode(
            self.signatures.storage_slot(qual_name),
            SymbolKind::StorageSlot,
            qual_name,
        )
    }

    /// Resolve the code address of the function `qual_name`, returning
    /// `Ok(None)` when no code is registered. A missing or malformed
    /// signature is still an error: without the signature there is no
    /// wrapper name to probe the fast path with.
    pub fn probe_function_code(
        &self,
        qual_name: &str,
    ) -> Result<Option<CodeAddress>, LookupError> {
        let sig = self.function_signature(qual_name)?;
        if let Some(addr) = self.code.library_function(sig.name()) {
            return Ok(Some(addr));
        }
        debug!(
            symbol = qual_name,
            wrapper = sig.name(),
            "library fast path missed, falling back to dynamic function-code lookup"
        );
        Ok(self.code.function_code(qual_name))
    }

    /// Like [`probe_function_code`](Self::probe_function_code) but absent
    /// code is an error.
    pub fn function_code(&self, qual_name: &str) -> Result<CodeAddress, LookupError> {
        self.probe_function_code(qual_name)?
            .ok_or_else(|| LookupError::not_found(SymbolKind::FunctionCode, qual_name))
    }

    /// Resolve the code address of the method `qual_name`, or `None` when
    /// no code is registered. Methods have no fast-path table.
    pub fn probe_method_code(&self, qual_name: &str) -> Option<CodeAddress> {
        self.code.method_code(qual_name)
    }

    /// Like [`probe_method_code`](Self::probe_method_code) but absent code
    /// is an error.
    pub fn method_code(&self, qual_name: &str) -> Result<CodeAddress, LookupError> {
        self.probe_method_code(qual_name)
            .ok_or_else(|| LookupError::not_found(SymbolKind::MethodCode, qual_name))
    }
}
