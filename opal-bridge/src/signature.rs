//!
//! Signature Codec - Encoded Native Signatures
//!
//! The Opal runtime exports one encoded string per symbol describing its
//! native calling convention: fields joined by a horizontal tab, where
//! field 0 is the symbol's native name, fields 1-2 are the native and
//! semantic return types, and every following run of 3 fields is one
//! parameter's (name, native type, semantic type). This module decodes
//! those strings into immutable `Signature` records.
//!
//! Decoding is all-or-nothing: a field count that is not 3 * (arity + 1)
//! is a format error and never yields a partial record. Signatures are
//! decoded fresh on every lookup; callers that want caching cache the
//! decoded record themselves.
//!

use thiserror::Error;
use tracing::trace;

/// Parameter names starting with this prefix mark compiler-synthesized
/// return slots. The convention is shared with the Opal signature
/// generator and must match it exactly.
pub const RETURN_SLOT_PREFIX: &str = "_Return";

/// Native types ending with this suffix are reference types.
pub const REFERENCE_SUFFIX: char = '&';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("empty signature string")]
    Empty,

    #[error("signature has {found} fields, expected 3 * (arity + 1)")]
    FieldCount { found: usize },
}

/// One declared parameter of a native signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    native_type: String,
    semantic_type: String,
}

impl Parameter {
    /// The parameter's native name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw ABI-level type string.
    pub fn native_type(&self) -> &str {
        &self.native_type
    }

    /// The Opal-level type tag (e.g. `/OPAL/@BOOLEAN`).
    pub fn semantic_type(&self) -> &str {
        &self.semantic_type
    }

    /// Whether this parameter is a compiler-synthesized return slot:
    /// its name starts with [`RETURN_SLOT_PREFIX`] and its native type
    /// ends with [`REFERENCE_SUFFIX`]. Return slots are assumed to trail
    /// the real input parameters.
    pub fn is_return_slot(&self) -> bool {
        self.name.starts_with(RETURN_SLOT_PREFIX)
            && self.native_type.ends_with(REFERENCE_SUFFIX)
    }
}

/// Decoded description of one symbol's native calling convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    native_return_type: String,
    semantic_return_type: String,
    params: Vec<Parameter>,
}

impl Signature {
    /// Decode one tab-separated encoded signature string.
    pub fn decode(raw: &str) -> Result<Self, SignatureError> {
        if raw.is_empty() {
            return Err(SignatureError::Empty);
        }
        let fields: Vec<&str> = raw.split('\t').collect();
        if fields.len() < 3 || fields.len() % 3 != 0 {
            return Err(SignatureError::FieldCount {
                found: fields.len(),
            });
        }

        let params = fields[3..]
            .chunks_exact(3)
            .map(|triple| Parameter {
                name: triple[0].to_string(),
                native_type: triple[1].to_string(),
                semantic_type: triple[2].to_string(),
            })
            .collect::<Vec<_>>();

        trace!(name = fields[0], arity = params.len(), "decoded signature");

        Ok(Self {
            name: fields[0].to_string(),
            native_return_type: fields[1].to_string(),
            semantic_return_type: fields[2].to_string(),
            params,
        })
    }

    /// The symbol's native identifier (the C-callable wrapper name for
    /// functions).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw ABI-level return type string.
    pub fn native_return_type(&self) -> &str {
        &self.native_return_type
    }

    /// The Opal-level return type tag.
    pub fn semantic_return_type(&self) -> &str {
        &self.semantic_return_type
    }

    /// Number of declared parameters, return slots included.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The parameter at `index`, if any.
    pub fn param(&self, index: usize) -> Option<&Parameter> {
        self.params.get(index)
    }

    /// All declared parameters in order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Native names of all declared parameters, return slots included.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name()).collect()
    }
}
