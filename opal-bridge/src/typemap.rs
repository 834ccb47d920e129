//!
//! Type Mapping - Boolean Recovery
//!
//! The Opal compiler's C-level ABI represents booleans as plain `int`s,
//! so the raw native type alone cannot tell a boolean apart from an
//! integer. The semantic type tag carried alongside it can. These
//! functions rewrite `int`-family native types to `bool` whenever the
//! semantic tag says the value is logically boolean, so the host FFI
//! layer can apply truth-value coercion on the affected call paths.
//! Everything else passes through unchanged.
//!

use std::borrow::Cow;

use crate::signature::{Parameter, Signature};

/// Semantic type tag marking a logically boolean value.
pub const BOOLEAN_TYPE_TAG: &str = "/OPAL/@BOOLEAN";

/// The native return type of `sig`, with `int` rewritten to `bool` when
/// the semantic return type is boolean.
pub fn map_return_type(sig: &Signature) -> &str {
    if sig.native_return_type() == "int" && sig.semantic_return_type() == BOOLEAN_TYPE_TAG {
        "bool"
    } else {
        sig.native_return_type()
    }
}

/// The native type of `param`, with a leading `int` rewritten to `bool`
/// when the semantic type is boolean. The rewrite is textual so that
/// reference types keep their suffix (`int&` becomes `bool&`).
pub fn map_param_type(param: &Parameter) -> Cow<'_, str> {
    if param.native_type().starts_with("int") && param.semantic_type() == BOOLEAN_TYPE_TAG {
        Cow::Owned(param.native_type().replace("int", "bool"))
    } else {
        Cow::Borrowed(param.native_type())
    }
}
