//!
//! Call-Pointer Type Synthesis
//!
//! Builds the string-form function-pointer type used to cast a raw code
//! address into something the host FFI layer can invoke. The descriptor
//! enumerates every declared parameter, return slots included, because
//! the native wrapper expects them at the ABI level; the separate
//! input-parameter list tells the caller which arguments it actually
//! supplies.
//!
//! FFI layers generally cannot express C++ reference semantics, so
//! reference-typed return slots are rewritten to pointers in the
//! descriptor.
//!

use std::borrow::Cow;
use std::fmt;

use crate::signature::Signature;
use crate::typemap::{map_param_type, map_return_type};

/// A synthesized function-pointer type, e.g. `int (*)(int* _Return1, int a)`.
/// Parameter names are included for documentation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrite a reference-suffixed type to a pointer-suffixed type;
/// non-reference types pass through unchanged.
pub fn pointerize_reference(native_type: &str) -> Cow<'_, str> {
    match native_type.strip_suffix('&') {
        Some(base) => Cow::Owned(format!("{base}*")),
        None => Cow::Borrowed(native_type),
    }
}

/// Build the function-pointer type descriptor for `sig`.
pub fn build_type_descriptor(sig: &Signature) -> TypeDescriptor {
    let mut out = String::from(map_return_type(sig));
    out.push_str(" (*)(");
    for (i, param) in sig.params().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let mapped = map_param_type(param);
        let param_type = if param.is_return_slot() {
            Cow::Owned(pointerize_reference(&mapped).into_owned())
        } else {
            mapped
        };
        out.push_str(&param_type);
        out.push(' ');
        out.push_str(param.name());
    }
    out.push(')');
    TypeDescriptor(out)
}

/// Native names of the parameters a caller actually supplies, in order.
/// Scanning stops at the first return slot; the slot itself and anything
/// after it are excluded. Return slots are assumed trailing by the
/// upstream signature generator, and this function relies on that
/// convention rather than classifying every parameter.
pub fn input_parameter_names(sig: &Signature) -> Vec<&str> {
    let mut names = Vec::new();
    for param in sig.params() {
        if param.is_return_slot() {
            break;
        }
        names.push(param.name());
    }
    names
}
