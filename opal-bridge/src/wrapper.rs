//!
//! Dynamic Call Wrappers
//!
//! Turns a resolved code address into something the host can call. The
//! actual cast is delegated to an [`FfiBridge`] implementation supplied
//! by the embedder; the only capability assumed of it is producing a
//! callable from a type descriptor and a raw address.
//!
//! Handles are tagged at construction: a `Raw` handle needs a descriptor
//! before it is callable, a `Callable` handle is already typed (or is a
//! host-native callable) and passes through untouched. Nothing here
//! caches; callers that invoke the same symbol repeatedly cache the
//! returned callable themselves.
//!

use tracing::debug;

use crate::descriptor::{build_type_descriptor, TypeDescriptor};
use crate::resolver::{CodeAddress, CodeTable, LookupError, SignatureTable, SymbolResolver};

/// The one capability required of the host FFI layer: cast a raw code
/// address to the callable described by a type descriptor.
pub trait FfiBridge {
    type Callable;

    fn cast(&self, descriptor: &TypeDescriptor, addr: CodeAddress) -> Self::Callable;
}

/// A code value on its way to becoming callable.
#[derive(Debug, Clone)]
pub enum CodeHandle<F> {
    /// An untyped address that needs a type descriptor before it can be
    /// invoked.
    Raw(CodeAddress),
    /// Already callable, either typed by the bridge earlier or a
    /// host-native callable; returned unchanged.
    Callable(F),
}

/// Produces typed callables for Opal functions on demand.
pub struct CallWrapper<'a, S, C, B> {
    resolver: &'a SymbolResolver<S, C>,
    bridge: &'a B,
}

impl<'a, S: SignatureTable, C: CodeTable, B: FfiBridge> CallWrapper<'a, S, C, B> {
    pub fn new(resolver: &'a SymbolResolver<S, C>, bridge: &'a B) -> Self {
        Self { resolver, bridge }
    }

    /// Produce a properly typed callable for the function `qual_name`.
    /// When `code` is `None` the address is resolved strictly through the
    /// symbol resolver; an already-callable handle is returned unchanged
    /// without re-synthesizing its type.
    pub fn typed_code(
        &self,
        qual_name: &str,
        code: Option<CodeHandle<B::Callable>>,
    ) -> Result<B::Callable, LookupError> {
        let handle = match code {
            Some(handle) => handle,
            None => CodeHandle::Raw(self.resolver.function_code(qual_name)?),
        };
        match handle {
            CodeHandle::Callable(callable) => Ok(callable),
            CodeHandle::Raw(addr) => {
                let sig = self.resolver.function_signature(qual_name)?;
                let descriptor = build_type_descriptor(&sig);
                debug!(symbol = qual_name, %descriptor, "synthesized call-pointer type");
                Ok(self.bridge.cast(&descriptor, addr))
            }
        }
    }
}
