//! Classification of the context a blocking call appears in.
//!
//! Two independent questions, each answered by a pure function returning a
//! plain enum:
//!
//! - is the enclosing executable already asynchronous?
//! - may its signature change (so that it could be made asynchronous)?

use crate::enclosing::EnclosingExecutable;
use crate::type_resolver::ResolvedTypeSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AsyncContext {
    Async,
    NotAsync,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignatureMutability {
    Mutable,
    Fixed,
}

/// An executable is asynchronous when declared `async`, or when it returns
/// a computation handle (hand-written state machines, task combinators).
/// Code outside any executable is not.
pub fn classify_async_context(
    types: &ResolvedTypeSet,
    executable: Option<&EnclosingExecutable>,
) -> AsyncContext {
    match executable {
        Some(exec) if exec.is_async || types.is_async_handle_opt(exec.return_type) => {
            AsyncContext::Async
        }
        _ => AsyncContext::NotAsync,
    }
}

/// Converting an executable to async changes its return type and its
/// callers' obligations; that is only allowed when no override, interface
/// contract or external consumer is bound to the current shape.
pub fn check_signature_mutability(executable: Option<&EnclosingExecutable>) -> SignatureMutability {
    match executable {
        Some(exec)
            if !exec.is_override
                && !exec.is_interface_implementation
                && !exec.is_externally_visible =>
        {
            SignatureMutability::Mutable
        }
        _ => SignatureMutability::Fixed,
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod tests;
