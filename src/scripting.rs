//! Callback handles and the scripting-engine interface.
//!
//! Callback bodies live in an external scripting engine; this crate only
//! stores opaque handles to them and hands them back to the engine to
//! invoke or release. Handles are deliberately not `Clone`: each live
//! binding owns exactly one, and releasing it consumes it, so a handle can
//! never be released twice.

use std::fmt;

/// Opaque reference to a callback registered with the scripting engine.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u64);

impl CallbackHandle {
    /// Wrap a raw token issued by the scripting engine.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token, for the engine that issued it.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallbackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callback#{}", self.0)
    }
}

/// Interface to the scripting collaborator that owns callback bodies.
pub trait ScriptEngine {
    /// Resolve a global function name to a fresh callback handle, or
    /// `None` if the scripting environment has no such global.
    fn resolve_global(&self, name: &str) -> Option<CallbackHandle>;

    /// Release a handle previously obtained from this engine.
    fn release(&self, handle: CallbackHandle);

    /// Invoke the callback behind `handle`.
    ///
    /// Fire-and-forget: errors raised inside the callback are the engine's
    /// to report, and must not unwind into the dispatcher.
    fn invoke(&self, handle: &CallbackHandle);
}
