//! Key and mouse binding engine for scriptable terminal emulators.
//!
//! Associates input gestures with opaque scripting callbacks and resolves
//! incoming events against them at runtime:
//!
//! - Descriptor strings like `"Ctrl-t"` or `"CtrlShift-w"` parse into
//!   modifier-plus-keysym gestures (see [`parser`]).
//! - Two insertion-ordered registries hold key bindings (unique by
//!   descriptor string) and mouse bindings (unique by gesture type).
//! - Dispatch matches key events under a configurable [`KeyboardPolicy`]
//!   (physical keycode vs. case-folded keysym) with non-strict modifier
//!   superset semantics, firing the first match. Mouse dispatch fires every
//!   intersecting binding and never consumes the event.
//!
//! The surrounding application supplies its platform key tables through
//! [`Keymap`] and its scripting engine through [`ScriptEngine`]; this crate
//! never interprets callback bodies, it only stores, invokes and releases
//! handles.
//!
//! Everything here is single-threaded: registration and dispatch run on the
//! host's event-loop thread. Dispatch borrows the [`Bindings`] immutably,
//! so a callback cannot rebind mid-scan through this API; an engine that
//! wants to rebind from inside a callback must defer the mutation until
//! dispatch returns.

mod defaults;
mod dispatcher;
mod modifier;
mod mouse;
pub mod parser;
pub mod platform;
mod registry;
mod scripting;

pub use dispatcher::{KeyEvent, KeyboardPolicy, MouseEvent, PolicyError};
pub use modifier::ModifierState;
pub use mouse::MouseEventKind;
pub use parser::{KeyDescriptor, ParseError, parse_key_binding};
pub use platform::{Keycode, Keymap, Keysym};
pub use registry::{KeyBinding, KeyBindingRegistry, MouseBinding, MouseBindingRegistry};
pub use scripting::{CallbackHandle, ScriptEngine};

/// Binding state for one terminal instance: both registries plus the
/// active keyboard matching policy.
///
/// Hosts create one of these at startup, seed it with
/// [`install_default_bindings`](Self::install_default_bindings) and any
/// configuration-driven binds, then feed it events from their input
/// handlers.
#[derive(Debug, Default)]
pub struct Bindings {
    keys: KeyBindingRegistry,
    mouse: MouseBindingRegistry,
    policy: KeyboardPolicy,
}

impl Bindings {
    /// Create empty registries under the given matching policy.
    pub fn new(policy: KeyboardPolicy) -> Self {
        Self {
            keys: KeyBindingRegistry::new(),
            mouse: MouseBindingRegistry::new(),
            policy,
        }
    }

    /// The active keyboard matching policy.
    pub fn policy(&self) -> KeyboardPolicy {
        self.policy
    }

    /// Register `callback` under a key gesture descriptor like
    /// `"CtrlShift-w"`. See [`KeyBindingRegistry::bind`].
    pub fn bind_key(
        &mut self,
        descriptor: &str,
        callback: CallbackHandle,
        keymap: &dyn Keymap,
        engine: &dyn ScriptEngine,
    ) {
        self.keys.bind(descriptor, callback, keymap, engine);
    }

    /// Remove the key binding registered under `name`, releasing its
    /// callback. A no-op if the name is not bound.
    pub fn unbind_key(&mut self, name: &str, engine: &dyn ScriptEngine) {
        self.keys.unbind(name, engine);
    }

    /// Register `callback` under a mouse event name like `"DoubleClick"`.
    /// See [`MouseBindingRegistry::bind`].
    pub fn bind_mouse(
        &mut self,
        event_name: &str,
        callback: CallbackHandle,
        engine: &dyn ScriptEngine,
    ) {
        self.mouse.bind(event_name, callback, engine);
    }

    /// Remove the mouse binding for `event_name`, releasing its callback.
    /// A no-op if the event is not bound.
    pub fn unbind_mouse(&mut self, event_name: &str, engine: &dyn ScriptEngine) {
        self.mouse.unbind(event_name, engine);
    }

    /// Match a key event against the registry under the active policy and
    /// fire the first matching callback.
    ///
    /// Returns `true` if a binding fired and the host should treat the
    /// event as handled.
    pub fn dispatch_key_event(
        &self,
        event: &KeyEvent,
        keymap: &dyn Keymap,
        engine: &dyn ScriptEngine,
    ) -> bool {
        dispatcher::dispatch_key_event(&self.keys, self.policy, event, keymap, engine)
    }

    /// Fire every mouse binding whose gesture type intersects the event.
    ///
    /// Always returns `false`; mouse events are never consumed here and
    /// the host continues its default handling.
    pub fn dispatch_mouse_event(&self, event: &MouseEvent, engine: &dyn ScriptEngine) -> bool {
        dispatcher::dispatch_mouse_event(&self.mouse, event, engine)
    }

    /// Seed the registries with the baseline binding set (tab navigation,
    /// copy/paste, double-click opens a tab).
    pub fn install_default_bindings(&mut self, keymap: &dyn Keymap, engine: &dyn ScriptEngine) {
        defaults::install(self, keymap, engine);
    }

    /// The key binding registry, for diagnostics and direct inspection.
    pub fn keys(&self) -> &KeyBindingRegistry {
        &self.keys
    }

    /// The mouse binding registry, for diagnostics and direct inspection.
    pub fn mouse(&self) -> &MouseBindingRegistry {
        &self.mouse
    }
}
