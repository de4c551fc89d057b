//! Binding registries.
//!
//! Two insertion-ordered collections: key bindings keyed by their original
//! descriptor string, mouse bindings keyed by gesture type. All mutation
//! goes through `bind`/`unbind`; dispatch scans the sequences in insertion
//! order, so order is stable across rebinds (an update replaces in place).
//!
//! Invalid input never mutates state: a descriptor that fails to parse or
//! an unknown mouse event name is logged, the incoming callback handle is
//! released back to the engine, and the registry is untouched.

use crate::mouse::{MouseEventKind, mouse_event_from_name};
use crate::parser::{KeyDescriptor, parse_key_binding};
use crate::platform::{Keycode, Keymap};
use crate::scripting::{CallbackHandle, ScriptEngine};

/// A named key gesture bound to a scripting callback.
#[derive(Debug)]
pub struct KeyBinding {
    name: String,
    descriptor: KeyDescriptor,
    keycode: Option<Keycode>,
    callback: CallbackHandle,
}

impl KeyBinding {
    /// The original descriptor string, unique within the registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed gesture this binding matches.
    pub fn descriptor(&self) -> KeyDescriptor {
        self.descriptor
    }

    /// Physical key code resolved at bind time, if the keyboard has one
    /// for this keysym.
    pub fn keycode(&self) -> Option<Keycode> {
        self.keycode
    }

    /// The callback fired when this binding matches.
    pub fn callback(&self) -> &CallbackHandle {
        &self.callback
    }
}

/// A mouse gesture type bound to a scripting callback.
#[derive(Debug)]
pub struct MouseBinding {
    kind: MouseEventKind,
    callback: CallbackHandle,
}

impl MouseBinding {
    /// The gesture type(s) this binding matches.
    pub fn kind(&self) -> MouseEventKind {
        self.kind
    }

    /// The callback fired when this binding matches.
    pub fn callback(&self) -> &CallbackHandle {
        &self.callback
    }
}

/// Ordered collection of key bindings, unique by descriptor string.
#[derive(Debug, Default)]
pub struct KeyBindingRegistry {
    bindings: Vec<KeyBinding>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under the gesture described by `descriptor`.
    ///
    /// If a binding with the same descriptor string already exists it is
    /// updated in place and its previous callback is released. A malformed
    /// descriptor is logged and skipped, releasing `callback` so the engine
    /// does not leak the reference.
    pub fn bind(
        &mut self,
        descriptor: &str,
        callback: CallbackHandle,
        keymap: &dyn Keymap,
        engine: &dyn ScriptEngine,
    ) {
        let parsed = match parse_key_binding(descriptor, keymap) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("rejecting keybinding '{descriptor}': {err}");
                engine.release(callback);
                return;
            }
        };
        let keycode = keymap.keycode_for_keysym(parsed.keysym);

        match self.position(descriptor) {
            Some(index) => {
                let kb = &mut self.bindings[index];
                kb.descriptor = parsed;
                kb.keycode = keycode;
                let old = std::mem::replace(&mut kb.callback, callback);
                engine.release(old);
                log::trace!("rebound '{descriptor}'");
            }
            None => {
                self.bindings.push(KeyBinding {
                    name: descriptor.to_string(),
                    descriptor: parsed,
                    keycode,
                    callback,
                });
                log::trace!("bound '{descriptor}'");
            }
        }
    }

    /// Remove the binding named `name`, releasing its callback.
    ///
    /// Unbinding a name that is not registered is a logged no-op.
    pub fn unbind(&mut self, name: &str, engine: &dyn ScriptEngine) {
        match self.position(name) {
            Some(index) => {
                let kb = self.bindings.remove(index);
                engine.release(kb.callback);
                log::trace!("unbound '{name}'");
            }
            None => {
                log::trace!("keybinding '{name}' not found - skipping");
            }
        }
    }

    /// Look up a binding by its descriptor string.
    pub fn get(&self, name: &str) -> Option<&KeyBinding> {
        self.position(name).map(|index| &self.bindings[index])
    }

    /// Trace-log every binding's name, state, keysym and keycode.
    pub fn trace(&self) {
        for kb in &self.bindings {
            log::trace!(
                "{}: state={} keysym={} keycode={:?}",
                kb.name,
                kb.descriptor.state,
                kb.descriptor.keysym,
                kb.keycode,
            );
        }
    }

    /// Bindings in insertion order, as scanned by dispatch.
    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.bindings.iter().position(|kb| kb.name == name)
    }
}

/// Ordered collection of mouse bindings, unique by gesture type.
#[derive(Debug, Default)]
pub struct MouseBindingRegistry {
    bindings: Vec<MouseBinding>,
}

impl MouseBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under the mouse event named `event_name`.
    ///
    /// Unknown event names are logged and skipped, releasing `callback`.
    /// Rebinding a known event replaces its callback, releasing the old
    /// one.
    pub fn bind(&mut self, event_name: &str, callback: CallbackHandle, engine: &dyn ScriptEngine) {
        let Some(kind) = mouse_event_from_name(event_name) else {
            log::warn!("unknown mouse event '{event_name}'");
            engine.release(callback);
            return;
        };

        match self.position(kind) {
            Some(index) => {
                let mb = &mut self.bindings[index];
                let old = std::mem::replace(&mut mb.callback, callback);
                engine.release(old);
                log::trace!("rebound mouse event '{event_name}'");
            }
            None => {
                self.bindings.push(MouseBinding { kind, callback });
                log::trace!("bound mouse event '{event_name}'");
            }
        }
    }

    /// Remove the binding for the mouse event named `event_name`.
    ///
    /// Unknown names and unbound events are logged no-ops.
    pub fn unbind(&mut self, event_name: &str, engine: &dyn ScriptEngine) {
        let Some(kind) = mouse_event_from_name(event_name) else {
            log::trace!("unknown mouse event '{event_name}' - skipping");
            return;
        };
        match self.position(kind) {
            Some(index) => {
                let mb = self.bindings.remove(index);
                engine.release(mb.callback);
                log::trace!("unbound mouse event '{event_name}'");
            }
            None => {
                log::trace!("mouse event '{event_name}' not bound - skipping");
            }
        }
    }

    /// Look up a binding by gesture type.
    pub fn get(&self, kind: MouseEventKind) -> Option<&MouseBinding> {
        self.position(kind).map(|index| &self.bindings[index])
    }

    /// Bindings in insertion order, as scanned by dispatch.
    pub fn iter(&self) -> impl Iterator<Item = &MouseBinding> {
        self.bindings.iter()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn position(&self, kind: MouseEventKind) -> Option<usize> {
        self.bindings.iter().position(|mb| mb.kind == kind)
    }
}
