//! Input event dispatch.
//!
//! Scans the registries against incoming events and fires matching
//! callbacks. Key dispatch is first-match-wins in registration order;
//! mouse dispatch fires every intersecting binding and never marks the
//! event consumed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modifier::ModifierState;
use crate::mouse::MouseEventKind;
use crate::platform::{Keycode, Keymap, Keysym};
use crate::registry::{KeyBindingRegistry, MouseBindingRegistry};
use crate::scripting::ScriptEngine;

/// Which event field key matching compares.
///
/// Set once at startup from host configuration; dispatch never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardPolicy {
    /// Match on the physical hardware key code. Layout-independent: the
    /// binding stays on the same physical key whatever the active layout.
    UseKeycode,
    /// Match on the case-folded key symbol. Follows the active layout.
    #[default]
    UseKeysym,
}

/// The configured keyboard policy name was not recognized.
///
/// This indicates a configuration defect; hosts should error-log it and
/// fall back to the default policy rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyboard policy '{0}'")]
pub struct PolicyError(pub String);

impl FromStr for KeyboardPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "use_keycode" => Ok(Self::UseKeycode),
            "use_keysym" => Ok(Self::UseKeysym),
            _ => Err(PolicyError(s.to_string())),
        }
    }
}

/// Key press as delivered by the host event loop.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    /// Modifiers active when the key went down.
    pub state: ModifierState,
    /// Logical key symbol, as reported by the platform (any case).
    pub keysym: Keysym,
    /// Physical key code.
    pub keycode: Keycode,
}

/// Mouse gesture as delivered by the host event loop.
#[derive(Debug, Clone, Copy)]
pub struct MouseEvent {
    /// Gesture type bits for this event.
    pub kind: MouseEventKind,
}

/// A binding's required modifiers must all be held; extra held modifiers
/// are tolerated (superset match, not equality).
fn modifiers_match(event: ModifierState, required: ModifierState) -> bool {
    event.contains(required)
}

/// Scan `registry` for the first binding matching `event` under `policy`
/// and invoke its callback.
///
/// Returns `true` if a binding fired, telling the host to stop its own
/// handling of the event.
pub(crate) fn dispatch_key_event(
    registry: &KeyBindingRegistry,
    policy: KeyboardPolicy,
    event: &KeyEvent,
    keymap: &dyn Keymap,
    engine: &dyn ScriptEngine,
) -> bool {
    for kb in registry.iter() {
        if !modifiers_match(event.state, kb.descriptor().state) {
            continue;
        }
        let hit = match policy {
            KeyboardPolicy::UseKeycode => kb.keycode() == Some(event.keycode),
            KeyboardPolicy::UseKeysym => {
                keymap.keysym_to_lower(event.keysym) == kb.descriptor().keysym
            }
        };
        if hit {
            log::trace!("key event matched '{}'", kb.name());
            engine.invoke(kb.callback());
            return true;
        }
    }
    false
}

/// Invoke every mouse binding whose gesture type intersects `event`.
///
/// Always returns `false`: mouse events are never consumed here, the host
/// continues its default handling regardless of how many bindings fired.
pub(crate) fn dispatch_mouse_event(
    registry: &MouseBindingRegistry,
    event: &MouseEvent,
    engine: &dyn ScriptEngine,
) -> bool {
    for mb in registry.iter() {
        if event.kind.intersects(mb.kind()) {
            log::trace!("mouse event matched '{}'", mb.kind());
            engine.invoke(mb.callback());
        }
    }
    false
}
