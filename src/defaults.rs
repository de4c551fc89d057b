//! Baseline bindings installed at startup.
//!
//! A declarative table of (descriptor, scripting global) pairs fed through
//! the normal bind path. Hosts call [`crate::Bindings::install_default_bindings`]
//! once at boot, before loading user configuration, so user binds can
//! override any of these by name.

use crate::Bindings;
use crate::platform::Keymap;
use crate::scripting::ScriptEngine;

/// Default key gestures and the scripting globals they invoke.
const DEFAULT_KEY_BINDINGS: &[(&str, &str)] = &[
    ("Alt-Left", "prevTab"),
    ("Alt-Right", "nextTab"),
    ("Ctrl-t", "openTab"),
    ("CtrlShift-w", "closeTab"),
    ("Ctrl-Insert", "copy"),
    ("Shift-Insert", "paste"),
];

/// Default mouse gestures and the scripting globals they invoke.
const DEFAULT_MOUSE_BINDINGS: &[(&str, &str)] = &[("DoubleClick", "openTab")];

/// Seed `bindings` with the default tables.
///
/// Globals the scripting environment does not define are logged and
/// skipped; one missing default never blocks the rest.
pub(crate) fn install(bindings: &mut Bindings, keymap: &dyn Keymap, engine: &dyn ScriptEngine) {
    for (descriptor, global) in DEFAULT_KEY_BINDINGS {
        match engine.resolve_global(global) {
            Some(callback) => bindings.bind_key(descriptor, callback, keymap, engine),
            None => log::warn!("no scripting global '{global}' for default binding '{descriptor}'"),
        }
    }
    for (event_name, global) in DEFAULT_MOUSE_BINDINGS {
        match engine.resolve_global(global) {
            Some(callback) => bindings.bind_mouse(event_name, callback, engine),
            None => log::warn!("no scripting global '{global}' for default binding '{event_name}'"),
        }
    }
    bindings.keys().trace();
}
