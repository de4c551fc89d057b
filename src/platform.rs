//! Platform key-symbol services.
//!
//! The host GUI toolkit owns the real key tables: the keysym name table,
//! case folding, and the keysym to hardware keycode mapping. This crate
//! only reaches them through the [`Keymap`] trait, so the matching engine
//! can run (and be tested) without a display connection.

use std::fmt;

/// Platform-independent identifier for a logical key ("Left", "w", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keysym(pub u32);

/// Platform/device-specific physical key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode(pub u32);

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key-symbol services supplied by the host platform layer.
pub trait Keymap {
    /// Resolve a key name from a binding descriptor to a keysym.
    ///
    /// Returns `None` for names the platform does not know.
    fn keysym_from_name(&self, name: &str) -> Option<Keysym>;

    /// Case-fold a keysym to its lowercase form.
    ///
    /// Keysyms without a case distinction fold to themselves.
    fn keysym_to_lower(&self, keysym: Keysym) -> Keysym;

    /// Map a keysym to the physical key code that produces it, if the
    /// current keyboard has one.
    fn keycode_for_keysym(&self, keysym: Keysym) -> Option<Keycode>;
}

/// Minimal ASCII-letter keymap for unit tests. Keysym values follow the
/// X11 conventions (letters are their codepoints, navigation keys live in
/// the 0xff50 block), keycodes are derived from the folded keysym.
#[cfg(test)]
pub(crate) mod testmap {
    use super::{Keycode, Keymap, Keysym};

    pub(crate) struct TestKeymap;

    impl Keymap for TestKeymap {
        fn keysym_from_name(&self, name: &str) -> Option<Keysym> {
            match name {
                "Left" => Some(Keysym(0xff51)),
                "Up" => Some(Keysym(0xff52)),
                "Right" => Some(Keysym(0xff53)),
                "Down" => Some(Keysym(0xff54)),
                "Insert" => Some(Keysym(0xff63)),
                "space" => Some(Keysym(0x20)),
                _ => {
                    let mut chars = name.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_alphabetic() => Some(Keysym(c as u32)),
                        _ => None,
                    }
                }
            }
        }

        fn keysym_to_lower(&self, keysym: Keysym) -> Keysym {
            match keysym.0 {
                0x41..=0x5a => Keysym(keysym.0 + 0x20),
                _ => keysym,
            }
        }

        fn keycode_for_keysym(&self, keysym: Keysym) -> Option<Keycode> {
            Some(Keycode(self.keysym_to_lower(keysym).0 & 0xff))
        }
    }
}
