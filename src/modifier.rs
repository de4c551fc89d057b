//! Modifier key bitmask and the name table the binding grammar draws from.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of modifier keys, either required by a binding or active on an
    /// incoming event.
    ///
    /// `ModifierState::empty()` means "no modifiers required". A modifier
    /// chain that fails to resolve is a parse error, never an empty state —
    /// see [`crate::parser::ParseError`].
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ModifierState: u8 {
        const ALT = 1 << 0;
        const CTRL = 1 << 1;
        const SHIFT = 1 << 2;
        const META = 1 << 3;
        const SUPER = 1 << 4;
        const HYPER = 1 << 5;
    }
}

/// Recognized modifier name tokens, in the order they are tried when
/// consuming a modifier chain such as "CtrlShift".
pub(crate) const MODIFIER_TABLE: &[(&str, ModifierState)] = &[
    ("Alt", ModifierState::ALT),
    ("Ctrl", ModifierState::CTRL),
    ("Shift", ModifierState::SHIFT),
    ("Meta", ModifierState::META),
    ("Super", ModifierState::SUPER),
    ("Hyper", ModifierState::HYPER),
];

impl fmt::Display for ModifierState {
    /// Renders the concatenated token form used in binding descriptors,
    /// e.g. `CTRL | SHIFT` displays as "CtrlShift". The empty state renders
    /// as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, mask) in MODIFIER_TABLE {
            if self.contains(*mask) {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}
