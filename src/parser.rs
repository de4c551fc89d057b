//! Binding descriptor parser.
//!
//! Parses human-readable binding descriptors like "Ctrl-t", "Alt-Left" or
//! "CtrlShift-w" into [`KeyDescriptor`] values. The grammar is
//! `[<modifier-chain>-]<keyname>`: everything before the first `-` is a run
//! of modifier names with no separator, the rest is a key name resolved
//! through the platform [`Keymap`].

use thiserror::Error;

use crate::modifier::{MODIFIER_TABLE, ModifierState};
use crate::platform::{Keymap, Keysym};

/// Why a binding descriptor failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The descriptor string was empty.
    #[error("empty binding descriptor")]
    Empty,

    /// The modifier chain was empty or contained text that is not a run of
    /// recognized modifier names.
    #[error("bad modifier chain '{0}'")]
    BadModifierChain(String),

    /// The key name did not resolve to a keysym on this platform.
    #[error("unknown key name '{0}'")]
    UnknownKey(String),
}

/// A parsed key gesture: required modifiers plus the lowercase-folded
/// keysym. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescriptor {
    /// Modifiers that must all be held for the binding to match.
    pub state: ModifierState,
    /// Case-folded keysym, so letter matching is case-insensitive.
    pub keysym: Keysym,
}

/// Parse a binding descriptor into a [`KeyDescriptor`].
///
/// A descriptor with no `-` is a bare key name with no modifier
/// requirement. A failed modifier chain is a hard error; it never degrades
/// to "no modifier required", which would let a misspelled binding fire on
/// unmodified keys.
pub fn parse_key_binding(
    descriptor: &str,
    keymap: &dyn Keymap,
) -> Result<KeyDescriptor, ParseError> {
    if descriptor.is_empty() {
        return Err(ParseError::Empty);
    }

    let (chain, key_name) = match descriptor.split_once('-') {
        Some((chain, key)) => (Some(chain), key),
        None => (None, descriptor),
    };

    let state = match chain {
        Some(chain) => resolve_modifier_chain(chain)?,
        None => ModifierState::empty(),
    };

    let keysym = keymap
        .keysym_from_name(key_name)
        .ok_or_else(|| ParseError::UnknownKey(key_name.to_string()))?;

    Ok(KeyDescriptor {
        state,
        keysym: keymap.keysym_to_lower(keysym),
    })
}

/// Consume a run of modifier names with no separator ("CtrlShift").
///
/// Repeatedly strips the first matching modifier name off the front of the
/// chain. Any leftover text that matches no modifier rejects the whole
/// chain, as does a chain that consumed nothing.
fn resolve_modifier_chain(chain: &str) -> Result<ModifierState, ParseError> {
    let mut state = ModifierState::empty();
    let mut rest = chain;
    while !rest.is_empty() {
        let matched = MODIFIER_TABLE
            .iter()
            .find(|(name, _)| rest.starts_with(name));
        match matched {
            Some((name, mask)) => {
                state |= *mask;
                rest = &rest[name.len()..];
            }
            None => return Err(ParseError::BadModifierChain(chain.to_string())),
        }
    }
    if state.is_empty() {
        return Err(ParseError::BadModifierChain(chain.to_string()));
    }
    Ok(state)
}
