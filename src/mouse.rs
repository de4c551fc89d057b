//! Mouse gesture types and the name table used when binding them.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Recognized mouse gesture types.
    ///
    /// Kept as a bitmask rather than a plain enum: mouse dispatch fires
    /// every binding whose kinds intersect the incoming event, so a host
    /// may deliver combined kinds and hit several bindings at once.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct MouseEventKind: u8 {
        const BUTTON_PRESS = 1 << 0;
        const DOUBLE_CLICK = 1 << 1;
        const TRIPLE_CLICK = 1 << 2;
    }
}

/// Recognized mouse event name tokens.
pub(crate) const MOUSE_EVENT_TABLE: &[(&str, MouseEventKind)] = &[
    ("ButtonPress", MouseEventKind::BUTTON_PRESS),
    ("DoubleClick", MouseEventKind::DOUBLE_CLICK),
    ("TripleClick", MouseEventKind::TRIPLE_CLICK),
];

/// Resolve a mouse event name to its gesture kind.
pub(crate) fn mouse_event_from_name(name: &str) -> Option<MouseEventKind> {
    MOUSE_EVENT_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, kind)| *kind)
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, kind) in MOUSE_EVENT_TABLE {
            if self.contains(*kind) {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(
            mouse_event_from_name("DoubleClick"),
            Some(MouseEventKind::DOUBLE_CLICK)
        );
        assert_eq!(
            mouse_event_from_name("TripleClick"),
            Some(MouseEventKind::TRIPLE_CLICK)
        );
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(mouse_event_from_name("QuadrupleClick"), None);
        assert_eq!(mouse_event_from_name("doubleclick"), None);
    }

    #[test]
    fn display_renders_name() {
        assert_eq!(MouseEventKind::DOUBLE_CLICK.to_string(), "DoubleClick");
    }
}
