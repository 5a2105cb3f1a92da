//! Ephemeral UI state the snapshot knows nothing about.
//!
//! Cursors index into the current frame's lists and are clamped against it
//! before every paint, so a shrinking list after a snapshot replacement can
//! never leave a cursor dangling.

/// The three standard panels the focus ring cycles through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelFocus {
    Actions,
    Map,
    Inventory,
}

impl PanelFocus {
    pub fn next(self) -> Self {
        match self {
            PanelFocus::Actions => PanelFocus::Map,
            PanelFocus::Map => PanelFocus::Inventory,
            PanelFocus::Inventory => PanelFocus::Actions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PanelFocus::Actions => PanelFocus::Inventory,
            PanelFocus::Map => PanelFocus::Actions,
            PanelFocus::Inventory => PanelFocus::Map,
        }
    }
}

/// Mutable application state tracking focus, cursors, and the in-flight
/// dispatch flag.
#[derive(Clone, Debug)]
pub struct AppState {
    pub focus: PanelFocus,
    pub action_cursor: usize,
    pub map_cursor: usize,
    pub inventory_cursor: usize,

    /// Cursor inside the open overlay's button or track list.
    pub overlay_cursor: usize,

    /// True between queueing an intent and the next session event. While
    /// set, further dispatches are refused locally.
    pub pending: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: PanelFocus::Actions,
            action_cursor: 0,
            map_cursor: 0,
            inventory_cursor: 0,
            overlay_cursor: 0,
            pending: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Move a cursor by `delta` within `0..len`, saturating at both ends.
pub fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    if delta.is_negative() {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta as usize).min(last)
    }
}

/// Pull a cursor back inside a list that may have shrunk.
pub fn clamp(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_cycles_both_ways() {
        let mut focus = PanelFocus::Actions;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, PanelFocus::Actions);
        assert_eq!(PanelFocus::Actions.prev(), PanelFocus::Inventory);
    }

    #[test]
    fn step_saturates_at_both_ends() {
        assert_eq!(step(0, -1, 5), 0);
        assert_eq!(step(4, 1, 5), 4);
        assert_eq!(step(2, 1, 5), 3);
        assert_eq!(step(2, -1, 5), 1);
    }

    #[test]
    fn step_and_clamp_handle_empty_lists() {
        assert_eq!(step(3, 1, 0), 0);
        assert_eq!(clamp(3, 0), 0);
        assert_eq!(clamp(3, 2), 1);
        assert_eq!(clamp(1, 4), 1);
    }
}
