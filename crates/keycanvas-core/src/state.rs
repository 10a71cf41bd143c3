//! Per-key interaction state derived from the surface.

/// The UI state of a key widget.
///
/// Selection and dragging are tracked separately: a click on another key
/// during a drag moves the selection without ending the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyState {
    /// Most recently clicked or pressed key.
    pub selected: bool,
    /// Key is following the pointer.
    pub dragged: bool,
}

impl KeyState {
    /// No interaction.
    pub const NORMAL: Self = Self {
        selected: false,
        dragged: false,
    };
    /// Selected, not moving.
    pub const SELECTED: Self = Self {
        selected: true,
        dragged: false,
    };
    /// Pressed and following the pointer.
    pub const DRAGGED: Self = Self {
        selected: true,
        dragged: true,
    };

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged
    }
}
