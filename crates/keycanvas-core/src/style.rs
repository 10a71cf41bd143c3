//! Visual style computation for key widgets.
//!
//! Style is a pure function of a key and its [`KeyState`]. Colors come from
//! a fixed per-category palette built on Tailwind shades.

use crate::keys::{Key, KeyCategory};
use crate::state::KeyState;
use kurbo::Rect;
use peniko::Color;
use std::time::Duration;

/// Stacking order of a key being dragged (above everything).
pub const Z_DRAGGED: u16 = 1000;
/// Stacking order of the selected key.
pub const Z_SELECTED: u16 = 100;
/// Stacking order of every other key.
pub const Z_NORMAL: u16 = 1;

/// Corner radius in pixels.
pub const CORNER_RADIUS: f64 = 6.0;
/// Border width in pixels.
pub const BORDER_WIDTH: f64 = 2.0;

/// Keys wider than this get the small label font.
pub const WIDE_KEY_THRESHOLD: f64 = 60.0;
/// Label font size for regular keys.
pub const FONT_SIZE: f32 = 14.0;
/// Label font size for wide keys.
pub const WIDE_FONT_SIZE: f32 = 12.0;

/// Duration of the eased position transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Colors for one key category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryPalette {
    pub background: Color,
    pub border: Color,
    /// Border used while the key is selected.
    pub selected_border: Color,
    pub text: Color,
}

impl CategoryPalette {
    fn new(background: [u8; 3], border: [u8; 3], selected_border: [u8; 3], text: [u8; 3]) -> Self {
        let rgb = |[r, g, b]: [u8; 3]| Color::from_rgba8(r, g, b, 255);
        Self {
            background: rgb(background),
            border: rgb(border),
            selected_border: rgb(selected_border),
            text: rgb(text),
        }
    }
}

impl KeyCategory {
    /// The palette for this category.
    pub fn palette(self) -> CategoryPalette {
        match self {
            // slate-50, slate-200, blue-500, slate-800
            Self::Letter => CategoryPalette::new(
                [248, 250, 252],
                [226, 232, 240],
                [59, 130, 246],
                [30, 41, 59],
            ),
            // amber-100, amber-400, amber-500, amber-800
            Self::Modifier => CategoryPalette::new(
                [254, 243, 199],
                [251, 191, 36],
                [245, 158, 11],
                [146, 64, 14],
            ),
            // emerald-50, emerald-300, emerald-500, emerald-700
            Self::Space => CategoryPalette::new(
                [236, 253, 245],
                [110, 231, 183],
                [16, 185, 129],
                [4, 120, 87],
            ),
            // pink-100, pink-300, pink-500, pink-700
            Self::Enter => CategoryPalette::new(
                [252, 231, 243],
                [249, 168, 212],
                [236, 72, 153],
                [190, 24, 93],
            ),
            // indigo-100, indigo-300, indigo-500, indigo-700
            Self::Special => CategoryPalette::new(
                [224, 231, 255],
                [165, 180, 252],
                [99, 102, 241],
                [67, 56, 202],
            ),
        }
    }
}

/// How the drawn position follows the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionTransition {
    /// Draw at the stored position immediately.
    None,
    /// Ease toward the stored position over `duration`.
    Ease { duration: Duration },
}

/// Resolved appearance of one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyStyle {
    /// Absolute box in surface-local coordinates.
    pub rect: Rect,
    pub z_index: u16,
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub border_width: f64,
    pub corner_radius: f64,
    pub font_size: f32,
    pub bold: bool,
    pub transition: PositionTransition,
}

/// Compute the style of a key.
pub fn key_style(key: &Key, state: KeyState) -> KeyStyle {
    let palette = key.category.palette();

    let z_index = if state.is_dragged() {
        Z_DRAGGED
    } else if state.is_selected() {
        Z_SELECTED
    } else {
        Z_NORMAL
    };

    let border = if state.is_selected() {
        palette.selected_border
    } else {
        palette.border
    };

    let font_size = if key.width > WIDE_KEY_THRESHOLD {
        WIDE_FONT_SIZE
    } else {
        FONT_SIZE
    };

    // Easing while dragging makes the key lag behind the pointer.
    let transition = if state.is_dragged() {
        PositionTransition::None
    } else {
        PositionTransition::Ease {
            duration: TRANSITION_DURATION,
        }
    };

    KeyStyle {
        rect: key.bounds(),
        z_index,
        background: palette.background,
        border,
        text: palette.text,
        border_width: BORDER_WIDTH,
        corner_radius: CORNER_RADIUS,
        font_size,
        bold: true,
        transition,
    }
}
