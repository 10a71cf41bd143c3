//! Reusable egui widget components for the KeyCanvas layout editor.
//!
//! - **Key**: the draggable key widget
//! - **Colors**: Tailwind color palette
//! - **Layout**: surface frame and help text helpers

pub mod colors;
pub mod key;
pub mod layout;

pub use colors::{GRAY, TailwindColor};
pub use key::{KeyWidget, KeyWidgetResponse, KeyWidgetStyle};
pub use layout::{help_line, surface_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Key corner radius
    pub const KEY_RADIUS: u8 = 6;
    /// Layout surface corner radius (Tailwind `rounded-xl`)
    pub const SURFACE_RADIUS: u8 = 12;
    /// Outer page padding (Tailwind `p-4`)
    pub const PAGE_PADDING: i8 = 16;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    use crate::colors::GRAY;

    /// Page background (gray-50)
    pub const PAGE_BG: Color32 = GRAY.shade(0);
    /// Layout surface background
    pub const SURFACE_BG: Color32 = Color32::WHITE;
    /// Layout surface border (gray-200)
    pub const BORDER: Color32 = GRAY.shade(2);
    /// Help text color (gray-600)
    pub const TEXT_MUTED: Color32 = GRAY.shade(6);
}
