//! KeyCanvas Core Library
//!
//! Platform-agnostic data structures and logic for arranging keyboard keys
//! on a layout surface: the key collection, the drag state machine and
//! style computation.

pub mod drag;
pub mod keys;
pub mod layout;
pub mod state;
pub mod style;
pub mod surface;

pub use drag::{DragState, SurfaceEffect, SurfaceEvent, Transition, transition};
pub use keys::{Key, KeyCategory, KeyId};
pub use layout::{KeyLayout, LayoutError};
pub use state::KeyState;
pub use style::{CategoryPalette, KeyStyle, PositionTransition, key_style};
pub use surface::LayoutSurface;
