//! Drag state machine for moving keys with the pointer.
//!
//! The surface interprets pointer events through a single pure function,
//! [`transition`], which maps the current [`DragState`] and an incoming
//! [`SurfaceEvent`] to the next state plus a list of [`SurfaceEffect`]s.
//! Applying the effects is left to the owner of the key collection.
//!
//! Events that make no sense in the current state (a move with no drag, a
//! press on a key that is not in the layout) are ignored rather than
//! reported.

use crate::keys::KeyId;
use crate::layout::KeyLayout;
use kurbo::{Point, Vec2};

/// Whether a key is currently being moved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No key is being moved.
    #[default]
    Idle,
    /// `key` follows the pointer, keeping `offset` between its top-left
    /// corner and the pointer.
    Dragging { key: KeyId, offset: Vec2 },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The key being moved, if any.
    pub fn dragged_key(&self) -> Option<KeyId> {
        match self {
            Self::Dragging { key, .. } => Some(*key),
            Self::Idle => None,
        }
    }

    /// Grab offset of the current drag (zero when idle).
    pub fn offset(&self) -> Vec2 {
        match self {
            Self::Dragging { offset, .. } => *offset,
            Self::Idle => Vec2::ZERO,
        }
    }
}

/// Pointer input routed to the layout surface.
///
/// Positions are in host coordinates; the surface origin is subtracted
/// during the transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Primary button pressed on a key widget.
    PointerDown { key: KeyId, position: Point },
    /// Pointer moved over the surface.
    PointerMove { position: Point },
    /// Primary button released over the surface.
    PointerUp,
    /// Pointer left the surface bounds.
    PointerLeave,
    /// A key widget was clicked.
    Click { key: KeyId },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEffect {
    /// Make this key the selected one.
    Select(KeyId),
    /// Store a new surface-local position for a key.
    Reposition { key: KeyId, position: Point },
    /// The host should not start its own drag-image behavior for this press.
    SuppressNativeDrag,
}

/// Result of one state-machine step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub next: DragState,
    pub effects: Vec<SurfaceEffect>,
}

impl Transition {
    fn unchanged(state: &DragState) -> Self {
        Self {
            next: *state,
            effects: Vec::new(),
        }
    }
}

/// Compute the next drag state and its effects.
///
/// `origin` is the surface's top-left corner in the same coordinate space
/// as the event positions.
pub fn transition(
    state: &DragState,
    event: &SurfaceEvent,
    keys: &KeyLayout,
    origin: Point,
) -> Transition {
    match *event {
        SurfaceEvent::PointerDown { key, position } => {
            let Some(target) = keys.get(key) else {
                log::trace!("Ignoring press on unknown key {key}");
                return Transition::unchanged(state);
            };
            let local = position - origin.to_vec2();
            let offset = local - target.position;
            Transition {
                next: DragState::Dragging { key, offset },
                effects: vec![SurfaceEffect::SuppressNativeDrag, SurfaceEffect::Select(key)],
            }
        }
        SurfaceEvent::PointerMove { position } => {
            let DragState::Dragging { key, offset } = *state else {
                return Transition::unchanged(state);
            };
            if !keys.contains(key) {
                log::trace!("Dragged key {key} is no longer in the layout");
                return Transition::unchanged(state);
            }
            let candidate = position - origin.to_vec2() - offset;
            // No upper bound: keys may leave the visible surface.
            let clamped = Point::new(candidate.x.max(0.0), candidate.y.max(0.0));
            Transition {
                next: *state,
                effects: vec![SurfaceEffect::Reposition {
                    key,
                    position: clamped,
                }],
            }
        }
        SurfaceEvent::PointerUp | SurfaceEvent::PointerLeave => Transition {
            next: DragState::Idle,
            effects: Vec::new(),
        },
        SurfaceEvent::Click { key } => {
            if !keys.contains(key) {
                log::trace!("Ignoring click on unknown key {key}");
                return Transition::unchanged(state);
            }
            Transition {
                next: *state,
                effects: vec![SurfaceEffect::Select(key)],
            }
        }
    }
}
