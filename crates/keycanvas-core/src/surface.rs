//! The layout surface: owner of the keys and of the drag/selection state.

use crate::drag::{DragState, SurfaceEffect, SurfaceEvent, transition};
use crate::keys::{Key, KeyId};
use crate::layout::KeyLayout;
use crate::state::KeyState;
use crate::style::{KeyStyle, key_style};
use kurbo::Point;

/// Routes pointer events into the drag state machine and applies the
/// resulting effects to the key collection.
///
/// Widgets only ever see keys and styles through shared references; every
/// mutation goes through [`LayoutSurface::handle`].
#[derive(Debug, Clone)]
pub struct LayoutSurface {
    keys: KeyLayout,
    drag: DragState,
    selected: Option<KeyId>,
    /// Top-left corner of the surface in host coordinates.
    origin: Point,
}

impl Default for LayoutSurface {
    fn default() -> Self {
        Self::new(KeyLayout::seeded())
    }
}

impl LayoutSurface {
    /// Create a surface over an existing layout.
    pub fn new(keys: KeyLayout) -> Self {
        Self {
            keys,
            drag: DragState::Idle,
            selected: None,
            origin: Point::ZERO,
        }
    }

    /// Update the surface origin (host coordinates of its top-left corner).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn keys(&self) -> &KeyLayout {
        &self.keys
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// The most recently clicked or pressed key.
    pub fn selected(&self) -> Option<KeyId> {
        self.selected
    }

    /// Feed one event through the state machine.
    ///
    /// Returns the effects that were applied.
    pub fn handle(&mut self, event: SurfaceEvent) -> Vec<SurfaceEffect> {
        let step = transition(&self.drag, &event, &self.keys, self.origin);

        match (self.drag.dragged_key(), step.next.dragged_key()) {
            (None, Some(key)) => log::debug!("Drag started on key {key}"),
            (Some(old), Some(new)) if old != new => {
                log::debug!("Drag moved from key {old} to key {new}")
            }
            (Some(key), None) => log::debug!("Drag ended on key {key}"),
            _ => {}
        }
        self.drag = step.next;

        for effect in &step.effects {
            match *effect {
                SurfaceEffect::Select(key) => {
                    if self.selected != Some(key) {
                        log::debug!("Selected key {key}");
                        self.selected = Some(key);
                    }
                }
                SurfaceEffect::Reposition { key, position } => {
                    if let Some(target) = self.keys.get_mut(key) {
                        log::trace!("Key {key} moved to ({:.1}, {:.1})", position.x, position.y);
                        target.position = position;
                    }
                }
                SurfaceEffect::SuppressNativeDrag => {}
            }
        }

        step.effects
    }

    pub fn pointer_down(&mut self, key: KeyId, position: Point) -> Vec<SurfaceEffect> {
        self.handle(SurfaceEvent::PointerDown { key, position })
    }

    pub fn pointer_move(&mut self, position: Point) -> Vec<SurfaceEffect> {
        self.handle(SurfaceEvent::PointerMove { position })
    }

    pub fn pointer_up(&mut self) -> Vec<SurfaceEffect> {
        self.handle(SurfaceEvent::PointerUp)
    }

    pub fn pointer_leave(&mut self) -> Vec<SurfaceEffect> {
        self.handle(SurfaceEvent::PointerLeave)
    }

    pub fn click(&mut self, key: KeyId) -> Vec<SurfaceEffect> {
        self.handle(SurfaceEvent::Click { key })
    }

    /// Interaction state of one key.
    pub fn key_state(&self, id: KeyId) -> KeyState {
        KeyState {
            selected: self.selected == Some(id),
            dragged: self.drag.dragged_key() == Some(id),
        }
    }

    /// Every key with its resolved style, bottom to top.
    ///
    /// Ordered by z-index; ties keep insertion order.
    pub fn styled_keys(&self) -> Vec<(&Key, KeyStyle)> {
        let mut styled: Vec<_> = self
            .keys
            .iter()
            .map(|key| (key, key_style(key, self.key_state(key.id()))))
            .collect();
        styled.sort_by_key(|(_, style)| style.z_index);
        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn seeded() -> (LayoutSurface, KeyId) {
        let surface = LayoutSurface::default();
        let id = surface.keys().iter().next().unwrap().id();
        (surface, id)
    }

    fn two_keys() -> (LayoutSurface, KeyId, KeyId) {
        let mut layout = KeyLayout::new();
        let a = Key::new("A", Point::new(50.0, 50.0), 40.0, 40.0);
        let b = Key::new("B", Point::new(200.0, 50.0), 40.0, 40.0);
        let (a_id, b_id) = (a.id(), b.id());
        layout.insert(a).unwrap();
        layout.insert(b).unwrap();
        (LayoutSurface::new(layout), a_id, b_id)
    }

    fn position(surface: &LayoutSurface, id: KeyId) -> Point {
        surface.keys().get(id).unwrap().position
    }

    #[test]
    fn test_drag_scenario() {
        let (mut surface, a) = seeded();

        surface.pointer_down(a, Point::new(60.0, 60.0));
        assert_eq!(surface.drag().offset(), Vec2::new(10.0, 10.0));
        assert_eq!(surface.selected(), Some(a));

        surface.pointer_move(Point::new(100.0, 120.0));
        assert_eq!(position(&surface, a), Point::new(90.0, 110.0));

        surface.pointer_up();
        assert!(!surface.drag().is_active());
        assert_eq!(surface.drag().dragged_key(), None);
        assert_eq!(position(&surface, a), Point::new(90.0, 110.0));
        assert_eq!(surface.selected(), Some(a));
    }

    #[test]
    fn test_final_position_uses_last_move() {
        let (mut surface, a) = seeded();
        surface.set_origin(Point::new(16.0, 24.0));

        let press = Point::new(16.0 + 65.0, 24.0 + 58.0);
        surface.pointer_down(a, press);
        let offset = surface.drag().offset();
        assert_eq!(offset, Vec2::new(15.0, 8.0));

        let moves = [
            Point::new(120.0, 80.0),
            Point::new(300.0, 40.0),
            Point::new(-50.0, 400.0),
            Point::new(410.0, 230.0),
        ];
        for p in moves {
            surface.pointer_move(p);
        }
        surface.pointer_up();

        let last = moves[moves.len() - 1];
        let expected = last - surface.origin().to_vec2() - offset;
        assert_eq!(
            position(&surface, a),
            Point::new(expected.x.max(0.0), expected.y.max(0.0))
        );
    }

    #[test]
    fn test_clamp_to_zero() {
        let (mut surface, a) = seeded();
        surface.pointer_down(a, Point::new(60.0, 50.0));
        assert_eq!(surface.drag().offset(), Vec2::new(10.0, 0.0));

        surface.pointer_move(Point::new(-10.0, 0.0));
        assert_eq!(position(&surface, a), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_no_upper_clamp() {
        let (mut surface, a) = seeded();
        surface.pointer_down(a, Point::new(50.0, 50.0));
        surface.pointer_move(Point::new(5000.0, 9000.0));
        assert_eq!(position(&surface, a), Point::new(5000.0, 9000.0));
    }

    #[test]
    fn test_dragging_one_key_leaves_others() {
        let (mut surface, a, b) = two_keys();
        let b_before = position(&surface, b);

        surface.pointer_down(a, Point::new(55.0, 55.0));
        for step in 0..10 {
            surface.pointer_move(Point::new(60.0 + step as f64 * 20.0, 70.0));
        }
        surface.pointer_up();

        assert_eq!(position(&surface, b), b_before);
        assert_ne!(position(&surface, a), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_move_after_release_is_noop() {
        let (mut surface, a) = seeded();
        surface.pointer_down(a, Point::new(60.0, 60.0));
        surface.pointer_move(Point::new(80.0, 80.0));
        surface.pointer_up();
        let settled = position(&surface, a);

        let effects = surface.pointer_move(Point::new(300.0, 300.0));
        assert!(effects.is_empty());
        assert_eq!(position(&surface, a), settled);
    }

    #[test]
    fn test_leave_aborts_drag() {
        let (mut surface, a) = seeded();
        surface.pointer_down(a, Point::new(60.0, 60.0));
        surface.pointer_leave();

        assert!(!surface.drag().is_active());
        assert_eq!(surface.drag().offset(), Vec2::ZERO);

        surface.pointer_move(Point::new(70.0, 70.0));
        assert_eq!(position(&surface, a), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let (mut surface, a, b) = two_keys();

        surface.click(a);
        let once = (surface.selected(), *surface.drag());
        surface.click(a);
        assert_eq!((surface.selected(), *surface.drag()), once);

        surface.pointer_down(b, Point::new(210.0, 60.0));
        surface.pointer_up();
        surface.pointer_down(b, Point::new(210.0, 60.0));
        surface.pointer_up();
        assert_eq!(surface.selected(), Some(b));
    }

    #[test]
    fn test_click_does_not_start_drag() {
        let (mut surface, a) = seeded();
        surface.click(a);
        assert_eq!(surface.selected(), Some(a));
        assert!(!surface.drag().is_active());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let (mut surface, _) = seeded();
        let stranger = Key::new("X", Point::ZERO, 40.0, 40.0).id();

        assert!(surface.pointer_down(stranger, Point::new(1.0, 1.0)).is_empty());
        assert!(surface.click(stranger).is_empty());
        assert_eq!(surface.selected(), None);
        assert!(!surface.drag().is_active());
    }

    #[test]
    fn test_key_state() {
        let (mut surface, a, b) = two_keys();
        assert_eq!(surface.key_state(a), KeyState::NORMAL);

        surface.pointer_down(a, Point::new(60.0, 60.0));
        assert_eq!(surface.key_state(a), KeyState::DRAGGED);
        assert_eq!(surface.key_state(b), KeyState::NORMAL);

        surface.click(b);
        assert_eq!(
            surface.key_state(a),
            KeyState {
                selected: false,
                dragged: true
            }
        );
        assert_eq!(surface.key_state(b), KeyState::SELECTED);

        surface.pointer_up();
        assert_eq!(surface.key_state(a), KeyState::NORMAL);
    }

    #[test]
    fn test_styled_keys_stacking() {
        let (mut surface, a, b) = two_keys();

        let order: Vec<_> = surface.styled_keys().iter().map(|(k, _)| k.id()).collect();
        assert_eq!(order, vec![a, b]);

        surface.click(a);
        let order: Vec<_> = surface.styled_keys().iter().map(|(k, _)| k.id()).collect();
        assert_eq!(order, vec![b, a]);

        surface.pointer_down(b, Point::new(210.0, 60.0));
        surface.click(a);
        let styled = surface.styled_keys();
        let order: Vec<_> = styled.iter().map(|(k, _)| k.id()).collect();
        assert_eq!(order, vec![a, b]);
        assert_eq!(styled[1].1.z_index, crate::style::Z_DRAGGED);
    }
}
