//! Layout surface view.
//!
//! Paints the keys of a [`LayoutSurface`] with [`KeyWidget`]s and turns
//! egui pointer input into [`SurfaceEvent`]s for the drag state machine.

use egui::{Color32, CursorIcon, Pos2, Rect, Sense, Ui, UiBuilder, vec2};
use keycanvas_core::{KeyId, KeyStyle, LayoutSurface, PositionTransition, SurfaceEvent};
use keycanvas_widgets::{KeyWidget, KeyWidgetStyle, surface_frame};
use kurbo::Point;

/// Layout surface settings.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Surface height in points. The width fills the available space.
    pub height: f32,
    /// Show the help lines below the surface.
    pub show_help: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            height: 500.0,
            show_help: true,
        }
    }
}

/// Per-frame glue between egui and the layout surface.
#[derive(Debug, Default)]
pub struct SurfaceView {
    /// Whether the pointer was over the surface last frame.
    pointer_inside: bool,
    /// Pointer position seen last frame.
    last_hover: Option<Pos2>,
}

impl SurfaceView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the surface and feed this frame's pointer events into it.
    pub fn show(&mut self, ui: &mut Ui, surface: &mut LayoutSurface, config: &SurfaceConfig) {
        surface_frame().show(ui, |ui| {
            let (rect, _) =
                ui.allocate_exact_size(vec2(ui.available_width(), config.height), Sense::hover());
            surface.set_origin(to_point(rect.min));

            let mut events = paint_keys(ui, rect, surface);
            events.extend(self.pointer_events(ui, rect));

            for event in events {
                surface.handle(event);
            }

            if surface.drag().is_active() {
                ui.ctx().set_cursor_icon(CursorIcon::Move);
            }
        });
    }

    /// Surface-level pointer events: moves, releases and leaving.
    fn pointer_events(&mut self, ui: &Ui, rect: Rect) -> Vec<SurfaceEvent> {
        let (hover, released) = ui.input(|i| (i.pointer.hover_pos(), i.pointer.primary_released()));
        let inside = hover.is_some_and(|pos| rect.contains(pos));
        let moving = hover.is_some() && hover != self.last_hover;

        let mut events = Vec::new();
        match hover {
            Some(pos) if inside => {
                if moving {
                    events.push(SurfaceEvent::PointerMove {
                        position: to_point(pos),
                    });
                }
                if released {
                    events.push(SurfaceEvent::PointerUp);
                }
            }
            _ if self.pointer_inside => events.push(SurfaceEvent::PointerLeave),
            _ => {}
        }

        self.pointer_inside = inside;
        self.last_hover = hover;
        events
    }
}

/// Paint every key bottom to top and collect widget presses and clicks.
fn paint_keys(ui: &mut Ui, rect: Rect, surface: &LayoutSurface) -> Vec<SurfaceEvent> {
    let mut canvas = ui.new_child(UiBuilder::new().max_rect(rect));
    canvas.set_clip_rect(rect.intersect(ui.clip_rect()));

    let mut events = Vec::new();
    for (key, style) in surface.styled_keys() {
        let id = key.id();
        let local = drawn_position(ui.ctx(), id, &style);
        let size = vec2(style.rect.width() as f32, style.rect.height() as f32);
        let screen_rect = Rect::from_min_size(rect.min + local.to_vec2(), size);

        let widget = KeyWidget::new(id, &key.label, screen_rect)
            .style(widget_style(&style))
            .show(&mut canvas);

        if let Some(pos) = widget.pressed_at {
            events.push(SurfaceEvent::PointerDown {
                key: id,
                position: to_point(pos),
            });
        }
        if widget.clicked {
            events.push(SurfaceEvent::Click { key: id });
        }
    }
    events
}

/// Surface-local position to draw a key at, eased unless the style says not to.
fn drawn_position(ctx: &egui::Context, id: KeyId, style: &KeyStyle) -> Pos2 {
    let target = Pos2::new(style.rect.x0 as f32, style.rect.y0 as f32);
    let duration = match style.transition {
        PositionTransition::None => 0.0,
        PositionTransition::Ease { duration } => duration.as_secs_f32(),
    };

    // Keep the animation state in step with the stored position even when
    // drawing without easing, so the next eased move starts from here.
    let base = egui::Id::new(("key_position", id));
    let x = ctx.animate_value_with_time(base.with("x"), target.x, duration);
    let y = ctx.animate_value_with_time(base.with("y"), target.y, duration);

    match style.transition {
        PositionTransition::None => target,
        PositionTransition::Ease { .. } => Pos2::new(x, y),
    }
}

fn widget_style(style: &KeyStyle) -> KeyWidgetStyle {
    KeyWidgetStyle {
        fill: color32(style.background),
        border: color32(style.border),
        text: color32(style.text),
        border_width: style.border_width as f32,
        corner_radius: style.corner_radius.round() as u8,
        font_size: style.font_size,
        bold: style.bold,
    }
}

/// Convert a palette color to egui.
pub fn color32(color: peniko::Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, PointerButton, RawInput};
    use keycanvas_core::KeyCategory;

    struct Harness {
        ctx: egui::Context,
        view: SurfaceView,
        surface: LayoutSurface,
        config: SurfaceConfig,
    }

    impl Harness {
        fn new() -> Self {
            let mut harness = Self {
                ctx: egui::Context::default(),
                view: SurfaceView::new(),
                surface: LayoutSurface::default(),
                config: SurfaceConfig::default(),
            };
            // Lay out once so widget rects exist for hit-testing.
            harness.frame(Vec::new());
            harness
        }

        fn frame(&mut self, events: Vec<Event>) {
            let input = RawInput {
                events,
                ..Default::default()
            };
            let Self {
                ctx,
                view,
                surface,
                config,
            } = self;
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    view.show(ui, surface, config);
                });
            });
        }

        /// Host position of a surface-local point.
        fn at(&self, x: f64, y: f64) -> Pos2 {
            let origin = self.surface.origin();
            Pos2::new((origin.x + x) as f32, (origin.y + y) as f32)
        }

        fn key_id(&self) -> KeyId {
            self.surface.keys().iter().next().unwrap().id()
        }

        fn key_position(&self) -> Point {
            self.surface.keys().iter().next().unwrap().position
        }

        fn press(&mut self, pos: Pos2, pressed: bool) {
            self.frame(vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Default::default(),
            }]);
        }
    }

    #[test]
    fn test_color_conversion() {
        let palette = KeyCategory::Letter.palette();
        assert_eq!(color32(palette.selected_border), Color32::from_rgb(59, 130, 246));
        assert_eq!(color32(palette.text), Color32::from_rgb(30, 41, 59));
    }

    #[test]
    fn test_pointer_drag_moves_key() {
        let mut h = Harness::new();
        let id = h.key_id();

        let grab = h.at(60.0, 60.0);
        h.frame(vec![Event::PointerMoved(grab)]);
        h.press(grab, true);
        assert_eq!(h.surface.drag().dragged_key(), Some(id));
        assert_eq!(h.surface.selected(), Some(id));

        let target = h.at(100.0, 120.0);
        h.frame(vec![Event::PointerMoved(target)]);
        assert_eq!(h.key_position(), Point::new(90.0, 110.0));

        h.press(target, false);
        assert!(!h.surface.drag().is_active());
        assert_eq!(h.key_position(), Point::new(90.0, 110.0));
    }

    #[test]
    fn test_pointer_leaving_window_ends_drag() {
        let mut h = Harness::new();

        let grab = h.at(60.0, 60.0);
        h.frame(vec![Event::PointerMoved(grab)]);
        h.press(grab, true);
        assert!(h.surface.drag().is_active());

        h.frame(vec![Event::PointerGone]);
        assert!(!h.surface.drag().is_active());

        h.frame(vec![Event::PointerMoved(h.at(200.0, 200.0))]);
        assert_eq!(h.key_position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_press_on_empty_surface_does_nothing() {
        let mut h = Harness::new();

        let empty = h.at(300.0, 300.0);
        h.frame(vec![Event::PointerMoved(empty)]);
        h.press(empty, true);

        assert!(!h.surface.drag().is_active());
        assert_eq!(h.surface.selected(), None);
    }
}
