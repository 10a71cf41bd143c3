//! The key widget: one labelled box on the layout surface.
//!
//! The widget holds no state. It paints the label centered in its box and
//! reports presses and clicks back to the caller, which owns all movement.

use std::hash::Hash;

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Id, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, Ui, vec2,
};

use crate::sizing;

/// Resolved appearance of a key widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyWidgetStyle {
    pub fill: Color32,
    pub border: Color32,
    pub text: Color32,
    pub border_width: f32,
    pub corner_radius: u8,
    pub font_size: f32,
    /// Paint the label with a faux-bold second pass.
    pub bold: bool,
}

impl Default for KeyWidgetStyle {
    fn default() -> Self {
        Self {
            fill: Color32::WHITE,
            border: Color32::from_gray(220),
            text: Color32::from_gray(30),
            border_width: 2.0,
            corner_radius: sizing::KEY_RADIUS,
            font_size: 14.0,
            bold: true,
        }
    }
}

/// What happened to a key widget this frame.
pub struct KeyWidgetResponse {
    /// Where the primary button went down on the widget, if it did this frame.
    pub pressed_at: Option<Pos2>,
    /// Whether the widget was clicked.
    pub clicked: bool,
    /// The underlying egui Response
    pub response: Response,
}

/// A draggable key box.
pub struct KeyWidget<'a> {
    id: Id,
    label: &'a str,
    rect: Rect,
    style: KeyWidgetStyle,
}

impl<'a> KeyWidget<'a> {
    /// Create a key widget drawn at `rect` (screen coordinates).
    pub fn new(id_salt: impl Hash, label: &'a str, rect: Rect) -> Self {
        Self {
            id: Id::new(("key_widget", id_salt)),
            label,
            rect,
            style: KeyWidgetStyle::default(),
        }
    }

    /// Set the widget style.
    pub fn style(mut self, style: KeyWidgetStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint the widget and report presses and clicks.
    pub fn show(self, ui: &mut Ui) -> KeyWidgetResponse {
        let response = ui.interact(self.rect, self.id, Sense::click_and_drag());

        if ui.is_rect_visible(self.rect) {
            let painter = ui.painter();
            painter.rect(
                self.rect,
                CornerRadius::same(self.style.corner_radius),
                self.style.fill,
                Stroke::new(self.style.border_width, self.style.border),
                StrokeKind::Inside,
            );

            let font_id = FontId::proportional(self.style.font_size);
            let center = self.rect.center();
            if self.style.bold {
                painter.text(
                    center + vec2(0.5, 0.0),
                    Align2::CENTER_CENTER,
                    self.label,
                    font_id.clone(),
                    self.style.text,
                );
            }
            painter.text(
                center,
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                self.style.text,
            );
        }

        let pressed_at = if response.is_pointer_button_down_on()
            && ui.input(|i| i.pointer.primary_pressed())
        {
            ui.input(|i| i.pointer.press_origin())
        } else {
            None
        };
        let clicked = response.clicked();

        KeyWidgetResponse {
            pressed_at,
            clicked,
            response: response.on_hover_cursor(CursorIcon::Move),
        }
    }
}
