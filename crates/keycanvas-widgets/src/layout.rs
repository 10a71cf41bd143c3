//! Layout helpers: surface frame, help text.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Ui};

use crate::{sizing, theme};

/// Frame for the layout surface: white, rounded, bordered, with a soft shadow.
pub fn surface_frame() -> Frame {
    Frame::new()
        .fill(theme::SURFACE_BG)
        .corner_radius(CornerRadius::same(sizing::SURFACE_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 15,
            offset: [0, 4],
            color: Color32::from_black_alpha(20),
        })
        .inner_margin(Margin::ZERO)
}

/// Draw one bullet line of help text (small, muted).
pub fn help_line(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(format!("• {text}"))
            .size(14.0)
            .color(theme::TEXT_MUTED),
    );
}
