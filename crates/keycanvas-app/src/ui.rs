//! UI layout: the layout surface and the help text below it.

use egui::{Color32, Context, Frame, Margin};
use keycanvas_core::LayoutSurface;
use keycanvas_widgets::{help_line, sizing};

use crate::surface_view::{SurfaceConfig, SurfaceView};

/// Usage hints shown under the surface.
pub const HELP_LINES: [&str; 3] = [
    "Cliquez et glissez pour déplacer les touches",
    "Sélectionnez une touche pour la modifier dans le panneau de droite",
    "Utilisez le panneau de droite pour ajuster les propriétés des touches",
];

/// UI state persisted across frames.
#[derive(Debug, Default)]
pub struct UiState {
    pub surface_view: SurfaceView,
    pub surface_config: SurfaceConfig,
}

/// Render the whole UI for one frame.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, surface: &mut LayoutSurface, background: Color32) {
    let page = Frame::new()
        .fill(background)
        .inner_margin(Margin::same(sizing::PAGE_PADDING));

    egui::CentralPanel::default().frame(page).show(ctx, |ui| {
        ui_state
            .surface_view
            .show(ui, surface, &ui_state.surface_config);

        if ui_state.surface_config.show_help {
            ui.add_space(16.0);
            for line in HELP_LINES {
                help_line(ui, line);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ui_keeps_seeded_key() {
        let ctx = Context::default();
        let mut ui_state = UiState::default();
        let mut surface = LayoutSurface::default();

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                render_ui(ctx, &mut ui_state, &mut surface, Color32::WHITE);
            });
        }

        assert_eq!(surface.keys().len(), 1);
        assert!(!surface.drag().is_active());
        let origin = surface.origin();
        assert!(origin.x >= f64::from(sizing::PAGE_PADDING));
        assert!(origin.y >= f64::from(sizing::PAGE_PADDING));
    }
}
