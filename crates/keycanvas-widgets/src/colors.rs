//! Tailwind color palette.
//!
//! Only the hues used by the layout editor are included.

use egui::Color32;

/// A Tailwind color with all shade variants (50-950).
#[derive(Clone, Copy)]
pub struct TailwindColor {
    /// Color name (e.g., "Gray")
    pub name: &'static str,
    /// Shades from 50 to 950 (11 total)
    pub shades: [Color32; 11],
}

impl TailwindColor {
    /// Create a new TailwindColor from RGB tuples.
    pub const fn new(name: &'static str, shades: [(u8, u8, u8); 11]) -> Self {
        Self {
            name,
            shades: [
                Color32::from_rgb(shades[0].0, shades[0].1, shades[0].2),
                Color32::from_rgb(shades[1].0, shades[1].1, shades[1].2),
                Color32::from_rgb(shades[2].0, shades[2].1, shades[2].2),
                Color32::from_rgb(shades[3].0, shades[3].1, shades[3].2),
                Color32::from_rgb(shades[4].0, shades[4].1, shades[4].2),
                Color32::from_rgb(shades[5].0, shades[5].1, shades[5].2),
                Color32::from_rgb(shades[6].0, shades[6].1, shades[6].2),
                Color32::from_rgb(shades[7].0, shades[7].1, shades[7].2),
                Color32::from_rgb(shades[8].0, shades[8].1, shades[8].2),
                Color32::from_rgb(shades[9].0, shades[9].1, shades[9].2),
                Color32::from_rgb(shades[10].0, shades[10].1, shades[10].2),
            ],
        }
    }

    /// Get shade by index (0=50, 1=100, ..., 5=500, ..., 10=950)
    pub const fn shade(&self, index: usize) -> Color32 {
        self.shades[index]
    }
}

pub const GRAY: TailwindColor = TailwindColor::new("Gray", [
    (249, 250, 251), (243, 244, 246), (229, 231, 235), (209, 213, 219),
    (156, 163, 175), (107, 114, 128), (75, 85, 99), (55, 65, 81),
    (31, 41, 55), (17, 24, 39), (3, 7, 18),
]);
