use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps a fixed set of category labels (booster versions, sites) to distinct
/// colours. Built once from the loaded dataset so colours stay stable while
/// the filters change.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from a sorted set of category labels.
    pub fn new(labels: &BTreeSet<String>) -> Self {
        let palette = generate_palette(labels.len());
        let mapping: BTreeMap<String, Color32> = labels
            .iter()
            .zip(palette.into_iter())
            .map(|(label, c): (&String, Color32)| (label.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_colors() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        let unique: std::collections::BTreeSet<_> =
            colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn unknown_label_gets_the_default_color() {
        let labels: BTreeSet<String> = ["v1.0", "v1.1"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&labels);
        assert_ne!(cm.color_for("v1.0"), cm.color_for("v1.1"));
        assert_eq!(cm.color_for("B5"), Color32::GRAY);
    }
}
