use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{
    Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, epaint,
};

use crate::charts::PieChartSpec;
use crate::color::generate_palette;

/// Width reserved for the legend to the right of the pie.
const LEGEND_WIDTH: f32 = 200.0;

// ---------------------------------------------------------------------------
// Outcome pie (upper chart region)
// ---------------------------------------------------------------------------

/// Render the outcome distribution pie described by `spec`.
///
/// A spec with zero slices paints an explicit empty-state message instead of
/// an empty circle.
pub fn outcome_pie(ui: &mut Ui, spec: &PieChartSpec) {
    ui.strong(&spec.title);

    let desired = Vec2::new(ui.available_width(), ui.available_height());
    let (response, painter) = ui.allocate_painter(desired, Sense::hover());
    let rect = response.rect;
    let text_color = ui.visuals().text_color();

    let total = spec.total();
    if spec.slices.is_empty() || total <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No launches match the current filters",
            FontId::proportional(14.0),
            text_color,
        );
        return;
    }

    // Pie on the left, legend on the right.
    let pie_rect = Rect::from_min_max(
        rect.min,
        Pos2::new((rect.max.x - LEGEND_WIDTH).max(rect.min.x), rect.max.y),
    );
    let center = pie_rect.center();
    let radius = (pie_rect.width().min(pie_rect.height()) * 0.45).max(10.0);

    let colors = generate_palette(spec.slices.len());

    // Wedges, starting at twelve o'clock.
    let mut angle = -FRAC_PI_2;
    let mut boundaries = Vec::with_capacity(spec.slices.len());
    for (slice, color) in spec.slices.iter().zip(colors.iter()) {
        let sweep = (slice.value / total) as f32 * TAU;
        if sweep <= 0.0 {
            continue;
        }
        boundaries.push(angle);
        fill_wedge(&painter, center, radius, angle, angle + sweep, *color);
        angle += sweep;
    }

    // Radial separators between slices (only meaningful with 2+ wedges).
    if boundaries.len() > 1 {
        for a in boundaries {
            painter.line_segment(
                [center, center + radius * Vec2::new(a.cos(), a.sin())],
                Stroke::new(1.0, Color32::WHITE),
            );
        }
    }

    // Legend.
    let mut cursor = Pos2::new(pie_rect.max.x + 8.0, rect.min.y + 8.0);
    for (slice, color) in spec.slices.iter().zip(colors.iter()) {
        let swatch = Rect::from_min_size(cursor, Vec2::splat(12.0));
        painter.rect_filled(swatch, 2.0, *color);
        let pct = slice.value / total * 100.0;
        painter.text(
            Pos2::new(swatch.max.x + 6.0, swatch.center().y),
            Align2::LEFT_CENTER,
            format!("{} — {:.0} ({pct:.1}%)", slice.label, slice.value),
            FontId::proportional(12.0),
            text_color,
        );
        cursor.y += 18.0;
    }
}

/// Fill a wedge from `start` to `end` radians. Arcs longer than a quarter
/// turn are split so every emitted polygon stays convex.
fn fill_wedge(
    painter: &eframe::egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let mut a0 = start;
    while a0 < end - 1e-4 {
        let a1 = (a0 + FRAC_PI_2).min(end);
        // ~3 degrees per segment keeps the rim smooth.
        let steps = (((a1 - a0) / 0.05).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let t = a0 + (a1 - a0) * i as f32 / steps as f32;
            points.push(center + radius * Vec2::new(t.cos(), t.sin()));
        }
        painter.add(Shape::Path(epaint::PathShape::convex_polygon(
            points,
            color,
            Stroke::NONE,
        )));
        a0 = a1;
    }
}
