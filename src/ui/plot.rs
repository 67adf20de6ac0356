use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::charts::ScatterChartSpec;
use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Payload vs outcome scatter (lower chart region)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter described by `spec`, one coloured
/// series per booster version category. An empty spec shows the bare axes.
pub fn payload_scatter(ui: &mut Ui, spec: &ScatterChartSpec, colors: &ColorMap) {
    ui.strong(&spec.title);

    Plot::new("payload_outcome_scatter")
        .legend(Legend::default())
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        // Keep the two outcome rows off the plot edges.
        .include_y(-0.5)
        .include_y(1.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&series.label)
                        .color(colors.color_for(&series.label))
                        .radius(3.0),
                );
            }
        });
}
