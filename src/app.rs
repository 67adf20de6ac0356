use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, pie, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchboardApp {
    pub state: AppState,
}

impl LaunchboardApp {
    pub fn new(dataset: LaunchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for LaunchboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: site dropdown + payload range ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let pie_height = ui.available_height() * 0.45;
            egui::TopBottomPanel::top("outcome_pie_region")
                .resizable(true)
                .default_height(pie_height)
                .show_inside(ui, |ui| {
                    pie::outcome_pie(ui, &self.state.pie);
                });
            egui::CentralPanel::default().show_inside(ui, |ui| {
                plot::payload_scatter(ui, &self.state.scatter, &self.state.booster_colors);
            });
        });
    }
}
