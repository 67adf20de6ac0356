use eframe::egui::{self, RichText, Slider, Ui};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

/// Fixed bounds of the payload range control, in kg. The initial values come
/// from the dataset's observed bounds instead.
const PAYLOAD_SLIDER_MIN: f64 = 0.0;
const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range slider.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let sites = state.dataset.sites.clone();
    let current = state.query.site.clone();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::AllSites, "All Sites")
                .clicked()
            {
                state.set_site(SiteSelection::AllSites);
            }
            for site in &sites {
                let selection = SiteSelection::Site(site.clone());
                if ui.selectable_label(current == selection, site).clicked() {
                    state.set_site(selection);
                }
            }
        });
    ui.separator();

    // ---- Payload range slider ----
    ui.strong("Payload range (kg)");
    let (mut low, mut high) = state.query.payload_range;
    ui.add(
        Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(1.0)
            .text("min"),
    );
    ui.add(
        Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(1.0)
            .text("max"),
    );
    // Keep the range well-formed while dragging either end.
    low = low.min(high);
    high = high.max(low);
    state.set_payload_range(low, high);

    ui.separator();
    ui.label(format!(
        "{} of {} launches match",
        state.visible_indices.len(),
        state.dataset.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with the dashboard title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Launch Records Dashboard").strong().size(18.0));

        ui.separator();

        ui.label(format!(
            "{} launches across {} sites, {} matching current filters",
            state.dataset.len(),
            state.dataset.sites.len(),
            state.visible_indices.len()
        ));
    });
}
