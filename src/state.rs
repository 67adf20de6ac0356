use crate::charts::{self, PieChartSpec, ScatterChartSpec};
use crate::color::ColorMap;
use crate::data::filter::{FilterQuery, SiteSelection, filter_indices};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `dataset` is the immutable context built once at startup; everything else
/// is the current control values plus results derived from them. Any control
/// change goes through [`AppState::recompute`], which re-runs the pure
/// filter → chart-builder pipeline on the dataset snapshot.
pub struct AppState {
    /// Loaded dataset, read-only for the process lifetime.
    pub dataset: LaunchDataset,

    /// Current dropdown + range slider values.
    pub query: FilterQuery,

    /// Indices of launches passing the current query (cached).
    pub visible_indices: Vec<usize>,

    /// Outcome pie spec for the current subset (cached).
    pub pie: PieChartSpec,

    /// Payload-vs-outcome scatter spec for the current subset (cached).
    pub scatter: ScatterChartSpec,

    /// Stable booster-category colours, built once from the dataset.
    pub booster_colors: ColorMap,
}

impl AppState {
    /// Build the initial state: all sites selected, payload range set to the
    /// dataset's observed bounds.
    pub fn new(dataset: LaunchDataset) -> Self {
        let query = FilterQuery {
            site: SiteSelection::AllSites,
            payload_range: dataset.payload_bounds,
        };
        let booster_colors = ColorMap::new(&dataset.booster_categories);

        let mut state = AppState {
            dataset,
            query,
            visible_indices: Vec::new(),
            pie: PieChartSpec {
                title: String::new(),
                slices: Vec::new(),
            },
            scatter: ScatterChartSpec {
                title: String::new(),
                x_label: String::new(),
                y_label: String::new(),
                series: Vec::new(),
            },
            booster_colors,
        };
        state.recompute();
        state
    }

    /// Re-run filter and chart builders after a control change.
    pub fn recompute(&mut self) {
        self.visible_indices = filter_indices(&self.dataset, &self.query);
        self.pie = charts::outcome_distribution(&self.dataset, &self.visible_indices, &self.query.site);
        self.scatter =
            charts::payload_outcome_scatter(&self.dataset, &self.visible_indices, &self.query.site);
    }

    /// Dropdown handler.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.query.site != site {
            self.query.site = site;
            self.recompute();
        }
    }

    /// Range slider handler. Callers keep `low <= high`.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        if self.query.payload_range != (low, high) {
            self.query.payload_range = (low, high);
            self.recompute();
        }
    }
}
