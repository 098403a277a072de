use crate::color::ColorMap;
use crate::data::aggregate::{
    CorrelationPoint, DistributionSlice, correlation_view, outcome_distribution,
};
use crate::data::filter::{PayloadRange, Selection, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Owns the immutable dataset and the current [`Selection`]; every selection
/// change replaces the changed field whole and recomputes both derived
/// tables from the full dataset. There is no incremental update and no
/// cached intermediate shared across changes.
pub struct AppState {
    /// Loaded dataset, read-only after `set_dataset`.
    pub dataset: LaunchDataset,

    /// Current site + payload-range filters.
    pub selection: Selection,

    /// Derived outcome-distribution table for the current selection.
    pub distribution: Vec<DistributionSlice>,

    /// Derived payload/outcome correlation table for the current selection.
    pub correlation: Vec<CorrelationPoint>,

    /// Colours for booster categories in the scatter view.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let dataset = LaunchDataset::default();
        let selection = Selection::for_dataset(&dataset);
        Self {
            dataset,
            selection,
            distribution: Vec::new(),
            correlation: Vec::new(),
            color_map: ColorMap::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Build the state around a freshly loaded dataset.
    pub fn new(dataset: LaunchDataset) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset);
        state
    }

    /// Install a newly loaded dataset: reset the selection to its defaults
    /// (all sites, full observed payload range), rebuild the booster colour
    /// map, and recompute both views.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.selection = Selection::for_dataset(&dataset);
        self.color_map = ColorMap::new(&dataset.booster_categories);
        self.dataset = dataset;
        self.status_message = None;
        self.recompute();
    }

    /// Replace the site filter unconditionally and recompute.
    pub fn set_site(&mut self, site: SiteSelection) {
        self.selection.site = site;
        self.recompute();
    }

    /// Replace the payload interval unconditionally, including the
    /// degenerate and inverted cases, and recompute.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        self.selection.payload = PayloadRange::new(low, high);
        self.recompute();
    }

    /// Recompute both derived tables from the full dataset.
    pub fn recompute(&mut self) {
        self.distribution = outcome_distribution(&self.dataset, &self.selection.site);
        self.correlation = correlation_view(&self.dataset, &self.selection);
    }
}
