use crate::color::ColorMap;
use crate::data::aggregate::{self, PieSlice, ScatterPoint};
use crate::data::filter::{self, FilterSelection, PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Pie-chart data plus its title, ready to render.
#[derive(Debug, Clone, Default)]
pub struct PieData {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once at startup and never mutated; everything else
/// is either a current input value or chart data derived from it.
pub struct AppState {
    dataset: LaunchDataset,

    /// Current site dropdown value.
    pub selected_site: SiteSelection,

    /// Current payload range selection (inclusive, kg).
    pub payload_range: PayloadRange,

    /// Cached pie-chart data for the current site selection.
    pub pie: PieData,

    /// Cached scatter points for the current site + payload selection.
    pub scatter: Vec<ScatterPoint>,

    /// Stable booster-category colours for the scatter chart.
    pub booster_colors: ColorMap,
}

impl AppState {
    /// Wrap a freshly loaded dataset with default selections ("All Sites",
    /// payload range spanning the dataset) and compute the initial charts.
    pub fn new(dataset: LaunchDataset) -> Self {
        let (min, max) = dataset
            .payload_bounds()
            .unwrap_or((PayloadRange::DOMAIN.min, PayloadRange::DOMAIN.max));
        let booster_colors = ColorMap::new(&dataset.booster_versions);

        let mut state = AppState {
            dataset,
            selected_site: SiteSelection::All,
            payload_range: PayloadRange::new(min, max),
            pie: PieData::default(),
            scatter: Vec::new(),
            booster_colors,
        };
        state.refresh_pie();
        state.refresh_scatter();
        state
    }

    /// Read-only view of the loaded dataset.
    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    /// Snapshot of the current input controls.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            site: self.selected_site.clone(),
            payload: self.payload_range,
        }
    }

    /// Recompute the pie chart from the current site selection.
    pub fn refresh_pie(&mut self) {
        self.pie = match &self.selected_site {
            SiteSelection::All => PieData {
                title: "Total successful launches by site".to_string(),
                slices: aggregate::success_counts_by_site(&self.dataset),
            },
            SiteSelection::Site(site) => PieData {
                title: format!("Launch outcomes for {site}"),
                slices: aggregate::outcome_counts_for_site(&self.dataset, site),
            },
        };
    }

    /// Recompute the scatter points from the current site + payload range.
    pub fn refresh_scatter(&mut self) {
        let selection = self.selection();
        let indices = filter::apply(&self.dataset, &selection);
        self.scatter = aggregate::scatter_points(&self.dataset, &indices);
    }

    /// Reset the payload range to the dataset's own bounds.
    pub fn reset_payload_range(&mut self) {
        let (min, max) = self
            .dataset
            .payload_bounds()
            .unwrap_or((PayloadRange::DOMAIN.min, PayloadRange::DOMAIN.max));
        self.payload_range = PayloadRange::new(min, max);
    }
}
