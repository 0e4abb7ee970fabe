use std::fmt;

use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Filter predicates: selected site + inclusive payload range
// ---------------------------------------------------------------------------

/// Inclusive payload-mass interval in kilograms.
///
/// The UI range control is bounded by [`PayloadRange::DOMAIN`]; an inverted
/// range (`min > max`) is tolerated and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    /// Full payload domain covered by the range control.
    pub const DOMAIN: PayloadRange = PayloadRange {
        min: 0.0,
        max: 10_000.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        PayloadRange { min, max }
    }

    /// Inclusive membership test. False for every value when `min > max`.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min && payload_mass_kg <= self.max
    }
}

/// Dropdown selection: either the "All Sites" sentinel or one concrete site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("All Sites"),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// Snapshot of both input controls, rebuilt from current values on every
/// recomputation. Carries no state of its own beyond the two selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// Pure index filters over the dataset
// ---------------------------------------------------------------------------

/// Indices of records whose payload mass lies within the inclusive range.
pub fn payload_indices(dataset: &LaunchDataset, range: &PayloadRange) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records matching the site selection. `All` matches every
/// record; a site name absent from the dataset matches none.
pub fn site_indices(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<usize> {
    match selection {
        SiteSelection::All => (0..dataset.len()).collect(),
        SiteSelection::Site(site) => dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| rec.site == *site)
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Indices of records passing both the payload-range and site filters.
pub fn apply(dataset: &LaunchDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if !selection.payload.contains(rec.payload_mass_kg) {
                return false;
            }
            match &selection.site {
                SiteSelection::All => true,
                SiteSelection::Site(site) => rec.site == *site,
            }
        })
        .map(|(i, _)| i)
        .collect()
}
