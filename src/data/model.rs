use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome class as recorded in the source data (`class` column):
/// 1 for a success, 0 for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret the raw `class` column value. Anything other than 0 or 1
    /// is rejected at load time.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Scatter-chart y coordinate (0.0 or 1.0).
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. "CCAFS LC-40".
    pub site: String,
    /// Payload mass in kilograms; non-negative by load-time validation.
    pub payload_mass_kg: f64,
    /// Binary launch outcome.
    pub outcome: Outcome,
    /// Booster version category; used only as the scatter colour dimension.
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed categorical value sets.
/// Built once at startup and treated as read-only for the rest of the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted unique launch-site identifiers.
    pub sites: Vec<String>,
    /// Sorted unique booster version categories.
    pub booster_versions: Vec<String>,
}

impl LaunchDataset {
    /// Build the categorical indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: BTreeSet<String> = BTreeSet::new();
        let mut booster_versions: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            sites.insert(rec.site.clone());
            booster_versions.insert(rec.booster_version.clone());
        }

        LaunchDataset {
            records,
            sites: sites.into_iter().collect(),
            booster_versions: booster_versions.into_iter().collect(),
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest payload mass in the dataset, used as the
    /// default payload-range selection. `None` when there are no records.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), kg| (lo.min(kg), hi.max(kg)));
        Some((min, max))
    }
}
