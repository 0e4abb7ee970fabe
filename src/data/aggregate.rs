use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Chart-ready summaries derived from a (filtered) dataset
// ---------------------------------------------------------------------------

/// One pie-chart sector: a label and its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// One scatter-chart point: payload mass on x, outcome on y, booster
/// version category as the colour dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

/// Successful launches grouped by site, over the whole dataset.
///
/// Sites without a single success are omitted rather than reported as zero.
/// Slices are ordered by descending count, ties broken by site name, so the
/// chart layout is deterministic.
pub fn success_counts_by_site(dataset: &LaunchDataset) -> Vec<PieSlice> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in &dataset.records {
        if rec.outcome == Outcome::Success {
            *counts.entry(rec.site.as_str()).or_default() += 1;
        }
    }

    let mut slices: Vec<PieSlice> = counts
        .into_iter()
        .map(|(site, value)| PieSlice {
            label: site.to_string(),
            value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    slices
}

/// Success/failure counts for one site.
///
/// Both labels and values come from the site-restricted subset; outcome
/// classes with no launches at that site are omitted. Success is listed
/// first when present.
pub fn outcome_counts_for_site(dataset: &LaunchDataset, site: &str) -> Vec<PieSlice> {
    let mut successes = 0u64;
    let mut failures = 0u64;
    for rec in &dataset.records {
        if rec.site != site {
            continue;
        }
        match rec.outcome {
            Outcome::Success => successes += 1,
            Outcome::Failure => failures += 1,
        }
    }

    let mut slices = Vec::with_capacity(2);
    if successes > 0 {
        slices.push(PieSlice {
            label: Outcome::Success.label().to_string(),
            value: successes,
        });
    }
    if failures > 0 {
        slices.push(PieSlice {
            label: Outcome::Failure.label().to_string(),
            value: failures,
        });
    }
    slices
}

/// One scatter point per surviving record, in dataset order.
pub fn scatter_points(dataset: &LaunchDataset, indices: &[usize]) -> Vec<ScatterPoint> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            ScatterPoint {
                payload_mass_kg: rec.payload_mass_kg,
                outcome: rec.outcome,
                booster_version: rec.booster_version.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{self, FilterSelection, PayloadRange, SiteSelection};
    use crate::data::model::LaunchRecord;

    fn record(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.into(),
            payload_mass_kg: payload,
            outcome,
            booster_version: booster.into(),
        }
    }

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("A", 1500.0, Outcome::Failure, "v1.1"),
            record("B", 5000.0, Outcome::Success, "FT"),
            record("B", 9000.0, Outcome::Failure, "FT"),
        ])
    }

    #[test]
    fn all_sites_pie_counts_successes_only() {
        let slices = success_counts_by_site(&sample_dataset());
        assert_eq!(slices.len(), 2);
        assert!(slices.contains(&PieSlice {
            label: "A".into(),
            value: 1
        }));
        assert!(slices.contains(&PieSlice {
            label: "B".into(),
            value: 1
        }));
    }

    #[test]
    fn pie_totals_match_success_count() {
        let ds = sample_dataset();
        let total: u64 = success_counts_by_site(&ds).iter().map(|s| s.value).sum();
        let successes = ds
            .records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count() as u64;
        assert_eq!(total, successes);
    }

    #[test]
    fn zero_success_sites_are_omitted() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("C", 700.0, Outcome::Failure, "v1.0"),
        ]);
        let slices = success_counts_by_site(&ds);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "A");
    }

    #[test]
    fn slices_are_ordered_by_descending_count() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("B", 600.0, Outcome::Success, "v1.0"),
            record("B", 700.0, Outcome::Success, "v1.1"),
        ]);
        let slices = success_counts_by_site(&ds);
        assert_eq!(slices[0].label, "B");
        assert_eq!(slices[0].value, 2);
        assert_eq!(slices[1].label, "A");
    }

    #[test]
    fn per_site_pie_uses_only_that_site() {
        let slices = outcome_counts_for_site(&sample_dataset(), "A");
        assert_eq!(
            slices,
            vec![
                PieSlice {
                    label: "Success".into(),
                    value: 1
                },
                PieSlice {
                    label: "Failure".into(),
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn per_site_pie_omits_absent_outcome_classes() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("A", 700.0, Outcome::Success, "v1.1"),
        ]);
        let slices = outcome_counts_for_site(&ds, "A");
        assert_eq!(
            slices,
            vec![PieSlice {
                label: "Success".into(),
                value: 2
            }]
        );
    }

    #[test]
    fn unknown_site_pie_is_empty() {
        assert!(outcome_counts_for_site(&sample_dataset(), "VAFB SLC-4E").is_empty());
    }

    #[test]
    fn scatter_emits_one_point_per_surviving_record() {
        let ds = sample_dataset();
        let selection = FilterSelection {
            site: SiteSelection::Site("A".into()),
            payload: PayloadRange::new(0.0, 1000.0),
        };
        let points = scatter_points(&ds, &filter::apply(&ds, &selection));
        assert_eq!(
            points,
            vec![ScatterPoint {
                payload_mass_kg: 500.0,
                outcome: Outcome::Success,
                booster_version: "v1.0".into(),
            }]
        );
    }

    #[test]
    fn scatter_over_empty_subset_is_empty() {
        let ds = sample_dataset();
        let selection = FilterSelection {
            site: SiteSelection::All,
            payload: PayloadRange::new(2000.0, 4000.0),
        };
        let points = scatter_points(&ds, &filter::apply(&ds, &selection));
        assert!(points.is_empty());
    }
}
