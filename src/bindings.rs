use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reactive bindings: input change → chart recomputation
// ---------------------------------------------------------------------------

/// An input control whose value changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    Site,
    PayloadRange,
}

/// One reactive binding: when any declared input changes, the recompute
/// function refreshes the named output's cached chart data.
pub struct Binding {
    pub output: &'static str,
    pub inputs: &'static [InputChange],
    pub recompute: fn(&mut AppState),
}

/// The dashboard's two bindings. The pie chart only depends on the site
/// dropdown; the scatter chart depends on both controls.
pub const BINDINGS: &[Binding] = &[
    Binding {
        output: "success-pie-chart",
        inputs: &[InputChange::Site],
        recompute: AppState::refresh_pie,
    },
    Binding {
        output: "payload-scatter-chart",
        inputs: &[InputChange::Site, InputChange::PayloadRange],
        recompute: AppState::refresh_scatter,
    },
];

/// Synchronously re-run every binding that declares the changed input.
pub fn dispatch(state: &mut AppState, change: InputChange) {
    for binding in BINDINGS {
        if binding.inputs.contains(&change) {
            log::debug!("input {change:?} changed, recomputing {}", binding.output);
            (binding.recompute)(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{PayloadRange, SiteSelection};
    use crate::data::model::{LaunchDataset, LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.into(),
            payload_mass_kg: payload,
            outcome,
            booster_version: booster.into(),
        }
    }

    fn sample_state() -> AppState {
        AppState::new(LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("A", 1500.0, Outcome::Failure, "v1.1"),
            record("B", 5000.0, Outcome::Success, "FT"),
            record("B", 9000.0, Outcome::Failure, "FT"),
        ]))
    }

    #[test]
    fn site_change_refreshes_both_charts() {
        let mut state = sample_state();
        state.selected_site = SiteSelection::Site("A".into());
        dispatch(&mut state, InputChange::Site);

        assert_eq!(state.pie.title, "Launch outcomes for A");
        assert_eq!(state.pie.slices.len(), 2);
        assert!(state.scatter.iter().all(|p| p.booster_version != "FT"));
    }

    #[test]
    fn payload_change_refreshes_only_the_scatter() {
        let mut state = sample_state();
        let pie_before = state.pie.slices.clone();

        state.payload_range = PayloadRange::new(2000.0, 4000.0);
        dispatch(&mut state, InputChange::PayloadRange);

        assert_eq!(state.pie.slices, pie_before);
        assert!(state.scatter.is_empty());
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let mut state = sample_state();
        state.selected_site = SiteSelection::Site("B".into());
        state.payload_range = PayloadRange::new(0.0, 6000.0);

        dispatch(&mut state, InputChange::Site);
        let pie_first = state.pie.slices.clone();
        let scatter_first = state.scatter.clone();

        dispatch(&mut state, InputChange::Site);
        dispatch(&mut state, InputChange::PayloadRange);
        assert_eq!(state.pie.slices, pie_first);
        assert_eq!(state.scatter, scatter_first);
    }

    #[test]
    fn every_binding_declares_at_least_one_input() {
        for binding in BINDINGS {
            assert!(!binding.inputs.is_empty(), "{} has no inputs", binding.output);
        }
    }
}
