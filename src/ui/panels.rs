use eframe::egui::{self, RichText, Slider, Ui};

use crate::bindings::{self, InputChange};
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range sliders.
/// Any change is routed through the binding registry so only the charts
/// depending on that input are recomputed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.add_space(2.0);

    // Clone the site list so we can mutate the selection inside the loop.
    let sites = state.dataset().sites.clone();
    let site_before = state.selected_site.clone();

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(state.selected_site.to_string())
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut state.selected_site, SiteSelection::All, "All Sites");
            for site in &sites {
                ui.selectable_value(
                    &mut state.selected_site,
                    SiteSelection::Site(site.clone()),
                    site,
                );
            }
        });

    if state.selected_site != site_before {
        bindings::dispatch(state, InputChange::Site);
    }

    ui.separator();
    ui.heading("Payload range (kg)");
    ui.add_space(2.0);

    let domain = PayloadRange::DOMAIN.min..=PayloadRange::DOMAIN.max;
    let mut range_changed = false;
    range_changed |= ui
        .add(
            Slider::new(&mut state.payload_range.min, domain.clone())
                .step_by(1000.0)
                .text("min"),
        )
        .changed();
    range_changed |= ui
        .add(
            Slider::new(&mut state.payload_range.max, domain)
                .step_by(1000.0)
                .text("max"),
        )
        .changed();

    if state.payload_range.min > state.payload_range.max {
        ui.label(
            RichText::new("min exceeds max: no launches match")
                .small()
                .weak(),
        );
    }

    if ui.small_button("Reset range").clicked() {
        state.reset_payload_range();
        range_changed = true;
    }

    if range_changed {
        bindings::dispatch(state, InputChange::PayloadRange);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the load/selection counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in selection",
            state.dataset().len(),
            state.scatter.len()
        ));
    });
}
