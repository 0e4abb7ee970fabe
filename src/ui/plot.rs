use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payload-vs-outcome scatter chart
// ---------------------------------------------------------------------------

/// Render the scatter chart: payload mass on x, outcome (0/1) on y, one
/// series per booster version category so each gets its own colour and
/// legend entry. An empty selection renders an empty plot, never an error.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let categories = &state.dataset().booster_versions;

    Plot::new("payload-scatter-chart")
        .height(height)
        .legend(egui_plot::Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch outcome")
        .include_x(0.0)
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in categories {
                let coords: Vec<[f64; 2]> = state
                    .scatter
                    .iter()
                    .filter(|p| p.booster_version == *category)
                    .map(|p| [p.payload_mass_kg, p.outcome.as_f64()])
                    .collect();

                if coords.is_empty() {
                    continue;
                }

                plot_ui.points(
                    Points::new(PlotPoints::from(coords))
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
