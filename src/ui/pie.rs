use std::f32::consts::TAU;

use eframe::egui::{self, Color32, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::color;
use crate::state::PieData;

// ---------------------------------------------------------------------------
// Pie chart (drawn with the egui painter; egui_plot has no pie primitive)
// ---------------------------------------------------------------------------

/// Render a pie chart with a legend to its right. Empty data renders a
/// placeholder label instead of a chart.
pub fn pie_chart(ui: &mut Ui, data: &PieData) {
    ui.strong(&data.title);
    ui.add_space(4.0);

    let total: u64 = data.slices.iter().map(|s| s.value).sum();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("No launches match the current selection").weak());
        });
        return;
    }

    let palette = color::generate_palette(data.slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let side = ui
            .available_height()
            .min(ui.available_width() * 0.6)
            .max(80.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());

        let center = response.rect.center();
        let radius = side * 0.48;

        // Start at 12 o'clock and sweep clockwise.
        let mut angle = -TAU / 4.0;
        for (slice, fill) in data.slices.iter().zip(&palette) {
            let sweep = (slice.value as f32 / total as f32) * TAU;
            painter.extend(wedge(center, radius, angle, sweep, *fill));
            angle += sweep;
        }

        ui.add_space(8.0);
        ui.vertical(|ui: &mut Ui| {
            for (slice, fill) in data.slices.iter().zip(&palette) {
                let pct = 100.0 * slice.value as f64 / total as f64;
                ui.label(
                    RichText::new(format!("{}: {} ({pct:.1}%)", slice.label, slice.value))
                        .color(*fill),
                );
            }
        });
    });
}

/// Build one filled pie sector. The tessellator only handles convex
/// polygons, so sectors wider than a quarter turn are split into
/// sub-wedges; each sub-wedge is the centre plus points along its arc.
fn wedge(
    center: egui::Pos2,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    fill: Color32,
) -> Vec<Shape> {
    let segments = ((sweep / (TAU / 4.0)).ceil() as usize).max(1);
    let segment_sweep = sweep / segments as f32;

    (0..segments)
        .map(|seg| {
            let seg_start = start_angle + segment_sweep * seg as f32;
            // Enough arc samples that the rim looks round at typical sizes.
            let steps = ((segment_sweep / 0.05).ceil() as usize).max(2);

            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for k in 0..=steps {
                let a = seg_start + segment_sweep * (k as f32 / steps as f32);
                points.push(center + radius * Vec2::angled(a));
            }
            Shape::convex_polygon(points, fill, Stroke::NONE)
        })
        .collect()
}
