use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, pie, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchboardApp {
    pub state: AppState,
}

impl LaunchboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: site dropdown + payload range ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie chart on top, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let scatter_height = total_height * 0.5;
            let pie_height = (total_height - scatter_height - 8.0).max(50.0);

            ui.allocate_ui(egui::vec2(ui.available_width(), pie_height), |ui| {
                pie::pie_chart(ui, &self.state.pie);
            });
            ui.separator();
            plot::payload_scatter(ui, &self.state, scatter_height);
        });
    }
}
