use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AvocadoApp {
    pub state: AppState,
}

impl AvocadoApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for AvocadoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Header banner ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::filter_menu(ui, &mut self.state);
            });

        // ---- Central panel: price and volume charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let charts = &self.state.charts;
            // title + spacing take roughly 60 points per card
            let height = ((ui.available_height() - 120.0) / 2.0).max(120.0);
            plot::chart_card(ui, "price_chart", &charts.price, height);
            ui.separator();
            plot::chart_card(ui, "volume_chart", &charts.volume, height);
        });
    }
}
