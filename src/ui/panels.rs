use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub const HEADER_TITLE: &str = "Avocado Analytics";
pub const HEADER_DESCRIPTION: &str = "Analyze the behaviour of avocado prices and the number \
     of avocados sold in the US between 2015 and 2018";

/// Render the title banner.
pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("🥑").size(40.0));
        ui.heading(RichText::new(HEADER_TITLE).size(32.0).strong());
        ui.label(HEADER_DESCRIPTION);
        ui.add_space(8.0);
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter menu
// ---------------------------------------------------------------------------

/// Render the region, type and date-range controls.  Each control change
/// goes through an `AppState` setter, which rebuilds both charts.
pub fn filter_menu(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (Some(dataset), Some(criteria)) = (&state.dataset, &state.criteria) else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let current = criteria.clone();
    let types = dataset.types().to_vec();
    let (min_date, max_date) = (dataset.min_date(), dataset.max_date());

    // ---- Region (searchable, never empty) ----
    ui.strong("Region");
    let mut picked_region = None;
    egui::ComboBox::from_id_salt("region_filter")
        .selected_text(&current.region)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.region_search).hint_text("Search…"),
            );
            let regions: Vec<String> = state
                .matching_regions()
                .into_iter()
                .map(str::to_string)
                .collect();
            if regions.is_empty() {
                ui.weak("No matching region");
            }
            for region in regions {
                if ui
                    .selectable_label(region == current.region, &region)
                    .clicked()
                {
                    picked_region = Some(region);
                }
            }
        });
    if let Some(region) = picked_region {
        state.region_search.clear();
        state.set_region(&region);
    }
    ui.add_space(8.0);

    // ---- Type ----
    ui.strong("Type");
    egui::ComboBox::from_id_salt("type_filter")
        .selected_text(current.avocado_type.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for t in types {
                if ui
                    .selectable_label(t == current.avocado_type, t.as_str())
                    .clicked()
                    && t != current.avocado_type
                {
                    state.set_type(t);
                }
            }
        });
    ui.add_space(8.0);

    // ---- Date range ----
    ui.strong("Date Range");
    ui.weak(format!("{min_date} to {max_date}"));
    let mut start = current.start;
    let mut end = current.end;
    ui.horizontal(|ui: &mut Ui| {
        ui.add(DatePickerButton::new(&mut start).id_salt("start_date"));
        ui.label("→");
        ui.add(DatePickerButton::new(&mut end).id_salt("end_date"));
    });
    if start != current.start {
        state.set_start(start);
    }
    if end != current.end {
        state.set_end(end);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export charts…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} shown",
                ds.len(),
                state.shown_rows()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open avocado data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export charts")
        .set_file_name("charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match state.export_charts(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export charts: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
