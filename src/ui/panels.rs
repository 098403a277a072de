use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the selection panel: site dropdown and payload-range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Records");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Site selector ----
    ui.strong("Launch site");
    let sites = state.dataset.sites.clone();
    let current = state.selection.site.clone();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All sites")
                .clicked()
            {
                state.set_site(SiteSelection::All);
            }
            for site in &sites {
                let selected = matches!(&current, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site(SiteSelection::Site(site.clone()));
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let (min, max) = state.dataset.payload_bounds;
    let mut low = state.selection.payload.low;
    let mut high = state.selection.payload.high;

    let low_changed = ui
        .add(egui::Slider::new(&mut low, min..=max).text("min"))
        .changed();
    let high_changed = ui
        .add(egui::Slider::new(&mut high, min..=max).text("max"))
        .changed();

    // Replace the interval whole; an inverted pair is allowed and simply
    // yields empty views.
    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }

    if state.selection.payload.is_empty() {
        ui.label(
            RichText::new("Empty range: min is above max")
                .color(Color32::YELLOW)
                .small(),
        );
    }

    ui.separator();
    ui.label(format!(
        "{} of {} launches match",
        state.correlation.len(),
        state.dataset.len()
    ));
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
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} matching",
            state.dataset.len(),
            state.correlation.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Matching-records table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the table of records matching the current selection.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Launch Site");
            });
            header.col(|ui| {
                ui.strong("Payload Mass (kg)");
            });
            header.col(|ui| {
                ui.strong("Outcome");
            });
            header.col(|ui| {
                ui.strong("Booster Version Category");
            });
        })
        .body(|body| {
            body.rows(16.0, state.correlation.len(), |mut row| {
                let point = &state.correlation[row.index()];
                row.col(|ui| {
                    ui.label(&point.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", point.payload_mass));
                });
                row.col(|ui| {
                    ui.label(point.outcome.label());
                });
                row.col(|ui| {
                    ui.label(&point.booster_category);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records from {} sites",
                    dataset.len(),
                    dataset.sites.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
