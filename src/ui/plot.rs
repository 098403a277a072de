use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Charts (central panel)
// ---------------------------------------------------------------------------

/// Render both derived views stacked vertically.
pub fn charts(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a launch-records file to begin  (File → Open…)");
        });
        return;
    }

    let half = ui.available_height() / 2.0;
    distribution_chart(ui, state, half);
    correlation_chart(ui, state);
}

/// Bar chart of the outcome distribution: per-site success counts when all
/// sites are selected, success/failure counts for a single site.
fn distribution_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let title = match &state.selection.site {
        SiteSelection::All => "Total success launches by site".to_string(),
        SiteSelection::Site(site) => format!("Total success launches for {site}"),
    };
    ui.strong(title);

    let labels: Vec<String> = state.distribution.iter().map(|s| s.label.clone()).collect();
    let bars: Vec<Bar> = state
        .distribution
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Bar::new(i as f64, slice.count as f64)
                .name(&slice.label)
                .width(0.6)
        })
        .collect();

    Plot::new("distribution_plot")
        .height(height)
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as i64;
            if (mark.value - idx as f64).abs() > 1e-6 {
                return String::new();
            }
            usize::try_from(idx)
                .ok()
                .and_then(|i| labels.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Scatter of payload mass against the 0/1 outcome indicator, one point
/// series per booster version category.
fn correlation_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Payload vs. launch outcome");

    Plot::new("correlation_plot")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Outcome (1 = success)")
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per category so the legend carries the colour key.
            for category in &state.dataset.booster_categories {
                let points: PlotPoints = state
                    .correlation
                    .iter()
                    .filter(|row| row.booster_category == *category)
                    .map(|row| [row.payload_mass, row.outcome.indicator() as f64])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.color_map.color_for(category))
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
