use chrono::{Datelike, NaiveDate};
use eframe::egui::{RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::chart::ChartFigure;
use crate::color;

// ---------------------------------------------------------------------------
// Date axis: plot x values are days since 0001-01-01
// ---------------------------------------------------------------------------

pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn format_x(x: f64) -> String {
    x_to_date(x).map(|d| d.format("%b %d, %Y").to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Chart card
// ---------------------------------------------------------------------------

/// Render one chart description as a line plot of the given height.
pub fn chart_card(ui: &mut Ui, id: &str, figure: &ChartFigure, height: f32) {
    let line_color = color::line_color(&figure.layout.colorway);

    ui.label(
        RichText::new(figure.layout.title)
            .strong()
            .size(16.0)
            .color(color::title_color(line_color)),
    );
    if figure.series.is_empty() {
        ui.label("No data for this selection.");
    }

    let prefix = figure.layout.y_tick_prefix;
    let hover_layout = figure.layout.clone();
    let fixed = figure.layout.fixed_range;

    Plot::new(id)
        .height(height)
        .allow_drag(!fixed)
        .allow_zoom(!fixed)
        .allow_scroll(!fixed)
        .allow_boxed_zoom(!fixed)
        .x_axis_formatter(|mark, _range| format_x(mark.value))
        .y_axis_formatter(move |mark, _range| format!("{prefix}{}", mark.value))
        .label_formatter(move |_name, point| {
            format!("{}\n{}", format_x(point.x), hover_layout.format_hover(point.y))
        })
        .show(ui, |plot_ui| {
            let points: PlotPoints = figure
                .series
                .points()
                .map(|(x, y)| [date_to_x(x), y])
                .collect();

            plot_ui.line(
                Line::new(points)
                    .name(figure.layout.title)
                    .color(line_color)
                    .width(2.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_axis_roundtrip_and_labels() {
        let d = NaiveDate::from_ymd_opt(2015, 1, 4).unwrap();
        assert_eq!(x_to_date(date_to_x(d)), Some(d));
        assert_eq!(x_to_date(date_to_x(d) + 0.4), Some(d));
        assert_eq!(x_to_date(f64::NAN), None);
        assert_eq!(format_x(date_to_x(d)), "Jan 04, 2015");
    }
}
