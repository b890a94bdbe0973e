//! Declarative chart descriptions handed to the plot widgets.
//!
//! A [`ChartPair`] is always built from a single [`FilterCriteria`], so the
//! price and volume charts can never disagree about what they show.

use serde::Serialize;

use crate::data::error::CriteriaError;
use crate::data::filter::{apply, ChartSeries, FilterCriteria};
use crate::data::model::Dataset;

pub const PRICE_TITLE: &str = "Average Price of Avocados";
pub const VOLUME_TITLE: &str = "Avocados Sold";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// Static presentation metadata of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: &'static str,
    /// Prepended to every y tick label ("$" for prices).
    pub y_tick_prefix: &'static str,
    /// Decimals shown for the hovered value; `None` uses the default format.
    pub hover_decimals: Option<usize>,
    /// Axes are not zoomable or draggable.
    pub fixed_range: bool,
    pub colorway: Vec<String>,
}

impl ChartLayout {
    fn price() -> Self {
        ChartLayout {
            title: PRICE_TITLE,
            y_tick_prefix: "$",
            hover_decimals: Some(2),
            fixed_range: true,
            colorway: vec!["#17B897".to_string()],
        }
    }

    fn volume() -> Self {
        ChartLayout {
            title: VOLUME_TITLE,
            y_tick_prefix: "",
            hover_decimals: None,
            fixed_range: true,
            colorway: vec!["#E12D39".to_string()],
        }
    }

    /// Hover text for a y value.
    pub fn format_hover(&self, y: f64) -> String {
        match self.hover_decimals {
            Some(d) => format!("{}{y:.d$}", self.y_tick_prefix),
            None => format!("{}{y}", self.y_tick_prefix),
        }
    }
}

/// One chart: points, kind and layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub kind: ChartKind,
    pub series: ChartSeries,
    pub layout: ChartLayout,
}

/// Price and volume charts for the same criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    pub price: ChartFigure,
    pub volume: ChartFigure,
}

impl ChartPair {
    pub fn build(dataset: &Dataset, criteria: &FilterCriteria) -> Result<Self, CriteriaError> {
        let (price, volume) = apply(dataset, criteria)?;
        Ok(ChartPair {
            price: ChartFigure {
                kind: ChartKind::Line,
                series: price,
                layout: ChartLayout::price(),
            },
            volume: ChartFigure {
                kind: ChartKind::Line,
                series: volume,
                layout: ChartLayout::volume(),
            },
        })
    }

    /// Both charts with no points, for when nothing is loaded.
    pub fn empty() -> Self {
        ChartPair {
            price: ChartFigure {
                kind: ChartKind::Line,
                series: ChartSeries::default(),
                layout: ChartLayout::price(),
            },
            volume: ChartFigure {
                kind: ChartKind::Line,
                series: ChartSeries::default(),
                layout: ChartLayout::volume(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::{AvocadoType, Row};

    fn dataset() -> Dataset {
        let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        Dataset::from_rows(vec![
            Row {
                date: date("2015-01-04"),
                region: "Albany".to_string(),
                avocado_type: AvocadoType::Organic,
                average_price: 1.22,
                total_volume: 40000.0,
            },
            Row {
                date: date("2015-01-11"),
                region: "Albany".to_string(),
                avocado_type: AvocadoType::Organic,
                average_price: 1.35,
                total_volume: 38000.0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_build_pair() {
        let ds = dataset();
        let criteria = FilterCriteria::initial(&ds, "Albany", AvocadoType::Organic).unwrap();
        let pair = ChartPair::build(&ds, &criteria).unwrap();

        assert_eq!(pair.price.kind, ChartKind::Line);
        assert_eq!(pair.price.layout.title, PRICE_TITLE);
        assert_eq!(pair.volume.layout.title, VOLUME_TITLE);
        assert_eq!(pair.price.series.y, vec![1.22, 1.35]);
        assert_eq!(pair.volume.series.y, vec![40000.0, 38000.0]);
        assert_eq!(pair.price.series.x, pair.volume.series.x);
    }

    #[test]
    fn test_hover_format() {
        let pair = ChartPair::empty();
        assert_eq!(pair.price.layout.format_hover(1.3), "$1.30");
        assert_eq!(pair.volume.layout.format_hover(38000.5), "38000.5");
    }

    #[test]
    fn test_json_shape() {
        let ds = dataset();
        let criteria = FilterCriteria::initial(&ds, "Albany", AvocadoType::Organic).unwrap();
        let json = ChartPair::build(&ds, &criteria).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["price"]["kind"], "line");
        assert_eq!(value["price"]["series"]["x"][0], "2015-01-04");
        assert_eq!(value["price"]["layout"]["y_tick_prefix"], "$");
        assert_eq!(value["volume"]["series"]["y"][1], 38000.0);
        assert_eq!(value["volume"]["layout"]["colorway"][0], "#E12D39");
    }
}
