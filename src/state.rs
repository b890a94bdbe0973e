use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::chart::ChartPair;
use crate::data::filter::FilterCriteria;
use crate::data::loader::load_file;
use crate::data::model::{AvocadoType, Dataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None only if the window was opened without one).
    pub dataset: Option<Dataset>,

    /// Current control values.
    pub criteria: Option<FilterCriteria>,

    /// Both charts for `criteria`, swapped together on every change.
    pub charts: ChartPair,

    /// Text typed into the region search box.
    pub region_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: None,
            charts: ChartPair::empty(),
            region_search: String::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// State for a dataset whose initial criteria were already validated.
    pub fn new(dataset: Dataset, criteria: FilterCriteria) -> Self {
        let mut state = AppState {
            dataset: Some(dataset),
            criteria: Some(criteria),
            ..Default::default()
        };
        state.refresh();
        state
    }

    /// Ingest a dataset loaded from File → Open….  The current region and
    /// type are kept when the new data has them, otherwise the first known
    /// values are used.  The date range resets to the full span.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let region = self
            .criteria
            .as_ref()
            .map(|c| c.region.as_str())
            .filter(|r| dataset.has_region(r))
            .or_else(|| dataset.regions().first().map(String::as_str))
            .unwrap_or_default()
            .to_string();
        let avocado_type = self
            .criteria
            .as_ref()
            .map(|c| c.avocado_type)
            .filter(|t| dataset.has_type(*t))
            .or_else(|| dataset.types().first().copied())
            .unwrap_or(AvocadoType::Organic);

        self.criteria = Some(FilterCriteria {
            region,
            avocado_type,
            start: dataset.min_date(),
            end: dataset.max_date(),
        });
        self.dataset = Some(dataset);
        self.region_search.clear();
        self.status_message = None;
        self.refresh();
    }

    /// Recompute both charts from the current criteria.
    pub fn refresh(&mut self) {
        let (Some(ds), Some(criteria)) = (&self.dataset, &self.criteria) else {
            self.charts = ChartPair::empty();
            return;
        };
        match ChartPair::build(ds, criteria) {
            Ok(charts) => self.charts = charts,
            Err(e) => {
                log::error!("Cannot build charts: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.charts = ChartPair::empty();
            }
        }
    }

    pub fn set_region(&mut self, region: &str) {
        if let Some(c) = &mut self.criteria {
            c.region = region.to_string();
        }
        self.refresh();
    }

    pub fn set_type(&mut self, avocado_type: AvocadoType) {
        if let Some(c) = &mut self.criteria {
            c.avocado_type = avocado_type;
        }
        self.refresh();
    }

    /// Move the start date, clamped to the dataset span; the end date is
    /// pulled along if it would fall before the new start.
    pub fn set_start(&mut self, start: NaiveDate) {
        let Some(ds) = &self.dataset else { return };
        let start = start.clamp(ds.min_date(), ds.max_date());
        if let Some(c) = &mut self.criteria {
            c.start = start;
            c.end = c.end.max(start);
        }
        self.refresh();
    }

    /// Move the end date; mirror image of [`AppState::set_start`].
    pub fn set_end(&mut self, end: NaiveDate) {
        let Some(ds) = &self.dataset else { return };
        let end = end.clamp(ds.min_date(), ds.max_date());
        if let Some(c) = &mut self.criteria {
            c.end = end;
            c.start = c.start.min(end);
        }
        self.refresh();
    }

    /// Regions whose name contains the search text (case-insensitive).
    pub fn matching_regions(&self) -> Vec<&str> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        let needle = self.region_search.trim().to_lowercase();
        ds.regions()
            .iter()
            .map(String::as_str)
            .filter(|r| needle.is_empty() || r.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of points currently shown (same for both charts).
    pub fn shown_rows(&self) -> usize {
        self.charts.price.series.len()
    }

    /// Load a CSV chosen by the user.  On failure the current dataset stays.
    pub fn open_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Write the current chart pair as JSON.
    pub fn export_charts(&self, path: &Path) -> Result<()> {
        let json = self.charts.to_json().context("serializing charts")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported charts to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn row(d: &str, region: &str, avocado_type: AvocadoType, price: f64, volume: f64) -> Row {
        Row {
            date: date(d),
            region: region.to_string(),
            avocado_type,
            average_price: price,
            total_volume: volume,
        }
    }

    fn state() -> AppState {
        let ds = Dataset::from_rows(vec![
            row("2015-01-04", "Albany", AvocadoType::Organic, 1.22, 40000.0),
            row("2015-01-11", "Albany", AvocadoType::Organic, 1.35, 38000.0),
            row("2015-01-18", "Albany", AvocadoType::Conventional, 1.05, 90000.0),
            row("2015-01-04", "Denver", AvocadoType::Organic, 0.99, 91000.0),
            row("2015-01-04", "DallasFtWorth", AvocadoType::Conventional, 0.80, 120000.0),
        ])
        .unwrap();
        let criteria = FilterCriteria::initial(&ds, "Albany", AvocadoType::Organic).unwrap();
        AppState::new(ds, criteria)
    }

    fn assert_charts_agree(state: &AppState) {
        assert_eq!(state.charts.price.series.x, state.charts.volume.series.x);
        let ds = state.dataset.as_ref().unwrap();
        let expected = ChartPair::build(ds, state.criteria.as_ref().unwrap()).unwrap();
        assert_eq!(state.charts, expected);
    }

    #[test]
    fn test_initial_charts() {
        let state = state();
        assert_eq!(state.charts.price.series.y, vec![1.22, 1.35]);
        assert_eq!(state.charts.volume.series.y, vec![40000.0, 38000.0]);
        assert_eq!(state.shown_rows(), 2);
    }

    #[test]
    fn test_every_control_swaps_both_charts() {
        let mut state = state();

        state.set_type(AvocadoType::Conventional);
        assert_charts_agree(&state);
        assert_eq!(state.charts.volume.series.y, vec![90000.0]);

        state.set_region("Denver");
        assert_charts_agree(&state);
        assert_eq!(state.shown_rows(), 0);

        state.set_type(AvocadoType::Organic);
        assert_charts_agree(&state);
        assert_eq!(state.charts.price.series.y, vec![0.99]);

        state.set_region("Albany");
        state.set_start(date("2015-01-05"));
        assert_charts_agree(&state);
        assert_eq!(state.charts.price.series.y, vec![1.35]);

        state.set_end(date("2015-01-10"));
        assert_charts_agree(&state);
        assert_eq!(state.shown_rows(), 0);
    }

    #[test]
    fn test_date_bounds_clamped_and_ordered() {
        let mut state = state();

        state.set_start(date("2014-06-01"));
        assert_eq!(state.criteria.as_ref().unwrap().start, date("2015-01-04"));

        state.set_end(date("2016-01-01"));
        assert_eq!(state.criteria.as_ref().unwrap().end, date("2015-01-18"));

        state.set_start(date("2015-01-18"));
        state.set_end(date("2015-01-11"));
        let c = state.criteria.as_ref().unwrap();
        assert_eq!((c.start, c.end), (date("2015-01-11"), date("2015-01-11")));
        assert_eq!(state.charts.price.series.y, vec![1.35]);
    }

    #[test]
    fn test_region_search() {
        let mut state = state();
        assert_eq!(state.matching_regions(), ["Albany", "DallasFtWorth", "Denver"]);
        state.region_search = "  d".to_string();
        assert_eq!(state.matching_regions(), ["DallasFtWorth", "Denver"]);
        state.region_search = "DEN".to_string();
        assert_eq!(state.matching_regions(), ["Denver"]);
    }

    #[test]
    fn test_set_dataset_keeps_or_replaces_selection() {
        let mut state = state();
        state.set_start(date("2015-01-11"));

        let other = Dataset::from_rows(vec![
            row("2016-02-07", "Albany", AvocadoType::Organic, 1.5, 10.0),
            row("2016-02-14", "Boise", AvocadoType::Organic, 1.6, 11.0),
        ])
        .unwrap();
        state.set_dataset(other);
        let c = state.criteria.as_ref().unwrap();
        assert_eq!(c.region, "Albany");
        assert_eq!((c.start, c.end), (date("2016-02-07"), date("2016-02-14")));
        assert_eq!(state.charts.price.series.y, vec![1.5]);

        let third = Dataset::from_rows(vec![row(
            "2017-03-05",
            "Boise",
            AvocadoType::Conventional,
            1.1,
            12.0,
        )])
        .unwrap();
        state.set_dataset(third);
        let c = state.criteria.as_ref().unwrap();
        assert_eq!(c.region, "Boise");
        assert_eq!(c.avocado_type, AvocadoType::Conventional);
        assert_eq!(state.charts.volume.series.y, vec![12.0]);
    }

    #[test]
    fn test_failed_open_keeps_dataset() {
        let mut state = state();
        let dir = tempfile::tempdir().unwrap();
        state.open_path(&dir.path().join("missing.csv"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.dataset.as_ref().unwrap().len(), 5);
        assert_eq!(state.shown_rows(), 2);
    }

    #[test]
    fn test_export_charts() {
        let state = state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");
        state.export_charts(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["price"]["series"]["y"][1], 1.35);
    }
}
