use chrono::NaiveDate;
use serde::Serialize;

use super::error::CriteriaError;
use super::model::{AvocadoType, Dataset};

// ---------------------------------------------------------------------------
// Filter criteria: the four control values driving one render
// ---------------------------------------------------------------------------

/// The current selection of the three controls.  `start <= end` is the
/// caller's responsibility; an inverted range simply selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub region: String,
    pub avocado_type: AvocadoType,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FilterCriteria {
    /// The criteria shown before any interaction: the given region and type
    /// over the dataset's full date span.
    pub fn initial(
        dataset: &Dataset,
        region: &str,
        avocado_type: AvocadoType,
    ) -> Result<Self, CriteriaError> {
        let criteria = FilterCriteria {
            region: region.to_string(),
            avocado_type,
            start: dataset.min_date(),
            end: dataset.max_date(),
        };
        criteria.validate(dataset)?;
        Ok(criteria)
    }

    /// Check that region and type are among the dataset's known values.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), CriteriaError> {
        if !dataset.has_region(&self.region) {
            return Err(CriteriaError::UnknownRegion(self.region.clone()));
        }
        if !dataset.has_type(self.avocado_type) {
            return Err(CriteriaError::UnknownType(self.avocado_type));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ChartSeries – index-aligned (date, value) points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub x: Vec<NaiveDate>,
    /// Same length as `x`.
    pub y: Vec<f64>,
}

impl ChartSeries {
    fn push(&mut self, x: NaiveDate, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Filter-and-project
// ---------------------------------------------------------------------------

/// Select the rows matching `criteria` (inclusive date bounds) and project
/// them into a price series and a volume series.
///
/// Rows are scanned once in dataset order, so both series come out in date
/// order with ties in file order.  No matching rows yields two empty series.
/// Fails fast on a region or type the dataset does not know.
pub fn apply(
    dataset: &Dataset,
    criteria: &FilterCriteria,
) -> Result<(ChartSeries, ChartSeries), CriteriaError> {
    criteria.validate(dataset)?;

    let mut price = ChartSeries::default();
    let mut volume = ChartSeries::default();

    for r in dataset.rows().iter().filter(|r| {
        r.region == criteria.region
            && r.avocado_type == criteria.avocado_type
            && criteria.start <= r.date
            && r.date <= criteria.end
    }) {
        price.push(r.date, r.average_price);
        volume.push(r.date, r.total_volume);
    }

    log::debug!(
        "{} / {} from {} to {}: {} rows",
        criteria.region,
        criteria.avocado_type,
        criteria.start,
        criteria.end,
        price.len()
    );
    Ok((price, volume))
}
