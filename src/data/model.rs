use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::LoadError;

// ---------------------------------------------------------------------------
// AvocadoType – the two product kinds in the source data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvocadoType {
    Conventional,
    Organic,
}

impl AvocadoType {
    pub fn as_str(self) -> &'static str {
        match self {
            AvocadoType::Conventional => "conventional",
            AvocadoType::Organic => "organic",
        }
    }
}

impl fmt::Display for AvocadoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvocadoType {
    type Err = ();

    /// Exact, case-sensitive match against the literals used in the CSV.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conventional" => Ok(AvocadoType::Conventional),
            "organic" => Ok(AvocadoType::Organic),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one weekly sales record
// ---------------------------------------------------------------------------

/// One sale record (a row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub date: NaiveDate,
    pub region: String,
    pub avocado_type: AvocadoType,
    /// Always > 0.
    pub average_price: f64,
    /// Always >= 0.
    pub total_volume: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full date-sorted table plus the facts used to populate the controls.
///
/// Fields are private: a `Dataset` is built once by [`Dataset::from_rows`]
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    /// Distinct regions, lexicographically sorted.
    regions: Vec<String>,
    /// Distinct types in first-occurrence order (after the date sort).
    types: Vec<AvocadoType>,
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl Dataset {
    /// Sort rows by date (stable, so equal dates keep input order) and
    /// compute the distinct value sets.
    pub fn from_rows(mut rows: Vec<Row>) -> Result<Self, LoadError> {
        rows.sort_by_key(|r| r.date);

        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            return Err(LoadError::Empty);
        };
        let min_date = first.date;
        let max_date = last.date;

        let regions: Vec<String> = rows
            .iter()
            .map(|r| r.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut types: Vec<AvocadoType> = Vec::with_capacity(2);
        for r in &rows {
            if !types.contains(&r.avocado_type) {
                types.push(r.avocado_type);
            }
        }

        Ok(Dataset {
            rows,
            regions,
            types,
            min_date,
            max_date,
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn types(&self) -> &[AvocadoType] {
        &self.types
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.regions
            .binary_search_by(|r| r.as_str().cmp(region))
            .is_ok()
    }

    pub fn has_type(&self, avocado_type: AvocadoType) -> bool {
        self.types.contains(&avocado_type)
    }

    /// Earliest date in the table.
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Latest date in the table.
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
