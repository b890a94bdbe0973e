use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use super::error::{LoadError, ParseError};
use super::model::{AvocadoType, Dataset, Row};

pub const DATE_COLUMN: &str = "Date";
pub const PRICE_COLUMN: &str = "AveragePrice";
pub const VOLUME_COLUMN: &str = "Total Volume";
pub const TYPE_COLUMN: &str = "type";
pub const REGION_COLUMN: &str = "region";

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the avocado dataset from a CSV file.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} rows from {} ({} regions, {} to {})",
        dataset.len(),
        path.display(),
        dataset.regions().len(),
        dataset.min_date(),
        dataset.max_date()
    );
    Ok(dataset)
}

/// CSV layout: header row with column names.  Only `Date`, `AveragePrice`,
/// `Total Volume`, `type` and `region` are read; any other columns (the
/// unnamed index, bag counts, `year`, ...) are ignored.
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let date_idx = column(DATE_COLUMN)?;
    let price_idx = column(PRICE_COLUMN)?;
    let volume_idx = column(VOLUME_COLUMN)?;
    let type_idx = column(TYPE_COLUMN)?;
    let region_idx = column(REGION_COLUMN)?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1; fall back to counting when the reader has no position.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_no as u64 + 2);
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let date = parse_date(field(date_idx), line)?;
        let average_price = parse_decimal(field(price_idx), line, PRICE_COLUMN)?;
        if average_price <= 0.0 {
            return Err(invalid(line, PRICE_COLUMN, field(price_idx), "is not positive").into());
        }
        let total_volume = parse_decimal(field(volume_idx), line, VOLUME_COLUMN)?;
        if total_volume < 0.0 {
            return Err(invalid(line, VOLUME_COLUMN, field(volume_idx), "is negative").into());
        }
        let avocado_type = field(type_idx).trim().parse::<AvocadoType>().map_err(|()| {
            invalid(
                line,
                TYPE_COLUMN,
                field(type_idx),
                "is not 'conventional' or 'organic'",
            )
        })?;
        let region = field(region_idx).trim();
        if region.is_empty() {
            return Err(invalid(line, REGION_COLUMN, region, "is empty").into());
        }

        rows.push(Row {
            date,
            region: region.to_string(),
            avocado_type,
            average_price,
            total_volume,
        });
    }

    Dataset::from_rows(rows)
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

fn invalid(line: u64, column: &'static str, value: &str, reason: &'static str) -> ParseError {
    ParseError {
        line,
        column,
        value: value.to_string(),
        reason,
    }
}

/// Strict `YYYY-MM-DD`: chrono alone would also accept unpadded fields.
fn parse_date(s: &str, line: u64) -> Result<NaiveDate, ParseError> {
    let s = s.trim();
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid(line, DATE_COLUMN, s, "is not a YYYY-MM-DD date"));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| invalid(line, DATE_COLUMN, s, "is not a valid calendar date"))
}

fn parse_decimal(s: &str, line: u64, column: &'static str) -> Result<f64, ParseError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(line, column, s, "is not a number")),
    }
}
