/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   avocado.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse + validate rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  date-sorted Vec<Row>, regions, types, date span
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  FilterCriteria → (price series, volume series)
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod filter;
