// File: crates/case-chart-core/src/extrema.rs
// Summary: Lowest/highest record of a series by a single left-to-right scan.

use crate::error::{ChartError, Result};
use crate::series::{CaseRecord, Series};

/// Lowest and highest `new_cases` records of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrema {
    pub low: CaseRecord,
    pub high: CaseRecord,
}

/// Record with the smallest count. Strict comparison keeps the first of equal values.
pub fn lowest(series: &Series, label: &str) -> Result<CaseRecord> {
    series
        .iter()
        .copied()
        .reduce(|min, cur| if cur.new_cases < min.new_cases { cur } else { min })
        .ok_or_else(|| empty(label))
}

/// Record with the largest count. Strict comparison keeps the first of equal values.
pub fn highest(series: &Series, label: &str) -> Result<CaseRecord> {
    series
        .iter()
        .copied()
        .reduce(|max, cur| if cur.new_cases > max.new_cases { cur } else { max })
        .ok_or_else(|| empty(label))
}

/// Both extrema. An empty series has none and fails with `EmptySeries`.
pub fn find_extrema(series: &Series, label: &str) -> Result<Extrema> {
    Ok(Extrema { low: lowest(series, label)?, high: highest(series, label)? })
}

fn empty(label: &str) -> ChartError {
    ChartError::EmptySeries { label: label.to_string() }
}
