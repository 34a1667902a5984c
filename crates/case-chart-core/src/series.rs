// File: crates/case-chart-core/src/series.rs
// Summary: Raw and prepared case records; preparation parses dates, coerces counts and sorts.
// Notes:
// - Preparation consumes the raw records. Callers cannot reuse raw input afterwards.
// - Malformed rows are handled per `ParsePolicy` instead of leaking invalid values
//   into scale domains.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ChartError, RecordError, Result};
use crate::region::Region;

/// Format of `submission_date` in the input files.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// One entry of a region's JSON array, exactly as fetched.
/// Unknown fields (the CSV exports carry many) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub submission_date: Option<String>,
    /// `None` when the field is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub new_cases: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl RawRecord {
    pub fn new(submission_date: impl Into<String>, new_cases: impl Into<Value>) -> Self {
        Self { submission_date: Some(submission_date.into()), new_cases: Some(new_cases.into()) }
    }

    /// Parse both fields.
    pub fn parse(&self) -> Result<CaseRecord, RecordError> {
        let date = match &self.submission_date {
            Some(s) => parse_date(s)?,
            None => return Err(RecordError::Date { value: "<missing>".to_string() }),
        };
        let new_cases = match &self.new_cases {
            Some(v) => coerce_count(v)?,
            None => return Err(RecordError::Count { value: "<missing>".to_string() }),
        };
        Ok(CaseRecord { date, new_cases })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseRecord {
    pub date: NaiveDate,
    pub new_cases: f64,
}

impl CaseRecord {
    pub fn new(date: NaiveDate, new_cases: f64) -> Self {
        Self { date, new_cases }
    }
}

/// What to do with a record that fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Drop the row (logged) and keep rendering.
    #[default]
    Lenient,
    /// Abort the render on the first malformed row.
    Strict,
}

/// Parse an `MM/DD/YYYY` date. The whole string must match.
pub fn parse_date(s: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| RecordError::Date { value: s.to_string() })
}

/// Numeric coercion of a `new_cases` field with the usual loose-number rules: numbers
/// pass through, null is 0, booleans are 0/1, an empty array is 0 and a one-element
/// array coerces its element. Strings are trimmed (empty is 0) and may be decimal or
/// exponent notation, unsigned `0x`/`0o`/`0b` integers, or `Infinity`. Non-finite
/// results, `Infinity` included, are rejected.
pub fn coerce_count(v: &Value) -> Result<f64, RecordError> {
    match loose_number(v) {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(RecordError::Count { value: v.to_string() }),
    }
}

fn loose_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            // true/false and objects stringify to non-numeric text.
            [Value::Bool(_)] | [Value::Object(_)] => None,
            [only] => loose_number(only),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    let radix = match t.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &t[2..];
        if digits.is_empty() {
            return None;
        }
        return digits
            .chars()
            .try_fold(0.0f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)));
    }
    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // `str::parse` also takes "inf" and "NaN" spellings; only digits, signs, dots and
    // exponents are numeric here.
    if !t.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return None;
    }
    t.parse::<f64>().ok()
}

/// Chronologically ordered case records for one region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub records: Vec<CaseRecord>,
}

impl Series {
    /// Build from already-parsed records, sorting them by date (stable).
    pub fn from_records(mut records: Vec<CaseRecord>) -> Self {
        records.sort_by(|a, b| a.date.cmp(&b.date));
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseRecord> { self.records.iter() }

    /// Earliest and latest date, `None` when empty.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        crate::scale::date_extent(self.records.iter())
    }

    pub fn max_cases(&self) -> Option<f64> {
        crate::scale::max_cases(self.records.iter())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// Prepare a fetched array: parse each record, apply `policy` to failures, sort by date.
pub fn prepare_series(raw: Vec<RawRecord>, policy: ParsePolicy) -> Result<Series> {
    let total = raw.len();
    let mut records = Vec::with_capacity(total);
    for (index, r) in raw.into_iter().enumerate() {
        match r.parse() {
            Ok(rec) => records.push(rec),
            Err(source) => match policy {
                ParsePolicy::Lenient => warn!(index, error = %source, "dropping malformed record"),
                ParsePolicy::Strict => return Err(ChartError::Record { index, source }),
            },
        }
    }
    let series = Series::from_records(records);
    debug!(total, kept = series.len(), extent = ?series.date_extent(), "prepared series");
    Ok(series)
}

/// One region's prepared series inside the combined chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSeries {
    pub region: Region,
    pub series: Series,
}

impl RegionSeries {
    pub fn label(&self) -> &'static str { self.region.code() }
}
