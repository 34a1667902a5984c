// File: crates/case-chart-core/src/scale.rs
// Summary: Time (X), value (Y) and ordinal colour scales plus extent helpers.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::series::CaseRecord;
use crate::ticks;

/// Map `x` from `[d0, d1]` onto `[r0, r1]`. A collapsed domain maps to the range midpoint.
#[inline]
fn interpolate(x: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    let span = d1 - d0;
    let t = if span == 0.0 { 0.5 } else { (x - d0) / span };
    r0 + t * (r1 - r0)
}

#[inline]
fn day_number(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

#[inline]
fn instant_number(t: NaiveDateTime) -> f64 {
    day_number(t.date()) + f64::from(t.num_seconds_from_midnight()) / 86_400.0
}

/// Continuous scale from calendar dates to horizontal plot offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub left_px: f64,
    pub right_px: f64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { start: domain.0, end: domain.1, left_px: range.0, right_px: range.1 }
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f64 {
        interpolate(day_number(d), day_number(self.start), day_number(self.end), self.left_px, self.right_px)
    }

    /// Offset of an instant within a day, for sub-day ticks.
    #[inline]
    pub fn instant_to_px(&self, t: NaiveDateTime) -> f64 {
        interpolate(instant_number(t), day_number(self.start), day_number(self.end), self.left_px, self.right_px)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) { (self.start, self.end) }

    pub fn range(&self) -> (f64, f64) { (self.left_px, self.right_px) }

    /// Calendar-aligned ticks, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        ticks::time_ticks(self.start, self.end, count)
    }
}

/// Continuous linear scale from case counts to vertical plot offsets.
/// Built with an inverted range so larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub vmin: f64,
    pub vmax: f64,
    pub bottom_px: f64,
    pub top_px: f64,
}

impl ValueScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { vmin: domain.0, vmax: domain.1, bottom_px: range.0, top_px: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        interpolate(v, self.vmin, self.vmax, self.bottom_px, self.top_px)
    }

    pub fn domain(&self) -> (f64, f64) { (self.vmin, self.vmax) }

    pub fn range(&self) -> (f64, f64) { (self.bottom_px, self.top_px) }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::linear_ticks(self.vmin, self.vmax, count)
    }
}

/// Discrete scale assigning each domain key the range entry at the same index (cycling).
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale<K, V> {
    domain: Vec<K>,
    range: Vec<V>,
}

impl<K: PartialEq, V> OrdinalScale<K, V> {
    pub fn new(domain: Vec<K>, range: Vec<V>) -> Self {
        Self { domain, range }
    }

    /// Value for `key`. A key outside the domain gets the slot the next new key would take.
    pub fn get(&self, key: &K) -> Option<&V> {
        if self.range.is_empty() {
            return None;
        }
        let idx = self.domain.iter().position(|k| k == key).unwrap_or(self.domain.len());
        self.range.get(idx % self.range.len())
    }
}

/// Earliest and latest date across `records`.
pub fn date_extent<'a, I>(records: I) -> Option<(NaiveDate, NaiveDate)>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    records.into_iter().fold(None, |acc, r| match acc {
        None => Some((r.date, r.date)),
        Some((lo, hi)) => Some((lo.min(r.date), hi.max(r.date))),
    })
}

/// Largest count across `records`.
pub fn max_cases<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    records.into_iter().map(|r| r.new_cases).fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}
