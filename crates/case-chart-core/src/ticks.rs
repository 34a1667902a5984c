// File: crates/case-chart-core/src/ticks.rs
// Summary: Tick layout helpers: "nice" linear ticks and calendar-aligned date ticks, with labels.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

/// Ticks requested per axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// (first index, last index, increment). A negative increment means "divide by -inc",
/// which keeps sub-unit steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step == 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start { i1 += 1; }
        if (i2 as f64) / inc > stop { i2 -= 1; }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start { i1 += 1; }
        if (i2 as f64) * inc > stop { i2 -= 1; }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some((i1, i2, inc))
}

/// Roughly `count` evenly spaced round values (1, 2 or 5 times a power of ten) inside
/// `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (a, b) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(a, b, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let value = |i: i64| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc };
    let mut out: Vec<f64> = (i1..=i2).map(value).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Distance between adjacent ticks produced by `linear_ticks`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (a, b) = if reverse { (stop, start) } else { (start, stop) };
    let inc = match tick_spec(a, b, count as f64) {
        Some((_, _, inc)) => inc,
        None => return 0.0,
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Label for a value tick: fixed precision derived from the tick step, thousands grouped.
pub fn format_value_tick(v: f64, step: f64) -> String {
    let precision = if step == 0.0 || !step.is_finite() {
        0
    } else {
        (-step.abs().log10().floor()).max(0.0) as usize
    };
    let fixed = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // Negative zero after rounding prints unsigned.
    if v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('\u{2212}');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Calendar interval between date ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    /// Every n-th hour of the day, counted from midnight.
    Hours(u32),
    /// Every n-th day of the month, counted from the 1st.
    Days(u32),
    /// Sundays.
    Week,
    /// First of every n-th month, counted from January.
    Months(u32),
    /// January 1st of years divisible by n.
    Years(i32),
}

impl TimeInterval {
    fn matches(&self, d: NaiveDate) -> bool {
        match *self {
            TimeInterval::Hours(_) => true,
            TimeInterval::Days(n) => (d.day() - 1) % n.max(1) == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Months(n) => d.day() == 1 && d.month0() % n.max(1) == 0,
            TimeInterval::Years(n) => d.ordinal() == 1 && d.year().rem_euclid(n.max(1)) == 0,
        }
    }
}

const YEAR_DAYS: f64 = 365.0;
const HOUR_DAYS: f64 = 1.0 / 24.0;

/// Pick the interval whose length is closest (by ratio) to `span / count`.
pub fn tick_interval(start: NaiveDate, end: NaiveDate, count: usize) -> TimeInterval {
    const CANDIDATES: [(f64, TimeInterval); 10] = [
        (HOUR_DAYS, TimeInterval::Hours(1)),
        (3.0 * HOUR_DAYS, TimeInterval::Hours(3)),
        (6.0 * HOUR_DAYS, TimeInterval::Hours(6)),
        (12.0 * HOUR_DAYS, TimeInterval::Hours(12)),
        (1.0, TimeInterval::Days(1)),
        (2.0, TimeInterval::Days(2)),
        (7.0, TimeInterval::Week),
        (30.0, TimeInterval::Months(1)),
        (90.0, TimeInterval::Months(3)),
        (YEAR_DAYS, TimeInterval::Years(1)),
    ];
    let span = end.signed_duration_since(start).num_days().abs() as f64;
    let target = span / count.max(1) as f64;

    let i = CANDIDATES.iter().take_while(|(len, _)| *len <= target).count();
    // Dates never sit closer than a day apart, so hourly is the finest grid needed.
    if i == 0 {
        return TimeInterval::Hours(1);
    }
    if i == CANDIDATES.len() {
        let y0 = start.num_days_from_ce() as f64 / YEAR_DAYS;
        let y1 = end.num_days_from_ce() as f64 / YEAR_DAYS;
        let step = tick_step(y0, y1, count).abs().round().max(1.0);
        return TimeInterval::Years(step as i32);
    }
    let (lo, lo_interval) = CANDIDATES[i - 1];
    let (hi, hi_interval) = CANDIDATES[i];
    if target / lo < hi / target { lo_interval } else { hi_interval }
}

/// Instants inside `[start, end]` (both at midnight) aligned to the interval chosen for
/// `count` ticks.
pub fn time_ticks(start: NaiveDate, end: NaiveDate, count: usize) -> Vec<NaiveDateTime> {
    if count == 0 {
        return Vec::new();
    }
    let (lo, hi) = if end < start { (end, start) } else { (start, end) };
    let (first, last) = (lo.and_time(NaiveTime::MIN), hi.and_time(NaiveTime::MIN));
    if lo == hi {
        return vec![first];
    }
    let interval = tick_interval(lo, hi, count);
    let mut out: Vec<NaiveDateTime> = match interval {
        TimeInterval::Hours(n) => {
            let step = TimeDelta::hours(i64::from(n.max(1)));
            std::iter::successors(Some(first), |t| t.checked_add_signed(step))
                .take_while(|t| *t <= last)
                .collect()
        }
        _ => lo
            .iter_days()
            .take_while(|d| *d <= hi)
            .filter(|d| interval.matches(*d))
            .map(|d| d.and_time(NaiveTime::MIN))
            .collect(),
    };
    if end < start {
        out.reverse();
    }
    out
}

/// Multi-scale tick label: "HH AM" off midnight, the year on January 1st, the month
/// name on other month starts, "Mon DD" on Sundays and "Www DD" otherwise.
pub fn format_date_tick(t: NaiveDateTime) -> String {
    let pattern = if t.time() != NaiveTime::MIN {
        "%I %p"
    } else if t.day() != 1 {
        if t.weekday() == Weekday::Sun { "%b %d" } else { "%a %d" }
    } else if t.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    t.format(pattern).to_string()
}
