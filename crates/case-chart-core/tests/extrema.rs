// File: crates/case-chart-core/tests/extrema.rs
// Purpose: Minimum/maximum record selection, tie-breaking and the non-empty precondition.

use case_chart_core::extrema::{highest, lowest};
use case_chart_core::{find_extrema, prepare_series, CaseRecord, ChartError, ParsePolicy, RawRecord, Series};
use chrono::NaiveDate;

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, n).unwrap()
}

#[test]
fn scenario_min_and_max_of_three_days() {
    let raw = vec![
        RawRecord::new("01/01/2021", "10"),
        RawRecord::new("01/03/2021", "5"),
        RawRecord::new("01/02/2021", "20"),
    ];
    let series = prepare_series(raw, ParsePolicy::Lenient).unwrap();
    let ext = find_extrema(&series, "NY").unwrap();
    assert_eq!(ext.low.new_cases, 5.0);
    assert_eq!(ext.low.date, NaiveDate::from_ymd_opt(2021, 1, 3).unwrap());
    assert_eq!(ext.high.new_cases, 20.0);
    assert_eq!(ext.high.date, NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
}

#[test]
fn ties_keep_first_occurrence() {
    let series = Series::from_records(vec![
        CaseRecord::new(day(1), 3.0),
        CaseRecord::new(day(2), 9.0),
        CaseRecord::new(day(3), 3.0),
        CaseRecord::new(day(4), 9.0),
    ]);
    assert_eq!(lowest(&series, "t").unwrap().date, day(1));
    assert_eq!(highest(&series, "t").unwrap().date, day(2));
}

#[test]
fn extrema_bound_every_record() {
    let records: Vec<CaseRecord> = (1..=28)
        .map(|d| CaseRecord::new(day(d), ((d * 37) % 11) as f64 * 100.0))
        .collect();
    let series = Series::from_records(records);
    let ext = find_extrema(&series, "t").unwrap();
    for r in series.iter() {
        assert!(ext.low.new_cases <= r.new_cases);
        assert!(ext.high.new_cases >= r.new_cases);
    }
}

#[test]
fn single_record_is_both_extrema() {
    let series = Series::from_records(vec![CaseRecord::new(day(5), 17.0)]);
    let ext = find_extrema(&series, "t").unwrap();
    assert_eq!(ext.low, ext.high);
}

#[test]
fn empty_series_has_no_extrema() {
    let err = find_extrema(&Series::default(), "PA").unwrap_err();
    match err {
        ChartError::EmptySeries { label } => assert_eq!(label, "PA"),
        other => panic!("unexpected error {other:?}"),
    }
}
