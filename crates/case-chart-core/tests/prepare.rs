// File: crates/case-chart-core/tests/prepare.rs
// Purpose: Record parsing, count coercion and chronological sorting.

use case_chart_core::error::{ChartError, RecordError};
use case_chart_core::series::{coerce_count, parse_date};
use case_chart_core::{prepare_series, ParsePolicy, RawRecord};
use chrono::NaiveDate;
use serde_json::json;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_and_count_parse_to_calendar_date_and_number() {
    let rec = RawRecord::new("01/15/2021", "42").parse().expect("valid record");
    assert_eq!(rec.date, ymd(2021, 1, 15));
    assert_eq!(rec.new_cases, 42.0);
}

#[test]
fn prepare_sorts_records_by_date() {
    let raw = vec![
        RawRecord::new("01/01/2021", "10"),
        RawRecord::new("01/03/2021", "5"),
        RawRecord::new("01/02/2021", "20"),
    ];
    let series = prepare_series(raw, ParsePolicy::Lenient).unwrap();
    let got: Vec<(NaiveDate, f64)> = series.iter().map(|r| (r.date, r.new_cases)).collect();
    assert_eq!(
        got,
        vec![(ymd(2021, 1, 1), 10.0), (ymd(2021, 1, 2), 20.0), (ymd(2021, 1, 3), 5.0)]
    );
}

#[test]
fn sort_is_stable_for_equal_dates() {
    let raw = vec![
        RawRecord::new("03/02/2021", "1"),
        RawRecord::new("03/01/2021", "7"),
        RawRecord::new("03/01/2021", "8"),
    ];
    let series = prepare_series(raw, ParsePolicy::Lenient).unwrap();
    let counts: Vec<f64> = series.iter().map(|r| r.new_cases).collect();
    assert_eq!(counts, vec![7.0, 8.0, 1.0]);
}

#[test]
fn counts_coerce_like_numbers() {
    assert_eq!(coerce_count(&json!(12)).unwrap(), 12.0);
    assert_eq!(coerce_count(&json!("  7 ")).unwrap(), 7.0);
    assert_eq!(coerce_count(&json!("1234.0")).unwrap(), 1234.0);
    assert_eq!(coerce_count(&json!("")).unwrap(), 0.0);
    assert_eq!(coerce_count(&json!(null)).unwrap(), 0.0);
    assert!(matches!(coerce_count(&json!("abc")), Err(RecordError::Count { .. })));
    assert!(matches!(coerce_count(&json!("inf")), Err(RecordError::Count { .. })));
    assert!(matches!(coerce_count(&json!({"n": 1})), Err(RecordError::Count { .. })));
}

#[test]
fn counts_accept_radix_prefixes_and_array_wrapping() {
    assert_eq!(coerce_count(&json!("0x1A")).unwrap(), 26.0);
    assert_eq!(coerce_count(&json!("0o17")).unwrap(), 15.0);
    assert_eq!(coerce_count(&json!(" 0B101 ")).unwrap(), 5.0);
    assert_eq!(coerce_count(&json!("1e3")).unwrap(), 1000.0);
    assert_eq!(coerce_count(&json!(".5")).unwrap(), 0.5);
    assert_eq!(coerce_count(&json!([])).unwrap(), 0.0);
    assert_eq!(coerce_count(&json!(["42"])).unwrap(), 42.0);
    assert_eq!(coerce_count(&json!([null])).unwrap(), 0.0);
    assert_eq!(coerce_count(&json!(true)).unwrap(), 1.0);

    for bad in [json!("-0x1A"), json!("0x"), json!("0xZZ"), json!("1_000"), json!([1, 2]), json!([true])] {
        assert!(matches!(coerce_count(&bad), Err(RecordError::Count { .. })), "{bad}");
    }
}

#[test]
fn infinite_and_nan_counts_are_rejected() {
    for bad in ["Infinity", "-Infinity", "+Infinity", "infinity", "NaN", "nan", "1e400"] {
        assert!(matches!(coerce_count(&json!(bad)), Err(RecordError::Count { .. })), "{bad}");
    }
}

#[test]
fn dates_must_match_the_whole_format() {
    assert!(parse_date("2021-01-15").is_err());
    assert!(parse_date("01/15/2021 extra").is_err());
    assert!(parse_date("13/01/2021").is_err());
    assert_eq!(parse_date("1/5/2021").unwrap(), ymd(2021, 1, 5));
}

#[test]
fn lenient_policy_drops_malformed_rows() {
    let raw = vec![
        RawRecord::new("01/01/2021", "10"),
        RawRecord::new("not a date", "3"),
        RawRecord::new("01/02/2021", "lots"),
        RawRecord { submission_date: Some("01/03/2021".into()), new_cases: None },
        RawRecord::new("01/04/2021", 4),
    ];
    let series = prepare_series(raw, ParsePolicy::Lenient).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.records[1].new_cases, 4.0);
}

#[test]
fn strict_policy_reports_first_malformed_row() {
    let raw = vec![
        RawRecord::new("01/01/2021", "10"),
        RawRecord::new("01/02/2021", "lots"),
        RawRecord::new("bad", "1"),
    ];
    match prepare_series(raw, ParsePolicy::Strict) {
        Err(ChartError::Record { index, source: RecordError::Count { value } }) => {
            assert_eq!(index, 1);
            assert_eq!(value, "\"lots\"");
        }
        other => panic!("expected record error, got {other:?}"),
    }
}

#[test]
fn raw_records_ignore_extra_fields() {
    let raw: Vec<RawRecord> = serde_json::from_value(json!([
        { "submission_date": "02/01/2021", "state": "NY", "new_cases": "9", "tot_cases": "100" },
        { "submission_date": "02/02/2021", "new_cases": 11 }
    ]))
    .unwrap();
    let series = prepare_series(raw, ParsePolicy::Strict).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.max_cases(), Some(11.0));
    assert_eq!(series.date_extent(), Some((ymd(2021, 2, 1), ymd(2021, 2, 2))));
}

#[test]
fn explicit_null_count_is_zero_but_missing_count_is_malformed() {
    let raw: Vec<RawRecord> = serde_json::from_value(json!([
        { "submission_date": "02/01/2021", "new_cases": null },
        { "submission_date": "02/02/2021" }
    ]))
    .unwrap();
    assert_eq!(raw[0].new_cases, Some(serde_json::Value::Null));
    assert_eq!(raw[1].new_cases, None);
    let series = prepare_series(raw, ParsePolicy::Lenient).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.records[0].new_cases, 0.0);
}
