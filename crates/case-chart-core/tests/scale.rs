// File: crates/case-chart-core/tests/scale.rs
// Purpose: Time/value/ordinal scale mapping, including collapsed domains.

use case_chart_core::scale::{date_extent, max_cases};
use case_chart_core::{CaseRecord, OrdinalScale, Region, TimeScale, ValueScale};
use chrono::NaiveDate;

fn jan(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
}

#[test]
fn time_scale_maps_endpoints_and_midpoint() {
    let x = TimeScale::new((jan(1), jan(11)), (0.0, 620.0));
    assert_eq!(x.to_px(jan(1)), 0.0);
    assert_eq!(x.to_px(jan(11)), 620.0);
    assert_eq!(x.to_px(jan(6)), 310.0);
}

#[test]
fn time_scale_crosses_month_and_year_boundaries() {
    let start = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
    let end = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
    let x = TimeScale::new((start, end), (0.0, 100.0));
    assert_eq!(x.to_px(jan(1)), 50.0);
}

#[test]
fn value_scale_is_inverted_for_screen_space() {
    let y = ValueScale::new_linear((0.0, 20.0), (300.0, 0.0));
    assert_eq!(y.to_px(0.0), 300.0);
    assert_eq!(y.to_px(20.0), 0.0);
    assert_eq!(y.to_px(10.0), 150.0);
    assert_eq!(y.to_px(5.0), 225.0);
}

#[test]
fn collapsed_domains_map_to_range_midpoint() {
    let x = TimeScale::new((jan(4), jan(4)), (0.0, 620.0));
    assert_eq!(x.to_px(jan(4)), 310.0);
    let y = ValueScale::new_linear((0.0, 0.0), (300.0, 0.0));
    assert_eq!(y.to_px(0.0), 150.0);
}

#[test]
fn ordinal_scale_assigns_by_domain_index() {
    let colors = OrdinalScale::new(Region::ALL.to_vec(), vec!["a", "b", "c"]);
    assert_eq!(colors.get(&Region::Ny), Some(&"a"));
    assert_eq!(colors.get(&Region::Nj), Some(&"b"));
    assert_eq!(colors.get(&Region::Pa), Some(&"c"));

    let short = OrdinalScale::new(Region::ALL.to_vec(), vec![1, 2]);
    assert_eq!(short.get(&Region::Pa), Some(&1));

    let empty: OrdinalScale<Region, u8> = OrdinalScale::new(Region::ALL.to_vec(), Vec::new());
    assert_eq!(empty.get(&Region::Ny), None);
}

#[test]
fn extents_over_unsorted_records() {
    let records = [
        CaseRecord::new(jan(9), 4.0),
        CaseRecord::new(jan(2), 40.0),
        CaseRecord::new(jan(5), 12.5),
    ];
    assert_eq!(date_extent(&records), Some((jan(2), jan(9))));
    assert_eq!(max_cases(&records), Some(40.0));
    let none: [CaseRecord; 0] = [];
    assert_eq!(date_extent(&none), None);
    assert_eq!(max_cases(&none), None);
}
