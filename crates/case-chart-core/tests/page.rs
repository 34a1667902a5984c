// File: crates/case-chart-core/tests/page.rs
// Purpose: Trigger entry points over async data sources: startup, unknown codes, failures and races.

use std::time::Duration;

use case_chart_core::{
    ChartError, ChartId, ChartPage, DataSource, FileSource, LoadError, MemorySource, ParsePolicy, RawRecord,
    Region, RenderOptions,
};

fn records(day_counts: &[(&str, &str)]) -> Vec<RawRecord> {
    day_counts.iter().map(|(d, n)| RawRecord::new(*d, *n)).collect()
}

fn all_regions() -> MemorySource {
    MemorySource::new()
        .with(Region::Ny, records(&[("01/01/2021", "10"), ("01/02/2021", "30")]))
        .with(Region::Nj, records(&[("01/01/2021", "5"), ("01/02/2021", "8")]))
        .with(Region::Pa, records(&[("01/01/2021", "12"), ("01/02/2021", "3")]))
}

#[tokio::test]
async fn startup_shows_ny() {
    let page = ChartPage::new(all_regions(), RenderOptions::default());
    assert_eq!(page.start().await.unwrap(), Some(ChartId::Region(Region::Ny)));
    assert_eq!(page.active(), Some(ChartId::Region(Region::Ny)));
    let doc = page.document();
    assert!(doc.surface("chart-container-NY").is_some());
    assert_eq!(doc.surface_count(), 1);
}

#[tokio::test]
async fn unknown_code_changes_nothing() {
    let page = ChartPage::new(all_regions(), RenderOptions::default());
    page.start().await.unwrap();
    let before = page.document().clone();

    assert_eq!(page.show_chart("TX").await.unwrap(), None);
    assert_eq!(page.show_chart("ny").await.unwrap(), None);
    assert_eq!(page.active(), Some(ChartId::Region(Region::Ny)));
    assert_eq!(*page.document(), before);
}

#[tokio::test]
async fn switching_regions_keeps_one_surface() {
    let page = ChartPage::new(all_regions(), RenderOptions::default());
    page.start().await.unwrap();
    page.show_chart("NJ").await.unwrap();
    page.show_chart("PA").await.unwrap();
    page.show_combined().await.unwrap();
    page.show_chart("NY").await.unwrap();

    let doc = page.document();
    assert_eq!(doc.surface_count(), 1);
    assert!(doc.surface("chart-container-NY").is_some());
}

#[tokio::test]
async fn failed_combined_fetch_leaves_previous_chart() {
    let source = MemorySource::new()
        .with(Region::Ny, records(&[("01/01/2021", "10")]))
        .with(Region::Pa, records(&[("01/01/2021", "12")]));
    let page = ChartPage::new(source, RenderOptions::default());
    page.start().await.unwrap();

    let err = page.show_combined().await.unwrap_err();
    assert!(matches!(err, ChartError::Load { region: Region::Nj, .. }));
    assert_eq!(page.active(), Some(ChartId::Region(Region::Ny)));
    let doc = page.document();
    assert!(doc.surface("chart-container-combined").is_none());
    assert!(doc.surface("chart-container-NY").is_some());
}

#[tokio::test]
async fn failed_region_fetch_keeps_tracker() {
    let source = MemorySource::new().with(Region::Ny, records(&[("01/01/2021", "10")]));
    let page = ChartPage::new(source, RenderOptions::default());
    page.start().await.unwrap();
    assert!(page.show_chart("PA").await.is_err());
    assert_eq!(page.active(), Some(ChartId::Region(Region::Ny)));
    assert_eq!(page.document().surface_count(), 1);
}

#[tokio::test]
async fn empty_data_clears_the_page_but_keeps_tracker() {
    let source = all_regions().with(Region::Nj, Vec::new());
    let page = ChartPage::new(source, RenderOptions::default());
    page.start().await.unwrap();
    let err = page.show_chart("NJ").await.unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries { .. }));
    assert_eq!(page.document().surface_count(), 0);
    assert_eq!(page.active(), Some(ChartId::Region(Region::Ny)));
}

#[tokio::test]
async fn strict_policy_surfaces_bad_rows() {
    let source = all_regions().with(Region::Pa, records(&[("01/01/2021", "1"), ("yesterday", "2")]));
    let opts = RenderOptions { policy: ParsePolicy::Strict, ..RenderOptions::default() };
    let page = ChartPage::new(source, opts);
    let err = page.show_chart("PA").await.unwrap_err();
    assert!(matches!(err, ChartError::Record { index: 1, .. }));

    let lenient = ChartPage::new(
        all_regions().with(Region::Pa, records(&[("01/01/2021", "1"), ("yesterday", "2")])),
        RenderOptions::default(),
    );
    assert_eq!(lenient.show_chart("PA").await.unwrap(), Some(ChartId::Region(Region::Pa)));
}

#[tokio::test(start_paused = true)]
async fn latest_request_wins_when_fetches_finish_out_of_order() {
    let source = all_regions().with_delay(Region::Ny, Duration::from_millis(200));
    let page = ChartPage::new(source, RenderOptions::default());

    let (ny, nj) = tokio::join!(page.show_chart("NY"), page.show_chart("NJ"));
    assert_eq!(nj.unwrap(), Some(ChartId::Region(Region::Nj)));
    assert_eq!(ny.unwrap(), None);

    assert_eq!(page.active(), Some(ChartId::Region(Region::Nj)));
    let doc = page.document();
    assert_eq!(doc.surface_count(), 1);
    assert!(doc.surface("chart-container-NJ").is_some());
}

#[tokio::test(start_paused = true)]
async fn slow_combined_is_superseded_by_region() {
    let source = all_regions().with_delay(Region::Pa, Duration::from_secs(1));
    let page = ChartPage::new(source, RenderOptions::default());

    let (combined, nj) = tokio::join!(page.show_combined(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        page.show_chart("NJ").await
    });
    assert_eq!(combined.unwrap(), None);
    assert_eq!(nj.unwrap(), Some(ChartId::Region(Region::Nj)));
    assert!(page.document().surface("chart-container-combined").is_none());
}

#[tokio::test]
async fn file_source_reads_region_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ny_data.json"),
        r#"[{"submission_date":"01/02/2021","new_cases":"7"},{"submission_date":"01/01/2021","new_cases":"3"}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("nj_data.json"), "{ not json").unwrap();

    let source = FileSource::new(dir.path());
    assert_eq!(source.path_for(Region::Pa), dir.path().join("pa_data.json"));
    assert_eq!(source.fetch(Region::Ny).await.unwrap().len(), 2);
    assert!(matches!(source.fetch(Region::Nj).await, Err(LoadError::Json { .. })));
    assert!(matches!(source.fetch(Region::Pa).await, Err(LoadError::Io { .. })));

    let page = ChartPage::new(source, RenderOptions::default());
    assert_eq!(page.start().await.unwrap(), Some(ChartId::Region(Region::Ny)));
    let err = page.show_chart("NJ").await.unwrap_err();
    assert!(err.to_string().contains("NJ"), "{err}");
}
