// File: crates/case-chart-core/src/page.rs
// Summary: The chart page: owns the document and active chart, and exposes the trigger entry points.
// Notes:
// - Single logical thread. Triggers may be awaited concurrently (e.g. `tokio::join!`), but the
//   document is only borrowed between awaits.
// - Each trigger takes a generation number before fetching. A fetch that completes after a
//   newer trigger started is discarded, so the most recently requested chart wins.

use std::cell::{Cell, Ref, RefCell};

use tracing::debug;

use crate::chart::{render_region_chart, RenderOptions};
use crate::combined::render_combined_chart;
use crate::document::Document;
use crate::error::{ChartError, Result};
use crate::loader::DataSource;
use crate::region::Region;
use crate::series::RawRecord;
use crate::tracker::{ActiveChart, ChartId};

#[derive(Debug)]
struct PageState {
    document: Document,
    active: ActiveChart,
}

pub struct ChartPage<S> {
    source: S,
    options: RenderOptions,
    state: RefCell<PageState>,
    generation: Cell<u64>,
}

impl<S: DataSource> ChartPage<S> {
    pub fn new(source: S, options: RenderOptions) -> Self {
        let mut document = Document::chart_page();
        document.set_background(options.theme.background.to_hex());
        Self::with_document(source, options, document)
    }

    /// Use a custom page; containers must carry the ids the renderers target.
    pub fn with_document(source: S, options: RenderOptions, document: Document) -> Self {
        Self {
            source,
            options,
            state: RefCell::new(PageState { document, active: None }),
            generation: Cell::new(0),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn active(&self) -> ActiveChart {
        self.state.borrow().active
    }

    pub fn document(&self) -> Ref<'_, Document> {
        Ref::map(self.state.borrow(), |s| &s.document)
    }

    fn next_generation(&self) -> u64 {
        let g = self.generation.get() + 1;
        self.generation.set(g);
        g
    }

    fn is_stale(&self, generation: u64, what: &str) -> bool {
        let latest = self.generation.get();
        if generation != latest {
            debug!(request = what, generation, latest, "discarding stale result");
            return true;
        }
        false
    }

    async fn fetch(&self, region: Region) -> Result<Vec<RawRecord>> {
        self.source.fetch(region).await.map_err(|source| ChartError::Load { region, source })
    }

    /// Load and show one region's chart. Unknown codes are ignored and return `Ok(None)`,
    /// as do results superseded by a newer request.
    pub async fn show_chart(&self, code: &str) -> Result<Option<ChartId>> {
        let Some(region) = Region::from_code(code) else {
            debug!(code, "ignoring unknown region");
            return Ok(None);
        };
        let generation = self.next_generation();
        let raw = self.fetch(region).await?;
        if self.is_stale(generation, region.code()) {
            return Ok(None);
        }

        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        state.active = render_region_chart(&mut state.document, state.active, region, raw, &self.options)?;
        Ok(state.active)
    }

    /// Load all regions concurrently and show the overlay once every fetch succeeded.
    /// Any failed fetch abandons the render.
    pub async fn show_combined(&self) -> Result<Option<ChartId>> {
        let generation = self.next_generation();
        let (ny, nj, pa) = tokio::try_join!(
            self.fetch(Region::Ny),
            self.fetch(Region::Nj),
            self.fetch(Region::Pa),
        )?;
        debug!(ny = ny.len(), nj = nj.len(), pa = pa.len(), "combined data loaded");
        if self.is_stale(generation, "combined") {
            return Ok(None);
        }

        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        state.active = render_combined_chart(&mut state.document, state.active, [ny, nj, pa], &self.options)?;
        Ok(state.active)
    }

    /// Initial page load: the NY chart.
    pub async fn start(&self) -> Result<Option<ChartId>> {
        self.show_chart(Region::Ny.code()).await
    }
}
