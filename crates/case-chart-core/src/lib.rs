// File: crates/case-chart-core/src/lib.rs
// Summary: Core library entry point; exports loading, preparation, scales and chart rendering.

pub mod axis;
pub mod chart;
pub mod combined;
pub mod convert;
pub mod document;
pub mod element;
pub mod error;
pub mod extrema;
pub mod loader;
pub mod page;
pub mod region;
pub mod scale;
pub mod series;
pub mod theme;
pub mod ticks;
pub mod tracker;
pub mod types;

pub use chart::{build_region_surface, render_region_chart, RenderOptions};
pub use combined::{build_combined_surface, render_combined_chart};
pub use document::Document;
pub use element::Element;
pub use error::{ChartError, LoadError, RecordError};
pub use extrema::{find_extrema, Extrema};
pub use loader::{DataSource, FileSource, MemorySource};
pub use page::ChartPage;
pub use region::Region;
pub use scale::{OrdinalScale, TimeScale, ValueScale};
pub use series::{prepare_series, CaseRecord, ParsePolicy, RawRecord, RegionSeries, Series};
pub use theme::{Color, Theme};
pub use tracker::{teardown, ActiveChart, ChartId};
pub use types::{ChartLayout, Margins};
