// File: crates/case-chart-core/src/tracker.rs
// Summary: Active-chart state and the teardown that precedes every render.

use std::fmt;

use tracing::debug;

use crate::document::Document;
use crate::region::{Region, COMBINED_CONTAINER};

/// Identifies a rendered chart and, through it, the container holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartId {
    Region(Region),
    Combined,
}

impl ChartId {
    pub fn container_id(&self) -> String {
        match self {
            ChartId::Region(r) => r.container_id(),
            ChartId::Combined => COMBINED_CONTAINER.to_string(),
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartId::Region(r) => f.write_str(r.code()),
            ChartId::Combined => f.write_str("combined"),
        }
    }
}

/// The chart currently shown, if any. Renderers take the previous value and return the next.
pub type ActiveChart = Option<ChartId>;

/// Remove the surface of the tracked chart. Surfaces created by other means are not touched.
pub fn teardown(doc: &mut Document, active: ActiveChart) {
    let Some(id) = active else { return };
    let container = id.container_id();
    let removed = doc.remove_surface(&container).is_some();
    debug!(chart = %id, container = %container, removed, "teardown");
}
