// File: crates/case-chart-core/src/types.rs
// Summary: Shared canvas size and margin constants.

/// Default surface width in logical units.
pub const WIDTH: u32 = 800;
/// Default surface height in logical units.
pub const HEIGHT: u32 = 500;

/// Space reserved around the plot area for axes, titles and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(80, 120, 120, 60)
    }
}

/// Canvas geometry. The plot area is the canvas minus margins (620x300 by default).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl ChartLayout {
    pub fn inner_width(&self) -> f64 {
        self.width.saturating_sub(self.margins.hsum()) as f64
    }

    pub fn inner_height(&self) -> f64 {
        self.height.saturating_sub(self.margins.vsum()) as f64
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margins: Margins::default() }
    }
}
