// File: crates/case-chart-skia/src/lib.rs
// Summary: Rasterizes chart surfaces (SVG element trees) to PNG using Skia's SVG DOM.

pub mod raster;

pub use raster::{render_surface_to_file, render_surface_to_png, render_svg_to_png, RasterOptions};
