// File: crates/case-chart-skia/src/raster.rs
// Summary: Renders a chart surface through Skia's SVG DOM onto a CPU raster surface, then encodes PNG.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use case_chart_core::types::{HEIGHT, WIDTH};
use case_chart_core::{Color, Element, Theme};
use skia_safe as skia;
use tracing::debug;

/// Stroke width the page stylesheet gives `.line` series paths.
const LINE_STROKE_WIDTH: &str = "2";

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    /// Skip text; glyph output differs between platforms.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: WIDTH as i32,
            height: HEIGHT as i32,
            background: skia::Color::WHITE,
            draw_text: true,
        }
    }
}

impl RasterOptions {
    pub fn from_theme(theme: &Theme) -> Self {
        Self { background: to_skia(theme.background), ..Self::default() }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

/// Copy of `el` as the raster backend should see it: page CSS folded into attributes,
/// text dropped when `draw_text` is off.
fn raster_tree(el: &Element, draw_text: bool) -> Element {
    let mut out = Element::new(el.tag.as_str());
    out.attrs = el.attrs.clone();
    out.text = el.text.clone();
    if el.tag == "path" && el.has_class("line") && !out.attrs.contains_key("stroke-width") {
        out.attrs.insert("stroke-width".to_string(), LINE_STROKE_WIDTH.to_string());
    }
    out.children = el
        .children
        .iter()
        .filter(|c| draw_text || c.tag != "text")
        .map(|c| raster_tree(c, draw_text))
        .collect();
    out
}

/// Rasterize SVG markup at `opts.width` x `opts.height` over the background colour.
pub fn render_svg_to_png(svg: &str, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut dom = skia::svg::Dom::from_str(svg, skia::FontMgr::default())
        .map_err(|_| anyhow!("failed to parse SVG"))?;
    dom.set_container_size((opts.width as f32, opts.height as f32));

    let mut target = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let canvas = target.canvas();
    canvas.clear(opts.background);
    dom.render(canvas);

    let image = target.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    debug!(width = opts.width, height = opts.height, bytes = data.as_bytes().len(), "rasterized svg");
    Ok(data.as_bytes().to_vec())
}

/// Rasterize one chart surface (`<svg>` root) and return PNG bytes.
pub fn render_surface_to_png(surface: &Element, opts: &RasterOptions) -> Result<Vec<u8>> {
    if surface.tag != "svg" {
        bail!("expected an <svg> surface, got <{}>", surface.tag);
    }
    let svg = raster_tree(surface, opts.draw_text).to_standalone_svg();
    render_svg_to_png(&svg, opts)
}

/// Rasterize to `path`, creating parent directories.
pub fn render_surface_to_file(surface: &Element, opts: &RasterOptions, path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_surface_to_png(surface, opts)?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
