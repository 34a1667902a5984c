// File: crates/case-chart-core/src/chart.rs
// Summary: Single-region line chart: surface construction and the teardown/prepare/draw pipeline.

use tracing::info;

use crate::axis::{axis_bottom, axis_left};
use crate::document::Document;
use crate::element::{fmt_num, Element};
use crate::error::{ChartError, Result};
use crate::extrema::find_extrema;
use crate::region::Region;
use crate::scale::{TimeScale, ValueScale};
use crate::series::{prepare_series, CaseRecord, ParsePolicy, RawRecord, Series};
use crate::theme::Theme;
use crate::tracker::{teardown, ActiveChart, ChartId};
use crate::types::ChartLayout;

const MARKER_RADIUS: f64 = 6.0;
pub(crate) const X_TITLE: &str = "Month";
pub(crate) const Y_TITLE: &str = "Number of New Cases";

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub layout: ChartLayout,
    pub theme: Theme,
    pub policy: ParsePolicy,
}

/// Root `<svg>` of a chart; `color` feeds `currentColor` in the axes.
pub(crate) fn surface_shell(opts: &RenderOptions) -> Element {
    Element::new("svg")
        .attr_num("width", opts.layout.width as f64)
        .attr_num("height", opts.layout.height as f64)
        .attr("color", opts.theme.foreground.to_hex())
}

/// Plot-area group shifted by the top/left margins.
pub(crate) fn plot_group(layout: &ChartLayout) -> Element {
    Element::new("g").attr(
        "transform",
        format!("translate({}, {})", layout.margins.left, layout.margins.top),
    )
}

/// `M x,y L x,y ...` through every record in order.
pub fn line_path_data(records: &[CaseRecord], x: &TimeScale, y: &ValueScale) -> String {
    let mut d = String::with_capacity(records.len() * 16);
    for (i, r) in records.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&fmt_num(x.to_px(r.date)));
        d.push(',');
        d.push_str(&fmt_num(y.to_px(r.new_cases)));
    }
    d
}

/// "Month" under the plot and the rotated value title left of it.
pub(crate) fn axis_titles(layout: &ChartLayout, theme: &Theme) -> [Element; 2] {
    let iw = layout.inner_width();
    let ih = layout.inner_height();
    let x_title = Element::new("text")
        .attr_num("x", iw / 2.0)
        .attr_num("y", ih + 50.0)
        .attr("text-anchor", "middle")
        .attr("font-size", "14px")
        .attr("fill", theme.foreground.to_hex())
        .text(X_TITLE);
    let y_title = Element::new("text")
        .attr_num("x", -ih / 2.0)
        .attr_num("y", -(layout.margins.left as f64) + 20.0)
        .attr("text-anchor", "middle")
        .attr("font-size", "14px")
        .attr("fill", theme.foreground.to_hex())
        .attr("transform", "rotate(-90)")
        .text(Y_TITLE);
    [x_title, y_title]
}

pub(crate) fn chart_title(layout: &ChartLayout, theme: &Theme, text: String) -> Element {
    Element::new("text")
        .attr("class", "title")
        .attr_num("x", layout.inner_width() / 2.0)
        .attr_num("y", -(layout.margins.top as f64) / 2.0)
        .attr("text-anchor", "middle")
        .attr("font-size", "18px")
        .attr("font-weight", "bold")
        .attr("fill", theme.foreground.to_hex())
        .text(text)
}

fn annotation(x: f64, y: f64, fill: &str, text: String) -> Element {
    Element::new("text").attr_num("x", x).attr_num("y", y).attr("fill", fill).text(text)
}

/// Draw a prepared, non-empty series as a standalone chart surface.
pub fn build_region_surface(region: Region, series: &Series, opts: &RenderOptions) -> Result<Element> {
    let layout = &opts.layout;
    let theme = &opts.theme;
    let label = region.code();
    let empty = || ChartError::EmptySeries { label: label.to_string() };

    let x = TimeScale::new(series.date_extent().ok_or_else(empty)?, (0.0, layout.inner_width()));
    let y_max = series.max_cases().ok_or_else(empty)?;
    let y = ValueScale::new_linear((0.0, y_max), (layout.inner_height(), 0.0));

    let mut chart = plot_group(layout);
    chart.push(
        Element::new("path")
            .attr("class", "line")
            .attr("fill", "none")
            .attr("stroke", theme.line_stroke.to_hex())
            .attr("d", line_path_data(&series.records, &x, &y)),
    );

    let ext = find_extrema(series, label)?;
    let (lx, ly) = (x.to_px(ext.low.date), y.to_px(ext.low.new_cases));
    let (hx, hy) = (x.to_px(ext.high.date), y.to_px(ext.high.new_cases));
    let low = theme.low_point.to_hex();
    let high = theme.high_point.to_hex();

    for (cx, cy, fill) in [(lx, ly, &low), (hx, hy, &high)] {
        chart.push(
            Element::new("circle")
                .attr("class", "marker")
                .attr_num("cx", cx)
                .attr_num("cy", cy)
                .attr_num("r", MARKER_RADIUS)
                .attr("fill", fill.as_str()),
        );
    }
    chart.push(annotation(lx + 10.0, ly - 20.0, &low, "Least Daily Cases".to_string()));
    chart.push(annotation(hx - 100.0, hy - 20.0, &high, "Most Daily Cases".to_string()));
    chart.push(annotation(lx + 10.0, ly - 40.0, &low, format!("Value: {}", fmt_num(ext.low.new_cases))));
    chart.push(annotation(hx - 100.0, hy - 60.0, &high, format!("Value: {}", fmt_num(ext.high.new_cases))));

    chart.push(axis_bottom(&x, layout.inner_height()));
    chart.push(axis_left(&y));
    for t in axis_titles(layout, theme) {
        chart.push(t);
    }
    chart.push(chart_title(layout, theme, format!("Daily {label} COVID-19 Cases")));

    Ok(surface_shell(opts).child(chart))
}

/// Replace the active chart with `region`'s chart built from freshly fetched records.
/// On error the previous chart is already gone and the caller keeps `previous`.
pub fn render_region_chart(
    doc: &mut Document,
    previous: ActiveChart,
    region: Region,
    raw: Vec<RawRecord>,
    opts: &RenderOptions,
) -> Result<ActiveChart> {
    teardown(doc, previous);
    let series = prepare_series(raw, opts.policy)?;
    let surface = build_region_surface(region, &series, opts)?;
    doc.append_surface(&region.container_id(), surface);
    info!(chart = %region, records = series.len(), "chart rendered");
    Ok(Some(ChartId::Region(region)))
}
