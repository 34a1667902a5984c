// File: crates/case-chart-core/src/combined.rs
// Summary: Overlay chart of all regions on shared scales, with per-region colours and a legend.

use tracing::{debug, info};

use crate::axis::{axis_bottom, axis_left};
use crate::chart::{axis_titles, chart_title, line_path_data, plot_group, surface_shell, RenderOptions};
use crate::document::Document;
use crate::element::{fmt_num, Element};
use crate::error::{ChartError, Result};
use crate::extrema::{highest, lowest};
use crate::region::{Region, COMBINED_CONTAINER};
use crate::scale::{date_extent, OrdinalScale, TimeScale, ValueScale};
use crate::series::{prepare_series, CaseRecord, RawRecord, RegionSeries};
use crate::tracker::{teardown, ActiveChart, ChartId};

pub const COMBINED_TITLE: &str = "Combined New Cases for All States";

/// Draw prepared region series (non-empty each) as one overlay surface.
/// Extrema are scanned per region here even when the caller already knows them.
pub fn build_combined_surface(groups: &[RegionSeries], opts: &RenderOptions) -> Result<Element> {
    let layout = &opts.layout;
    let theme = &opts.theme;

    let shared_max = groups.iter().filter_map(|g| g.series.max_cases()).reduce(f64::max);

    let low_points = groups
        .iter()
        .map(|g| -> Result<(&'static str, CaseRecord)> { Ok((g.label(), lowest(&g.series, g.label())?)) })
        .collect::<Result<Vec<(&'static str, CaseRecord)>>>()?;
    let high_points = groups
        .iter()
        .map(|g| -> Result<(&'static str, CaseRecord)> { Ok((g.label(), highest(&g.series, g.label())?)) })
        .collect::<Result<Vec<(&'static str, CaseRecord)>>>()?;

    let all_records = groups.iter().flat_map(|g| g.series.iter());
    let no_data = || ChartError::EmptySeries { label: "combined".to_string() };
    let x = TimeScale::new(date_extent(all_records).ok_or_else(no_data)?, (0.0, layout.inner_width()));
    let y = ValueScale::new_linear((0.0, shared_max.ok_or_else(no_data)?), (layout.inner_height(), 0.0));
    debug!(domain = ?x.domain(), max = ?y.domain().1, "combined scales");

    let colors = OrdinalScale::new(
        groups.iter().map(|g| g.region).collect::<Vec<Region>>(),
        theme.palette.to_vec(),
    );
    let color_of = |r: Region| colors.get(&r).copied().unwrap_or(theme.line_stroke).to_hex();

    let mut chart = plot_group(layout);
    for g in groups {
        chart.push(
            Element::new("g").attr("class", "line-group").child(
                Element::new("path")
                    .attr("class", "line")
                    .attr("fill", "none")
                    .attr("stroke", color_of(g.region))
                    .attr("d", line_path_data(&g.series.records, &x, &y)),
            ),
        );
    }

    let low = theme.low_point.to_hex();
    let high = theme.high_point.to_hex();
    for (label, p) in &low_points {
        chart.push(
            Element::new("text")
                .attr_num("x", x.to_px(p.date) + 10.0)
                .attr_num("y", y.to_px(p.new_cases) - 10.0)
                .attr("fill", low.as_str())
                .text(format!("Least Daily Cases ({label}): {}", fmt_num(p.new_cases))),
        );
    }
    for (label, p) in &high_points {
        chart.push(
            Element::new("text")
                .attr_num("x", x.to_px(p.date) - 110.0)
                .attr_num("y", y.to_px(p.new_cases) - 10.0)
                .attr("fill", high.as_str())
                .text(format!("Most Daily Cases ({label}): {}", fmt_num(p.new_cases))),
        );
    }

    let mut legend = Element::new("g").attr("class", "legend");
    for (i, g) in groups.iter().enumerate() {
        legend.push(
            Element::new("text")
                .attr_num("x", layout.inner_width() + 10.0)
                .attr_num("y", 20.0 + i as f64 * 20.0)
                .attr("fill", color_of(g.region))
                .text(format!("State: {}", g.label())),
        );
    }
    chart.push(legend);

    chart.push(axis_bottom(&x, layout.inner_height()));
    chart.push(axis_left(&y));
    for t in axis_titles(layout, theme) {
        chart.push(t);
    }
    chart.push(chart_title(layout, theme, COMBINED_TITLE.to_string()));

    Ok(surface_shell(opts).child(chart))
}

/// Replace the active chart with the overlay of all regions.
/// `raw` is in `Region::ALL` order (NY, NJ, PA).
pub fn render_combined_chart(
    doc: &mut Document,
    previous: ActiveChart,
    raw: [Vec<RawRecord>; 3],
    opts: &RenderOptions,
) -> Result<ActiveChart> {
    teardown(doc, previous);
    let mut groups = Vec::with_capacity(raw.len());
    for (region, records) in Region::ALL.into_iter().zip(raw) {
        let series = prepare_series(records, opts.policy)?;
        debug!(%region, records = series.len(), "combined input");
        groups.push(RegionSeries { region, series });
    }
    let surface = build_combined_surface(&groups, opts)?;
    doc.append_surface(COMBINED_CONTAINER, surface);
    info!(chart = "combined", "chart rendered");
    Ok(Some(ChartId::Combined))
}
