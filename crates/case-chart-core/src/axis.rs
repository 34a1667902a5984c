// File: crates/case-chart-core/src/axis.rs
// Summary: Bottom/left axis element builders with automatic ticks.

use crate::element::{fmt_num, Element};
use crate::scale::{TimeScale, ValueScale};
use crate::ticks::{format_date_tick, format_value_tick, tick_step, DEFAULT_TICK_COUNT};

/// Length of tick marks and of the outer ends of the domain line.
const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 3.0;
/// Half-unit shift that puts 1-unit strokes on pixel centres.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// One tick: offset along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|t| Tick { offset: scale.instant_to_px(t), label: format_date_tick(t) })
        .collect()
}

pub fn value_ticks(scale: &ValueScale, count: usize) -> Vec<Tick> {
    let (lo, hi) = scale.domain();
    let step = tick_step(lo, hi, count);
    scale
        .ticks(count)
        .into_iter()
        .map(|v| Tick { offset: scale.to_px(v), label: format_value_tick(v, step) })
        .collect()
}

/// Axis group: a domain line spanning `range` plus one tick group per tick.
pub fn build_axis(orient: AxisOrient, range: (f64, f64), ticks: &[Tick]) -> Element {
    let r0 = range.0 + CRISP_OFFSET;
    let r1 = range.1 + CRISP_OFFSET;
    let (class, anchor, domain) = match orient {
        AxisOrient::Bottom => (
            "axis axis-bottom",
            "middle",
            format!(
                "M{},{}V{}H{}V{}",
                fmt_num(r0), fmt_num(TICK_SIZE), fmt_num(CRISP_OFFSET), fmt_num(r1), fmt_num(TICK_SIZE)
            ),
        ),
        AxisOrient::Left => (
            "axis axis-left",
            "end",
            format!(
                "M{},{}H{}V{}H{}",
                fmt_num(-TICK_SIZE), fmt_num(r0), fmt_num(CRISP_OFFSET), fmt_num(r1), fmt_num(-TICK_SIZE)
            ),
        ),
    };

    let mut g = Element::new("g")
        .attr("class", class)
        .attr("fill", "none")
        .attr("font-size", "10")
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor);
    g.push(Element::new("path").attr("class", "domain").attr("stroke", "currentColor").attr("d", domain));

    let spacing = TICK_SIZE + TICK_PADDING;
    for t in ticks {
        let pos = fmt_num(t.offset + CRISP_OFFSET);
        let tick = match orient {
            AxisOrient::Bottom => Element::new("g")
                .attr("class", "tick")
                .attr("opacity", "1")
                .attr("transform", format!("translate({pos},0)"))
                .child(Element::new("line").attr("stroke", "currentColor").attr_num("y2", TICK_SIZE))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr_num("y", spacing)
                        .attr("dy", "0.71em")
                        .text(t.label.as_str()),
                ),
            AxisOrient::Left => Element::new("g")
                .attr("class", "tick")
                .attr("opacity", "1")
                .attr("transform", format!("translate(0,{pos})"))
                .child(Element::new("line").attr("stroke", "currentColor").attr_num("x2", -TICK_SIZE))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr_num("x", -spacing)
                        .attr("dy", "0.32em")
                        .text(t.label.as_str()),
                ),
        };
        g.push(tick);
    }
    g
}

/// Time axis along the bottom edge of a plot `inner_height` tall.
pub fn axis_bottom(scale: &TimeScale, inner_height: f64) -> Element {
    let ticks = time_ticks(scale, DEFAULT_TICK_COUNT);
    build_axis(AxisOrient::Bottom, scale.range(), &ticks)
        .attr("transform", format!("translate(0,{})", fmt_num(inner_height)))
}

/// Value axis along the left edge.
pub fn axis_left(scale: &ValueScale) -> Element {
    let ticks = value_ticks(scale, DEFAULT_TICK_COUNT);
    build_axis(AxisOrient::Left, scale.range(), &ticks)
}
