use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    Band, ChartInput, ColorCycle, DEFAULT_TICK_COUNT, GroupedLayout, TrendLine,
    build_period_band_scale, build_point_sub_band_scale, build_trend_line, format_tick,
    layout_grouped_bars, nice_step, nice_ticks,
};

use super::{ChartArea, ChartConfig, ContainerSize};

/// Period band on the horizontal axis with its point sub-bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBandGeometry {
    pub title: String,
    pub band: Band,
    pub point_bands: Vec<Band>,
}

/// One value-axis tick in chart-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Everything one render pass derives from input, size and config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub area: ChartArea,
    pub layout: GroupedLayout,
    /// Period bands in ordinal-domain order (duplicate titles collapsed).
    pub period_bands: Vec<PeriodBandGeometry>,
    pub value_ticks: Vec<ValueTick>,
    /// Value-axis title; present exactly when the value axis is drawn.
    pub y_axis_title: Option<String>,
    pub trend_line: Option<TrendLine>,
}

/// Pure geometry for one render pass, with a fresh color cycle.
#[must_use]
pub fn build_chart_geometry(
    input: &ChartInput,
    surface: ContainerSize,
    config: &ChartConfig,
) -> ChartGeometry {
    let mut colors = ColorCycle::with_palette(config.palette.clone());
    build_chart_geometry_with_colors(input, surface, config, &mut colors)
}

/// Geometry for one render pass drawing bar colors from `colors`.
///
/// The caller owns the cycle and decides when to reset it.
#[must_use]
pub fn build_chart_geometry_with_colors(
    input: &ChartInput,
    surface: ContainerSize,
    config: &ChartConfig,
    colors: &mut ColorCycle,
) -> ChartGeometry {
    let area = ChartArea::compute(input, config, surface);
    let layout = layout_grouped_bars(
        input,
        area.width,
        area.height,
        config.layout_options(),
        colors,
    );
    trace!(
        bar_width = layout.metrics.bar_width,
        inter_period_gap = layout.metrics.inter_period_gap,
        inter_point_gap = layout.metrics.inter_point_gap,
        "grouped layout metrics"
    );

    let period_scale =
        build_period_band_scale(input.periods.iter().map(|period| period.title.as_str()), area.width);
    let period_bands = period_scale
        .iter()
        .map(|(title, band)| {
            let point_count = input
                .periods
                .iter()
                .find(|period| period.title == title)
                .map_or(0, |period| period.points.len());
            PeriodBandGeometry {
                title: title.to_owned(),
                band,
                point_bands: build_point_sub_band_scale(point_count, band.band_width)
                    .bands()
                    .collect(),
            }
        })
        .collect();

    let value_ticks = if area.has_y_axis {
        build_value_ticks(&layout)
    } else {
        Vec::new()
    };

    let trend_line = config
        .trend_lines
        .then(|| build_trend_line(input, &layout.metrics, layout.vertical_scale));

    ChartGeometry {
        area,
        layout,
        period_bands,
        value_ticks,
        y_axis_title: input.y_axis_title.clone().filter(|_| area.has_y_axis),
        trend_line,
    }
}

fn build_value_ticks(layout: &GroupedLayout) -> Vec<ValueTick> {
    let scale = layout.vertical_scale;
    let (start, end) = scale.domain();
    let step = nice_step(start, end, DEFAULT_TICK_COUNT).unwrap_or(1.0);
    nice_ticks(start, end, DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|value| ValueTick {
            value,
            y: scale.value_to_pixel(value),
            label: format_tick(value, step),
        })
        .collect()
}
