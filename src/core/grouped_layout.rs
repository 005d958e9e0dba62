use serde::{Deserialize, Serialize};

use crate::core::{ChartInput, Color, ColorCycle, VerticalScale};

/// Share of the per-period width reserved as inter-period gap.
pub const PERIOD_GAP_RATIO: f64 = 0.1;
/// Share of the per-point width reserved as inter-point gap when splitting pairs.
pub const POINT_GAP_RATIO: f64 = 0.05;
/// Horizontal gutter between adjacent bars.
pub const BAR_GUTTER_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Insert extra spacing between points inside a period.
    pub split_pairs: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { split_pairs: true }
    }
}

/// Identity of one bar: period, point and value index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarKey {
    pub period_index: usize,
    pub point_index: usize,
    pub value_index: usize,
}

/// Chart-local rectangle for one value, plus what is needed to draw it and
/// to answer a tooltip query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub period_index: usize,
    pub point_index: usize,
    pub value_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub label: Option<String>,
    pub color: Color,
}

impl BarGeometry {
    #[must_use]
    pub fn key(&self) -> BarKey {
        BarKey {
            period_index: self.period_index,
            point_index: self.point_index,
            value_index: self.value_index,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Shared spacing figures for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub chart_width: f64,
    pub chart_height: f64,
    pub period_count: usize,
    pub total_point_count: usize,
    pub total_value_count: usize,
    pub inter_period_gap: f64,
    pub inter_point_gap: f64,
    /// Slot width shared by every bar in the chart (gutter included).
    pub bar_width: f64,
}

impl LayoutMetrics {
    #[must_use]
    pub fn compute(input: &ChartInput, chart_width: f64, chart_height: f64, split_pairs: bool) -> Self {
        let chart_width = sanitize_extent(chart_width);
        let chart_height = sanitize_extent(chart_height);
        let period_count = input.periods.len();
        let total_point_count = input.total_point_count();
        let total_value_count = input.total_value_count();

        let inter_period_gap = if period_count == 0 {
            0.0
        } else {
            PERIOD_GAP_RATIO * (chart_width / period_count as f64)
        };
        let inter_point_gap = if split_pairs && total_point_count > 0 {
            POINT_GAP_RATIO * (chart_width / total_point_count as f64)
        } else {
            0.0
        };
        let bar_width = if total_value_count == 0 {
            0.0
        } else {
            (chart_width
                - inter_period_gap * period_count as f64
                - inter_point_gap * total_point_count as f64)
                / total_value_count as f64
        };

        Self {
            chart_width,
            chart_height,
            period_count,
            total_point_count,
            total_value_count,
            inter_period_gap,
            inter_point_gap,
            bar_width,
        }
    }

    /// Horizontal space claimed by gaps and bar slots together.
    #[must_use]
    pub fn consumed_width(&self) -> f64 {
        self.inter_period_gap * self.period_count as f64
            + self.inter_point_gap * self.total_point_count as f64
            + self.bar_width * self.total_value_count as f64
    }

    /// Drawn width of one bar after the gutter, clamped at zero.
    #[must_use]
    pub fn drawn_bar_width(&self) -> f64 {
        (self.bar_width - BAR_GUTTER_PX).max(0.0)
    }

    /// Horizontal translation of period `index` from the chart origin.
    ///
    /// Periods after the first accrue `index * gap / 2` plus a point-gap term
    /// scaled by the period's own point count; the growth is intentionally
    /// non-uniform.
    #[must_use]
    pub fn period_offset(&self, index: usize, point_count: usize) -> f64 {
        if index == 0 {
            return self.inter_period_gap / 2.0;
        }
        let i = index as f64;
        let points = point_count.max(1) as f64;
        i * self.inter_period_gap / 2.0 + (i / points) * self.inter_point_gap / (2.0 * points)
    }
}

/// Absolute geometry of every bar in one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedLayout {
    pub metrics: LayoutMetrics,
    pub vertical_scale: VerticalScale,
    /// Translation of each period group, indexed like `ChartInput::periods`.
    pub period_offsets: Vec<f64>,
    /// Origin of each point, relative to its period translation.
    pub point_origins: Vec<Vec<f64>>,
    pub bars: Vec<BarGeometry>,
}

impl GroupedLayout {
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Tallest drawn bar; equals the chart height whenever the maximum value is drawn.
    #[must_use]
    pub fn consumed_height(&self) -> f64 {
        self.bars.iter().map(|bar| bar.height).fold(0.0, f64::max)
    }

    /// Bars belonging to one period, in traversal order.
    pub fn bars_in_period(&self, period_index: usize) -> impl Iterator<Item = &BarGeometry> + '_ {
        self.bars
            .iter()
            .filter(move |bar| bar.period_index == period_index)
    }

    /// Topmost bar under a chart-local position.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&BarGeometry> {
        self.bars.iter().rev().find(|bar| bar.contains(x, y))
    }
}

/// Lays out every bar of `input` inside a `chart_width` x `chart_height` area.
///
/// Traversal is period-major, then point, then value; `colors` is advanced
/// once per bar in that order and is not reset here.
#[must_use]
pub fn layout_grouped_bars(
    input: &ChartInput,
    chart_width: f64,
    chart_height: f64,
    options: LayoutOptions,
    colors: &mut ColorCycle,
) -> GroupedLayout {
    let metrics = LayoutMetrics::compute(input, chart_width, chart_height, options.split_pairs);
    let vertical_scale = VerticalScale::from_values(input.normalized_values(), metrics.chart_height);

    let mut period_offsets = Vec::with_capacity(metrics.period_count);
    let mut point_origins = Vec::with_capacity(metrics.period_count);
    let mut bars = Vec::with_capacity(metrics.total_value_count);
    let drawn_width = metrics.drawn_bar_width();

    // Shared across periods: each period continues where the previous stopped.
    let mut point_cursor = metrics.inter_period_gap / 2.0;

    for (period_index, period) in input.periods.iter().enumerate() {
        let period_offset = metrics.period_offset(period_index, period.points.len());
        period_offsets.push(period_offset);

        let mut origins = Vec::with_capacity(period.points.len());
        for (point_index, point) in period.points.iter().enumerate() {
            let mut origin = point_cursor;
            if point_index == 0 {
                origin += metrics.inter_point_gap / 2.0;
            }
            origins.push(origin);

            let value_count = point.values.len();
            point_cursor = if value_count == 0 {
                origin
            } else {
                origin
                    + value_count as f64 * metrics.bar_width
                    + metrics.inter_point_gap / value_count as f64
            };

            for (value_index, value) in point.normalized_values().enumerate() {
                let y = vertical_scale.value_to_pixel(value);
                bars.push(BarGeometry {
                    period_index,
                    point_index,
                    value_index,
                    x: period_offset + origin + value_index as f64 * metrics.bar_width,
                    y,
                    width: drawn_width,
                    height: vertical_scale.bar_height(value),
                    value,
                    label: point.label(value_index).map(str::to_owned),
                    color: colors.next_color(),
                });
            }
        }
        point_origins.push(origins);
    }

    GroupedLayout {
        metrics,
        vertical_scale,
        period_offsets,
        point_origins,
        bars,
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
