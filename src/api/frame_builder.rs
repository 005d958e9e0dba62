use crate::core::Color;
use crate::render::{
    AxisOrientation, AxisPrimitive, AxisTick, CirclePrimitive, PathPrimitive, RectPrimitive,
    RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartConfig, ChartGeometry};

pub const AXIS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
pub const TREND_COLOR: Color = Color::rgb(0.25, 0.25, 0.25);
pub const AXIS_FONT_SIZE_PX: f64 = 10.0;
pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub const TREND_STROKE_WIDTH: f64 = 1.5;
/// Distance from the value-axis line to the rotated axis title.
pub const Y_AXIS_TITLE_INSET_PX: f64 = 6.0;

/// Translates chart-local geometry into a surface-space `RenderFrame`.
#[must_use]
pub fn build_render_frame(geometry: &ChartGeometry, config: &ChartConfig) -> RenderFrame {
    let area = &geometry.area;
    let mut frame = RenderFrame::new(area.surface.viewport());

    frame.rects = geometry
        .layout
        .bars
        .iter()
        .map(|bar| {
            let (x, y) = area.to_surface(bar.x, bar.y);
            RectPrimitive::new(x, y, bar.width, bar.height, bar.color)
        })
        .collect();

    if area.has_x_axis {
        frame.axes.push(AxisPrimitive {
            orientation: AxisOrientation::Bottom,
            x: area.origin_x,
            y: area.x_axis_y(),
            length: area.width,
            ticks: geometry
                .period_bands
                .iter()
                .map(|period| AxisTick {
                    position: period.band.center(),
                    label: period.title.clone(),
                })
                .collect(),
            tick_size_px: AXIS_TICK_SIZE_PX,
            color: AXIS_COLOR,
            font_size_px: AXIS_FONT_SIZE_PX,
        });
    }

    if area.has_y_axis {
        frame.axes.push(AxisPrimitive {
            orientation: AxisOrientation::Left,
            x: area.y_axis_offset,
            y: area.origin_y,
            length: area.height,
            ticks: geometry
                .value_ticks
                .iter()
                .map(|tick| AxisTick {
                    position: tick.y,
                    label: tick.label.clone(),
                })
                .collect(),
            tick_size_px: AXIS_TICK_SIZE_PX,
            color: AXIS_COLOR,
            font_size_px: AXIS_FONT_SIZE_PX,
        });

        if let Some(title) = geometry.y_axis_title.as_deref() {
            // Reads bottom-to-top, ending at the top of the value axis.
            frame.texts.push(
                TextPrimitive::new(
                    title,
                    area.y_axis_offset + Y_AXIS_TITLE_INSET_PX,
                    area.origin_y,
                    AXIS_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Right,
                )
                .rotated(-90.0),
            );
        }
    }

    if let Some(trend) = &geometry.trend_line {
        if !trend.path.is_empty() {
            frame.paths.push(PathPrimitive {
                segments: trend
                    .path
                    .iter()
                    .map(|segment| segment.translated(area.origin_x, area.origin_y))
                    .collect(),
                stroke_width: TREND_STROKE_WIDTH,
                color: TREND_COLOR,
                style_class: config.trend_line_style_class.clone(),
            });
        }

        let radius = config.effective_trend_point_radius();
        if radius > 0.0 {
            frame.circles = trend
                .vertices
                .iter()
                .map(|vertex| {
                    let (cx, cy) = area.to_surface(vertex.x, vertex.y);
                    CirclePrimitive {
                        cx,
                        cy,
                        radius,
                        fill_color: TREND_COLOR,
                        style_class: config.trend_point_style_class.clone(),
                    }
                })
                .collect();
        }
    }

    frame
}
