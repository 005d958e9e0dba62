use serde::{Deserialize, Serialize};

use crate::core::ChartInput;

use super::{ChartConfig, ContainerSize};

/// Right margin kept free so the last bar's edge is not clipped.
pub const RIGHT_MARGIN_PX: f64 = 1.0;
/// Width of the value-axis line and tick marks, reserved with its labels.
pub const Y_AXIS_WIDTH_PX: f64 = 10.0;
/// Gap between the chart bottom and the period axis line.
pub const X_AXIS_GAP_PX: f64 = 2.0;

/// Plot rectangle inside the surface, plus axis placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub surface: ContainerSize,
    /// Top-left of the chart-local coordinate space on the surface.
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    pub x_axis_offset: f64,
    pub y_axis_offset: f64,
    pub y_axis_width: f64,
    pub has_x_axis: bool,
    pub has_y_axis: bool,
}

impl ChartArea {
    /// Splits `surface` into axis reservations and the plot area.
    ///
    /// The period axis is present whenever there is at least one period; the
    /// value axis only when the input carries a y-axis title.
    #[must_use]
    pub fn compute(input: &ChartInput, config: &ChartConfig, surface: ContainerSize) -> Self {
        let top = config.effective_tip_offset_top();
        let has_y_axis = input.has_y_axis_title();
        let has_x_axis = !input.periods.is_empty();

        let (y_axis_offset, y_axis_width) = if has_y_axis {
            (config.effective_y_axis_offset(), Y_AXIS_WIDTH_PX)
        } else {
            (0.0, 0.0)
        };
        let x_axis_offset = if has_x_axis {
            config.effective_x_axis_offset()
        } else {
            0.0
        };

        let width = (surface.width - RIGHT_MARGIN_PX - y_axis_offset - y_axis_width).max(0.0);
        let height = (surface.height - top - x_axis_offset).max(0.0);

        Self {
            surface,
            origin_x: y_axis_offset + y_axis_width,
            origin_y: top,
            width,
            height,
            x_axis_offset,
            y_axis_offset,
            y_axis_width,
            has_x_axis,
            has_y_axis,
        }
    }

    /// Converts a chart-local position to surface coordinates.
    #[must_use]
    pub fn to_surface(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.origin_x, y + self.origin_y)
    }

    /// Converts a surface position to chart-local coordinates.
    #[must_use]
    pub fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.origin_x, y - self.origin_y)
    }

    /// Surface y of the period axis line.
    #[must_use]
    pub fn x_axis_y(&self) -> f64 {
        self.height + self.origin_y + X_AXIS_GAP_PX
    }
}
