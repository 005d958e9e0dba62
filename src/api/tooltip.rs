use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, BarKey, ChartInput};

use super::{BarLabelContext, ChartArea, ChartConfig, LabelFormatter, format_bar_label};

/// Vertical distance between a bar top and its tooltip anchor.
pub const TOOLTIP_OFFSET_PX: f64 = 10.0;

/// Tooltip content and placement, in surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub bar: BarKey,
    pub text: String,
    /// Bottom-center of the tooltip box.
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub box_class: Option<String>,
    pub text_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipEvent {
    Show(Tooltip),
    Hide,
}

/// Builds the tooltip for `bar`, or `None` when `bar` no longer matches `input`.
#[must_use]
pub fn build_tooltip(
    bar: &BarGeometry,
    input: &ChartInput,
    area: &ChartArea,
    config: &ChartConfig,
    formatter: Option<&dyn LabelFormatter>,
) -> Option<Tooltip> {
    let period = input.periods.get(bar.period_index)?;
    let point = period.points.get(bar.point_index)?;
    let context = BarLabelContext {
        value: bar.value,
        label: bar.label.as_deref(),
        parent: point,
        period,
        value_index: bar.value_index,
    };
    let (anchor_x, anchor_y) = area.to_surface(bar.x + bar.width / 2.0, bar.y - TOOLTIP_OFFSET_PX);

    Some(Tooltip {
        bar: bar.key(),
        text: format_bar_label(formatter, &context),
        anchor_x,
        anchor_y,
        box_class: config.tip_box_style_class.clone(),
        text_class: config.tip_text_style_class.clone(),
    })
}
