mod chart;
mod chart_area;
mod config;
mod frame_builder;
mod geometry;
mod invalidation;
mod label_formatter;
mod sizing;
mod tooltip;

pub use chart::GroupedBarChart;
pub use chart_area::{ChartArea, RIGHT_MARGIN_PX, X_AXIS_GAP_PX, Y_AXIS_WIDTH_PX};
pub use config::{
    ChartConfig, ChartWidth, DEFAULT_AXIS_OFFSET, DEFAULT_TIP_OFFSET_TOP,
    DEFAULT_TREND_LINE_CLASS, DEFAULT_TREND_POINT_CLASS, DEFAULT_TREND_POINT_RADIUS,
};
pub use frame_builder::{
    AXIS_COLOR, AXIS_FONT_SIZE_PX, AXIS_TICK_SIZE_PX, TREND_COLOR, TREND_STROKE_WIDTH,
    Y_AXIS_TITLE_INSET_PX, build_render_frame,
};
pub use geometry::{
    ChartGeometry, PeriodBandGeometry, ValueTick, build_chart_geometry,
    build_chart_geometry_with_colors,
};
pub use invalidation::{InvalidationReason, PendingInvalidation};
pub use label_formatter::{
    BarLabelContext, DefaultLabelFormatter, LabelFormatter, SharedLabelFormatter,
    format_bar_label,
};
pub use sizing::{ContainerSize, FixedSizeResolver, SizeResolver, resolve_surface_size};
pub use tooltip::{TOOLTIP_OFFSET_PX, Tooltip, TooltipEvent, build_tooltip};
