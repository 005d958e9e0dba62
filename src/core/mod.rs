pub mod band_scale;
pub mod color;
pub mod color_cycle;
pub mod grouped_layout;
pub mod scale;
pub mod ticks;
pub mod trend_line;
pub mod types;

pub use band_scale::{
    Band, PERIOD_BAND_PADDING, PeriodBandScale, RoundBands, build_period_band_scale,
    build_point_sub_band_scale,
};
pub use color::Color;
pub use color_cycle::{ColorCycle, DEFAULT_PALETTE};
pub use grouped_layout::{
    BAR_GUTTER_PX, BarGeometry, BarKey, GroupedLayout, LayoutMetrics, LayoutOptions, PERIOD_GAP_RATIO,
    POINT_GAP_RATIO, layout_grouped_bars,
};
pub use scale::{VerticalScale, build_vertical_scale};
pub use ticks::{DEFAULT_TICK_COUNT, TickValues, format_tick, nice_step, nice_ticks};
pub use trend_line::{
    CARDINAL_TENSION, PathSegment, TrendLine, TrendVertex, build_trend_line,
    build_trend_vertices, cardinal_path, trend_vertex_x,
};
pub use types::{ChartInput, Period, Point, Viewport};
