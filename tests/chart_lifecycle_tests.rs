use approx::assert_abs_diff_eq;
use grouped_bar_chart::api::{
    BarLabelContext, ChartConfig, ContainerSize, FixedSizeResolver, GroupedBarChart,
    InvalidationReason, TooltipEvent,
};
use grouped_bar_chart::core::{ChartInput, Period, Point};
use grouped_bar_chart::render::{AxisOrientation, NullRenderer};
use grouped_bar_chart::ChartError;

fn sample_input() -> ChartInput {
    ChartInput::new(vec![
        Period::new("A", vec![Point::new([4.0, 8.0])]),
        Period::new("B", vec![Point::new([15.0, 16.0])]),
    ])
}

fn sample_sizer() -> FixedSizeResolver {
    // 200 x 100 chart area after the default top and x-axis reservations.
    FixedSizeResolver::new(201.0, 130.0)
}

fn rendered_chart(config: ChartConfig, input: ChartInput) -> GroupedBarChart<NullRenderer> {
    let mut chart = GroupedBarChart::new(NullRenderer::default(), config);
    chart.set_data(input);
    chart.render(&sample_sizer()).expect("render");
    chart
}

#[test]
fn render_emits_bars_and_period_axis() {
    let chart = rendered_chart(
        ChartConfig::default().with_split_pairs(false),
        sample_input(),
    );
    let renderer = chart.renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_rect_count, 4);
    assert_eq!(renderer.last_axis_count, 1);
    assert_eq!(renderer.last_path_count, 0);

    let frame = renderer.last_frame.as_ref().expect("frame");
    assert_eq!(frame.viewport.width, 201);
    assert_eq!(frame.viewport.height, 130);

    let rect = frame.rects[1];
    assert_abs_diff_eq!(rect.x, 55.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.y, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.height, 50.0, epsilon = 1e-9);

    let axis = &frame.axes[0];
    assert_eq!(axis.orientation, AxisOrientation::Bottom);
    assert_abs_diff_eq!(axis.y, 112.0, epsilon = 1e-9);
    let labels: Vec<&str> = axis.ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B"]);
}

#[test]
fn y_axis_title_reserves_left_margin() {
    let chart = rendered_chart(
        ChartConfig::default(),
        sample_input().with_y_axis_title("Units"),
    );
    let geometry = chart.geometry().expect("geometry");
    assert_eq!(geometry.area.origin_x, 30.0);
    assert_eq!(geometry.area.width, 170.0);
    assert!(!geometry.value_ticks.is_empty());

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    let value_axis = frame
        .axes
        .iter()
        .find(|axis| axis.orientation == AxisOrientation::Left)
        .expect("value axis");
    assert_eq!(value_axis.x, 20.0);

    assert_eq!(frame.texts.len(), 1);
    let title = &frame.texts[0];
    assert_eq!(title.text, "Units");
    assert_eq!(title.rotation_deg, -90.0);
    assert_eq!(title.y, 10.0);
}

#[test]
fn trend_line_adds_path_and_markers() {
    let config = ChartConfig::default()
        .with_split_pairs(false)
        .with_trend_lines(true);
    let chart = rendered_chart(config, sample_input());

    let renderer = chart.renderer();
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_circle_count, 2);

    let frame = renderer.last_frame.as_ref().expect("frame");
    assert_eq!(frame.paths[0].style_class, "trend-line");
    assert_abs_diff_eq!(frame.circles[0].cx, 101.25, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.circles[0].cy, 60.0, epsilon = 1e-9);
}

#[test]
fn zero_marker_radius_hides_trend_points() {
    let config = ChartConfig::default()
        .with_trend_lines(true)
        .with_trend_point_radius(0.0);
    let chart = rendered_chart(config, sample_input());
    assert_eq!(chart.renderer().last_circle_count, 0);
    assert_eq!(chart.renderer().last_path_count, 1);
}

#[test]
fn unavailable_size_skips_pass_and_retries_later() {
    let mut chart = GroupedBarChart::new(NullRenderer::default(), ChartConfig::default());
    chart.set_data(sample_input());

    let err = chart
        .render_if_invalidated(&FixedSizeResolver::detached())
        .expect_err("no size");
    assert!(matches!(err, ChartError::SizeUnavailable { .. }));
    assert!(err.is_recoverable());
    assert!(chart.has_pending_invalidation());
    assert_eq!(chart.renderer().render_count, 0);

    let rendered = chart
        .render_if_invalidated(&sample_sizer())
        .expect("retry");
    assert!(rendered);
    assert_eq!(chart.renderer().render_count, 1);
}

#[test]
fn render_gate_tracks_changes() {
    let mut chart = rendered_chart(ChartConfig::default(), sample_input());
    assert!(!chart.render_if_invalidated(&sample_sizer()).expect("gate"));

    chart.notify_resize();
    assert!(
        chart
            .pending_invalidation()
            .contains(InvalidationReason::Resized)
    );
    assert!(chart.render_if_invalidated(&sample_sizer()).expect("gate"));

    chart.set_config(ChartConfig::default().with_trend_lines(true));
    assert!(
        chart
            .pending_invalidation()
            .contains(InvalidationReason::ConfigChanged)
    );
    assert!(chart.render_if_invalidated(&sample_sizer()).expect("gate"));
    assert_eq!(chart.renderer().render_count, 3);
}

#[test]
fn parent_size_is_used_when_element_has_none() {
    let mut chart = GroupedBarChart::new(NullRenderer::default(), ChartConfig::default());
    chart.set_data(sample_input());
    let sizer = FixedSizeResolver {
        element: None,
        parent: Some(ContainerSize::new(300.0, 150.0)),
    };
    chart.render(&sizer).expect("render");
    let geometry = chart.geometry().expect("geometry");
    assert_eq!(geometry.area.surface, ContainerSize::new(300.0, 150.0));
}

#[test]
fn tooltip_shows_on_enter_and_hides_on_leave() {
    let mut chart = rendered_chart(
        ChartConfig::default()
            .with_split_pairs(false)
            .with_tip_style_classes("tip-box", "tip-text"),
        sample_input(),
    );

    let Some(TooltipEvent::Show(tooltip)) = chart.pointer_move(77.0, 80.0) else {
        panic!("expected tooltip");
    };
    assert_eq!(tooltip.text, "8");
    assert_abs_diff_eq!(tooltip.anchor_x, 77.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tooltip.anchor_y, 50.0, epsilon = 1e-9);
    assert_eq!(tooltip.box_class.as_deref(), Some("tip-box"));
    assert_eq!(tooltip.text_class.as_deref(), Some("tip-text"));

    assert_eq!(chart.pointer_move(78.0, 80.0), None);
    assert_eq!(chart.pointer_move(5.0, 30.0), Some(TooltipEvent::Hide));
    assert_eq!(chart.pointer_leave(), None);

    assert!(matches!(chart.pointer_move(120.0, 100.0), Some(TooltipEvent::Show(_))));
    assert_eq!(chart.pointer_leave(), Some(TooltipEvent::Hide));
}

#[test]
fn tooltip_uses_installed_formatter() {
    let mut chart = rendered_chart(
        ChartConfig::default().with_split_pairs(false),
        sample_input(),
    );
    chart.set_label_formatter(|ctx: &BarLabelContext<'_>| {
        format!("{} = {}", ctx.period.title, ctx.value)
    });

    let Some(TooltipEvent::Show(tooltip)) = chart.pointer_move(150.0, 100.0) else {
        panic!("expected tooltip");
    };
    assert_eq!(tooltip.text, "B = 16");
}

#[test]
fn pointer_events_before_first_render_are_ignored() {
    let mut chart = GroupedBarChart::new(NullRenderer::default(), ChartConfig::default());
    chart.set_data(sample_input());
    assert_eq!(chart.pointer_move(50.0, 50.0), None);
}
