use approx::assert_abs_diff_eq;
use grouped_bar_chart::core::{
    ChartInput, ColorCycle, LayoutMetrics, LayoutOptions, Period, Point, layout_grouped_bars,
};

const NO_SPLIT: LayoutOptions = LayoutOptions { split_pairs: false };

fn two_period_input() -> ChartInput {
    ChartInput::new(vec![
        Period::new("A", vec![Point::new([4.0, 8.0])]),
        Period::new("B", vec![Point::new([15.0, 16.0])]),
    ])
}

#[test]
fn largest_value_fills_chart_height() {
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&two_period_input(), 200.0, 100.0, NO_SPLIT, &mut colors);

    assert_eq!(layout.vertical_scale.domain(), (0.0, 16.0));
    assert_eq!(layout.bar_count(), 4);

    let tallest = &layout.bars[3];
    assert_eq!(tallest.value, 16.0);
    assert_abs_diff_eq!(tallest.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tallest.height, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.consumed_height(), 100.0, epsilon = 1e-9);

    let shortest = layout
        .bars
        .iter()
        .min_by(|a, b| a.height.total_cmp(&b.height))
        .expect("bars");
    assert_eq!(shortest.value, 4.0);
    assert_abs_diff_eq!(shortest.height, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shortest.y, 75.0, epsilon = 1e-9);
}

#[test]
fn bars_share_one_width_and_keep_a_gutter() {
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&two_period_input(), 200.0, 100.0, NO_SPLIT, &mut colors);

    assert_abs_diff_eq!(layout.metrics.bar_width, 45.0, epsilon = 1e-9);
    for bar in &layout.bars {
        assert_abs_diff_eq!(bar.width, 44.0, epsilon = 1e-9);
    }

    let xs: Vec<f64> = layout.bars.iter().map(|bar| bar.x).collect();
    let expected = [10.0, 55.0, 100.0, 145.0];
    for (x, want) in xs.iter().zip(expected) {
        assert_abs_diff_eq!(*x, want, epsilon = 1e-9);
    }
}

#[test]
fn gaps_and_bars_partition_chart_width() {
    let input = ChartInput::new(vec![
        Period::new("Q1", vec![Point::new([1.0, 2.0]), Point::new([3.0, 4.0])]),
        Period::new("Q2", vec![Point::new([5.0, 6.0])]),
        Period::new("Q3", vec![Point::new([7.0]), Point::new([8.0, 9.0, 10.0])]),
    ]);
    for split_pairs in [false, true] {
        let metrics = LayoutMetrics::compute(&input, 640.0, 200.0, split_pairs);
        assert_abs_diff_eq!(metrics.consumed_width(), 640.0, epsilon = 1e-9);
    }
}

#[test]
fn missing_value_is_drawn_as_zero() {
    let input = ChartInput::new(vec![Period::new(
        "A",
        vec![Point::from_optional([Some(10.0), None, Some(f64::NAN)])],
    )]);
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&input, 100.0, 50.0, NO_SPLIT, &mut colors);

    assert_eq!(layout.bar_count(), 3);
    for bar in &layout.bars[1..] {
        assert_eq!(bar.value, 0.0);
        assert_eq!(bar.height, 0.0);
        assert_eq!(bar.y, 50.0);
    }
}

#[test]
fn all_zero_values_collapse_to_baseline() {
    let input = ChartInput::new(vec![Period::new("A", vec![Point::new([0.0, 0.0])])]);
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&input, 100.0, 50.0, NO_SPLIT, &mut colors);

    assert!(layout.vertical_scale.is_degenerate());
    assert!(layout.bars.iter().all(|bar| bar.height == 0.0 && bar.y == 50.0));
}

#[test]
fn empty_input_produces_no_bars() {
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&ChartInput::default(), 300.0, 120.0, NO_SPLIT, &mut colors);

    assert_eq!(layout.bar_count(), 0);
    assert_eq!(layout.metrics.bar_width, 0.0);
    assert_eq!(colors.cursor(), 0);
}

#[test]
fn split_pairs_shifts_points_apart() {
    let input = ChartInput::new(vec![Period::new(
        "A",
        vec![Point::new([1.0, 2.0]), Point::new([3.0, 4.0])],
    )]);
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&input, 200.0, 100.0, LayoutOptions::default(), &mut colors);

    let metrics = layout.metrics;
    assert_abs_diff_eq!(metrics.inter_point_gap, 5.0, epsilon = 1e-9);
    let origins = &layout.point_origins[0];
    assert_abs_diff_eq!(
        origins[0],
        metrics.inter_period_gap / 2.0 + metrics.inter_point_gap / 2.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        origins[1],
        origins[0] + 2.0 * metrics.bar_width + metrics.inter_point_gap / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn hit_test_finds_bar_under_pointer() {
    let mut colors = ColorCycle::new();
    let layout = layout_grouped_bars(&two_period_input(), 200.0, 100.0, NO_SPLIT, &mut colors);

    let bar = layout.hit_test(77.0, 70.0).expect("second bar of A");
    assert_eq!((bar.period_index, bar.point_index, bar.value_index), (0, 0, 1));
    assert!(layout.hit_test(5.0, 10.0).is_none());
    assert_eq!(layout.bars_in_period(1).count(), 2);
}
