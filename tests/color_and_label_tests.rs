use grouped_bar_chart::api::{
    BarLabelContext, ChartConfig, ContainerSize, DefaultLabelFormatter, LabelFormatter,
    build_chart_geometry, format_bar_label,
};
use grouped_bar_chart::core::{
    ChartInput, Color, ColorCycle, DEFAULT_PALETTE, LayoutOptions, Period, Point,
    layout_grouped_bars,
};

fn input_with_bars(count: usize) -> ChartInput {
    ChartInput::new(vec![Period::new(
        "A",
        vec![Point::new((0..count).map(|i| i as f64 + 1.0))],
    )])
}

#[test]
fn colors_wrap_after_palette_length() {
    let palette = vec![
        Color::from_rgb8(255, 0, 0),
        Color::from_rgb8(0, 255, 0),
        Color::from_rgb8(0, 0, 255),
    ];
    let mut colors = ColorCycle::with_palette(palette.clone());
    let layout = layout_grouped_bars(
        &input_with_bars(5),
        200.0,
        100.0,
        LayoutOptions::default(),
        &mut colors,
    );

    let assigned: Vec<Color> = layout.bars.iter().map(|bar| bar.color).collect();
    assert_eq!(
        assigned,
        vec![palette[0], palette[1], palette[2], palette[0], palette[1]]
    );
}

#[test]
fn cycle_continues_until_reset() {
    let mut colors = ColorCycle::new();
    let input = input_with_bars(3);

    let first = layout_grouped_bars(&input, 100.0, 50.0, LayoutOptions::default(), &mut colors);
    let second = layout_grouped_bars(&input, 100.0, 50.0, LayoutOptions::default(), &mut colors);
    assert_eq!(second.bars[0].color, DEFAULT_PALETTE[3]);

    colors.reset();
    let third = layout_grouped_bars(&input, 100.0, 50.0, LayoutOptions::default(), &mut colors);
    assert_eq!(first, third);
}

#[test]
fn pure_geometry_is_reproducible() {
    let input = input_with_bars(12);
    let config = ChartConfig::default();
    let surface = ContainerSize::new(320.0, 200.0);

    let first = build_chart_geometry(&input, surface, &config);
    let second = build_chart_geometry(&input, surface, &config);
    assert_eq!(first, second);
    assert_eq!(first.layout.bars[10].color, DEFAULT_PALETTE[0]);
}

#[test]
fn empty_palette_falls_back_to_default() {
    let colors = ColorCycle::with_palette(Vec::new());
    assert_eq!(colors.palette(), DEFAULT_PALETTE.as_slice());
}

fn context<'a>(point: &'a Point, period: &'a Period, value_index: usize) -> BarLabelContext<'a> {
    BarLabelContext {
        value: point.normalized_value(value_index),
        label: point.label(value_index),
        parent: point,
        period,
        value_index,
    }
}

#[test]
fn default_label_prefixes_value_with_label() {
    let point = Point::new([42.0, 7.0]).with_labels(["Answer"]);
    let period = Period::new("Q1", vec![point.clone()]);

    assert_eq!(format_bar_label(None, &context(&point, &period, 0)), "Answer: 42");
    assert_eq!(format_bar_label(None, &context(&point, &period, 1)), "7");
}

#[test]
fn custom_formatter_wins_unless_empty() {
    let point = Point::new([42.0]).with_labels(["Answer"]);
    let period = Period::new("Q1", vec![point.clone()]);
    let ctx = context(&point, &period, 0);

    let custom = |_: &BarLabelContext<'_>| "X".to_owned();
    assert_eq!(format_bar_label(Some(&custom), &ctx), "X");

    let silent = |_: &BarLabelContext<'_>| String::new();
    assert_eq!(format_bar_label(Some(&silent), &ctx), "Answer: 42");
}

#[test]
fn formatter_sees_parent_point_and_period() {
    let point = Point::new([1.5, 2.5]);
    let period = Period::new("Week 3", vec![point.clone()]);

    let formatter = |ctx: &BarLabelContext<'_>| {
        format!(
            "{} #{} of {}: {}",
            ctx.period.title,
            ctx.value_index,
            ctx.parent.values.len(),
            ctx.value
        )
    };
    assert_eq!(
        formatter.format(&context(&point, &period, 1)),
        "Week 3 #1 of 2: 2.5"
    );
    assert_eq!(DefaultLabelFormatter.format(&context(&point, &period, 0)), "1.5");
}
