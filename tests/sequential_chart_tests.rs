use approx::assert_abs_diff_eq;
use deckchart::chart::Chart;
use deckchart::core::{ColorCondition, Record};
use deckchart::render::RenderFrame;

fn abc_chart() -> Chart {
    Chart::new(
        "abc",
        vec![
            Record::new("A", 10.0),
            Record::new("B", 20.0),
            Record::new("C", 30.0),
        ],
    )
    .with_box(100.0, 0.0, 0.0, 100.0)
}

#[test]
fn bar_maps_index_and_value_into_the_box() {
    let chart = abc_chart();
    let mut frame = RenderFrame::new();
    chart.bar(&mut frame, 2.0);

    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), 3);
    let expected = [(0.0, 100.0 / 3.0), (50.0, 200.0 / 3.0), (100.0, 100.0)];
    for (line, (x, y)) in lines.iter().zip(expected) {
        assert_abs_diff_eq!(line.x1, x, epsilon = 1e-9);
        assert_abs_diff_eq!(line.x2, x, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y1, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y2, y, epsilon = 1e-9);
        assert_eq!(line.stroke_width, 2.0);
        assert_eq!(line.color, "rgb(128,128,128)");
    }
}

#[test]
fn zero_basing_changes_the_lowest_bar() {
    let mut chart = abc_chart();
    let mut zero_based = RenderFrame::new();
    chart.bar(&mut zero_based, 1.0);

    chart.zero_based = false;
    let mut min_based = RenderFrame::new();
    chart.bar(&mut min_based, 1.0);

    let first_zero = zero_based.lines().next().expect("bar");
    let first_min = min_based.lines().next().expect("bar");
    assert_abs_diff_eq!(first_zero.y2, 100.0 / 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first_min.y2, 0.0, epsilon = 1e-9);
}

#[test]
fn line_emits_one_segment_per_adjacent_pair() {
    let chart = abc_chart();
    let mut frame = RenderFrame::new();
    chart.line(&mut frame, 0.2);

    let segments: Vec<_> = frame.lines().collect();
    assert_eq!(segments.len(), 2);
    assert_abs_diff_eq!(segments[0].x2, segments[1].x1, epsilon = 1e-9);
    assert_abs_diff_eq!(segments[0].y2, segments[1].y1, epsilon = 1e-9);
}

#[test]
fn area_closes_against_the_baseline() {
    let chart = abc_chart().with_box(80.0, 20.0, 10.0, 90.0);
    let mut frame = RenderFrame::new();
    chart.area(&mut frame);

    let polygon = frame.polygons().next().expect("polygon");
    assert_eq!(polygon.xs.len(), 5);
    assert_eq!((polygon.xs[0], polygon.ys[0]), (10.0, 20.0));
    assert_eq!((polygon.xs[4], polygon.ys[4]), (90.0, 20.0));
    assert_abs_diff_eq!(polygon.ys[3], 80.0, epsilon = 1e-9);
}

#[test]
fn conditional_variants_recolor_inside_inclusive_window() {
    let chart = abc_chart();
    let condition = ColorCondition::new(20.0, 30.0, "red");

    let mut frame = RenderFrame::new();
    chart.conditional_bar(&mut frame, 1.0, &condition);
    let colors: Vec<&str> = frame.lines().map(|line| line.color.as_str()).collect();
    assert_eq!(colors, ["rgb(128,128,128)", "red", "red"]);

    let mut frame = RenderFrame::new();
    chart.conditional_scatter(&mut frame, 1.0, &condition);
    let colors: Vec<&str> = frame.circles().map(|dot| dot.color.as_str()).collect();
    assert_eq!(colors, ["rgb(128,128,128)", "red", "red"]);

    let mut frame = RenderFrame::new();
    chart.conditional_line(&mut frame, 1.0, &condition);
    let colors: Vec<&str> = frame.lines().map(|line| line.color.as_str()).collect();
    assert_eq!(colors, ["rgb(128,128,128)", "red"]);
}

#[test]
fn regression_line_spans_first_to_last_index() {
    let records = (0..5)
        .map(|i| Record::new(format!("r{i}"), 2.0 * i as f64 + 3.0))
        .collect();
    let chart = Chart::new("fit", records).with_box(100.0, 0.0, 0.0, 100.0);
    let (m, b) = chart.regression();
    assert_abs_diff_eq!(m, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b, 3.0, epsilon = 1e-9);

    let mut frame = RenderFrame::new();
    chart.regression_line(&mut frame, 0.2);
    let line = frame.lines().next().expect("regression");
    assert_eq!((line.x1, line.x2), (0.0, 100.0));
    assert_abs_diff_eq!(line.y1, chart.y_for_value(3.0), epsilon = 1e-9);
    assert_abs_diff_eq!(line.y2, 100.0, epsilon = 1e-9);
}

#[test]
fn vdot_draws_a_dotted_stem_and_a_cap() {
    let chart = Chart::new("v", vec![Record::new("a", 5.0), Record::new("b", 10.0)])
        .with_box(10.0, 0.0, 0.0, 100.0);
    let mut frame = RenderFrame::new();
    chart.vdot(&mut frame, 1.5).expect("vdot");

    // stems of 6 and 11 dots (both ends inclusive) plus one cap per record
    let circles: Vec<_> = frame.circles().collect();
    assert_eq!(circles.len(), 6 + 1 + 11 + 1);
    assert_eq!(circles[6].radius, 1.5);
    assert_eq!(circles[0].radius, 0.25);
}

#[test]
fn values_sit_above_each_point() {
    let chart = abc_chart();
    let mut frame = RenderFrame::new();
    chart.values(&mut frame, 2.0);

    let texts: Vec<_> = frame.texts().collect();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[2].text, "30.0");
    assert_abs_diff_eq!(texts[2].y, 102.0, epsilon = 1e-9);
    assert_eq!(texts[2].color, "rgb(128,0,0)");
}

#[test]
fn degenerate_domain_yields_non_finite_geometry_without_error() {
    let chart = Chart::new("flat", vec![Record::new("a", 0.0), Record::new("b", 0.0)]);
    let mut frame = RenderFrame::new();
    chart.bar(&mut frame, 1.0);
    assert_eq!(frame.len(), 2);
    assert!(frame.validate().is_err());
}
