use approx::assert_abs_diff_eq;
use deckchart::api::{ChartKind, ChartSettings, ChartSpec, ColumnOptions, ProportionalGridOptions};
use deckchart::chart::Chart;
use deckchart::core::{AxisRange, ColorCondition, Record};
use deckchart::error::ChartError;
use deckchart::input::InputFormat;
use deckchart::render::RenderFrame;

fn records() -> Vec<Record> {
    vec![
        Record::new("A", 10.0),
        Record::new("B", 20.0),
        Record::new("C", 30.0),
    ]
}

#[test]
fn column_bar_width_defaults_to_box_over_count_plus_one() {
    let settings =
        ChartSettings::for_kind(ChartKind::Bar, 90.0, 30.0, 10.0, 90.0).with_x_labels(0, 0.0);
    let mut chart = Chart::new("", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("bar");

    let bars: Vec<_> = frame.lines().collect();
    assert_eq!(bars.len(), 3);
    assert!(bars.iter().all(|bar| bar.stroke_width == 20.0));
    assert!(bars.iter().all(|bar| bar.color == "lightsteelblue"));
    assert_eq!(frame.texts().count(), 0);
}

#[test]
fn column_overlays_draw_in_order_and_restore_opacity() {
    let options = ColumnOptions {
        scatter: true,
        line: true,
        area: true,
        area_opacity: 25.0,
        ..ColumnOptions::default()
    }
    .with_bar_width(2.0);
    let settings = ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0)
        .with_spec(ChartSpec::Column(options))
        .with_x_labels(0, 0.0);
    let mut chart = Chart::new("", records());
    chart.opacity = 80.0;
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("column");

    // 3 bars, 3 dots, 2 segments, 1 polygon
    assert_eq!(frame.len(), 9);
    let polygon = frame.polygons().next().expect("area");
    assert_eq!(polygon.opacity, 25.0);
    assert_eq!(chart.opacity, 80.0);
    assert!(frame.lines().take(3).all(|bar| bar.stroke_width == 2.0));
}

#[test]
fn line_kind_draws_bars_under_the_line() {
    let settings =
        ChartSettings::for_kind(ChartKind::Line, 90.0, 30.0, 10.0, 90.0).with_x_labels(0, 0.0);
    let mut chart = Chart::new("", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("line");

    let lines: Vec<_> = frame.lines().collect();
    // 3 bars first, then 2 line segments
    assert_eq!(lines.len(), 5);
    assert!(lines[..3].iter().all(|bar| bar.stroke_width == 20.0));
    assert!(lines[3..].iter().all(|segment| segment.stroke_width == 0.2));
}

#[test]
fn condition_recolors_column_and_horizontal_bars() {
    let condition = ColorCondition::parse("15,30,red").expect("condition");
    let settings = ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0)
        .with_condition(condition.clone())
        .with_x_labels(0, 0.0);
    let mut chart = Chart::new("", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("bar");
    let colors: Vec<&str> = frame.lines().map(|line| line.color.as_str()).collect();
    assert_eq!(colors, ["lightsteelblue", "red", "red"]);

    let settings = ChartSettings::for_kind(ChartKind::HorizontalBar, 0.0, 0.0, 0.0, 0.0)
        .with_condition(condition);
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("hbar");
    let colors: Vec<&str> = frame.lines().map(|line| line.color.as_str()).collect();
    assert_eq!(colors, ["lightsteelblue", "red", "red"]);
}

#[test]
fn axis_defaults_to_a_nice_range() {
    let options = ColumnOptions::default().with_axis(true, true);
    let settings = ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0)
        .with_spec(ChartSpec::Column(options))
        .with_x_labels(0, 0.0);
    let mut chart = Chart::new("", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("axis");

    // 0..30 every 6: six ticks, each a gridline and a label
    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, ["0.0", "6.0", "12.0", "18.0", "24.0", "30.0"]);
    assert_eq!(frame.lines().count(), 3 + 6);
}

#[test]
fn explicit_axis_range_wins() {
    let options = ColumnOptions::default().with_axis(true, false);
    let settings = ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0)
        .with_spec(ChartSpec::Column(options))
        .with_axis_range(AxisRange::parse("0,30,15").expect("range"))
        .with_x_labels(0, 0.0);
    let mut chart = Chart::new("", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("axis");
    assert_eq!(frame.texts().count(), 3);
}

#[test]
fn title_is_drawn_in_black_without_changing_the_data_color() {
    let options = ColumnOptions::default().with_title(true);
    let settings = ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0)
        .with_spec(ChartSpec::Column(options))
        .with_x_labels(0, 0.0);
    let mut chart = Chart::new("Quarterly", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("title");

    let title = frame.texts().next().expect("title");
    assert_eq!(title.text, "Quarterly");
    assert_eq!(title.color, "black");
    assert_abs_diff_eq!(title.y, 95.0, epsilon = 1e-9);
    assert_eq!(chart.data_color, "lightsteelblue");
}

#[test]
fn slope_errors_propagate_through_generate() {
    let settings = ChartSettings::for_kind(ChartKind::Slope, 0.0, 0.0, 0.0, 0.0);
    let mut chart = Chart::new("", vec![Record::new("only", 1.0)]);
    let mut frame = RenderFrame::new();
    let err = settings.generate(&mut chart, &mut frame).expect_err("slope");
    assert!(matches!(err, ChartError::InsufficientData { .. }));
    assert!(frame.is_empty());
}

#[test]
fn mismatched_grid_is_a_silent_no_op() {
    let spec = ChartSpec::ProportionalGrid(ProportionalGridOptions {
        rows: 4,
        cols: 4,
        show_values: false,
    });
    let settings =
        ChartSettings::for_kind(ChartKind::ProportionalGrid, 0.0, 0.0, 0.0, 0.0).with_spec(spec);
    let mut chart = Chart::new("", records());
    let mut frame = RenderFrame::new();
    settings.generate(&mut chart, &mut frame).expect("no-op");
    assert!(frame.is_empty());
}

#[test]
fn settings_file_drives_csv_input() {
    let json = r#"{
        "top": 80, "bottom": 20, "left": 15, "right": 85,
        "spec": {"chart": "word_bar", "show_values": true, "show_percentage": true},
        "format": "%.0f",
        "input": {"format": "csv", "columns": "name,count"}
    }"#;
    let settings = ChartSettings::from_json_compat_str(json).expect("settings");
    assert_eq!(
        settings.input,
        InputFormat::Csv {
            columns: Some("name,count".to_owned())
        }
    );

    let data = "id,name,count\n1,alpha,30\n2,beta,10\n";
    let frame = settings.generate_from_reader(data.as_bytes()).expect("wbar");
    let values: Vec<&str> = frame
        .texts()
        .filter(|text| text.font == deckchart::render::Font::Mono)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(values, ["30 (75%)", "10 (25%)"]);
}
