use approx::assert_abs_diff_eq;
use deckchart::chart::{Chart, spokes};
use deckchart::core::{BLUE7, Record, STD_COLOR};
use deckchart::render::RenderFrame;

fn shares_chart() -> Chart {
    Chart::new(
        "shares",
        vec![
            Record::new("North", 25.0),
            Record::new("South", 25.0),
            Record::new("East", 30.0),
            Record::new("West", 20.0),
        ],
    )
    .with_box(80.0, 20.0, 0.0, 100.0)
}

#[test]
fn donut_slices_close_the_circle() {
    let chart = shares_chart();
    let mut frame = RenderFrame::new();
    chart.donut(&mut frame, 20.0, 2.0, false, false);

    let arcs: Vec<_> = frame.arcs().collect();
    assert_eq!(arcs.len(), 4);
    assert_eq!(arcs[0].start_deg, 0.0);
    for pair in arcs.windows(2) {
        assert_abs_diff_eq!(pair[0].end_deg, pair[1].start_deg, epsilon = 1e-9);
    }
    let swept: f64 = arcs.iter().map(|arc| arc.end_deg - arc.start_deg).sum();
    assert_abs_diff_eq!(swept, 360.0, epsilon = 1e-9);
    assert_abs_diff_eq!(arcs[3].end_deg, 360.0, epsilon = 1e-9);
    assert_eq!((arcs[0].cx, arcs[0].cy), (0.0, 70.0));
    assert!(frame.texts().next().is_none());
}

#[test]
fn donut_labels_name_the_share() {
    let chart = shares_chart();
    let mut frame = RenderFrame::new();
    chart.donut(&mut frame, 20.0, 2.0, true, false);

    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, ["North 25.0%", "South 25.0%", "East 30.0%", "West 20.0%"]);
}

#[test]
fn std_color_cycles_the_palette_by_index() {
    let records = (0..8).map(|i| Record::new(format!("r{i}"), 1.0)).collect();
    let mut chart = Chart::new("cycle", records);
    chart.data_color = STD_COLOR.to_owned();
    let mut frame = RenderFrame::new();
    chart.donut(&mut frame, 20.0, 20.0, false, false);

    let arcs: Vec<_> = frame.arcs().collect();
    assert_eq!(arcs[0].color, BLUE7[0]);
    assert_eq!(arcs[6].color, BLUE7[6]);
    assert_eq!(arcs[7].color, arcs[0].color);
    assert!(arcs.iter().all(|arc| arc.opacity == 100.0));
}

#[test]
fn record_colors_are_tinted_unless_solid() {
    let records = vec![
        Record::new("a", 1.0).with_note("red"),
        Record::new("b", 1.0).with_note("blue"),
    ];
    let chart = Chart::new("tint", records);

    let mut tinted = RenderFrame::new();
    chart.donut(&mut tinted, 10.0, 1.0, false, false);
    assert!(tinted.arcs().all(|arc| arc.opacity == 40.0));

    let mut solid = RenderFrame::new();
    chart.donut(&mut solid, 10.0, 1.0, false, true);
    let colors: Vec<&str> = solid.arcs().map(|arc| arc.color.as_str()).collect();
    assert_eq!(colors, ["red", "blue"]);
    assert!(solid.arcs().all(|arc| arc.opacity == 100.0));
}

#[test]
fn pmap_raises_labels_for_thin_bands() {
    let chart = Chart::new(
        "bands",
        vec![
            Record::new("Big", 50.0),
            Record::new("Medium", 48.0),
            Record::new("Tiny", 2.0),
        ],
    )
    .with_box(80.0, 20.0, 0.0, 100.0);
    let mut frame = RenderFrame::new();
    chart.pmap(&mut frame, 5.0, 60, false, false);

    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), 4);
    let guides: Vec<_> = lines.iter().filter(|line| line.color == "lightgray").collect();
    assert_eq!(guides.len(), 1);
    assert_abs_diff_eq!(guides[0].y2, 80.0, epsilon = 1e-9);

    let bands: Vec<_> = lines.iter().filter(|line| line.stroke_width == 5.0).collect();
    assert_abs_diff_eq!(bands[0].x1, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bands[0].x2, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bands[1].x1, 49.9, epsilon = 1e-9);
    assert_abs_diff_eq!(bands[2].x1, 97.8, epsilon = 1e-9);

    let shares: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(shares, ["50.0%", "48.0%", "2.0%"]);
    let raised = frame.texts().last().expect("tiny label");
    assert_abs_diff_eq!(raised.y, 80.0 - 6.0 - chart.text_size / 2.0, epsilon = 1e-9);
}

#[test]
fn pmap_raises_long_labels() {
    let chart = Chart::new(
        "long",
        vec![Record::new("A very long label", 60.0), Record::new("B", 40.0)],
    );
    let mut frame = RenderFrame::new();
    chart.pmap(&mut frame, 5.0, 5, true, false);
    assert_eq!(frame.lines().filter(|line| line.color == "lightgray").count(), 1);
}

#[test]
fn pgrid_fills_floor_share_cells_and_leaves_the_rest_empty() {
    let chart = Chart::new(
        "thirds",
        vec![
            Record::new("a", 1.0).with_note("red"),
            Record::new("b", 1.0).with_note("green"),
            Record::new("c", 1.0).with_note("blue"),
        ],
    );
    let shares = chart.grid_shares();
    assert_eq!(shares, vec![33.0, 33.0, 33.0]);

    let mut frame = RenderFrame::new();
    chart.pgrid(&mut frame, 3.0, 10, 10, false);
    let cells: Vec<_> = frame.circles().take(100).collect();
    assert_eq!(cells.iter().filter(|cell| cell.color == "red").count(), 33);
    assert_eq!(cells.iter().filter(|cell| cell.color.is_empty()).count(), 1);
    assert_eq!(cells[99].color, "");
    // legend: one swatch and one text per record
    assert_eq!(frame.circles().count(), 103);
    assert_eq!(frame.texts().count(), 3);
}

#[test]
fn pgrid_requires_exactly_one_hundred_cells() {
    let chart = shares_chart();
    let mut frame = RenderFrame::new();
    chart.pgrid(&mut frame, 3.0, 5, 10, true);
    assert!(frame.is_empty());
}

#[test]
fn radial_steps_clockwise_from_twelve_o_clock() {
    let chart = Chart::new(
        "radial",
        vec![
            Record::new("n", 10.0),
            Record::new("e", 5.0),
            Record::new("s", 10.0),
            Record::new("w", 5.0),
        ],
    )
    .with_box(50.0, 0.0, 50.0, 90.0);
    let mut frame = RenderFrame::new();
    chart.radial(&mut frame, 4.0, 20.0, false, false);

    let circles: Vec<_> = frame.circles().collect();
    assert_eq!(circles.len(), 5);
    assert_eq!(circles[0].radius, 40.0);
    assert_abs_diff_eq!(circles[1].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[1].y, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[1].radius, 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[2].x, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[2].y, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[2].radius, 3.0, epsilon = 1e-9);
}

#[test]
fn spokes_fan_out_clockwise() {
    let mut frame = RenderFrame::new();
    spokes(&mut frame, 10.0, 10.0, 5.0, 0.05, 4, "red");

    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(frame.circles().count(), 4);
    assert_abs_diff_eq!(lines[0].x2, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lines[0].y2, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lines[1].x2, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lines[1].y2, 10.0, epsilon = 1e-9);
}
