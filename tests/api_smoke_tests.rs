use deckchart::api::{ChartKind, ChartSettings};
use deckchart::render::{NullRenderer, RenderFrame, Renderer};

const BROWSER_SHARE: &str =
    "# Browser share\nChrome\t62.5\nSafari\t19.5\nEdge\t5.2\nFirefox\t3.1\n";

#[test]
fn tsv_to_bar_frame_smoke_flow() {
    let settings = ChartSettings::for_kind(ChartKind::Bar, 80.0, 20.0, 10.0, 90.0);
    let frame = settings
        .generate_from_reader(BROWSER_SHARE.as_bytes())
        .expect("generate");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render should succeed");
    assert_eq!(renderer.frames_rendered, 1);
    // four bars plus one x label per record
    assert_eq!(renderer.last_line_count, 4);
    assert_eq!(renderer.last_text_count, 4);
    assert_eq!(renderer.last_shape_count, 0);
}

#[test]
fn every_kind_generates_a_valid_frame() {
    let data = "A\t10\tred\nB\t20\tgreen\nC\t30\tblue\nD\t40\tgray\n";
    for kind in ChartKind::ALL {
        let settings = ChartSettings::for_kind(kind, 0.0, 0.0, 0.0, 0.0);
        let frame = settings
            .generate_from_reader(data.as_bytes())
            .unwrap_or_else(|err| panic!("{kind} failed: {err}"));
        assert!(!frame.is_empty(), "{kind} drew nothing");
        NullRenderer::default()
            .render(&frame)
            .unwrap_or_else(|err| panic!("{kind} produced an invalid frame: {err}"));
    }
}

#[test]
fn frame_json_contract_round_trips() {
    let settings = ChartSettings::for_kind(ChartKind::Donut, 70.0, 20.0, 30.0, 80.0);
    let frame = settings
        .generate_from_reader(BROWSER_SHARE.as_bytes())
        .expect("generate");

    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    let restored = RenderFrame::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored.len(), frame.len());
    assert_eq!(restored.arcs().count(), 4);
}
