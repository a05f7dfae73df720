use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;

use deckchart::api::{ChartKind, ChartSettings, ChartSpec};
use deckchart::input::InputFormat;
use deckchart::render::{NullRenderer, Renderer};

const USAGE: &str = "usage: deckchart [kind] [--input <path>] [--csv <label,value>] \
[--settings <json>] [--top <n>] [--bottom <n>] [--left <n>] [--right <n>] \
[--output <path>] [--png <path>] [--size <width>x<height>]\n\
kinds: bar, wbar, hbar, hdot, vdot, donut, pmap, pgrid, radial, line, scatter, area, slope";

#[derive(Debug, Default)]
struct CliArgs {
    kind: Option<ChartKind>,
    input: Option<PathBuf>,
    csv_columns: Option<String>,
    settings: Option<PathBuf>,
    top: Option<f64>,
    bottom: Option<f64>,
    left: Option<f64>,
    right: Option<f64>,
    output: Option<PathBuf>,
    png: Option<PathBuf>,
    png_size: (i32, i32),
}

fn main() {
    if deckchart::telemetry::init_default_tracing() {
        tracing::debug!("stderr tracing subscriber installed");
    }
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let settings = build_settings(&args)?;

    let reader: Box<dyn Read> = match &args.input {
        Some(path) if path.as_os_str() != "-" => Box::new(
            File::open(path)
                .map_err(|err| format!("failed to open `{}`: {err}", path.display()))?,
        ),
        _ => Box::new(io::stdin().lock()),
    };
    let frame = settings
        .generate_from_reader(reader)
        .map_err(|err| format!("chart generation failed: {err}"))?;

    let mut validator = NullRenderer::default();
    validator
        .render(&frame)
        .map_err(|err| format!("generated frame is invalid: {err}"))?;

    let json = frame
        .to_json_contract_v1_pretty()
        .map_err(|err| format!("failed to serialize frame: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => println!("{json}"),
    }

    if let Some(path) = &args.png {
        write_png(&frame, &settings, path, args.png_size)?;
    }
    Ok(())
}

fn build_settings(args: &CliArgs) -> Result<ChartSettings, String> {
    let mut settings = match &args.settings {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            let mut settings = ChartSettings::from_json_compat_str(&raw)
                .map_err(|err| format!("invalid settings json: {err}"))?;
            if let Some(kind) = args.kind {
                settings.spec = ChartSpec::for_kind(kind);
            }
            settings
        }
        None => ChartSettings::for_kind(args.kind.unwrap_or(ChartKind::Bar), 0.0, 0.0, 0.0, 0.0),
    };

    if let Some(top) = args.top {
        settings.top = top;
    }
    if let Some(bottom) = args.bottom {
        settings.bottom = bottom;
    }
    if let Some(left) = args.left {
        settings.left = left;
    }
    if let Some(right) = args.right {
        settings.right = right;
    }
    if let Some(columns) = &args.csv_columns {
        settings.input = InputFormat::Csv {
            columns: Some(columns.clone()).filter(|columns| !columns.is_empty()),
        };
    }
    Ok(settings)
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    frame: &deckchart::RenderFrame,
    settings: &ChartSettings,
    path: &std::path::Path,
    (width, height): (i32, i32),
) -> Result<(), String> {
    use deckchart::render::CairoRenderer;

    let mut renderer =
        CairoRenderer::new(width, height).map_err(|err| format!("renderer init failed: {err}"))?;
    renderer
        .set_clear_color(&settings.background_color)
        .map_err(|err| format!("invalid background color: {err}"))?;
    renderer
        .render(frame)
        .map_err(|err| format!("render failed: {err}"))?;
    renderer
        .write_png(path)
        .map_err(|err| format!("failed to write png `{}`: {err}", path.display()))?;
    let stats = renderer.last_stats();
    eprintln!(
        "wrote {} ({} lines, {} shapes, {} texts)",
        path.display(),
        stats.lines_drawn,
        stats.shapes_drawn,
        stats.texts_drawn
    );
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _frame: &deckchart::RenderFrame,
    _settings: &ChartSettings,
    _path: &std::path::Path,
    _size: (i32, i32),
) -> Result<(), String> {
    Err("--png requires feature `cairo-backend`".to_owned())
}

fn parse_number(flag: &str, value: Option<String>) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<f64>()
        .map_err(|_| format!("invalid number for {flag}: `{value}`"))
}

fn parse_size(value: &str) -> Result<(i32, i32), String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("invalid size `{value}`, expected <width>x<height>"))?;
    let width = width
        .parse::<i32>()
        .map_err(|_| format!("invalid width in `{value}`"))?;
    let height = height
        .parse::<i32>()
        .map_err(|_| format!("invalid height in `{value}`"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("size must be positive, got `{value}`"));
    }
    Ok((width, height))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1).peekable();
    let mut cli = CliArgs {
        png_size: (1600, 900),
        ..CliArgs::default()
    };

    if let Some(first) = args.next_if(|arg| !arg.starts_with('-')) {
        cli.kind = Some(first.parse::<ChartKind>().map_err(|err| format!("{err}\n{USAGE}"))?);
    }

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                cli.input = Some(PathBuf::from(value));
            }
            "--csv" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --csv".to_owned())?;
                cli.csv_columns = Some(value);
            }
            "--settings" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --settings".to_owned())?;
                cli.settings = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                cli.output = Some(PathBuf::from(value));
            }
            "--png" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --png".to_owned())?;
                cli.png = Some(PathBuf::from(value));
            }
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --size".to_owned())?;
                cli.png_size = parse_size(&value)?;
            }
            "--top" => cli.top = Some(parse_number("--top", args.next())?),
            "--bottom" => cli.bottom = Some(parse_number("--bottom", args.next())?),
            "--left" => cli.left = Some(parse_number("--left", args.next())?),
            "--right" => cli.right = Some(parse_number("--right", args.next())?),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }
    Ok(cli)
}
