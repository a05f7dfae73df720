use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawCommand, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub shapes_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Canvas units map onto the surface as `x / 100 * width` and
/// `height - y / 100 * height`; stroke widths, radii and font sizes scale
/// with the surface width.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    width: f64,
    height: f64,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

#[derive(Debug, Clone, Copy)]
struct CanvasMapping {
    width: f64,
    height: f64,
}

impl CanvasMapping {
    fn x(self, x: f64) -> f64 {
        x / 100.0 * self.width
    }

    fn y(self, y: f64) -> f64 {
        self.height - y / 100.0 * self.height
    }

    fn size(self, size: f64) -> f64 {
        size / 100.0 * self.width
    }

    fn height_size(self, size: f64) -> f64 {
        size / 100.0 * self.height
    }
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            width: f64::from(width),
            height: f64::from(height),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: &str) -> ChartResult<()> {
        let color = Color::parse(color)?;
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let map = CanvasMapping {
            width: self.width,
            height: self.height,
        };
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Line(line) => {
                    apply_color(context, resolve(&line.color, line.opacity)?);
                    context.set_line_width(map.size(line.stroke_width));
                    context.move_to(map.x(line.x1), map.y(line.y1));
                    context.line_to(map.x(line.x2), map.y(line.y2));
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Circle(circle) => {
                    apply_color(context, resolve(&circle.color, circle.opacity)?);
                    context.new_sub_path();
                    context.arc(
                        map.x(circle.x),
                        map.y(circle.y),
                        map.size(circle.radius),
                        0.0,
                        std::f64::consts::TAU,
                    );
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Rect(rect) => {
                    apply_color(context, resolve(&rect.color, rect.opacity)?);
                    context.rectangle(
                        map.x(rect.cx - rect.width / 2.0),
                        map.y(rect.cy + rect.height / 2.0),
                        map.size(rect.width),
                        map.height_size(rect.height),
                    );
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Polygon(polygon) => {
                    let mut vertices = polygon.xs.iter().zip(&polygon.ys);
                    let Some((x0, y0)) = vertices.next() else {
                        continue;
                    };
                    apply_color(context, resolve(&polygon.color, polygon.opacity)?);
                    context.move_to(map.x(*x0), map.y(*y0));
                    for (x, y) in vertices {
                        context.line_to(map.x(*x), map.y(*y));
                    }
                    context.close_path();
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Arc(arc) => {
                    apply_color(context, resolve(&arc.color, arc.opacity)?);
                    let (rx, ry) = (map.size(arc.width) / 2.0, map.size(arc.height) / 2.0);
                    if rx > 0.0 && ry > 0.0 {
                        context.save().map_err(|err| map_backend_error("save", err))?;
                        context.translate(map.x(arc.cx), map.y(arc.cy));
                        context.scale(rx, ry);
                        context.new_sub_path();
                        // Screen y grows downward, so canvas angles run negative.
                        context.arc_negative(
                            0.0,
                            0.0,
                            1.0,
                            -arc.start_deg.to_radians(),
                            -arc.end_deg.to_radians(),
                        );
                        context.restore().map_err(|err| map_backend_error("restore", err))?;
                        context.set_line_width(map.size(arc.stroke_width));
                        context
                            .stroke()
                            .map_err(|err| map_backend_error("failed to stroke arc", err))?;
                    }
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, map, text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_text(context: &Context, map: CanvasMapping, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!(
        "{} {}px",
        text.font.family(),
        map.size(text.size).max(1.0)
    ));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _) = layout.pixel_size();
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };

    apply_color(context, resolve(&text.color, text.opacity)?);
    context.save().map_err(|err| map_backend_error("save", err))?;
    context.translate(map.x(text.x), map.y(text.y));
    if let Some(angle) = text.rotation_deg {
        context.rotate(-angle.to_radians());
    }
    context.move_to(dx, -baseline);
    pangocairo::functions::show_layout(context, &layout);
    context.restore().map_err(|err| map_backend_error("restore", err))?;
    Ok(())
}

fn resolve(color: &str, opacity: f64) -> ChartResult<Color> {
    Ok(Color::parse(color)?.with_opacity(opacity))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
