mod color;
mod frame;
mod null_renderer;
mod primitives;

pub use color::Color;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, DrawCommand, Font, LinePrimitive, PolygonPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Opacity used when a primitive call does not carry one.
pub const DEFAULT_OPACITY: f64 = 100.0;

/// Primitive drawing surface the chart renderers emit into.
///
/// Coordinates and sizes are canvas units (0..100 on both axes, y up),
/// angles are degrees, opacity is 0..100. Calls are consumed in order:
/// later commands paint over earlier ones. Colors are opaque strings that
/// only the backend interprets.
///
/// Implementors provide `draw`; the named operations build the primitive.
pub trait DrawSurface {
    fn draw(&mut self, command: DrawCommand);

    #[allow(clippy::too_many_arguments)]
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str, opacity: f64) {
        self.draw(DrawCommand::Line(LinePrimitive {
            x1,
            y1,
            x2,
            y2,
            stroke_width: width,
            color: color.to_owned(),
            opacity,
        }));
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str, opacity: f64) {
        self.draw(DrawCommand::Circle(CirclePrimitive {
            x,
            y,
            radius,
            color: color.to_owned(),
            opacity,
        }));
    }

    #[allow(clippy::too_many_arguments)]
    fn rect(&mut self, cx: f64, cy: f64, width: f64, height: f64, color: &str, opacity: f64) {
        self.draw(DrawCommand::Rect(RectPrimitive {
            cx,
            cy,
            width,
            height,
            color: color.to_owned(),
            opacity,
        }));
    }

    fn polygon(&mut self, xs: &[f64], ys: &[f64], color: &str, opacity: f64) {
        self.draw(DrawCommand::Polygon(PolygonPrimitive {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            color: color.to_owned(),
            opacity,
        }));
    }

    #[allow(clippy::too_many_arguments)]
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        stroke_width: f64,
        start_deg: f64,
        end_deg: f64,
        color: &str,
        opacity: f64,
    ) {
        self.draw(DrawCommand::Arc(ArcPrimitive {
            cx,
            cy,
            width,
            height,
            stroke_width,
            start_deg,
            end_deg,
            color: color.to_owned(),
            opacity,
        }));
    }

    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font: Font,
        size: f64,
        color: &str,
        opacity: f64,
    ) {
        let primitive = aligned_text(x, y, text, font, size, color, opacity, TextHAlign::Left);
        self.draw(DrawCommand::Text(primitive));
    }

    #[allow(clippy::too_many_arguments)]
    fn text_mid(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font: Font,
        size: f64,
        color: &str,
        opacity: f64,
    ) {
        let primitive = aligned_text(x, y, text, font, size, color, opacity, TextHAlign::Center);
        self.draw(DrawCommand::Text(primitive));
    }

    #[allow(clippy::too_many_arguments)]
    fn text_end(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font: Font,
        size: f64,
        color: &str,
        opacity: f64,
    ) {
        let primitive = aligned_text(x, y, text, font, size, color, opacity, TextHAlign::Right);
        self.draw(DrawCommand::Text(primitive));
    }

    #[allow(clippy::too_many_arguments)]
    fn text_rotate(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        link: &str,
        font: Font,
        angle_deg: f64,
        size: f64,
        color: &str,
        opacity: f64,
    ) {
        let mut primitive = aligned_text(x, y, text, font, size, color, opacity, TextHAlign::Left);
        primitive.rotation_deg = Some(angle_deg);
        primitive.link = link.to_owned();
        self.draw(DrawCommand::Text(primitive));
    }
}

#[allow(clippy::too_many_arguments)]
fn aligned_text(
    x: f64,
    y: f64,
    text: &str,
    font: Font,
    size: f64,
    color: &str,
    opacity: f64,
    h_align: TextHAlign,
) -> TextPrimitive {
    TextPrimitive {
        text: text.to_owned(),
        x,
        y,
        font,
        size,
        color: color.to_owned(),
        opacity,
        h_align,
        rotation_deg: None,
        link: String::new(),
    }
}

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from chart layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
