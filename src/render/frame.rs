use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, CirclePrimitive, DrawCommand, DrawSurface, LinePrimitive, PolygonPrimitive,
    RectPrimitive, TextPrimitive,
};

/// Backend-agnostic recording of one or more chart draw passes.
///
/// Commands keep emission order, which is also paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl DrawSurface for RenderFrame {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::render::{DrawCommand, DrawSurface, Font, TextHAlign};

    #[test]
    fn frame_records_commands_in_paint_order() {
        let mut frame = RenderFrame::new();
        frame.rect(50.0, 50.0, 10.0, 10.0, "white", 100.0);
        frame.line(0.0, 0.0, 10.0, 10.0, 0.5, "black", 100.0);
        frame.text_end(5.0, 5.0, "label", Font::Mono, 1.2, "red", 50.0);

        assert_eq!(frame.len(), 3);
        assert!(matches!(frame.commands[0], DrawCommand::Rect(_)));
        assert!(matches!(frame.commands[2], DrawCommand::Text(_)));
        let text = frame.texts().next().expect("text");
        assert_eq!(text.h_align, TextHAlign::Right);
        assert_eq!(text.font, Font::Mono);
    }

    #[test]
    fn validation_rejects_non_finite_geometry() {
        let mut frame = RenderFrame::new();
        frame.circle(f64::NAN, 1.0, 1.0, "red", 100.0);
        assert!(frame.validate().is_err());

        let mut frame = RenderFrame::new();
        frame.polygon(&[0.0, 1.0], &[0.0], "red", 100.0);
        assert!(frame.validate().is_err());

        let mut frame = RenderFrame::new();
        frame.line(0.0, 0.0, 1.0, 1.0, 0.1, "red", 140.0);
        assert!(frame.validate().is_err());
    }

    #[test]
    fn rotated_text_keeps_angle_and_link() {
        let mut frame = RenderFrame::new();
        frame.text_rotate(1.0, 2.0, "x", "https://example.org", Font::Sans, 270.0, 1.0, "", 100.0);
        let text = frame.texts().next().expect("text");
        assert_eq!(text.rotation_deg, Some(270.0));
        assert_eq!(text.link, "https://example.org");
        assert!(frame.validate().is_ok());
    }
}
