use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so non-finite geometry produced from
/// degenerate data is caught before a real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_command_count: usize,
    pub last_line_count: usize,
    pub last_shape_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_command_count = frame.len();
        self.last_line_count = 0;
        self.last_shape_count = 0;
        self.last_text_count = 0;
        for command in &frame.commands {
            match command {
                DrawCommand::Line(_) => self.last_line_count += 1,
                DrawCommand::Text(_) => self.last_text_count += 1,
                DrawCommand::Circle(_)
                | DrawCommand::Rect(_)
                | DrawCommand::Polygon(_)
                | DrawCommand::Arc(_) => self.last_shape_count += 1,
            }
        }
        Ok(())
    }
}
