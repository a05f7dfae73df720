use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawSurface, Font};

const LINE_NOTE_WIDTH: f64 = 0.1;

/// Horizontal placement of record notes relative to their data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl NoteAlignment {
    /// `"l"`, `"c"` or `"r"`; anything else centers.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "l" => Self::Left,
            "r" => Self::Right,
            _ => Self::Center,
        }
    }
}

impl Chart {
    /// Title centered over the box, `offset` above `top`, at twice the text size.
    pub fn title<S: DrawSurface + ?Sized>(&self, surface: &mut S, offset: f64) {
        let mid_x = self.left + self.width() / 2.0;
        surface.text_mid(
            mid_x,
            self.top + offset,
            &self.title,
            Font::Sans,
            self.text_size * 2.0,
            &self.data_color,
            self.opacity,
        );
    }

    /// Filled rectangle covering the box in the data color.
    pub fn frame<S: DrawSurface + ?Sized>(&self, surface: &mut S, opacity: f64) {
        let (width, height) = (self.width(), self.height());
        surface.rect(
            self.left + width / 2.0,
            self.bottom + height / 2.0,
            width,
            height,
            &self.data_color,
            opacity,
        );
    }

    /// Each record's note at its mapped data point.
    pub fn notes<S: DrawSurface + ?Sized>(&self, surface: &mut S, alignment: NoteAlignment) {
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            let size = self.text_size;
            let (note, color, opacity) = (&record.note, &self.label_color, self.opacity);
            match alignment {
                NoteAlignment::Left => surface.text(x, y, note, Font::Serif, size, color, opacity),
                NoteAlignment::Center => {
                    surface.text_mid(x, y, note, Font::Serif, size, color, opacity);
                }
                NoteAlignment::Right => {
                    surface.text_end(x, y, note, Font::Serif, size, color, opacity);
                }
            }
        }
    }

    /// Horizontal reference line at `value` across the box, with an optional
    /// label just right of the box.
    pub fn line_note<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        value: f64,
        label: &str,
        size: f64,
    ) {
        let y = self.y_for_value(value);
        surface.line(
            self.left,
            y,
            self.right,
            y,
            LINE_NOTE_WIDTH,
            &self.data_color,
            self.opacity,
        );
        if !label.is_empty() {
            surface.text(
                self.right + size / 2.0,
                y - size / 4.0,
                label,
                Font::Serif,
                self.text_size * 0.75,
                &self.data_color,
                self.opacity,
            );
        }
    }

    /// Crosshatch over the box: vertical then horizontal lines every `step`.
    pub fn grid<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        step: f64,
    ) -> ChartResult<()> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidData(
                "grid step must be finite and > 0".to_owned(),
            ));
        }
        if ![self.left, self.right, self.bottom, self.top]
            .iter()
            .all(|edge| edge.is_finite())
        {
            return Err(ChartError::InvalidData(
                "grid box must be finite".to_owned(),
            ));
        }
        let mut x = self.left;
        while x <= self.right {
            surface.line(x, self.bottom, x, self.top, size, &self.data_color, self.opacity);
            x += step;
        }
        let mut y = self.bottom;
        while y <= self.top {
            surface.line(self.left, y, self.right, y, size, &self.data_color, self.opacity);
            y += step;
        }
        Ok(())
    }
}
