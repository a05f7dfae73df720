use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Font family hint passed through to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl Font {
    #[must_use]
    pub fn family(self) -> &'static str {
        match self {
            Self::Sans => "Sans",
            Self::Serif => "Serif",
            Self::Mono => "Monospace",
        }
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_opacity(opacity: f64) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=100.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "opacity must be finite and in [0, 100]".to_owned(),
        ));
    }
    Ok(())
}

/// Stroked segment in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: String,
    pub opacity: f64,
}

impl LinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and >= 0".to_owned(),
            ));
        }
        ensure_opacity(self.opacity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub opacity: f64,
}

impl CirclePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y, self.radius], "circle geometry")?;
        ensure_opacity(self.opacity)
    }
}

/// Filled rectangle centered on `(cx, cy)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub opacity: f64,
}

impl RectPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy, self.width, self.height], "rect geometry")?;
        ensure_opacity(self.opacity)
    }
}

/// Filled polygon; vertex `i` is `(xs[i], ys[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: String,
    pub opacity: f64,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.xs.len() != self.ys.len() {
            return Err(ChartError::InvalidData(
                "polygon x and y vertex counts differ".to_owned(),
            ));
        }
        ensure_finite(&self.xs, "polygon x coordinates")?;
        ensure_finite(&self.ys, "polygon y coordinates")?;
        ensure_opacity(self.opacity)
    }
}

/// Elliptical arc stroke, angles in degrees counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub color: String,
    pub opacity: f64,
}

impl ArcPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(
            &[
                self.cx,
                self.cy,
                self.width,
                self.height,
                self.stroke_width,
                self.start_deg,
                self.end_deg,
            ],
            "arc geometry",
        )?;
        ensure_opacity(self.opacity)
    }
}

/// One label in canvas units. `rotation_deg` is set only for rotated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: Font,
    pub size: f64,
    pub color: String,
    pub opacity: f64,
    pub h_align: TextHAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
}

impl TextPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "text coordinates")?;
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidData(
                "text size must be finite and > 0".to_owned(),
            ));
        }
        if let Some(rotation) = self.rotation_deg {
            ensure_finite(&[rotation], "text rotation")?;
        }
        ensure_opacity(self.opacity)
    }
}

/// One drawing instruction, in the order it was emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
    Polygon(PolygonPrimitive),
    Arc(ArcPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}
