use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Chart renderers pass colors around as opaque strings; raster backends
/// resolve them through `Color::parse`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Resolves any CSS color: `rgb(r,g,b)`, `#rgb`, `#rrggbb` or one of
    /// the named colors.
    ///
    /// An empty string is the backend default, black.
    pub fn parse(spec: &str) -> ChartResult<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Ok(Self::BLACK);
        }
        let parsed = csscolorparser::parse(spec).map_err(|err| {
            ChartError::InvalidData(format!("unrecognized color `{spec}`: {err}"))
        })?;
        let [red, green, blue, alpha] = parsed.to_rgba8();
        Ok(Self::from_rgb8(red, green, blue).with_alpha8(alpha))
    }

    fn with_alpha8(self, alpha: u8) -> Self {
        Self {
            alpha: f64::from(alpha) / 255.0,
            ..self
        }
    }

    /// Applies a 0..100 opacity to the alpha channel.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            alpha: self.alpha * (opacity / 100.0).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}
