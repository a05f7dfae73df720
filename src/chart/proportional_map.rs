use crate::chart::{Chart, DOT_LINE_COLOR};
use crate::core::{percentages, std_color};
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

/// Cursor overlap between neighbouring bands.
const BAND_GAP: f64 = 0.10;
/// Bands under this share get their label raised above the map.
const MIN_INSIDE_PERCENT: f64 = 3.0;
const GUIDE_WIDTH: f64 = 0.1;

impl Chart {
    /// Proportional map: records laid out left to right as one band each,
    /// band width proportional to the record's share of the total.
    ///
    /// `band_height` is the band's stroke width. A share label moves above
    /// the band, joined by a dotted-color guide, when the share is under 3%
    /// or the record label is longer than `max_label_len` characters.
    /// With `solid`, per-record colors (the record note) draw at full
    /// opacity; otherwise they are tinted.
    pub fn pmap<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        band_height: f64,
        max_label_len: usize,
        show_values: bool,
        solid: bool,
    ) {
        self.warn_if_zero_sum("pmap");
        let text_size = self.text_size;
        let top = self.top;
        let unit = self.width() / 100.0;
        let share_format = self.format.clone().with_suffix("%");

        let mut x = self.left;
        let shares = percentages(&self.records);
        for (i, (record, share)) in self.records.iter().zip(shares).enumerate() {
            let band = share * unit;
            let center = x + band / 2.0;
            let label_y = if share < MIN_INSIDE_PERCENT
                || record.label.chars().count() > max_label_len
            {
                let raised = top - band_height * 1.2;
                surface.line(
                    center,
                    raised + text_size * 1.5,
                    center,
                    top,
                    GUIDE_WIDTH,
                    DOT_LINE_COLOR,
                    DEFAULT_OPACITY,
                );
                raised
            } else {
                top
            };

            let (band_color, band_opacity) =
                std_color(i, &record.note, &self.data_color, share, solid);
            surface.line(x, top, x + band, top, band_height, band_color, band_opacity);
            let text_color = if band_opacity == 100.0 { "white" } else { "black" };

            if show_values {
                surface.text_mid(
                    center,
                    label_y + band_height,
                    &record.label,
                    Font::Sans,
                    text_size * 0.75,
                    &self.value_color,
                    DEFAULT_OPACITY,
                );
            }
            surface.text_mid(
                center,
                label_y - text_size / 2.0,
                &share_format.format(share),
                Font::Sans,
                text_size,
                text_color,
                DEFAULT_OPACITY,
            );

            x += band - BAND_GAP;
        }
    }
}
