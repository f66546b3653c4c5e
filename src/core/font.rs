//! Font face selection and approximate text metrics.
//!
//! Only the standard PDF Type 1 faces are supported; they are referenced by
//! name and never embedded.  Widths are in em units (relative to the font
//! size).  Courier is exact; the proportional faces use an average glyph
//! width, which is close enough to flag a line running off the envelope.

use crate::error::{EnvelopeError, Result};

/// A standard PDF Type 1 face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
}

impl FontFace {
    /// Resolve a face name.  Generic family names (`mono`, `serif`,
    /// `sans-serif`) map to the regular member of the matching standard
    /// family; standard names are matched exactly.
    pub fn from_name(name: &str) -> Result<Self> {
        use FontFace::*;
        let face = match name.trim() {
            "mono" | "monospace" => Courier,
            "serif" => TimesRoman,
            "sans" | "sans-serif" => Helvetica,
            "Courier" => Courier,
            "Courier-Bold" => CourierBold,
            "Courier-Oblique" => CourierOblique,
            "Courier-BoldOblique" => CourierBoldOblique,
            "Helvetica" => Helvetica,
            "Helvetica-Bold" => HelveticaBold,
            "Helvetica-Oblique" => HelveticaOblique,
            "Helvetica-BoldOblique" => HelveticaBoldOblique,
            "Times-Roman" => TimesRoman,
            "Times-Bold" => TimesBold,
            "Times-Italic" => TimesItalic,
            "Times-BoldItalic" => TimesBoldItalic,
            _ => return Err(EnvelopeError::UnknownFont(name.to_string())),
        };
        Ok(face)
    }

    /// PostScript name written as the font's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        use FontFace::*;
        match self {
            Courier => "Courier",
            CourierBold => "Courier-Bold",
            CourierOblique => "Courier-Oblique",
            CourierBoldOblique => "Courier-BoldOblique",
            Helvetica => "Helvetica",
            HelveticaBold => "Helvetica-Bold",
            HelveticaOblique => "Helvetica-Oblique",
            HelveticaBoldOblique => "Helvetica-BoldOblique",
            TimesRoman => "Times-Roman",
            TimesBold => "Times-Bold",
            TimesItalic => "Times-Italic",
            TimesBoldItalic => "Times-BoldItalic",
        }
    }

    /// Average advance width of one glyph, in em.
    fn average_char_width(self) -> f64 {
        use FontFace::*;
        match self {
            Courier | CourierBold | CourierOblique | CourierBoldOblique => 0.6,
            Helvetica | HelveticaOblique => 0.54,
            HelveticaBold | HelveticaBoldOblique => 0.58,
            TimesRoman | TimesItalic => 0.48,
            TimesBold | TimesBoldItalic => 0.52,
        }
    }

    /// Estimated width of `text` set at `font_size` points, in points.
    pub fn measure(self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * self.average_char_width() * font_size
    }
}
