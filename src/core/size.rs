//! Envelope size resolution.
//!
//! A size token is either one of the standard commercial envelope codes
//! (`"#10"`, `"#6.75"`, ...) or an explicit `"WxH"` string in inches.  Codes
//! are looked up first; anything else is parsed as a dimension string.

use super::layout::POINTS_PER_INCH;
use crate::error::{EnvelopeError, Result};

/// PDF page sides must stay within 3..=14400 default user-space units.
const MIN_SIDE_POINTS: f64 = 3.0;
const MAX_SIDE_POINTS: f64 = 14400.0;

/// Standard commercial envelope sizes → `"WxH"` in inches.
pub const ENVELOPE_SIZES: &[(&str, &str)] = &[
    ("#5", "5.5x3.125"),       // 5-1/2 x 3-1/8
    ("#6.25", "6x3.5"),        // 6 x 3-1/2
    ("#6.75", "6.5x3.625"),    // 6-1/2 x 3-5/8
    ("#7", "6.75x3.75"),       // 6-3/4 x 3-3/4
    ("#7.75", "7.5x3.93750"),  // 7-1/2 x 3-15/16
    ("#8.625", "8.625x3.625"), // 8-5/8 x 3-5/8
    ("#9", "8.875x3.875"),     // 8-7/8 x 3-7/8
    ("#10", "9.5x4.125"),      // 9-1/2 x 4-1/8
    ("#11", "10.375x4.5"),     // 10-3/8 x 4-1/2
    ("#12", "11x4.75"),        // 11 x 4-3/4
    ("#14", "11.5x5"),         // 11-1/2 x 5
];

/// Explicit envelope dimensions in inches.  Both sides are finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Look a size code up in [`ENVELOPE_SIZES`].
pub fn lookup_size(code: &str) -> Option<&'static str> {
    ENVELOPE_SIZES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, dims)| *dims)
}

/// Resolve a size token to explicit dimensions.
///
/// Known codes resolve through the table; any other token is treated as a
/// literal `"WxH"` string.  Errors name the original token, not the
/// table's expansion of it.
pub fn resolve_size(token: &str) -> Result<Dimensions> {
    let dims = lookup_size(token).unwrap_or(token);
    parse_dimensions(dims).map_err(|reason| EnvelopeError::SizeParse {
        token: token.to_string(),
        reason,
    })
}

/// Parse `"WxH"` into [`Dimensions`].  Exactly one `x` separator.
fn parse_dimensions(s: &str) -> std::result::Result<Dimensions, String> {
    let Some((w, h)) = s.split_once('x') else {
        return Err("not a known size code and not of the form WxH".into());
    };
    if h.contains('x') {
        return Err("more than one 'x' separator".into());
    }
    Ok(Dimensions {
        width: parse_inches(w, "width")?,
        height: parse_inches(h, "height")?,
    })
}

fn parse_inches(s: &str, what: &str) -> std::result::Result<f64, String> {
    let s = s.trim();
    let v: f64 = s
        .parse()
        .map_err(|_| format!("{what} {s:?} is not a number"))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(format!("{what} must be a positive number of inches, got {s:?}"));
    }
    let points = v * POINTS_PER_INCH;
    if !(MIN_SIDE_POINTS..=MAX_SIDE_POINTS).contains(&points) {
        return Err(format!(
            "{what} {s:?} is outside the printable page range of {} to {} inches",
            MIN_SIDE_POINTS / POINTS_PER_INCH,
            MAX_SIDE_POINTS / POINTS_PER_INCH
        ));
    }
    Ok(v)
}
