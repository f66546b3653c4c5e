//! Envelope layout — where every address line goes on the page.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page and `y` growing downward; `y` is the text baseline.  The renderer
//! flips to PDF user space when it writes the page.

use super::font::FontFace;
use super::size::Dimensions;

pub const POINTS_PER_INCH: f64 = 72.0;
/// Inset of the return address from the top-left corner.
pub const MARGIN_INCHES: f64 = 0.25;
/// Left edge of the destination block as a fraction of the page width.
/// Approximates where a window envelope would show the address.
pub const DESTINATION_X_RATIO: f64 = 0.38;

/// Resolved font selection used for placement and drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    /// Points; also the line advance.
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressBlock {
    Return,
    Destination,
}

/// One line of text anchored at its left baseline point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub block: AddressBlock,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// A fully laid-out envelope page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    pub style: TextStyle,
    /// Return address lines first, then destination lines, each in input order.
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    /// Lines whose estimated right edge runs past the right margin.
    pub fn overflowing(&self) -> impl Iterator<Item = &PlacedLine> {
        let limit = self.width - margin_points();
        self.lines
            .iter()
            .filter(move |l| l.x + self.style.face.measure(&l.text, self.style.size) > limit)
    }
}

fn margin_points() -> f64 {
    MARGIN_INCHES * POINTS_PER_INCH
}

/// Place the return and destination address blocks on a page of `dims`.
pub fn compute_layout(
    dims: Dimensions,
    style: TextStyle,
    from_addr: &[String],
    to_addr: &[String],
) -> PageLayout {
    let width = dims.width * POINTS_PER_INCH;
    let height = dims.height * POINTS_PER_INCH;
    let margin = margin_points();
    let advance = style.size;

    let mut lines = Vec::with_capacity(from_addr.len() + to_addr.len());

    // Return address: top-left, first baseline one line below 1.5 margins.
    let x = margin;
    let y = margin * 1.5 + advance;
    place_block(&mut lines, AddressBlock::Return, x, y, advance, from_addr);

    // Destination: block vertically centred, left edge at a fixed fraction of the width.
    let x = width * DESTINATION_X_RATIO;
    let y = height / 2.0 - advance * to_addr.len().saturating_sub(1) as f64 / 2.0;
    place_block(&mut lines, AddressBlock::Destination, x, y, advance, to_addr);

    PageLayout {
        width,
        height,
        style,
        lines,
    }
}

fn place_block(
    out: &mut Vec<PlacedLine>,
    block: AddressBlock,
    x: f64,
    mut y: f64,
    advance: f64,
    text: &[String],
) {
    for line in text {
        out.push(PlacedLine {
            block,
            x,
            y,
            text: line.clone(),
        });
        y += advance;
    }
}
