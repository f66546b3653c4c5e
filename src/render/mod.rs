//! PDF output — turn a [`PageLayout`] into one finalized page.
//!
//! The document is built in memory with `pdf-writer`, then written to the
//! sink in one go.  Nothing time- or randomness-dependent goes into the file,
//! so identical input yields identical bytes.

pub mod encoding;

use std::io::Write;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::config::RenderConfig;
use crate::core::layout::{compute_layout, PageLayout};
use crate::core::size::Dimensions;
use crate::error::Result;

const FONT_NAME: Name<'static> = Name(b"F1");

/// Lay out the two address blocks and write a single-page PDF to `out`.
///
/// On success the sink has received the complete document and been flushed.
/// Errors from the sink are returned unchanged.
pub fn write_envelope_pdf<W: Write>(
    out: &mut W,
    dims: Dimensions,
    config: &RenderConfig,
    from_addr: &[String],
    to_addr: &[String],
) -> Result<()> {
    let style = config.text_style()?;
    let layout = compute_layout(dims, style, from_addr, to_addr);
    tracing::debug!(
        "page {:.2}x{:.2}pt, font {} {}pt, {} lines",
        layout.width,
        layout.height,
        style.face.base_font(),
        style.size,
        layout.lines.len()
    );

    for line in layout.overflowing() {
        tracing::warn!(
            "{:?} address line runs past the right margin: {:?}",
            line.block,
            line.text
        );
    }

    let bytes = render_layout(&layout);
    out.write_all(&bytes)?;
    out.flush()?;
    tracing::debug!("wrote {} bytes", bytes.len());
    Ok(())
}

/// Encode a laid-out page as a complete PDF document.
pub fn render_layout(layout: &PageLayout) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);
    let info_id = Ref::new(6);

    let width = layout.width as f32;
    let height = layout.height as f32;

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, width, height));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().fonts().pair(FONT_NAME, font_id);
    page.finish();

    pdf.type1_font(font_id)
        .base_font(Name(layout.style.face.base_font().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let mut content = Content::new();
    for line in &layout.lines {
        let (text, replaced) = encoding::encode_line(&line.text);
        if replaced > 0 {
            tracing::warn!(
                "{replaced} character(s) in {:?} cannot be encoded and were replaced",
                line.text
            );
        }
        // Page space has y growing down from the top; PDF user space grows up.
        let x = line.x as f32;
        let y = height - line.y as f32;
        content.begin_text();
        content.set_font(FONT_NAME, layout.style.size as f32);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&text));
        content.end_text();
    }
    pdf.stream(content_id, &content.finish());

    pdf.document_info(info_id)
        .title(TextStr("Envelope"))
        .producer(TextStr(concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))));

    pdf.finish()
}
