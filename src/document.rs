//! Renders sanitized paragraphs into an in-memory .docx.

use docx_rs::{Bold, Docx, LineSpacing, LineSpacingType, Paragraph, Run, RunFonts};
use std::io::Cursor;
use thiserror::Error;

/// Uniform body font. Set for both the ASCII and east-asia attributes of a
/// run; Word only applies it to CJK glyphs through the east-asia slot.
pub const BODY_FONT: &str = "微软雅黑";

/// Paragraph space-after, in twentieths of a point (5pt).
const SPACE_AFTER: u32 = 100;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to assemble document: {0}")]
    Docx(#[from] docx_rs::DocxError),
}

/// Assemble a fresh document from the cleaned paragraphs. Every paragraph
/// gets one run carrying its full text, with the uniform font, the requested
/// size and line spacing, and bold forced off.
pub fn build_docx(paragraphs: &[String], font_size_pt: f32, line_spacing: f32) -> Docx {
    // Half-points for the run size, 240ths of a line for the spacing.
    let size_half_points = (font_size_pt * 2.0).round() as usize;
    let line = (line_spacing * 240.0).round() as i32;

    let mut docx = Docx::new();
    for text in paragraphs {
        let mut run = Run::new()
            .add_text(text.as_str())
            .fonts(RunFonts::new().ascii(BODY_FONT).east_asia(BODY_FONT))
            .size(size_half_points);
        run.run_property.bold = Some(Bold::new().disable());

        let paragraph = Paragraph::new().add_run(run).line_spacing(
            LineSpacing::new()
                .line_rule(LineSpacingType::Auto)
                .line(line)
                .after(SPACE_AFTER),
        );
        docx = docx.add_paragraph(paragraph);
    }
    docx
}

/// Pack the assembled document into an in-memory .docx byte stream.
pub fn render_docx(
    paragraphs: &[String],
    font_size_pt: f32,
    line_spacing: f32,
) -> Result<Vec<u8>, DocumentError> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(paragraphs, font_size_pt, line_spacing)
        .build()
        .pack(&mut buffer)
        .map_err(docx_rs::DocxError::ZipError)?;
    Ok(buffer.into_inner())
}
