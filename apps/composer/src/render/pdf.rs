//! Deterministic single-font PDF writer.
//!
//! Emits PDF 1.4: Courier 10pt on US letter pages with 1" margins, one text
//! stream per page. No timestamps or generator metadata are written, so the
//! same document always renders to byte-identical output.

use super::{RenderError, ResumeRenderer};

/// US letter in points.
const PAGE_WIDTH: u32 = 612;
const PAGE_HEIGHT: u32 = 792;
/// 1" margins all sides.
const MARGIN: u32 = 72;
const FONT_SIZE: u32 = 10;
const LEADING: u32 = 12;

/// Courier advances 0.6em per glyph: (612 - 2*72) / 6pt = 78 columns.
const MAX_COLS: usize = 78;
/// (792 - 2*72) / 12pt leading = 54 text lines per page.
const LINES_PER_PAGE: usize = 54;
const MAX_PAGES: usize = 20;
const MAX_LINES: usize = LINES_PER_PAGE * MAX_PAGES;

/// Renders résumé text as a fixed-layout Courier PDF.
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeRenderer for PdfRenderer {
    fn render(&self, document: &str) -> Result<Vec<u8>, RenderError> {
        let lines = wrap_document(document, MAX_COLS);
        if lines.len() > MAX_LINES {
            return Err(RenderError::TooLarge {
                lines: lines.len(),
                limit: MAX_LINES,
            });
        }
        Ok(write_pdf(&lines))
    }
}

// ── Line wrapping ───────────────────────────────────────────────────────────

fn wrap_document(document: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in document.split('\n') {
        wrap_line(raw, width, &mut lines);
    }
    lines
}

/// Greedy word-wrap at a fixed column count. Lines that already fit (blank
/// lines included) pass through verbatim; words longer than a full line are
/// hard-split.
fn wrap_line(raw: &str, width: usize, out: &mut Vec<String>) {
    if raw.chars().count() <= width {
        out.push(raw.to_string());
        return;
    }
    let mut current = String::new();
    let mut current_cols = 0usize;
    for word in raw.split_whitespace() {
        for piece in split_oversized(word, width) {
            let piece_cols = piece.chars().count();
            let space_cols = usize::from(current_cols > 0);
            if current_cols + space_cols + piece_cols > width {
                out.push(std::mem::take(&mut current));
                current_cols = 0;
            }
            if current_cols > 0 {
                current.push(' ');
                current_cols += 1;
            }
            current.push_str(&piece);
            current_cols += piece_cols;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

fn split_oversized(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= width {
        return vec![word.to_string()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

// ── PDF assembly ────────────────────────────────────────────────────────────

/// Object numbering is fixed: 1 catalog, 2 page tree, 3 font, then for page
/// `i` (0-based) object `4 + 2i` is the page and `5 + 2i` its content stream.
fn write_pdf(lines: &[String]) -> Vec<u8> {
    let empty_page: &[String] = &[];
    let page_chunks: Vec<&[String]> = if lines.is_empty() {
        vec![empty_page]
    } else {
        lines.chunks(LINES_PER_PAGE).collect()
    };
    let page_count = page_chunks.len();

    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    push_object(&mut buf, &mut offsets, 1, "<< /Type /Catalog /Pages 2 0 R >>");

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();
    push_object(
        &mut buf,
        &mut offsets,
        2,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
            kids.join(" ")
        ),
    );

    push_object(
        &mut buf,
        &mut offsets,
        3,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Courier /Encoding /WinAnsiEncoding >>",
    );

    for (i, page_lines) in page_chunks.iter().enumerate() {
        let page_id = 4 + 2 * i;
        let content_id = 5 + 2 * i;
        push_object(
            &mut buf,
            &mut offsets,
            page_id,
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
            ),
        );

        let stream = content_stream(page_lines);
        offsets.push(buf.len());
        buf.extend_from_slice(
            format!("{content_id} 0 obj\n<< /Length {} >>\nstream\n", stream.len()).as_bytes(),
        );
        buf.extend_from_slice(stream.as_bytes());
        buf.extend_from_slice(b"endstream\nendobj\n");
    }

    let xref_offset = buf.len();
    let object_count = offsets.len() + 1;
    buf.extend_from_slice(format!("xref\n0 {object_count}\n").as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!("trailer\n<< /Size {object_count} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF")
            .as_bytes(),
    );
    buf
}

fn push_object(buf: &mut Vec<u8>, offsets: &mut Vec<usize>, id: usize, body: &str) {
    offsets.push(buf.len());
    buf.extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
}

fn content_stream(lines: &[String]) -> String {
    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!("/F1 {FONT_SIZE} Tf\n{LEADING} TL\n"));
    ops.push_str(&format!("{MARGIN} {} Td\n", PAGE_HEIGHT - MARGIN));
    for line in lines {
        ops.push_str(&format!("({}) Tj\nT*\n", escape_text(line)));
    }
    ops.push_str("ET\n");
    ops
}

// ── Text encoding ───────────────────────────────────────────────────────────

/// Escapes one line for a PDF literal string. Output is pure ASCII: WinAnsi
/// code points outside the printable ASCII range become octal escapes, and
/// anything WinAnsi cannot represent becomes `?`.
fn escape_text(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for ch in line.chars() {
        match ch {
            '\\' => out.push_str(r"\\"),
            '(' => out.push_str(r"\("),
            ')' => out.push_str(r"\)"),
            ' '..='~' => out.push(ch),
            _ => match win_ansi_byte(ch) {
                Some(byte) => out.push_str(&format!("\\{byte:03o}")),
                None => out.push('?'),
            },
        }
    }
    out
}

/// WinAnsi (CP1252) byte for a non-ASCII char, if the encoding has one.
fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch {
        '\u{2026}' => Some(0x85),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        c if (0xA0..=0xFF).contains(&(c as u32)) => Some(c as u32 as u8),
        _ => None,
    }
}
