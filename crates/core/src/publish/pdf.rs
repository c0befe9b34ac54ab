//! Single-page PDF rendering of a summary document.
//!
//! Produces an A4 page with the title at 16pt and the three summary lines at
//! 12pt, using the built-in Helvetica font. Text is WinAnsi encoded, so
//! accented Latin-1 characters print correctly; anything outside Latin-1 is
//! replaced by `?`.

use rust_decimal::Decimal;

use super::document::SummaryDocument;

/// A4 page size in points.
const PAGE_WIDTH_PT: &str = "595.28";
const PAGE_HEIGHT_PT: &str = "841.89";
const PAGE_HEIGHT_MM: i64 = 297;

/// Left margin and baselines, in millimetres from the top-left corner.
const LEFT_MM: i64 = 20;
const TITLE_TOP_MM: i64 = 20;
const LINE_TOPS_MM: [i64; 3] = [40, 50, 60];

const TITLE_FONT_SIZE: u32 = 16;
const LINE_FONT_SIZE: u32 = 12;

/// Renders the document as PDF bytes.
#[must_use]
pub fn render_pdf(doc: &SummaryDocument) -> Vec<u8> {
    let content = content_stream(doc);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH_PT} {PAGE_HEIGHT_PT}] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
        ),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    out.extend_from_slice(xref.as_bytes());

    out
}

fn content_stream(doc: &SummaryDocument) -> String {
    let mut ops = vec![text_op(&doc.title, TITLE_FONT_SIZE, TITLE_TOP_MM)];
    for (line, top) in doc.lines.iter().zip(LINE_TOPS_MM) {
        ops.push(text_op(line, LINE_FONT_SIZE, top));
    }
    ops.join("\n")
}

fn text_op(text: &str, size: u32, top_mm: i64) -> String {
    format!(
        "BT\n/F1 {size} Tf\n{} {} Td\n{} Tj\nET",
        mm_to_pt(LEFT_MM),
        mm_to_pt(PAGE_HEIGHT_MM - top_mm),
        pdf_string(text)
    )
}

/// Converts millimetres to points, two decimal places.
fn mm_to_pt(mm: i64) -> Decimal {
    (Decimal::from(mm) * Decimal::from(72) / Decimal::new(254, 1)).round_dp(2)
}

/// Encodes text as a PDF literal string in WinAnsi.
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", u32::from(ch))),
            _ => out.push('?'),
        }
    }
    out.push(')');
    out
}
