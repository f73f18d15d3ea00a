//! PDF mood report rendering.
//!
//! [`render_mood_report`] lays out a fixed document: a title, a labeled
//! identity block, and two labeled free-text sections (mood analysis and
//! recommendations), flowing onto extra pages as needed. It never fails its
//! caller: any internal rendering fault is logged and an empty byte vector is
//! returned, so the download path stays alive.

use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tracing::error;

/// Maximum characters per wrapped body line (A4, Helvetica 11pt, 15mm margins).
const WRAP_WIDTH: usize = 88;

/// Download filename the web layer should use for the rendered bytes.
pub const REPORT_FILENAME: &str = "mood_report.pdf";

#[derive(Debug, Error)]
enum RenderError {
    #[error("pdf error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("buffer error: {0}")]
    Buffer(String),
}

/// One line of the laid-out document.
enum Line {
    Title(String),
    Label(String),
    Body(String),
    Blank,
}

/// Render a mood report as PDF bytes.
///
/// The two free-text fields are stripped to printable 7-bit ASCII first; the
/// completion service may return multibyte punctuation the built-in PDF fonts
/// cannot encode. On any rendering fault this logs the error and returns an
/// empty document rather than failing the caller.
pub fn render_mood_report(
    name: &str,
    age: i64,
    user_type: &str,
    mood: &str,
    recommendation: &str,
) -> Vec<u8> {
    match try_render(name, age, user_type, mood, recommendation) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("PDF generation failed: {}", err);
            Vec::new()
        }
    }
}

fn try_render(
    name: &str,
    age: i64,
    user_type: &str,
    mood: &str,
    recommendation: &str,
) -> Result<Vec<u8>, RenderError> {
    let lines = layout(name, age, user_type, mood, recommendation);

    let (doc, first_page, first_layer) =
        PdfDocument::new("Manasaroha Mood Report", Mm(210.0), Mm(297.0), "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    // Destructure so the cursor picks up Mm's inner float type.
    let Mm(top) = Mm(275.0);
    let Mm(bottom) = Mm(18.0);
    let mut y = top;

    for line in lines {
        if y < bottom {
            let (page, layer_index) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_index);
            y = top;
        }

        match line {
            Line::Title(text) => {
                layer.use_text(text, 16.0, Mm(55.0), Mm(y), &bold);
                y -= 14.0;
            }
            Line::Label(text) => {
                layer.use_text(text, 12.0, Mm(15.0), Mm(y), &bold);
                y -= 7.0;
            }
            Line::Body(text) => {
                layer.use_text(text, 11.0, Mm(15.0), Mm(y), &regular);
                y -= 6.0;
            }
            Line::Blank => {
                y -= 5.0;
            }
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)?;
    buf.into_inner()
        .map_err(|e| RenderError::Buffer(e.to_string()))
}

/// Build the full line sequence for the document.
fn layout(name: &str, age: i64, user_type: &str, mood: &str, recommendation: &str) -> Vec<Line> {
    let mut lines = vec![
        Line::Title("Manasaroha Mood Report".to_string()),
        Line::Body(format!("Name: {}", sanitize(name))),
        Line::Body(format!("Age: {}", age)),
        Line::Body(format!("User Type: {}", sanitize(user_type))),
        Line::Blank,
        Line::Label("Mood Analysis:".to_string()),
    ];

    push_wrapped(&mut lines, mood);
    lines.push(Line::Blank);
    lines.push(Line::Label("Recommendations:".to_string()));
    push_wrapped(&mut lines, recommendation);

    lines
}

fn push_wrapped(lines: &mut Vec<Line>, text: &str) {
    for paragraph in sanitize(text).lines() {
        if paragraph.trim().is_empty() {
            lines.push(Line::Blank);
            continue;
        }
        for wrapped in wrap(paragraph.trim(), WRAP_WIDTH) {
            lines.push(Line::Body(wrapped));
        }
    }
}

/// Strip characters outside the printable 7-bit range, preserving newlines.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || (' '..='~').contains(c))
        .collect()
}

/// Greedy word wrap; words longer than the width are hard-split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.len() > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let (head, tail) = word.split_at(width);
            out.push(head.to_string());
            word = tail;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_ascii() {
        assert_eq!(sanitize("calm — peaceful 🧘 mood"), "calm  peaceful  mood");
        assert_eq!(sanitize("plain ascii"), "plain ascii");
        assert_eq!(sanitize("line\nbreaks\nsurvive"), "line\nbreaks\nsurvive");
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_at_word_boundary() {
        let wrapped = wrap("one two three four", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let wrapped = wrap("abcdefghij", 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_mood_report(
            "Alice",
            25,
            "Student",
            "You sound happy and energized.",
            "Movie: Up. Song: Happy. Book: The Alchemist.",
        );

        assert!(!bytes.is_empty());
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn test_render_long_text_paginates() {
        let long = "An unusually detailed reflection on the day. ".repeat(200);
        let bytes = render_mood_report("Bob", 31, "Working", &long, &long);

        assert!(!bytes.is_empty());
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn test_render_handles_non_ascii_input() {
        let bytes = render_mood_report("Ava", 19, "Other", "très heureux 😊", "写真 — a book");
        assert!(!bytes.is_empty());
    }
}
