use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static HORIZONTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static BROKEN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\n|^)([A-Z][A-Za-z0-9 ]{2,40}):\s*").unwrap());

// Marker must be followed by horizontal whitespace so bold/italic
// asterisks at line starts survive formatting.
static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\n|^)\s*[-•*][ \t]+").unwrap());

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\n|^)\s*(\d+)[.)]\s*").unwrap());

/// Best-effort display cleanup of a generated answer.
///
/// Strips control characters, collapses redundant whitespace, and repairs
/// common markdown damage (broken headings, inconsistent list markers).
/// Purely a display concern: the persisted answer is never rewritten.
/// Total over all inputs; already-clean paragraph text passes through
/// unchanged.
pub fn format_answer(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped: String = text
        .chars()
        .filter(|&c| !is_stripped_control(c))
        .collect();

    let collapsed = HORIZONTAL_RUNS.replace_all(&stripped, " ");
    let paragraphs = NEWLINE_RUNS.replace_all(&collapsed, "\n\n");

    let headings = BROKEN_HEADING.replace_all(&paragraphs, "\n\n**${1}**: ");
    let bullets = BULLET_MARKER.replace_all(&headings, "\n\n• ");
    let numbered = NUMBERED_MARKER.replace_all(&bullets, "\n\n${1}. ");

    numbered.into_owned()
}

// C0 controls and DEL, keeping tab, newline, and carriage return.
fn is_stripped_control(c: char) -> bool {
    (c.is_control() && c != '\t' && c != '\n' && c != '\r') || c == '\u{7f}'
}

/// Structural analysis of a piece of text, exposed by the diagnostics
/// endpoint.
#[derive(Debug, Serialize)]
pub struct TextDiagnostics {
    pub length: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub words: usize,
    pub special_chars: usize,
    pub control_chars: usize,
    pub sample: String,
}

pub fn diagnose_text(text: &str) -> TextDiagnostics {
    let sample: String = text.chars().take(100).collect();
    let truncated = text.chars().count() > 100;

    TextDiagnostics {
        length: text.chars().count(),
        paragraphs: text.split("\n\n").count(),
        lines: text.split('\n').count(),
        words: text.split_whitespace().count(),
        special_chars: text
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count(),
        control_chars: text.chars().filter(|c| c.is_control()).count(),
        sample: if truncated {
            format!("{}...", sample)
        } else {
            sample
        },
    }
}
