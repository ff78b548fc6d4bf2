mod answer_formatter;

pub use answer_formatter::{TextDiagnostics, diagnose_text, format_answer};
