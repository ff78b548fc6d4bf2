use parley::infrastructure::text_processing::{diagnose_text, format_answer};

#[test]
fn given_clean_paragraph_text_when_formatting_then_returns_input_unchanged() {
    let input = "hello world\n\nnext paragraph with single spaces";
    assert_eq!(format_answer(input), input);
}

#[test]
fn given_already_formatted_text_when_formatting_twice_then_output_is_stable() {
    let input = "Summary: some    spaced   text\n\n\n\nwith  runs\n- item one\n- item two";
    let once = format_answer(input);
    let twice = format_answer(&once);
    assert_eq!(once, twice);
}

#[test]
fn given_text_with_control_characters_when_formatting_then_strips_them() {
    let input = "hel\u{0000}lo\u{0007} wor\u{007f}ld";
    assert_eq!(format_answer(input), "hello world");
}

#[test]
fn given_text_with_redundant_spaces_when_formatting_then_collapses_to_single_space() {
    let input = "hello    world\tand\t\ttabs";
    assert_eq!(format_answer(input), "hello world\tand tabs");
}

#[test]
fn given_text_with_excessive_newlines_when_formatting_then_collapses_to_paragraph_break() {
    let input = "paragraph one\n\n\n\n\nparagraph two";
    assert_eq!(format_answer(input), "paragraph one\n\nparagraph two");
}

#[test]
fn given_title_pattern_when_formatting_then_rewrites_to_bold_heading() {
    let input = "intro\nKey Points: the details";
    assert_eq!(format_answer(input), "intro\n\n**Key Points**: the details");
}

#[test]
fn given_mixed_bullet_markers_when_formatting_then_normalizes_to_bullet() {
    let input = "list\n- first\n• second\n* third";
    assert_eq!(format_answer(input), "list\n\n• first\n\n• second\n\n• third");
}

#[test]
fn given_numbered_markers_when_formatting_then_normalizes_numbering() {
    let input = "steps\n1. one\n2) two";
    assert_eq!(format_answer(input), "steps\n\n1. one\n\n2. two");
}

#[test]
fn given_empty_input_when_formatting_then_returns_empty() {
    assert_eq!(format_answer(""), "");
}

#[test]
fn given_binary_noise_when_formatting_then_returns_defined_value_without_panicking() {
    let noise: String = (0u8..=255).map(|b| b as char).collect();
    let _ = format_answer(&noise);
}

#[test]
fn given_text_when_diagnosing_then_reports_structure() {
    let analysis = diagnose_text("one two\n\nthree, four!");
    assert_eq!(analysis.paragraphs, 2);
    assert_eq!(analysis.lines, 3);
    assert_eq!(analysis.words, 4);
    assert_eq!(analysis.special_chars, 2);
    assert_eq!(analysis.control_chars, 2);
}

#[test]
fn given_trailing_newline_when_diagnosing_then_final_empty_line_is_counted() {
    let analysis = diagnose_text("a\n");
    assert_eq!(analysis.lines, 2);
    assert_eq!(diagnose_text("a").lines, 1);
}

#[test]
fn given_long_text_when_diagnosing_then_sample_is_truncated() {
    let text = "a".repeat(150);
    let analysis = diagnose_text(&text);
    assert_eq!(analysis.length, 150);
    assert!(analysis.sample.ends_with("..."));
    assert_eq!(analysis.sample.chars().count(), 103);
}
