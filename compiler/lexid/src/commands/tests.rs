use super::*;
use pretty_assertions::assert_eq;

use crate::config::parse_args;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn run_args(args: &[&str]) -> (Status, String) {
    let invocation = parse_args(args).unwrap();
    let mut out = Vec::new();
    let status = run(&invocation, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn fields(output: &str) -> Vec<Vec<&str>> {
    output
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect()
}

// === Argument decoding ===

#[test]
fn plain_arguments_are_taken_literally() {
    let config = CliConfig::default();
    assert_eq!(
        identifier_units(r"\u0061", &config).unwrap(),
        utf16(r"\u0061")
    );
}

#[test]
fn escaped_arguments_are_decoded() {
    let config = CliConfig {
        escaped_input: true,
        ..CliConfig::default()
    };
    assert_eq!(identifier_units(r"\u0061b", &config).unwrap(), utf16("ab"));
    assert_eq!(identifier_units(r"\uD800", &config).unwrap(), vec![0xD800]);
    assert!(matches!(
        identifier_units(r"\u12", &config),
        Err(CommandError::Unescape { .. })
    ));
}

#[test]
fn render_spells_lone_surrogates() {
    assert_eq!(render(&utf16("a\u{1F600}")), "a\u{1F600}");
    assert_eq!(render(&[0x61, 0xDC00, 0x62]), r"a\uDC00b");
}

// === check ===

#[test]
fn check_reports_each_identifier() {
    let (status, output) = run_args(&["check", "abc", "_x1"]);
    assert_eq!(status, Status::Success);
    assert_eq!(output, "abc: valid\n_x1: valid\n");
}

#[test]
fn check_fails_when_any_identifier_is_invalid() {
    let (status, output) = run_args(&["check", "a", "1a"]);
    assert_eq!(status, Status::Failure);
    assert_eq!(
        output,
        "a: valid\n1a: invalid (U+0031 cannot start an identifier)\n"
    );
}

#[test]
fn check_escaped_lone_surrogate() {
    let (status, output) = run_args(&["check", "--escaped", r"a\uD800"]);
    assert_eq!(status, Status::Failure);
    assert_eq!(
        output,
        "a\\uD800: invalid (unpaired surrogate U+D800 at offset 1)\n"
    );
}

// === classify ===

#[test]
fn classify_lists_scalars_with_offsets() {
    let (status, output) = run_args(&["classify", "a\u{1D538}\u{200D}"]);
    assert_eq!(status, Status::Success);
    let lines = fields(&output);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], vec!["a\u{1D538}\u{200D}:"]);
    assert_eq!(lines[1][..2].to_vec(), vec!["0", "U+0061"]);
    assert_eq!(lines[1][3], "letter");
    assert_eq!(lines[2][..2].to_vec(), vec!["1", "U+1D538"]);
    assert_eq!(lines[2][3], "letter");
    assert_eq!(lines[3][..2].to_vec(), vec!["3", "U+200D"]);
    assert_eq!(lines[3][3], "formatting");
}

#[test]
fn classify_surrogate_has_no_classes() {
    let (_, output) = run_args(&["classify", "--escaped", r"\uDC00"]);
    let lines = fields(&output);
    assert_eq!(lines[1], vec!["0", "U+DC00", "Surrogate", "-"]);
}

// === strip ===

#[test]
fn strip_removes_formatting() {
    let (status, output) = run_args(&["strip", "a\u{200D}b", "c\u{200F}"]);
    assert_eq!(status, Status::Success);
    assert_eq!(output, "ab\nc\n");
}

// === escape ===

#[test]
fn escape_prints_variants_in_order() {
    let (status, output) = run_args(&["escape", "ab"]);
    assert_eq!(status, Status::Success);
    assert_eq!(
        fields(&output),
        vec![
            vec!["numeric-4", "all", r"\u0061\u0062"],
            vec!["numeric-4", "first-only", r"\u0061b"],
            vec!["numeric-8", "all", r"\U00000061\U00000062"],
            vec!["numeric-8", "first-only", r"\U00000061b"],
        ]
    );
}

#[test]
fn escape_with_entities_separates_identifiers() {
    let (_, output) = run_args(&["escape", "--entities", "a", "b"]);
    let blocks: Vec<&str> = output.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].lines().count(), 4);
    assert!(blocks[1].contains("&#x62;"));
}

#[test]
fn escape_rejects_lone_surrogate() {
    let invocation = parse_args(&["escape", "--escaped", r"\uD800"]).unwrap();
    let mut out = Vec::new();
    assert!(matches!(
        run(&invocation, &mut out),
        Err(CommandError::Escape(EscapeError::UnpairedSurrogate {
            offset: 0,
            unit: 0xD800
        }))
    ));
    assert!(out.is_empty());
}
