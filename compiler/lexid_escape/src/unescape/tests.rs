use super::*;
use pretty_assertions::assert_eq;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// === Source context ===

#[test]
fn no_escapes_passes_through() {
    assert_eq!(unescape("abc", DecodeContext::Source), Ok(utf16("abc")));
    assert_eq!(unescape("", DecodeContext::Source), Ok(Vec::new()));
}

#[test]
fn four_digit_escapes() {
    assert_eq!(unescape(r"\u0061", DecodeContext::Source), Ok(utf16("a")));
    assert_eq!(
        unescape(r"\u00e1\u00FF", DecodeContext::Source),
        Ok(utf16("\u{E1}\u{FF}"))
    );
}

#[test]
fn four_digit_surrogate_halves_join() {
    assert_eq!(
        unescape(r"\uD83D\uDE00", DecodeContext::Source),
        Ok(utf16("\u{1F600}"))
    );
}

#[test]
fn four_digit_lone_surrogate_survives() {
    assert_eq!(
        unescape(r"\uD800a", DecodeContext::Source),
        Ok(vec![0xD800, 0x61])
    );
}

#[test]
fn eight_digit_escapes() {
    assert_eq!(
        unescape(r"\U00000061\U0001F600", DecodeContext::Source),
        Ok(utf16("a\u{1F600}"))
    );
}

#[test]
fn eight_digit_out_of_range() {
    assert_eq!(
        unescape(r"ab\U00110000", DecodeContext::Source),
        Err(UnescapeError::OutOfRange { offset: 2 })
    );
}

#[test]
fn mixed_literal_and_escaped() {
    assert_eq!(
        unescape("\\u0061\u{1D538}b", DecodeContext::Source),
        Ok(utf16("a\u{1D538}b"))
    );
}

#[test]
fn truncated_escape() {
    assert_eq!(
        unescape(r"\u12", DecodeContext::Source),
        Err(UnescapeError::Truncated { offset: 0 })
    );
    assert_eq!(
        unescape(r"x\U0001F60", DecodeContext::Source),
        Err(UnescapeError::Truncated { offset: 1 })
    );
}

#[test]
fn invalid_hex_digit() {
    assert_eq!(
        unescape(r"\u00G1", DecodeContext::Source),
        Err(UnescapeError::InvalidDigit {
            offset: 0,
            found: 'G'
        })
    );
    assert_eq!(
        unescape("\\u00\u{E1}1", DecodeContext::Source),
        Err(UnescapeError::InvalidDigit {
            offset: 0,
            found: '\u{E1}'
        })
    );
}

#[test]
fn backslash_without_escape_letter_passes_through() {
    assert_eq!(unescape(r"a\b", DecodeContext::Source), Ok(utf16(r"a\b")));
    assert_eq!(unescape("a\\", DecodeContext::Source), Ok(utf16("a\\")));
}

#[test]
fn source_context_ignores_entities() {
    assert_eq!(unescape("&#97;", DecodeContext::Source), Ok(utf16("&#97;")));
}

// === Markup context ===

#[test]
fn decimal_entities() {
    assert_eq!(
        unescape("&#97;&#128512;", DecodeContext::Markup),
        Ok(utf16("a\u{1F600}"))
    );
}

#[test]
fn hex_entities_any_case() {
    assert_eq!(
        unescape("&#x61;&#XE1;&#x1f600;", DecodeContext::Markup),
        Ok(utf16("a\u{E1}\u{1F600}"))
    );
}

#[test]
fn markup_context_ignores_backslashes() {
    assert_eq!(
        unescape(r"\u0061", DecodeContext::Markup),
        Ok(utf16(r"\u0061"))
    );
}

#[test]
fn ampersand_without_hash_passes_through() {
    assert_eq!(unescape("a&b", DecodeContext::Markup), Ok(utf16("a&b")));
}

#[test]
fn empty_entity() {
    assert_eq!(
        unescape("&#;", DecodeContext::Markup),
        Err(UnescapeError::EmptyEntity { offset: 0 })
    );
    assert_eq!(
        unescape("a&#x;", DecodeContext::Markup),
        Err(UnescapeError::EmptyEntity { offset: 1 })
    );
}

#[test]
fn unterminated_entity() {
    assert_eq!(
        unescape("&#97", DecodeContext::Markup),
        Err(UnescapeError::Unterminated { offset: 0 })
    );
}

#[test]
fn entity_with_bad_digit() {
    assert_eq!(
        unescape("&#9a;", DecodeContext::Markup),
        Err(UnescapeError::InvalidDigit {
            offset: 0,
            found: 'a'
        })
    );
}

#[test]
fn entity_out_of_range() {
    assert_eq!(
        unescape("&#1114112;", DecodeContext::Markup),
        Err(UnescapeError::OutOfRange { offset: 0 })
    );
    assert_eq!(
        unescape("&#x99999999999;", DecodeContext::Markup),
        Err(UnescapeError::OutOfRange { offset: 0 })
    );
    assert_eq!(
        unescape("&#1114111;", DecodeContext::Markup),
        Ok(vec![0xDBFF, 0xDFFF])
    );
}
