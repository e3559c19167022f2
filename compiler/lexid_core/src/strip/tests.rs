use super::*;
use pretty_assertions::assert_eq;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn no_format_chars_borrows_input() {
    let text = utf16("abc\u{1F600}");
    let stripped = remove_format_scalars(&text);
    assert!(matches!(stripped, Cow::Borrowed(_)));
    assert_eq!(&*stripped, text.as_slice());
}

#[test]
fn empty_input_borrows() {
    assert!(matches!(remove_format_scalars(&[]), Cow::Borrowed(_)));
    assert!(matches!(remove_format_chars(""), Cow::Borrowed(_)));
}

#[test]
fn removes_zwj_and_rlm() {
    assert_eq!(
        remove_format_scalars(&utf16("a\u{200D}b")).into_owned(),
        utf16("ab")
    );
    assert_eq!(
        remove_format_scalars(&utf16("a\u{200F}b\u{200D}")).into_owned(),
        utf16("ab")
    );
}

#[test]
fn keeps_astral_scalars_after_removal() {
    let text = utf16("\u{200D}\u{20000}x\u{E0001}\u{1D538}");
    // U+E0001 LANGUAGE TAG is an astral formatting character.
    assert_eq!(
        remove_format_scalars(&text).into_owned(),
        utf16("\u{20000}x\u{1D538}")
    );
}

#[test]
fn keeps_lone_surrogates() {
    let text = vec![0xD800, 0x200D, 0xDF00];
    assert_eq!(remove_format_scalars(&text).into_owned(), vec![0xD800, 0xDF00]);
}

#[test]
fn removal_that_forms_a_format_pair_is_stripped_too() {
    // DB40 + DC01 is U+E0001 LANGUAGE TAG once the ZWJ between them is gone.
    let text = vec![0x61, 0xDB40, 0x200D, 0xDC01, 0x62];
    assert_eq!(remove_format_scalars(&text).into_owned(), utf16("ab"));
}

#[test]
fn stripping_is_idempotent() {
    let text = utf16("\u{200E}a\u{200D}\u{0301}b\u{FEFF}");
    let once = remove_format_scalars(&text).into_owned();
    let twice = remove_format_scalars(&once);
    assert!(matches!(twice, Cow::Borrowed(_)));
    assert_eq!(twice.into_owned(), once);
}

#[test]
fn str_form_matches_utf16_form() {
    let text = "a\u{200D}b\u{E0001}\u{20000}";
    let stripped = remove_format_chars(text);
    assert_eq!(stripped, "ab\u{20000}");
    assert_eq!(
        utf16(&stripped),
        remove_format_scalars(&utf16(text)).into_owned()
    );
}

#[test]
fn equality_ignores_format_chars() {
    assert!(eq_ignoring_format(&utf16("a\u{200D}b"), &utf16("ab")));
    assert!(eq_ignoring_format(&utf16("\u{200F}ab"), &utf16("a\u{200D}b")));
    assert!(!eq_ignoring_format(&utf16("a\u{200D}b"), &utf16("abc")));
    assert!(!eq_ignoring_format(&utf16("ab"), &utf16("ba")));
}

#[test]
fn equality_sees_surrogates_paired_by_removal() {
    // Removing the ZWJ pairs D800 with DC01, as in the other operand.
    let joined = [0xD800, 0x200D, 0xDC01];
    let paired = [0xD800, 0xDC01];
    assert!(eq_ignoring_format(&joined, &paired));
    // The pair formed by removal is itself formatting (U+E0001).
    assert!(eq_ignoring_format(&[0x61, 0xDB40, 0x200D, 0xDC01], &[0x61]));
    assert!(!eq_ignoring_format(&joined, &[0xD800]));
}
