/// Cleans a raw entry into its dictionary form: lowercased, with every
/// character outside ASCII `a-z` stripped. Digits, punctuation, and
/// accented letters are dropped outright rather than transliterated.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[test]
fn test_clean() {
    assert_eq!(clean("Mother's Day"), "mothersday");
    assert_eq!(clean("AC/DC"), "acdc");
    assert_eq!(clean("straße"), "strae");
    assert_eq!(clean("café"), "caf");
    assert_eq!(clean("42"), "");
    assert_eq!(clean(""), "");
}
