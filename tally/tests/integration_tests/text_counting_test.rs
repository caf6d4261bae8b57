// tests/integration_tests/text_counting_test.rs
use tally::{TextCounts, count_alphabets_and_spaces};

#[test]
fn test_documented_examples() {
    let cases = [
        ("Hello world", TextCounts::new(10, 1)),
        ("Room 101 is ready!", TextCounts::new(11, 3)),
        ("naïve façade", TextCounts::new(11, 1)),
        ("", TextCounts::new(0, 0)),
    ];

    for (text, expected) in cases {
        assert_eq!(count_alphabets_and_spaces(text), expected, "{text:?}");
    }
}

#[test]
fn test_non_ascii_letters_and_spaces() {
    let counts = count_alphabets_and_spaces("Привет мир");
    assert_eq!(counts.alphabets, 9);
    assert_eq!(counts.spaces, 1);

    let counts = count_alphabets_and_spaces("tab\there\u{a0}nbsp");
    assert_eq!(counts.alphabets, 11);
    assert_eq!(counts.spaces, 0, "Only U+0020 counts as a space");
}

#[test]
fn test_only_letter_categories_count() {
    let cases = [
        ("नमस्ते", TextCounts::new(4, 0)),
        ("\u{216B}\u{0345}", TextCounts::new(0, 0)),
        ("Ⅻ ⅻ", TextCounts::new(0, 1)),
        ("cafe\u{301} au lait", TextCounts::new(10, 2)),
    ];

    for (text, expected) in cases {
        assert_eq!(count_alphabets_and_spaces(text), expected, "{text:?}");
    }
}
