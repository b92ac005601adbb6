//! Tests for suggestion parsing

use super::*;
use proptest::prelude::*;

#[test]
fn test_three_parts() {
    assert_eq!(parse_suggestions("A|B|C"), vec!["A", "B", "C"]);
}

#[test]
fn test_three_parts_with_whitespace() {
    assert_eq!(parse_suggestions(" A | B |C "), vec!["A", "B", "C"]);
}

#[test]
fn test_surrounding_newlines_trimmed() {
    assert_eq!(
        parse_suggestions("\nSeize the day | Crush it | Make it happen\n"),
        vec!["Seize the day", "Crush it", "Make it happen"]
    );
}

#[test]
fn test_two_parts_rejected() {
    assert!(parse_suggestions("A|B").is_empty());
}

#[test]
fn test_four_parts_rejected() {
    assert!(parse_suggestions("A|B|C|D").is_empty());
}

#[test]
fn test_empty_content() {
    assert!(parse_suggestions("").is_empty());
    assert!(parse_suggestions("   ").is_empty());
}

#[test]
fn test_empty_pieces_dropped_before_counting() {
    // Four delimiters but one empty piece: three usable pieces remain
    assert_eq!(parse_suggestions("A||B|C"), vec!["A", "B", "C"]);
    // Trailing delimiter leaves three usable pieces
    assert_eq!(parse_suggestions("A|B|C|"), vec!["A", "B", "C"]);
}

#[test]
fn test_single_piece_rejected() {
    assert!(parse_suggestions("Just one suggestion without delimiters").is_empty());
}

// For any response, the result has exactly SUGGESTION_COUNT elements or
// none, and every returned element is trimmed and non-empty.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_all_or_nothing(content in "[a-zA-Z |]{0,120}") {
        let options = parse_suggestions(&content);
        prop_assert!(
            options.is_empty() || options.len() == SUGGESTION_COUNT,
            "Got {} options", options.len()
        );
        for option in &options {
            prop_assert!(!option.is_empty());
            prop_assert_eq!(option.trim(), option.as_str());
        }
    }

    #[test]
    fn prop_exactly_three_always_accepted(
        a in "[a-zA-Z]{1,20}",
        b in "[a-zA-Z]{1,20}",
        c in "[a-zA-Z]{1,20}",
    ) {
        let content = format!(" {} | {} | {} ", a, b, c);
        prop_assert_eq!(parse_suggestions(&content), vec![a, b, c]);
    }
}
