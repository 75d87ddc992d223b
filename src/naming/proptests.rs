//! Property-based tests for reply parsing and formatting

use super::format::{format_track_names, header_label};
use super::parse::{parse_track_names, MAX_NAMES};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z* ']{0,24}[A-Za-z]"
}

proptest! {
    #[test]
    fn parse_never_exceeds_cap_or_keeps_asterisks(content in "(?s).{0,600}") {
        let names = parse_track_names(&content);
        prop_assert!(names.len() <= MAX_NAMES);
        prop_assert!(names.iter().all(|n| !n.contains('*')));
    }

    #[test]
    fn numbered_names_come_back_in_order(names in proptest::collection::vec(arb_name(), 1..10)) {
        let reply = names
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{}. {}", i + 1, n))
            .collect::<Vec<_>>()
            .join("\n");

        let expected: Vec<String> = names.iter().map(|n| n.replace('*', "").trim().to_string()).collect();
        prop_assert_eq!(parse_track_names(&reply), expected);
    }

    #[test]
    fn formatted_results_are_asterisk_free(
        label in "[a-z* ]{0,20}",
        names in proptest::collection::vec(arb_name(), 0..10),
    ) {
        let text = format_track_names(&label, &names);
        prop_assert!(!text.contains('*'));
        prop_assert_eq!(text.lines().filter(|l| l.contains(". ")).count(), names.len());
    }

    #[test]
    fn header_label_is_idempotent(label in "[a-zA-Z* ]{0,20}") {
        let once = header_label(&label);
        prop_assert_eq!(header_label(&once), once.clone());
    }
}
