// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentEntry, IgnoreReason, ParsedAssignment, normalize_class, parse_assignment, subject_key,
};

#[test]
fn test_parse_splits_subjects_and_classes() {
    let parsed: ParsedAssignment = parse_assignment("Toán: 6A1, 6A2; Tin: 7A3");

    assert_eq!(
        parsed.entries,
        vec![
            AssignmentEntry {
                subject: String::from("Toán"),
                classes: vec![String::from("6A1"), String::from("6A2")],
            },
            AssignmentEntry {
                subject: String::from("Tin"),
                classes: vec![String::from("7A3")],
            },
        ]
    );
    assert!(parsed.ignored.is_empty());
}

#[test]
fn test_parse_normalizes_class_tokens() {
    let parsed: ParsedAssignment = parse_assignment("  toán :  6 a1 ,6a2,, ");

    assert_eq!(parsed.entries.len(), 1);
    assert_eq!(parsed.entries[0].subject, "toán");
    assert_eq!(parsed.entries[0].classes, vec!["6A1", "6A2"]);
}

#[test]
fn test_parse_keeps_duplicate_classes() {
    let parsed: ParsedAssignment = parse_assignment("Toán: 6A1, 6a1");

    assert_eq!(parsed.entries[0].classes, vec!["6A1", "6A1"]);
}

#[test]
fn test_parse_splits_on_first_colon_only() {
    let parsed: ParsedAssignment = parse_assignment("Toán: 6A:1");

    assert_eq!(parsed.entries[0].subject, "Toán");
    assert_eq!(parsed.entries[0].classes, vec!["6A:1"]);
}

#[test]
fn test_parse_drops_malformed_segments() {
    let parsed: ParsedAssignment = parse_assignment("Toán 6A1; : 6A2; Tin: ; Văn: 8B1");

    assert_eq!(parsed.entries.len(), 1);
    assert_eq!(parsed.entries[0].subject, "Văn");

    let reasons: Vec<IgnoreReason> = parsed.ignored.iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            IgnoreReason::MissingSeparator,
            IgnoreReason::MissingSubject,
            IgnoreReason::MissingClasses,
        ]
    );
    assert_eq!(parsed.ignored[0].position, 0);
    assert_eq!(parsed.ignored[0].text, "Toán 6A1");
}

#[test]
fn test_parse_skips_blank_segments_without_recording_them() {
    let parsed: ParsedAssignment = parse_assignment("Toán: 6A1;;  ; ");

    assert_eq!(parsed.entries.len(), 1);
    assert!(parsed.ignored.is_empty());
}

#[test]
fn test_parse_empty_string_yields_nothing() {
    let parsed: ParsedAssignment = parse_assignment("");

    assert!(parsed.is_empty());
    assert!(parsed.ignored.is_empty());
}

#[test]
fn test_serialized_assignment_reparses_to_same_entries() {
    let inputs: [&str; 4] = [
        "Toán: 6A1, 6A2; Tin: 7A3",
        " toán :6a1,6 a2 ;; Tin:7a3 ; broken",
        "Ngữ  văn: 9A1, 9a1",
        "Công nghệ: 8A1:x",
    ];

    for input in inputs {
        let first: ParsedAssignment = parse_assignment(input);
        let serialized: String = first.to_string();
        let second: ParsedAssignment = parse_assignment(&serialized);

        assert_eq!(first.entries, second.entries, "input: {input}");
        assert_eq!(serialized, second.to_string());
    }
}

#[test]
fn test_display_renders_grammar() {
    let parsed: ParsedAssignment = parse_assignment("toán:6a1,6a2;tin:7a3");

    assert_eq!(parsed.to_string(), "toán: 6A1, 6A2; tin: 7A3");
}

#[test]
fn test_pairs_iterate_in_input_order() {
    let parsed: ParsedAssignment = parse_assignment("Toán: 6A1, 6A2; Tin: 7A3");
    let pairs: Vec<(String, String)> = parsed
        .pairs()
        .map(|(entry, class)| (entry.subject.clone(), class.to_string()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (String::from("Toán"), String::from("6A1")),
            (String::from("Toán"), String::from("6A2")),
            (String::from("Tin"), String::from("7A3")),
        ]
    );
}

#[test]
fn test_subject_key_ignores_case_and_whitespace_runs() {
    assert_eq!(subject_key("  Ngữ   Văn "), "ngữ văn");
    assert_eq!(subject_key("TOÁN"), subject_key("toán"));
}

#[test]
fn test_normalize_class_removes_all_whitespace() {
    assert_eq!(normalize_class(" 6 a 1 "), "6A1");
    assert_eq!(normalize_class("   "), "");
}
