// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_teacher;
use crate::{Conflict, Teacher, TeacherId, detect_conflicts};
use std::collections::BTreeMap;

fn week_of(entries: &[(&str, &str)]) -> BTreeMap<TeacherId, String> {
    entries
        .iter()
        .map(|(id, text)| (TeacherId::new(id), String::from(*text)))
        .collect()
}

fn directory() -> Vec<Teacher> {
    vec![
        create_test_teacher("A", "Nguyễn Văn A", &[]),
        create_test_teacher("B", "Trần Thị B", &[]),
        create_test_teacher("C", "Lê Văn C", &[]),
    ]
}

#[test]
fn test_conflict_detected_case_insensitively_from_both_sides() {
    let current: BTreeMap<TeacherId, String> =
        week_of(&[("A", "Toán: 6A1"), ("B", "toán: 6a1, 6A2")]);
    let teachers: Vec<Teacher> = directory();

    let from_a: Vec<Conflict> =
        detect_conflicts("Toán: 6A1", &current, &teachers, Some(&TeacherId::new("A")));
    assert_eq!(
        from_a,
        vec![Conflict {
            class: String::from("6A1"),
            subject: String::from("Toán"),
            teacher_id: TeacherId::new("B"),
            teacher_name: String::from("Trần Thị B"),
        }]
    );

    let from_b: Vec<Conflict> = detect_conflicts(
        "toán: 6a1, 6A2",
        &current,
        &teachers,
        Some(&TeacherId::new("B")),
    );
    assert_eq!(from_b.len(), 1);
    assert_eq!(from_b[0].class, "6A1");
    assert_eq!(from_b[0].subject.to_lowercase(), "toán");
    assert_eq!(from_b[0].teacher_id, TeacherId::new("A"));
}

#[test]
fn test_excluding_self_removes_self_conflict() {
    let current: BTreeMap<TeacherId, String> = week_of(&[("A", "Toán: 6A1")]);
    let teachers: Vec<Teacher> = directory();

    let excluded: Vec<Conflict> =
        detect_conflicts("Toán: 6A1", &current, &teachers, Some(&TeacherId::new("A")));
    let included: Vec<Conflict> = detect_conflicts("Toán: 6A1", &current, &teachers, None);

    assert!(excluded.is_empty());
    assert_eq!(included.len(), 1);
    assert_eq!(included[0].teacher_id, TeacherId::new("A"));
}

#[test]
fn test_different_subject_same_class_is_not_a_conflict() {
    let current: BTreeMap<TeacherId, String> = week_of(&[("B", "Tin: 6A1")]);

    let conflicts: Vec<Conflict> = detect_conflicts(
        "Toán: 6A1",
        &current,
        &directory(),
        Some(&TeacherId::new("A")),
    );

    assert!(conflicts.is_empty());
}

#[test]
fn test_conflicts_follow_directory_then_class_order() {
    let current: BTreeMap<TeacherId, String> =
        week_of(&[("C", "Toán: 6A2"), ("B", "Toán: 6A2, 6A1")]);

    let conflicts: Vec<Conflict> = detect_conflicts(
        "Toán: 6A1, 6A2",
        &current,
        &directory(),
        Some(&TeacherId::new("A")),
    );

    let summary: Vec<(&str, &str)> = conflicts
        .iter()
        .map(|c| (c.teacher_id.value(), c.class.as_str()))
        .collect();
    assert_eq!(summary, vec![("B", "6A1"), ("B", "6A2"), ("C", "6A2")]);
}

#[test]
fn test_repeated_proposed_segments_are_not_deduplicated() {
    let current: BTreeMap<TeacherId, String> = week_of(&[("B", "Toán: 6A1")]);

    let conflicts: Vec<Conflict> = detect_conflicts(
        "Toán: 6A1; TOÁN: 6A1",
        &current,
        &directory(),
        Some(&TeacherId::new("A")),
    );

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[1].subject, "TOÁN");
}

#[test]
fn test_teachers_missing_from_directory_are_ignored() {
    let current: BTreeMap<TeacherId, String> = week_of(&[("Z", "Toán: 6A1")]);

    let conflicts: Vec<Conflict> = detect_conflicts("Toán: 6A1", &current, &directory(), None);

    assert!(conflicts.is_empty());
}

#[test]
fn test_empty_proposal_has_no_conflicts() {
    let current: BTreeMap<TeacherId, String> = week_of(&[("B", "Toán: 6A1")]);

    assert!(detect_conflicts("", &current, &directory(), None).is_empty());
    assert!(detect_conflicts("garbage", &current, &directory(), None).is_empty());
}

#[test]
fn test_conflict_display_names_class_subject_and_teacher() {
    let conflict: Conflict = Conflict {
        class: String::from("6A1"),
        subject: String::from("Toán"),
        teacher_id: TeacherId::new("B"),
        teacher_name: String::from("Trần Thị B"),
    };

    let text: String = conflict.to_string();
    assert!(text.contains("6A1"));
    assert!(text.contains("Toán"));
    assert!(text.contains("Trần Thị B"));
}
