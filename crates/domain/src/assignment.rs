// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of free-text weekly teaching assignments.
//!
//! An assignment string has the form
//! `Subject: Class, Class; Subject: Class`. Parsing is permissive:
//! malformed segments contribute nothing and are collected separately
//! so a host can surface them without changing parse results.

use serde::{Deserialize, Serialize};

const ENTRY_SEPARATOR: char = ';';
const SUBJECT_SEPARATOR: char = ':';
const CLASS_SEPARATOR: char = ',';

/// One `Subject: Class, Class` entry of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    /// Subject name, trimmed, original casing preserved.
    pub subject: String,
    /// Normalized class tokens in the order written. Duplicates are kept.
    pub classes: Vec<String>,
}

impl AssignmentEntry {
    /// Returns the key used to compare this entry's subject with others.
    #[must_use]
    pub fn subject_key(&self) -> String {
        subject_key(&self.subject)
    }

    /// Returns whether the normalized class token appears in this entry.
    #[must_use]
    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl std::fmt::Display for AssignmentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SUBJECT_SEPARATOR} ", self.subject)?;
        for (idx, class) in self.classes.iter().enumerate() {
            if idx > 0 {
                write!(f, "{CLASS_SEPARATOR} ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

/// Why a segment was dropped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No `:` between subject and classes.
    MissingSeparator,
    /// Nothing before the `:`.
    MissingSubject,
    /// No class token after the `:`.
    MissingClasses,
}

/// A segment the parser could not turn into an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredSegment {
    /// Zero-based index of the segment in the raw string.
    pub position: usize,
    /// The trimmed segment text.
    pub text: String,
    /// Why the segment was dropped.
    pub reason: IgnoreReason,
}

/// Result of parsing an assignment string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedAssignment {
    /// Recognized entries in input order.
    pub entries: Vec<AssignmentEntry>,
    /// Malformed segments that contributed nothing.
    pub ignored: Vec<IgnoredSegment>,
}

impl ParsedAssignment {
    /// Returns whether no entry was recognized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates every `(entry, class)` pair in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&AssignmentEntry, &str)> {
        self.entries
            .iter()
            .flat_map(|entry| entry.classes.iter().map(move |c| (entry, c.as_str())))
    }
}

impl std::fmt::Display for ParsedAssignment {
    /// Renders the recognized entries back into the assignment grammar.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                write!(f, "{ENTRY_SEPARATOR} ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Parses a raw assignment string.
///
/// Blank segments (for example a trailing `;`) are skipped silently.
/// Segments without a subject, without a `:` or without any class token
/// are recorded in [`ParsedAssignment::ignored`].
#[must_use]
pub fn parse_assignment(raw: &str) -> ParsedAssignment {
    let mut parsed: ParsedAssignment = ParsedAssignment::default();

    for (position, segment) in raw.split(ENTRY_SEPARATOR).enumerate() {
        let segment: &str = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let ignore = |reason: IgnoreReason| IgnoredSegment {
            position,
            text: segment.to_string(),
            reason,
        };

        let Some((subject_part, class_part)) = segment.split_once(SUBJECT_SEPARATOR) else {
            parsed.ignored.push(ignore(IgnoreReason::MissingSeparator));
            continue;
        };

        let subject: &str = subject_part.trim();
        if subject.is_empty() {
            parsed.ignored.push(ignore(IgnoreReason::MissingSubject));
            continue;
        }

        let classes: Vec<String> = class_part
            .split(CLASS_SEPARATOR)
            .map(normalize_class)
            .filter(|c| !c.is_empty())
            .collect();
        if classes.is_empty() {
            parsed.ignored.push(ignore(IgnoreReason::MissingClasses));
            continue;
        }

        parsed.entries.push(AssignmentEntry {
            subject: subject.to_string(),
            classes,
        });
    }

    parsed
}

/// Normalizes a class token: all whitespace removed, upper-cased.
#[must_use]
pub fn normalize_class(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Returns the comparison key of a subject name.
///
/// Lower-cased, trimmed, with internal whitespace runs collapsed to a
/// single space.
#[must_use]
pub fn subject_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}
