// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::{ParsedAssignment, parse_assignment, subject_key};
use crate::types::{DuplicateClassPolicy, SubjectConfig};
use std::collections::{HashMap, HashSet};

/// Lookup from subject key to periods per class per week.
///
/// Build it once per version of the subject configuration and reuse it
/// for every teacher and week.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectPeriodTable {
    periods: HashMap<String, f64>,
}

impl SubjectPeriodTable {
    /// Builds the lookup. When two configs share a key the later wins.
    #[must_use]
    pub fn new(subjects: &[SubjectConfig]) -> Self {
        let periods: HashMap<String, f64> = subjects
            .iter()
            .map(|s| (subject_key(&s.name), s.periods))
            .collect();
        Self { periods }
    }

    /// Returns periods per class for a subject, or `None` if unknown.
    #[must_use]
    pub fn periods_for(&self, subject: &str) -> Option<f64> {
        self.periods.get(&subject_key(subject)).copied()
    }

    /// Totals the periods of a raw assignment string.
    #[must_use]
    pub fn total_periods(&self, assignment: &str, policy: DuplicateClassPolicy) -> f64 {
        self.total_parsed(&parse_assignment(assignment), policy)
    }

    /// Totals the periods of an already parsed assignment.
    ///
    /// Unknown subjects contribute 0.
    #[must_use]
    pub fn total_parsed(&self, parsed: &ParsedAssignment, policy: DuplicateClassPolicy) -> f64 {
        match policy {
            DuplicateClassPolicy::CountAsWritten => parsed
                .entries
                .iter()
                .map(|entry| {
                    self.periods_for(&entry.subject).unwrap_or(0.0) * count_f64(entry.classes.len())
                })
                .sum(),
            DuplicateClassPolicy::Deduplicate => {
                let mut seen: HashSet<(String, &str)> = HashSet::new();
                parsed
                    .pairs()
                    .filter(|(entry, class)| seen.insert((entry.subject_key(), *class)))
                    .map(|(entry, _)| self.periods_for(&entry.subject).unwrap_or(0.0))
                    .sum()
            }
        }
    }
}

/// Totals the periods of an assignment string against a subject table.
///
/// Duplicate classes count as written. Empty or unparsable input yields 0.
#[must_use]
pub fn total_periods(assignment: &str, subjects: &[SubjectConfig]) -> f64 {
    SubjectPeriodTable::new(subjects)
        .total_periods(assignment, DuplicateClassPolicy::CountAsWritten)
}

#[allow(clippy::cast_precision_loss)]
const fn count_f64(count: usize) -> f64 {
    count as f64
}
