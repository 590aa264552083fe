// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-week storage of assignment strings and taught periods.
//!
//! The engine reads and writes weekly data only through
//! [`WeeklySnapshotStore`]. [`WeeklyTable`] is the in-memory
//! implementation that is serialized as part of the host state.

use crate::error::DomainError;
use crate::types::{TeacherId, WeekNumber};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyed per-week mapping from teacher to a value.
pub trait WeeklySnapshotStore {
    /// The value stored per teacher (assignment string, taught periods).
    type Value;

    /// Returns all values recorded for `week`, if any.
    fn week(&self, week: WeekNumber) -> Option<&BTreeMap<TeacherId, Self::Value>>;

    /// Records `value` for `teacher` in `week`, replacing any previous value.
    fn set(&mut self, week: WeekNumber, teacher: TeacherId, value: Self::Value);

    /// Returns the value recorded for `teacher` in `week`.
    fn get(&self, week: WeekNumber, teacher: &TeacherId) -> Option<&Self::Value> {
        self.week(week).and_then(|values| values.get(teacher))
    }
}

/// Sparse week → teacher → value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyTable<V> {
    weeks: BTreeMap<WeekNumber, BTreeMap<TeacherId, V>>,
}

/// Assignment strings per week and teacher.
pub type WeeklyAssignments = WeeklyTable<String>;

/// Actually taught periods per week and teacher.
pub type WeeklyActuals = WeeklyTable<f64>;

impl<V> WeeklyTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weeks: BTreeMap::new(),
        }
    }

    /// Removes the value for `teacher` in `week`, returning it.
    ///
    /// A week left without values is dropped entirely.
    pub fn remove(&mut self, week: WeekNumber, teacher: &TeacherId) -> Option<V> {
        let values: &mut BTreeMap<TeacherId, V> = self.weeks.get_mut(&week)?;
        let removed: Option<V> = values.remove(teacher);
        if values.is_empty() {
            self.weeks.remove(&week);
        }
        removed
    }

    /// Removes every value recorded for `teacher`.
    pub fn remove_teacher(&mut self, teacher: &TeacherId) {
        self.weeks.retain(|_, values| {
            values.remove(teacher);
            !values.is_empty()
        });
    }

    /// Returns whether nothing is recorded for `week`.
    #[must_use]
    pub fn is_week_empty(&self, week: WeekNumber) -> bool {
        self.weeks.get(&week).is_none_or(BTreeMap::is_empty)
    }

    /// Iterates recorded weeks in ascending order.
    pub fn weeks(&self) -> impl Iterator<Item = WeekNumber> + '_ {
        self.weeks.keys().copied()
    }

    /// Returns the number of recorded values across all weeks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.values().map(BTreeMap::len).sum()
    }

    /// Returns whether the table holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

impl<V> Default for WeeklyTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeeklySnapshotStore for WeeklyTable<V> {
    type Value = V;

    fn week(&self, week: WeekNumber) -> Option<&BTreeMap<TeacherId, V>> {
        self.weeks.get(&week)
    }

    fn set(&mut self, week: WeekNumber, teacher: TeacherId, value: V) {
        self.weeks.entry(week).or_default().insert(teacher, value);
    }
}

/// Result of a weekly copy-forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome<S> {
    /// The store with the copied values applied.
    pub updated: S,
    /// Number of teachers whose value was copied.
    pub copied_count: usize,
    /// Requested teachers with nothing recorded in the source week.
    pub skipped: Vec<TeacherId>,
}

/// Copies the selected teachers' values from `source` to `target`.
///
/// Values in the target week are overwritten. Teachers with nothing
/// recorded in the source week are skipped and reported in
/// [`CopyOutcome::skipped`]. The input store is never modified.
///
/// # Errors
///
/// Returns an error, before touching any data, if:
/// - `teacher_ids` is empty
/// - `target` is week 1, which has no predecessor
/// - `source` holds no data at all
pub fn copy_selected<S>(
    source: WeekNumber,
    target: WeekNumber,
    teacher_ids: &[TeacherId],
    store: &S,
) -> Result<CopyOutcome<S>, DomainError>
where
    S: WeeklySnapshotStore + Clone,
    S::Value: Clone,
{
    if teacher_ids.is_empty() {
        return Err(DomainError::NoTeachersSelected);
    }
    if target.previous().is_none() {
        return Err(DomainError::NoPredecessorWeek(target));
    }
    let Some(source_values) = store.week(source).filter(|values| !values.is_empty()) else {
        return Err(DomainError::EmptySourceWeek(source));
    };

    let mut updated: S = store.clone();
    let mut copied_count: usize = 0;
    let mut skipped: Vec<TeacherId> = Vec::new();

    for teacher_id in teacher_ids {
        match source_values.get(teacher_id) {
            Some(value) => {
                updated.set(target, teacher_id.clone(), value.clone());
                copied_count += 1;
            }
            None => skipped.push(teacher_id.clone()),
        }
    }

    Ok(CopyOutcome {
        updated,
        copied_count,
        skipped,
    })
}

/// Returns the week a copy into `target` reads from when no source is given.
///
/// # Errors
///
/// Returns `DomainError::NoPredecessorWeek` for week 1.
pub const fn default_copy_source(target: WeekNumber) -> Result<WeekNumber, DomainError> {
    let Some(source) = target.previous() else {
        return Err(DomainError::NoPredecessorWeek(target));
    };
    Ok(source)
}
