// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::ParsedAssignment;
use crate::error::ClassFormatError;
use crate::types::GradeRange;

/// Validates a single normalized class token against the grade rule.
///
/// The token must start with a run of digits whose value lies inside
/// `range`. `"6A1"` and `"09B"` are valid for grades 6-9, `"A1"` and
/// `"10A1"` are not.
///
/// # Arguments
///
/// * `class` - The class token, already trimmed and upper-cased
/// * `range` - The accepted grade range
///
/// # Returns
///
/// The parsed grade.
///
/// # Errors
///
/// Returns an error if:
/// - The token does not start with a digit
/// - The leading number is outside `range` (or too large to represent)
pub fn validate_class_token(class: &str, range: GradeRange) -> Result<u32, ClassFormatError> {
    let digits: &str = leading_digits(class);
    if digits.is_empty() {
        return Err(ClassFormatError::MissingGrade {
            class: class.to_string(),
        });
    }

    match digits.parse::<u32>() {
        Ok(grade) if range.contains(grade) => Ok(grade),
        _ => Err(ClassFormatError::GradeOutOfRange {
            class: class.to_string(),
            grade: digits.to_string(),
            min: range.min,
            max: range.max,
        }),
    }
}

/// Runs the class validator over every class of a parsed assignment.
///
/// Errors are returned in input order; a token listed twice is reported
/// twice.
#[must_use]
pub fn validate_assignment_classes(
    parsed: &ParsedAssignment,
    range: GradeRange,
) -> Vec<ClassFormatError> {
    parsed
        .pairs()
        .filter_map(|(_, class)| validate_class_token(class, range).err())
        .collect()
}

fn leading_digits(class: &str) -> &str {
    let end: usize = class
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(class.len(), |(idx, _)| idx);
    &class[..end]
}
