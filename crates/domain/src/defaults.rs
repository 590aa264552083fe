// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fallback data used when no state has been saved yet.

use crate::types::{Role, RoleId, SubjectConfig};

/// Standard weekly teaching quota for a lower secondary teacher.
pub const DEFAULT_STANDARD_QUOTA: f64 = 19.0;

/// Longest span, in weeks, a balance may aggregate over.
pub const MAX_BALANCE_WEEKS: u32 = 520;

const DEFAULT_ROLES: [(&str, f64); 6] = [
    ("Chủ nhiệm", 4.0),
    ("Tổ trưởng chuyên môn", 3.0),
    ("Tổ phó chuyên môn", 1.0),
    ("Tổng phụ trách Đội", 10.0),
    ("Thư ký hội đồng", 2.0),
    ("Chủ tịch công đoàn", 3.0),
];

const DEFAULT_SUBJECTS: [(&str, f64); 12] = [
    ("Toán", 4.0),
    ("Ngữ văn", 4.0),
    ("Tiếng Anh", 3.0),
    ("KHTN", 4.0),
    ("Lịch sử và Địa lí", 3.0),
    ("GDCD", 1.0),
    ("Công nghệ", 1.5),
    ("Tin", 1.0),
    ("GDTC", 2.0),
    ("Nghệ thuật", 2.0),
    ("HĐTN", 3.0),
    ("GDĐP", 1.0),
];

/// Returns the default role list with ids `1..=n`.
#[must_use]
pub fn default_roles() -> Vec<Role> {
    (1..)
        .zip(DEFAULT_ROLES)
        .map(|(id, (name, reduction))| Role::new(RoleId::new(id), name.to_string(), reduction))
        .collect()
}

/// Returns the default subject-period table.
#[must_use]
pub fn default_subjects() -> Vec<SubjectConfig> {
    DEFAULT_SUBJECTS
        .iter()
        .map(|(name, periods)| SubjectConfig::new((*name).to_string(), *periods))
        .collect()
}
