//! FilterCriteria - Optional constraints for the filter query

use serde::{Deserialize, Serialize};

use super::Employee;

/// Filter constraints. Absent or empty values impose no restriction.
///
/// - `first_name`: case-insensitive substring
/// - `department`, `role`: exact, case-sensitive equality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

fn active(constraint: &Option<String>) -> Option<&str> {
    constraint.as_deref().filter(|s| !s.is_empty())
}

impl FilterCriteria {
    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        active(&self.first_name).is_none()
            && active(&self.department).is_none()
            && active(&self.role).is_none()
    }

    /// All active constraints must hold (logical AND)
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(first_name) = active(&self.first_name) {
            if !employee
                .first_name
                .to_lowercase()
                .contains(&first_name.to_lowercase())
            {
                return false;
            }
        }

        if let Some(department) = active(&self.department) {
            if employee.department != department {
                return false;
            }
        }

        if let Some(role) = active(&self.role) {
            if employee.role != role {
                return false;
            }
        }

        true
    }
}
