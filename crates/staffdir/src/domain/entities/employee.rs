//! Employee - Directory record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EmployeeId;

/// Employee - A single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

/// Fields supplied when creating an employee (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

/// Partial update: only `Some` fields are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Employee {
    /// Build a record from create fields and a store-assigned id
    pub fn new(id: EmployeeId, fields: NewEmployee) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            department: fields.department,
            role: fields.role,
        }
    }

    /// Merge a patch onto this record. The id never changes.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl NewEmployee {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            role: self.role.trim().to_string(),
        }
    }
}

impl EmployeePatch {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.role.is_none()
    }

    /// Copy with surrounding whitespace removed from every supplied field
    pub fn trimmed(&self) -> Self {
        let trim = |v: &Option<String>| v.as_deref().map(|s| s.trim().to_string());
        Self {
            first_name: trim(&self.first_name),
            last_name: trim(&self.last_name),
            email: trim(&self.email),
            department: trim(&self.department),
            role: trim(&self.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee::new(
            EmployeeId::new(7),
            NewEmployee {
                first_name: "Robert".to_string(),
                last_name: "Wilson".to_string(),
                email: "robert.wilson@ajackus.com".to_string(),
                department: "Engineering".to_string(),
                role: "Backend Developer".to_string(),
            },
        )
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut employee = sample();
        employee.apply(EmployeePatch {
            role: Some("Staff Engineer".to_string()),
            ..Default::default()
        });

        assert_eq!(employee.role, "Staff Engineer");
        assert_eq!(employee.id, EmployeeId::new(7));
        assert_eq!(employee.first_name, "Robert");
        assert_eq!(employee.last_name, "Wilson");
        assert_eq!(employee.email, "robert.wilson@ajackus.com");
        assert_eq!(employee.department, "Engineering");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["firstName"], "Robert");
        assert_eq!(value["lastName"], "Wilson");
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<EmployeePatch, _> =
            serde_json::from_str(r#"{"role": "X", "salary": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_id() {
        let result: Result<EmployeePatch, _> = serde_json::from_str(r#"{"id": 99}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_partial_json() {
        let patch: EmployeePatch = serde_json::from_str(r#"{"department": "Design"}"#).unwrap();
        assert_eq!(patch.department.as_deref(), Some("Design"));
        assert!(patch.first_name.is_none());
        assert!(!patch.is_empty());
        assert!(EmployeePatch::default().is_empty());
    }

    #[test]
    fn test_trimmed() {
        let patch = EmployeePatch {
            email: Some("  a@b.co ".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.trimmed().email.as_deref(), Some("a@b.co"));
        assert!(patch.trimmed().role.is_none());
    }
}
