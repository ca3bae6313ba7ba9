//! SortField / SortOrder - Sorting parameters for employee lists

use serde::{Deserialize, Serialize};

/// Employee field to sort by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    #[default]
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::FirstName => write!(f, "firstName"),
            SortField::LastName => write!(f, "lastName"),
            SortField::Email => write!(f, "email"),
            SortField::Department => write!(f, "department"),
            SortField::Role => write!(f, "role"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "id" => Ok(SortField::Id),
            "firstname" => Ok(SortField::FirstName),
            "lastname" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            "department" => Ok(SortField::Department),
            "role" => Ok(SortField::Role),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}
