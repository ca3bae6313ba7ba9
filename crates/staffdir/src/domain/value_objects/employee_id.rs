//! EmployeeId - Canonical employee identifier
//!
//! Every entry point converts to this type before touching the store.
//! Text ids (URL path segments, CLI arguments) go through `FromStr`, which
//! accepts plain decimal digits only and never coerces.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Store-assigned employee id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one; `None` at `u64::MAX`
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EmployeeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // u64::from_str alone would accept a leading '+'
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidId(s.to_string()));
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}
