//! PageSize - Allowed listing page sizes

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Number of records per listing page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            _ => Err(DomainError::Validation(format!(
                "Page size must be one of 10, 25, 50, 100 (got {})",
                value
            ))),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl std::str::FromStr for PageSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| DomainError::Validation(format!("Invalid page size: {}", s)))?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_sizes() {
        for size in PageSize::ALL {
            assert_eq!(PageSize::try_from(size.get()).unwrap(), size);
        }
        assert_eq!(PageSize::default().get(), 10);
    }

    #[test]
    fn test_rejects_other_sizes() {
        assert!(PageSize::try_from(0).is_err());
        assert!(PageSize::try_from(20).is_err());
        assert!("abc".parse::<PageSize>().is_err());
        assert_eq!("50".parse::<PageSize>().unwrap(), PageSize::Fifty);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&PageSize::TwentyFive).unwrap(), "25");
        assert_eq!(serde_json::from_str::<PageSize>("100").unwrap(), PageSize::Hundred);
        assert!(serde_json::from_str::<PageSize>("7").is_err());
    }
}
