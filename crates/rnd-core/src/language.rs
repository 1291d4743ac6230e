use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a language row in the error catalog
///
/// Zero is reserved for "not specified"; the formatter substitutes its
/// default language in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(i64);

impl LanguageId {
    pub const UNSET: Self = Self(0);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Replace an unset id with `fallback`
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        if self.is_unset() { fallback } else { self }
    }
}

impl From<i64> for LanguageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<LanguageId> for i64 {
    fn from(id: LanguageId) -> Self {
        id.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LanguageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
