//! Closed enumerations for the dashboard's filter controls.
//!
//! # Example
//!
//! ```rust
//! use whispr_dash::filter::{SortOption, TypeFilter, ViewMode};
//! use whispr_dash::domain::WhisprType;
//!
//! let view: ViewMode = "card".parse().unwrap();
//! let sort: SortOption = "oldest".parse().unwrap();
//! let filter: TypeFilter = "roast".parse().unwrap();
//! assert_eq!(view, ViewMode::Card);
//! assert_eq!(sort, SortOption::Oldest);
//! assert_eq!(filter, TypeFilter::Only(WhisprType::Roast));
//! ```

use crate::domain::{WhisprError, WhisprType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display layout for the whispr list.
///
/// Layout only: never changes which whisprs are included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    /// One whispr at a time, navigated with buttons or swipes.
    Card,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Card => "card",
        }
    }
}

impl FromStr for ViewMode {
    type Err = WhisprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            "card" => Ok(Self::Card),
            other => Err(WhisprError::Validation(format!("unknown view mode: {other}"))),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering rule applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Latest `created_at` first.
    #[default]
    Newest,
    /// Earliest `created_at` first.
    Oldest,
    /// Ascending by the type's backend string value.
    Type,
}

impl SortOption {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Type => "type",
        }
    }
}

impl FromStr for SortOption {
    type Err = WhisprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "type" => Ok(Self::Type),
            other => Err(WhisprError::Validation(format!("unknown sort option: {other}"))),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusion filter on whispr type: everything, or exactly one type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(WhisprType),
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, kind: WhisprType) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == kind,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = WhisprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
