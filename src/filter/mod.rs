//! Whispr filtering, sorting, and counting.
//!
//! # Modules
//!
//! - [`engine`]: The pure [`apply`] function and its [`FilterOutcome`]
//! - [`modes`]: View mode, sort option, and type filter enumerations
//! - [`state`]: The user's current [`FilterState`]

pub mod engine;
pub mod modes;
pub mod state;

pub use engine::{apply, count_by_type, sort_whisprs, FilterOutcome};
pub use modes::{SortOption, TypeFilter, ViewMode};
pub use state::FilterState;
