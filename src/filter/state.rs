//! Ephemeral filter parameters chosen by the user.

use super::modes::{SortOption, TypeFilter, ViewMode};

/// View, filter, and sort parameters for the dashboard.
///
/// Created with defaults when the dashboard opens and discarded when it
/// closes; never persisted. `view_mode` only affects layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub view_mode: ViewMode,
    pub selected_type: TypeFilter,
    pub sort_option: SortOption,
    /// Raw search input. Matched case-insensitively and never trimmed.
    pub search_term: String,
}

impl FilterState {
    /// Creates a filter state with a preferred layout and ordering.
    #[must_use]
    pub fn with_defaults(view_mode: ViewMode, sort_option: SortOption) -> Self {
        Self {
            view_mode,
            sort_option,
            ..Self::default()
        }
    }

    /// True when the parameters that select records (type and search) are
    /// both at their neutral values.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.selected_type == TypeFilter::All && self.search_term.is_empty()
    }
}
