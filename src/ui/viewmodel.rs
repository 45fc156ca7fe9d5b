//! View model types representing renderable dashboard state.
//!
//! View models are created by
//! [`DashboardState::compute_viewmodel`](crate::app::DashboardState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready data only: labels
//! are formatted, counts resolved, and relative times computed.

use crate::domain::WhisprType;
use crate::filter::{SortOption, TypeFilter, ViewMode};

/// Complete dashboard view model.
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub header: HeaderInfo,

    /// One chip per type filter, `All` first. Counts always cover the whole
    /// collection.
    pub chips: Vec<FilterChip>,

    pub view_mode: ViewMode,
    pub sort_option: SortOption,
    pub search_term: String,

    /// Main content area for the active layout.
    pub body: Body,

    /// Whispr open in the detail view, if any.
    pub opened: Option<DisplayItem>,
}

/// Title and inbox statistics.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub total: usize,
    pub unread: usize,
}

/// A type filter chip with its badge count.
#[derive(Debug, Clone)]
pub struct FilterChip {
    pub filter: TypeFilter,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Main content for the current layout.
#[derive(Debug, Clone)]
pub enum Body {
    /// Nothing to show: no whisprs at all, none matching, or still loading.
    Empty(EmptyState),
    /// Grid and list layouts: every visible whispr, in display order.
    Items(Vec<DisplayItem>),
    /// Card layout: the whispr under the cursor.
    Card(CardInfo),
}

/// Display information for a single whispr.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub id: String,
    pub kind: WhisprType,
    /// Emoji and human label, e.g. "🔥 Roast".
    pub type_label: String,
    pub content: String,
    /// Relative receive time, e.g. "3h ago".
    pub time_ago: String,
    pub is_read: bool,
    /// True for the card under the cursor in card layout.
    pub is_current: bool,
}

/// Card-layout state for the current whispr.
#[derive(Debug, Clone)]
pub struct CardInfo {
    pub item: DisplayItem,
    /// One-based position, e.g. "2 / 5".
    pub position: String,
    pub has_previous: bool,
    pub has_next: bool,
    /// Horizontal displacement while a swipe is in flight, within ±100.
    pub drag_offset: f64,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No whisprs yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
