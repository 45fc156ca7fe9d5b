//! Event handling and state transition logic.
//!
//! [`handle_event`] processes user input and repository feedback, applies the
//! resulting state changes, and returns the side effects to run.
//!
//! # Event Types
//!
//! - **Filter controls**: `SetViewMode`, `SelectType`, `SetSort`, `SetSearch`,
//!   `ClearFilters`
//! - **Card navigation**: `NextCard`, `PreviousCard`, `TouchStart`,
//!   `TouchMove`, `TouchEnd`
//! - **Whispr commands**: `OpenWhispr`, `OpenCurrent`, `CloseWhispr`,
//!   `DeleteWhispr`, `DeleteCurrent`, `MarkRead`, `Reload`
//! - **Repository feedback**: `WhisprsLoaded`, `WhisprDeleted`,
//!   `WhisprMarkedRead`, `RepositoryFailed`
//!
//! Local data only changes on feedback: deleting a whispr emits
//! [`Action::Delete`] and the whispr stays visible until `WhisprDeleted`
//! arrives.
//!
//! # Example
//!
//! ```rust
//! use whispr_dash::app::{handle_event, Action, DashboardState, Event};
//! use whispr_dash::filter::FilterState;
//!
//! let mut state = DashboardState::new("ana", FilterState::default());
//! let (render, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::FetchAll { user_id: "ana".to_string() }]);
//! # Ok::<(), whispr_dash::WhisprError>(())
//! ```

use crate::app::{Action, DashboardState};
use crate::domain::error::Result;
use crate::domain::Whispr;
use crate::filter::{SortOption, TypeFilter, ViewMode};
use crate::navigator::SwipeDecision;

/// Repository call that a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Delete,
    MarkRead,
}

/// Events triggered by user input or repository responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Switches the layout. Does not change which whisprs are shown.
    SetViewMode(ViewMode),
    /// Restricts the list to one type, or lifts the restriction.
    SelectType(TypeFilter),
    SetSort(SortOption),
    /// Replaces the search term. Callers debounce keystrokes if they want to.
    SetSearch(String),
    /// Resets type and search to their neutral values.
    ClearFilters,

    NextCard,
    PreviousCard,
    /// Finger or pointer down at horizontal position `x`.
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    /// Release: navigates if the gesture travelled past the threshold.
    TouchEnd,

    /// Opens a whispr in the detail view, marking it read.
    OpenWhispr { id: String },
    /// Opens the whispr under the card cursor.
    OpenCurrent,
    CloseWhispr,
    DeleteWhispr { id: String },
    /// Deletes the whispr under the card cursor.
    DeleteCurrent,
    MarkRead { id: String },
    /// Fetches the collection again.
    Reload,

    /// The repository returned the user's collection.
    WhisprsLoaded(Vec<Whispr>),
    WhisprDeleted { id: String },
    WhisprMarkedRead { id: String },
    /// A repository call failed; `error` is user-presentable.
    RepositoryFailed { operation: Operation, error: String },
}

/// Processes an event, mutates dashboard state, and returns actions to run.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is false when the event left
/// the visible state untouched.
///
/// # Errors
///
/// Reserved for failures inside state transitions; none of the current
/// transitions fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut DashboardState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind::from(event)).entered();

    match event {
        Event::SetViewMode(mode) => {
            if state.filter.view_mode == *mode {
                return Ok((false, vec![]));
            }
            tracing::debug!(view_mode = %mode, "view mode changed");
            state.filter.view_mode = *mode;
            Ok((true, vec![]))
        }
        Event::SelectType(filter) => {
            if state.filter.selected_type == *filter {
                return Ok((false, vec![]));
            }
            state.filter.selected_type = *filter;
            state.refresh();
            Ok((true, vec![]))
        }
        Event::SetSort(option) => {
            if state.filter.sort_option == *option {
                return Ok((false, vec![]));
            }
            state.filter.sort_option = *option;
            state.refresh();
            Ok((true, vec![]))
        }
        Event::SetSearch(term) => {
            if &state.filter.search_term == term {
                return Ok((false, vec![]));
            }
            tracing::trace!(query = %term, "search term updated");
            state.filter.search_term.clone_from(term);
            state.refresh();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if state.filter.is_unfiltered() {
                return Ok((false, vec![]));
            }
            state.filter.selected_type = TypeFilter::All;
            state.filter.search_term.clear();
            state.refresh();
            Ok((true, vec![]))
        }
        Event::NextCard => Ok((state.navigator.next(), vec![])),
        Event::PreviousCard => Ok((state.navigator.previous(), vec![])),
        Event::TouchStart { x } => {
            state.navigator.touch_start(*x);
            Ok((false, vec![]))
        }
        Event::TouchMove { x } => {
            state.navigator.touch_move(*x);
            Ok((state.navigator.is_dragging(), vec![]))
        }
        Event::TouchEnd => {
            let was_dragging = state.navigator.is_dragging();
            let decision = state.navigator.touch_end();
            tracing::debug!(decision = ?decision, "touch released");
            // Stay still re-renders so the card snaps back to neutral.
            Ok((was_dragging || decision != SwipeDecision::Stay, vec![]))
        }
        Event::OpenWhispr { id } => open(state, id),
        Event::OpenCurrent => {
            let Some(id) = state.current_card().map(|w| w.id.clone()) else {
                tracing::debug!("no current card to open");
                return Ok((false, vec![]));
            };
            open(state, &id)
        }
        Event::CloseWhispr => {
            let was_open = state.opened.take().is_some();
            Ok((was_open, vec![]))
        }
        Event::DeleteWhispr { id } => {
            if state.find(id).is_none() {
                tracing::debug!(whispr_id = %id, "delete requested for unknown whispr");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::Delete { whispr_id: id.clone() }]))
        }
        Event::DeleteCurrent => Ok(state.current_card().map_or_else(
            || (false, vec![]),
            |w| (false, vec![Action::Delete { whispr_id: w.id.clone() }]),
        )),
        Event::MarkRead { id } => match state.find(id) {
            Some(w) if !w.is_read => Ok((false, vec![Action::MarkRead { whispr_id: id.clone() }])),
            _ => Ok((false, vec![])),
        },
        Event::Reload => {
            state.loading = true;
            Ok((true, vec![Action::FetchAll { user_id: state.user_id.clone() }]))
        }
        Event::WhisprsLoaded(whisprs) => {
            tracing::debug!(count = whisprs.len(), "whisprs loaded");
            state.load(whisprs.clone());
            Ok((true, vec![]))
        }
        Event::WhisprDeleted { id } => {
            let removed = state.remove(id);
            Ok((removed, vec![Action::toast("Whispr deleted")]))
        }
        Event::WhisprMarkedRead { id } => Ok((state.apply_read(id), vec![])),
        Event::RepositoryFailed { operation, error } => {
            tracing::error!(operation = ?operation, error = %error, "repository call failed");
            let message = match operation {
                Operation::FetchAll => {
                    // A failed fetch shows as an empty dashboard.
                    state.load(Vec::new());
                    format!("Could not load whisprs: {error}")
                }
                Operation::Delete => format!("Could not delete whispr: {error}"),
                Operation::MarkRead => format!("Could not mark whispr as read: {error}"),
            };
            Ok((true, vec![Action::error_toast(message)]))
        }
    }
}

fn open(state: &mut DashboardState, id: &str) -> Result<(bool, Vec<Action>)> {
    let Some(whispr) = state.find(id) else {
        tracing::debug!(whispr_id = %id, "open requested for unknown whispr");
        return Ok((false, vec![]));
    };

    let actions = if whispr.is_read {
        vec![]
    } else {
        vec![Action::MarkRead { whispr_id: id.to_string() }]
    };
    state.opened = Some(id.to_string());
    Ok((true, actions))
}

/// Payload-free event name for span fields, so whole collections are not
/// formatted into traces.
#[derive(Debug)]
enum EventKind {
    SetViewMode,
    SelectType,
    SetSort,
    SetSearch,
    ClearFilters,
    NextCard,
    PreviousCard,
    TouchStart,
    TouchMove,
    TouchEnd,
    OpenWhispr,
    OpenCurrent,
    CloseWhispr,
    DeleteWhispr,
    DeleteCurrent,
    MarkRead,
    Reload,
    WhisprsLoaded,
    WhisprDeleted,
    WhisprMarkedRead,
    RepositoryFailed,
}

impl From<&Event> for EventKind {
    fn from(event: &Event) -> Self {
        match event {
            Event::SetViewMode(_) => Self::SetViewMode,
            Event::SelectType(_) => Self::SelectType,
            Event::SetSort(_) => Self::SetSort,
            Event::SetSearch(_) => Self::SetSearch,
            Event::ClearFilters => Self::ClearFilters,
            Event::NextCard => Self::NextCard,
            Event::PreviousCard => Self::PreviousCard,
            Event::TouchStart { .. } => Self::TouchStart,
            Event::TouchMove { .. } => Self::TouchMove,
            Event::TouchEnd => Self::TouchEnd,
            Event::OpenWhispr { .. } => Self::OpenWhispr,
            Event::OpenCurrent => Self::OpenCurrent,
            Event::CloseWhispr => Self::CloseWhispr,
            Event::DeleteWhispr { .. } => Self::DeleteWhispr,
            Event::DeleteCurrent => Self::DeleteCurrent,
            Event::MarkRead { .. } => Self::MarkRead,
            Event::Reload => Self::Reload,
            Event::WhisprsLoaded(_) => Self::WhisprsLoaded,
            Event::WhisprDeleted { .. } => Self::WhisprDeleted,
            Event::WhisprMarkedRead { .. } => Self::WhisprMarkedRead,
            Event::RepositoryFailed { .. } => Self::RepositoryFailed,
        }
    }
}
