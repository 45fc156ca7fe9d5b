//! Dashboard state and view model computation.
//!
//! [`DashboardState`] is the single source of truth for one open dashboard.
//! It separates core data (the raw collection as fetched) from derived state
//! (the latest [`FilterOutcome`] and the card navigator over its visible
//! list), and recomputes the derived half through [`DashboardState::refresh`]
//! whenever the data or the filter changes.
//!
//! # Example
//!
//! ```rust
//! use whispr_dash::app::DashboardState;
//! use whispr_dash::domain::{Whispr, WhisprType};
//! use whispr_dash::filter::FilterState;
//!
//! let mut state = DashboardState::new("ana", FilterState::default());
//! state.load(vec![Whispr::new("w1", "hi", WhisprType::Question, "2024-01-01")]);
//! assert_eq!(state.outcome.visible_count(), 1);
//! assert_eq!(state.unread_count(), 1);
//! ```

use crate::domain::{Whispr, WhisprType};
use crate::filter::{self, FilterOutcome, FilterState, TypeFilter, ViewMode};
use crate::navigator::CardNavigator;
use crate::ui::viewmodel::{
    Body, CardInfo, DashboardViewModel, DisplayItem, EmptyState, FilterChip, HeaderInfo,
};
use chrono::{DateTime, Utc};

/// Central state container for one dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Recipient whose whisprs are shown.
    pub user_id: String,

    /// Full collection as last fetched, in storage order.
    pub whisprs: Vec<Whispr>,

    /// User-chosen view, filter, and sort parameters.
    pub filter: FilterState,

    /// Latest engine result for `whisprs` under `filter`.
    pub outcome: FilterOutcome,

    /// Card-view position over `outcome.visible`.
    pub navigator: CardNavigator<Whispr>,

    /// Id of the whispr open in the detail view, if any.
    pub opened: Option<String>,

    /// True while a fetch is outstanding.
    pub loading: bool,
}

impl DashboardState {
    #[must_use]
    pub fn new(user_id: impl Into<String>, filter: FilterState) -> Self {
        Self {
            user_id: user_id.into(),
            whisprs: Vec::new(),
            filter,
            outcome: FilterOutcome::default(),
            navigator: CardNavigator::default(),
            opened: None,
            loading: false,
        }
    }

    /// Replaces the collection with freshly fetched whisprs.
    pub fn load(&mut self, whisprs: Vec<Whispr>) {
        self.whisprs = whisprs;
        self.loading = false;
        if self
            .opened
            .as_ref()
            .is_some_and(|id| !self.whisprs.iter().any(|w| &w.id == id))
        {
            self.opened = None;
        }
        self.refresh();
    }

    /// Re-runs the filter engine and hands the new visible list to the
    /// navigator, which resets to the first card.
    pub fn refresh(&mut self) {
        self.outcome = filter::apply(&self.whisprs, &self.filter);
        self.navigator.set_items(self.outcome.visible.clone());
        tracing::debug!(
            total = self.outcome.total_count,
            visible = self.outcome.visible_count(),
            "dashboard refreshed"
        );
    }

    /// Drops a whispr from every view. Returns whether it was present.
    pub fn remove(&mut self, whispr_id: &str) -> bool {
        let before = self.whisprs.len();
        self.whisprs.retain(|w| w.id != whispr_id);
        if self.whisprs.len() == before {
            return false;
        }
        if self.opened.as_deref() == Some(whispr_id) {
            self.opened = None;
        }
        self.refresh();
        true
    }

    /// Flags a whispr as read everywhere it is held.
    ///
    /// The visible list keeps its members and order, so the card position
    /// is deliberately kept rather than reset to the first card.
    pub fn apply_read(&mut self, whispr_id: &str) -> bool {
        let mut found = false;
        for whispr in self
            .whisprs
            .iter_mut()
            .chain(self.outcome.visible.iter_mut())
            .chain(self.navigator.items_mut().iter_mut())
            .filter(|w| w.id == whispr_id)
        {
            whispr.mark_read();
            found = true;
        }
        found
    }

    #[must_use]
    pub fn find(&self, whispr_id: &str) -> Option<&Whispr> {
        self.whisprs.iter().find(|w| w.id == whispr_id)
    }

    /// The whispr under the card cursor, when the card view has any.
    #[must_use]
    pub fn current_card(&self) -> Option<&Whispr> {
        self.navigator.current()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.whisprs.iter().filter(|w| !w.is_read).count()
    }

    /// Computes a renderable view model at instant `now`.
    ///
    /// `now` only feeds the relative timestamps.
    #[must_use]
    pub fn compute_viewmodel(&self, now: DateTime<Utc>) -> DashboardViewModel {
        let body = if self.loading {
            Body::Empty(EmptyState {
                message: "Loading whisprs...".to_string(),
                subtitle: String::new(),
            })
        } else if self.outcome.visible.is_empty() {
            Body::Empty(self.compute_empty_state())
        } else {
            match self.filter.view_mode {
                ViewMode::Grid | ViewMode::List => Body::Items(
                    self.outcome
                        .visible
                        .iter()
                        .map(|w| Self::compute_display_item(w, now, false))
                        .collect(),
                ),
                ViewMode::Card => self.compute_card(now),
            }
        };

        DashboardViewModel {
            header: HeaderInfo {
                title: format!("@{}", self.user_id),
                total: self.outcome.total_count,
                unread: self.unread_count(),
            },
            chips: self.compute_chips(),
            view_mode: self.filter.view_mode,
            sort_option: self.filter.sort_option,
            search_term: self.filter.search_term.clone(),
            body,
            opened: self
                .opened
                .as_deref()
                .and_then(|id| self.find(id))
                .map(|w| Self::compute_display_item(w, now, false)),
        }
    }

    fn compute_chips(&self) -> Vec<FilterChip> {
        std::iter::once(TypeFilter::All)
            .chain(WhisprType::ALL.into_iter().map(TypeFilter::Only))
            .map(|filter| FilterChip {
                label: match filter {
                    TypeFilter::All => "All".to_string(),
                    TypeFilter::Only(kind) => format!("{} {}", kind.emoji(), kind.label()),
                },
                count: self.outcome.count_for(filter),
                selected: self.filter.selected_type == filter,
                filter,
            })
            .collect()
    }

    fn compute_card(&self, now: DateTime<Utc>) -> Body {
        let (Some(index), Some(current)) = (self.navigator.current_index(), self.navigator.current())
        else {
            return Body::Empty(self.compute_empty_state());
        };

        Body::Card(CardInfo {
            item: Self::compute_display_item(current, now, true),
            position: format!("{} / {}", index + 1, self.navigator.len()),
            has_previous: self.navigator.has_previous(),
            has_next: self.navigator.has_next(),
            drag_offset: self.navigator.drag_offset(),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.outcome.total_count == 0 {
            EmptyState {
                message: "No whisprs yet".to_string(),
                subtitle: "Share your link to start receiving anonymous whisprs".to_string(),
            }
        } else {
            EmptyState {
                message: "No whisprs match your filters".to_string(),
                subtitle: "Try a different type or search term".to_string(),
            }
        }
    }

    fn compute_display_item(whispr: &Whispr, now: DateTime<Utc>, is_current: bool) -> DisplayItem {
        DisplayItem {
            id: whispr.id.clone(),
            kind: whispr.kind,
            type_label: format!("{} {}", whispr.kind.emoji(), whispr.kind.label()),
            content: whispr.content.clone(),
            time_ago: whispr.time_ago(now),
            is_read: whispr.is_read,
            is_current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortOption;
    use chrono::TimeZone;

    fn inbox() -> Vec<Whispr> {
        vec![
            Whispr::new("1", "Dare you to dance", WhisprType::Dare, "2024-01-03"),
            Whispr::new("2", "Hello there", WhisprType::Question, "2024-01-01"),
            Whispr::new("3", "Nice shoes", WhisprType::Compliment, "2024-01-02"),
            Whispr::new("4", "Your code is spaghetti", WhisprType::Roast, "2024-01-04"),
            Whispr::new("5", "I ate your lunch", WhisprType::Confession, "2024-01-05"),
        ]
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap()
    }

    fn loaded() -> DashboardState {
        let mut state = DashboardState::new("ana", FilterState::default());
        state.load(inbox());
        state
    }

    #[test]
    fn refresh_resets_card_position_on_new_results() {
        let mut state = loaded();
        state.navigator.next();
        state.navigator.next();
        assert_eq!(state.navigator.current_index(), Some(2));

        state.filter.search_term = "d".to_string();
        state.refresh();
        assert_eq!(state.navigator.len(), 2);
        assert_eq!(state.navigator.current_index(), Some(0));
    }

    #[test]
    fn remove_shrinks_list_and_resets() {
        let mut state = loaded();
        state.navigator.next();
        state.opened = Some("4".to_string());
        assert!(state.remove("4"));
        assert!(!state.remove("4"));
        assert_eq!(state.outcome.total_count, 4);
        assert_eq!(state.navigator.current_index(), Some(0));
        assert_eq!(state.opened, None);
    }

    #[test]
    fn apply_read_keeps_card_position() {
        let mut state = loaded();
        state.navigator.next();
        let id = state.current_card().unwrap().id.clone();
        assert!(state.apply_read(&id));
        assert_eq!(state.navigator.current_index(), Some(1));
        assert!(state.current_card().unwrap().is_read);
        assert!(state.find(&id).unwrap().is_read);
        assert_eq!(state.unread_count(), 4);
    }

    #[test]
    fn card_viewmodel_reports_position_and_affordances() {
        let mut state = loaded();
        state.filter.view_mode = ViewMode::Card;
        state.navigator.next();

        let vm = state.compute_viewmodel(now());
        let Body::Card(card) = vm.body else {
            panic!("expected card body");
        };
        assert_eq!(card.position, "2 / 5");
        assert!(card.has_previous);
        assert!(card.has_next);
        assert_eq!(card.item.id, "4");
        assert_eq!(card.drag_offset, 0.0);
    }

    #[test]
    fn chips_show_totals_for_every_type() {
        let mut state = loaded();
        state.filter.selected_type = TypeFilter::Only(WhisprType::Roast);
        state.refresh();

        let vm = state.compute_viewmodel(now());
        assert_eq!(vm.chips.len(), WhisprType::ALL.len() + 1);
        assert_eq!(vm.chips[0].count, 5);
        let roast = vm.chips.iter().find(|c| c.filter == TypeFilter::Only(WhisprType::Roast)).unwrap();
        assert!(roast.selected);
        assert_eq!(roast.count, 1);
        let dare = vm.chips.iter().find(|c| c.filter == TypeFilter::Only(WhisprType::Dare)).unwrap();
        assert_eq!(dare.count, 1);
        let secret = vm.chips.iter().find(|c| c.filter == TypeFilter::Only(WhisprType::Secret)).unwrap();
        assert_eq!(secret.count, 0);
    }

    #[test]
    fn empty_states_distinguish_no_data_from_no_match() {
        let mut state = DashboardState::new("ana", FilterState::default());
        state.load(vec![]);
        let Body::Empty(empty) = state.compute_viewmodel(now()).body else {
            panic!("expected empty body");
        };
        assert_eq!(empty.message, "No whisprs yet");

        let mut state = loaded();
        state.filter.search_term = "zzz".to_string();
        state.refresh();
        let Body::Empty(empty) = state.compute_viewmodel(now()).body else {
            panic!("expected empty body");
        };
        assert_eq!(empty.message, "No whisprs match your filters");
    }

    #[test]
    fn list_viewmodel_follows_sort() {
        let mut state = loaded();
        state.filter = FilterState::with_defaults(ViewMode::List, SortOption::Oldest);
        state.refresh();
        let Body::Items(items) = state.compute_viewmodel(now()).body else {
            panic!("expected items body");
        };
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1", "4", "5"]);
        assert_eq!(items[0].time_ago, "5d ago");
    }
}
