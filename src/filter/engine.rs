//! Pure derivation of the visible whispr list and per-type counts.
//!
//! [`apply`] is the only entry point. It takes the full collection as fetched
//! from the repository and the current [`FilterState`], and returns a fresh
//! [`FilterOutcome`]. It never mutates its input, never performs I/O, and never
//! fails, so it is safe to call on every keystroke.
//!
//! # Algorithm
//!
//! 1. **Type filter**: keep records matching `selected_type` (all when `All`)
//! 2. **Search filter**: keep records whose lower-cased content contains the
//!    lower-cased search term; the term is not trimmed, so whitespace is a
//!    literal needle
//! 3. **Stable sort** by the selected [`SortOption`]
//! 4. **Counts** over the *unfiltered* collection, so filter chips always show
//!    totals for every type regardless of the active filter
//!
//! # Example
//!
//! ```rust
//! use whispr_dash::domain::{Whispr, WhisprType};
//! use whispr_dash::filter::{apply, FilterState, SortOption};
//!
//! let all = vec![
//!     Whispr::new("1", "Dare you to sing", WhisprType::Dare, "2024-01-03"),
//!     Whispr::new("2", "Why so quiet?", WhisprType::Question, "2024-01-01"),
//! ];
//! let state = FilterState { sort_option: SortOption::Oldest, ..FilterState::default() };
//! let outcome = apply(&all, &state);
//! assert_eq!(outcome.visible[0].id, "2");
//! assert_eq!(outcome.total_count, 2);
//! ```

use super::modes::{SortOption, TypeFilter};
use super::state::FilterState;
use crate::domain::{Whispr, WhisprType};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Result of one engine pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Filtered and sorted whisprs, in display order.
    pub visible: Vec<Whispr>,

    /// Count per type present in the unfiltered collection.
    ///
    /// Types with no whisprs are absent. The implicit `all` count is
    /// [`FilterOutcome::total_count`].
    pub type_counts: BTreeMap<WhisprType, usize>,

    /// Size of the unfiltered collection.
    pub total_count: usize,
}

impl FilterOutcome {
    /// Badge count for a filter chip.
    #[must_use]
    pub fn count_for(&self, filter: TypeFilter) -> usize {
        match filter {
            TypeFilter::All => self.total_count,
            TypeFilter::Only(kind) => self.type_counts.get(&kind).copied().unwrap_or(0),
        }
    }

    /// Number of whisprs that survived filtering.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

/// Derives the display list and type counts from the full collection.
///
/// Malformed `created_at` values are treated as earlier than every valid
/// instant: they sort last under [`SortOption::Newest`] and first under
/// [`SortOption::Oldest`], keeping their input order among themselves.
#[must_use]
pub fn apply(all: &[Whispr], state: &FilterState) -> FilterOutcome {
    let _span = tracing::debug_span!("filter_apply",
        total = all.len(),
        selected_type = %state.selected_type,
        sort = %state.sort_option,
        search_len = state.search_term.len()
    ).entered();

    let needle = (!state.search_term.is_empty()).then(|| state.search_term.to_lowercase());

    let mut visible: Vec<Whispr> = all
        .iter()
        .filter(|w| state.selected_type.matches(w.kind))
        .filter(|w| {
            needle
                .as_deref()
                .map_or(true, |n| w.content.to_lowercase().contains(n))
        })
        .cloned()
        .collect();

    sort_whisprs(&mut visible, state.sort_option);

    let outcome = FilterOutcome {
        visible,
        type_counts: count_by_type(all),
        total_count: all.len(),
    };

    tracing::debug!(visible = outcome.visible.len(), "filter applied");
    outcome
}

/// Stable in-place sort of whisprs by the given option.
pub fn sort_whisprs(whisprs: &mut [Whispr], option: SortOption) {
    match option {
        SortOption::Newest => whisprs.sort_by_cached_key(|w| Reverse(w.created_instant())),
        SortOption::Oldest => whisprs.sort_by_cached_key(Whispr::created_instant),
        SortOption::Type => whisprs.sort_by(|a, b| a.kind.as_str().cmp(b.kind.as_str())),
    }
}

/// Counts whisprs per type. Only types that occur appear in the map.
#[must_use]
pub fn count_by_type(whisprs: &[Whispr]) -> BTreeMap<WhisprType, usize> {
    let mut counts = BTreeMap::new();
    for whispr in whisprs {
        *counts.entry(whispr.kind).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(id: &str, kind: WhisprType, created_at: &str, content: &str) -> Whispr {
        Whispr::new(id, content, kind, created_at)
    }

    fn ids(outcome: &FilterOutcome) -> Vec<&str> {
        outcome.visible.iter().map(|w| w.id.as_str()).collect()
    }

    fn sample() -> Vec<Whispr> {
        vec![
            w("1", WhisprType::Dare, "2024-01-03", "Dare you to text your ex"),
            w("2", WhisprType::Question, "2024-01-01", "Hello World, how are you?"),
            w("3", WhisprType::Roast, "2024-01-02", "Your playlist is a crime"),
        ]
    }

    fn state(sort: SortOption) -> FilterState {
        FilterState { sort_option: sort, ..FilterState::default() }
    }

    #[test]
    fn sorts_newest_oldest_and_by_type() {
        let all = sample();
        assert_eq!(ids(&apply(&all, &state(SortOption::Newest))), ["1", "3", "2"]);
        assert_eq!(ids(&apply(&all, &state(SortOption::Oldest))), ["2", "3", "1"]);
        assert_eq!(ids(&apply(&all, &state(SortOption::Type))), ["1", "2", "3"]);
    }

    #[test]
    fn type_sort_orders_by_backend_value() {
        let all = vec![
            w("a", WhisprType::Question, "2024-01-01", "q"),
            w("b", WhisprType::HotTake, "2024-01-01", "h"),
            w("c", WhisprType::Confession, "2024-01-01", "c"),
            w("d", WhisprType::Compliment, "2024-01-01", "m"),
        ];
        assert_eq!(ids(&apply(&all, &state(SortOption::Type))), ["d", "c", "b", "a"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let all = vec![
            w("x", WhisprType::Secret, "2024-02-01T10:00:00Z", "first"),
            w("y", WhisprType::Rumor, "2024-02-01T10:00:00Z", "second"),
            w("z", WhisprType::Secret, "2024-02-01T10:00:00Z", "third"),
        ];
        assert_eq!(ids(&apply(&all, &state(SortOption::Newest))), ["x", "y", "z"]);
        assert_eq!(ids(&apply(&all, &state(SortOption::Oldest))), ["x", "y", "z"]);
        assert_eq!(ids(&apply(&all, &state(SortOption::Type))), ["y", "x", "z"]);
    }

    #[test]
    fn malformed_dates_sort_as_earliest() {
        let all = vec![
            w("bad", WhisprType::Dare, "not-a-date", "?"),
            w("new", WhisprType::Dare, "2024-03-01", "!"),
            w("old", WhisprType::Dare, "2023-03-01", "."),
        ];
        assert_eq!(ids(&apply(&all, &state(SortOption::Newest))), ["new", "old", "bad"]);
        assert_eq!(ids(&apply(&all, &state(SortOption::Oldest))), ["bad", "old", "new"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = sample();
        let mut s = FilterState::default();
        s.search_term = "hello".to_string();
        assert_eq!(ids(&apply(&all, &s)), ["2"]);
        s.search_term = "HELLO world".to_string();
        assert_eq!(ids(&apply(&all, &s)), ["2"]);
        s.search_term = "xyz".to_string();
        assert!(apply(&all, &s).visible.is_empty());
    }

    #[test]
    fn whitespace_search_is_literal() {
        let all = vec![
            w("1", WhisprType::Dare, "2024-01-01", "nospaces"),
            w("2", WhisprType::Dare, "2024-01-02", "has  double"),
        ];
        let mut s = FilterState::default();
        s.search_term = "  ".to_string();
        assert_eq!(ids(&apply(&all, &s)), ["2"]);
        s.search_term = "   ".to_string();
        assert!(apply(&all, &s).visible.is_empty());
    }

    #[test]
    fn type_filter_keeps_only_selected_type() {
        let all = sample();
        let s = FilterState { selected_type: TypeFilter::Only(WhisprType::Roast), ..FilterState::default() };
        assert_eq!(ids(&apply(&all, &s)), ["3"]);
    }

    #[test]
    fn counts_ignore_active_filters() {
        let mut all = sample();
        all.push(w("4", WhisprType::Roast, "2024-01-04", "Another roast"));

        let filters = [
            FilterState::default(),
            FilterState { selected_type: TypeFilter::Only(WhisprType::Dare), ..FilterState::default() },
            FilterState { search_term: "nothing matches this".into(), ..FilterState::default() },
        ];
        for s in &filters {
            let outcome = apply(&all, s);
            assert_eq!(outcome.total_count, 4);
            assert_eq!(outcome.type_counts.values().sum::<usize>(), 4);
            assert_eq!(outcome.count_for(TypeFilter::All), 4);
            assert_eq!(outcome.count_for(TypeFilter::Only(WhisprType::Roast)), 2);
            assert_eq!(outcome.count_for(TypeFilter::Only(WhisprType::Secret)), 0);
            assert!(!outcome.type_counts.contains_key(&WhisprType::Secret));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut all = sample();
        all.push(w("5", WhisprType::Question, "2024-01-05", "hello again"));
        let s = FilterState {
            selected_type: TypeFilter::Only(WhisprType::Question),
            search_term: "HeLLo".into(),
            ..FilterState::default()
        };
        let once = apply(&all, &s).visible;
        let twice = apply(&once, &s).visible;
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn input_collection_is_untouched() {
        let all = sample();
        let before = all.clone();
        let _ = apply(&all, &state(SortOption::Type));
        assert_eq!(all, before);
    }

    #[test]
    fn empty_collection_yields_empty_outcome() {
        let outcome = apply(&[], &FilterState::default());
        assert!(outcome.visible.is_empty());
        assert!(outcome.type_counts.is_empty());
        assert_eq!(outcome.total_count, 0);
    }
}
