//! Event loop glue between the handler and an injected repository.

use crate::app::effects::run_action;
use crate::app::{handle_event, Action, DashboardState, Event};
use crate::domain::error::Result;
use crate::filter::FilterState;
use crate::repository::WhisprRepository;

/// A dashboard wired to its repository.
///
/// [`Dashboard::dispatch`] runs an event through the handler, executes every
/// resulting action, and feeds repository feedback back in until nothing is
/// left to do. Toasts are collected for the caller to display.
///
/// # Example
///
/// ```rust
/// use whispr_dash::app::{Dashboard, Event};
/// use whispr_dash::domain::{Whispr, WhisprType};
/// use whispr_dash::filter::FilterState;
/// use whispr_dash::repository::InMemoryRepository;
///
/// let mut repo = InMemoryRepository::new();
/// repo.insert("ana", Whispr::new("w1", "hey", WhisprType::Question, "2024-01-01"));
///
/// let mut dashboard = Dashboard::new(repo, "ana", FilterState::default());
/// dashboard.dispatch(Event::Reload)?;
/// assert_eq!(dashboard.state().outcome.total_count, 1);
/// # Ok::<(), whispr_dash::WhisprError>(())
/// ```
pub struct Dashboard<R: WhisprRepository> {
    repo: R,
    state: DashboardState,
    toasts: Vec<(String, bool)>,
}

impl<R: WhisprRepository> Dashboard<R> {
    pub fn new(repo: R, user_id: impl Into<String>, filter: FilterState) -> Self {
        Self::with_state(repo, DashboardState::new(user_id, filter))
    }

    pub fn with_state(repo: R, state: DashboardState) -> Self {
        Self {
            repo,
            state,
            toasts: Vec::new(),
        }
    }

    /// Processes an event and all follow-up events it causes.
    ///
    /// Returns whether anything visible changed.
    ///
    /// # Errors
    ///
    /// Propagates handler errors. Repository failures are not errors here;
    /// they arrive as [`Event::RepositoryFailed`] and become error toasts.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = vec![event];
        let mut render = false;

        while let Some(event) = queue.pop() {
            let (changed, actions) = handle_event(&mut self.state, &event)?;
            render |= changed;

            for action in actions {
                if let Action::ShowToast { message, is_error } = &action {
                    self.toasts.push((message.clone(), *is_error));
                    render = true;
                }
                if let Some(feedback) = run_action(&mut self.repo, &action) {
                    queue.push(feedback);
                }
            }
        }

        Ok(render)
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Takes pending toasts as `(message, is_error)` pairs.
    pub fn drain_toasts(&mut self) -> Vec<(String, bool)> {
        std::mem::take(&mut self.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Whispr, WhisprType};
    use crate::filter::TypeFilter;
    use crate::repository::InMemoryRepository;

    fn dashboard() -> Dashboard<InMemoryRepository> {
        let mut repo = InMemoryRepository::new();
        repo.insert("ana", Whispr::new("1", "roast one", WhisprType::Roast, "2024-01-01"));
        repo.insert("ana", Whispr::new("2", "a question", WhisprType::Question, "2024-01-02"));
        repo.insert("ana", Whispr::new("3", "roast two", WhisprType::Roast, "2024-01-03"));
        let mut d = Dashboard::new(repo, "ana", FilterState::default());
        d.dispatch(Event::Reload).unwrap();
        d
    }

    #[test]
    fn open_marks_read_in_repository_and_state() {
        let mut d = dashboard();
        d.dispatch(Event::OpenWhispr { id: "2".into() }).unwrap();
        assert!(d.state().find("2").unwrap().is_read);
        assert!(d.repository().fetch_all("ana").unwrap().iter().any(|w| w.id == "2" && w.is_read));
        assert_eq!(d.state().unread_count(), 2);
    }

    #[test]
    fn delete_round_trip_updates_counts_and_toasts() {
        let mut d = dashboard();
        d.dispatch(Event::SelectType(TypeFilter::Only(WhisprType::Roast))).unwrap();
        d.dispatch(Event::NextCard).unwrap();
        d.dispatch(Event::DeleteCurrent).unwrap();

        let state = d.state();
        assert_eq!(state.outcome.total_count, 2);
        assert_eq!(state.outcome.visible_count(), 1);
        assert_eq!(state.navigator.current_index(), Some(0));
        assert_eq!(d.repository().fetch_all("ana").unwrap().len(), 2);
        assert_eq!(d.drain_toasts(), vec![("Whispr deleted".to_string(), false)]);
    }

    #[test]
    fn unknown_user_surfaces_error_toast() {
        let mut d = Dashboard::new(InMemoryRepository::new(), "ghost", FilterState::default());
        assert!(d.dispatch(Event::Reload).unwrap());
        let toasts = d.drain_toasts();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].1);
        assert_eq!(d.state().outcome.total_count, 0);
    }
}
