//! Executes [`Action`]s against a repository.
//!
//! Each repository action turns into exactly one feedback [`Event`], success
//! or failure, which the caller feeds back into
//! [`handle_event`](crate::app::handle_event). Toasts are a rendering concern
//! and produce no feedback.

use crate::app::handler::Operation;
use crate::app::{Action, Event};
use crate::repository::WhisprRepository;

/// Runs one action and returns the event describing its outcome.
pub fn run_action(repo: &mut dyn WhisprRepository, action: &Action) -> Option<Event> {
    let _span = tracing::debug_span!("run_action", action = ?action).entered();

    let event = match action {
        Action::FetchAll { user_id } => match repo.fetch_all(user_id) {
            Ok(whisprs) => Event::WhisprsLoaded(whisprs),
            Err(e) => failed(Operation::FetchAll, &e),
        },
        Action::Delete { whispr_id } => match repo.delete(whispr_id) {
            Ok(()) => Event::WhisprDeleted { id: whispr_id.clone() },
            Err(e) => failed(Operation::Delete, &e),
        },
        Action::MarkRead { whispr_id } => match repo.mark_read(whispr_id) {
            Ok(()) => Event::WhisprMarkedRead { id: whispr_id.clone() },
            Err(e) => failed(Operation::MarkRead, &e),
        },
        Action::ShowToast { .. } => return None,
    };
    Some(event)
}

fn failed(operation: Operation, error: &crate::WhisprError) -> Event {
    tracing::debug!(operation = ?operation, error = %error, "repository action failed");
    Event::RepositoryFailed {
        operation,
        error: error.to_string(),
    }
}
