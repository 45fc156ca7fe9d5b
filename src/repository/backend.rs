//! Repository abstraction over the hosted whispr backend.
//!
//! The dashboard never talks to the backend directly. Everything it needs is
//! behind [`WhisprRepository`], injected into the effect runner by the caller.
//! The trait is deliberately narrow: one method per backend call the dashboard
//! makes.

use crate::domain::error::Result;
use crate::domain::Whispr;

/// Whispr data access for a single dashboard.
///
/// # Implementations
///
/// - [`InMemoryRepository`](crate::repository::InMemoryRepository): seeded
///   in-process collections, with a switchable offline mode
/// - [`JsonRepository`](crate::repository::JsonRepository): a JSON export file
///   with atomic writes
///
/// # Examples
///
/// ```
/// use whispr_dash::repository::{InMemoryRepository, WhisprRepository};
/// use whispr_dash::domain::{Whispr, WhisprType};
///
/// let mut repo = InMemoryRepository::default();
/// repo.insert("ana", Whispr::new("w1", "hey", WhisprType::Question, "2024-01-01"));
/// repo.mark_read("w1")?;
/// assert!(repo.fetch_all("ana")?[0].is_read);
/// # Ok::<(), whispr_dash::WhisprError>(())
/// ```
pub trait WhisprRepository: Send {
    /// Returns every whispr received by `user_id`, in storage order.
    ///
    /// The order carries no meaning; callers sort through the filter engine.
    ///
    /// # Errors
    ///
    /// [`WhisprError::NotFound`](crate::WhisprError::NotFound) for an unknown
    /// user, [`WhisprError::Network`](crate::WhisprError::Network) or a storage
    /// error when the backend cannot be read.
    fn fetch_all(&self, user_id: &str) -> Result<Vec<Whispr>>;

    /// Permanently removes a whispr.
    ///
    /// # Errors
    ///
    /// Returns an error if the whispr does not exist or the write fails.
    fn delete(&mut self, whispr_id: &str) -> Result<()>;

    /// Flags a whispr as read. Marking an already-read whispr succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the whispr does not exist or the write fails.
    fn mark_read(&mut self, whispr_id: &str) -> Result<()>;
}
