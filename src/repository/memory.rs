//! In-process repository used by tests and demos.

use crate::domain::error::{Result, WhisprError};
use crate::domain::Whispr;
use crate::repository::backend::WhisprRepository;
use std::collections::HashMap;

/// Whisprs held in memory, keyed by recipient user id.
///
/// Setting [`InMemoryRepository::set_offline`] makes every call fail with
/// [`WhisprError::Network`], which is how tests exercise the failure paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    inboxes: HashMap<String, Vec<Whispr>>,
    offline: bool,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user with an empty inbox.
    pub fn add_user(&mut self, user_id: impl Into<String>) {
        self.inboxes.entry(user_id.into()).or_default();
    }

    /// Appends a whispr to a user's inbox, creating the user if needed.
    pub fn insert(&mut self, user_id: impl Into<String>, whispr: Whispr) {
        self.inboxes.entry(user_id.into()).or_default().push(whispr);
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline {
            return Err(WhisprError::Network("backend unreachable".to_string()));
        }
        Ok(())
    }

    fn find_mut(&mut self, whispr_id: &str) -> Option<&mut Whispr> {
        self.inboxes
            .values_mut()
            .flat_map(|inbox| inbox.iter_mut())
            .find(|w| w.id == whispr_id)
    }
}

impl WhisprRepository for InMemoryRepository {
    fn fetch_all(&self, user_id: &str) -> Result<Vec<Whispr>> {
        self.ensure_online()?;
        self.inboxes
            .get(user_id)
            .cloned()
            .ok_or_else(|| WhisprError::NotFound(format!("user {user_id}")))
    }

    fn delete(&mut self, whispr_id: &str) -> Result<()> {
        self.ensure_online()?;
        for inbox in self.inboxes.values_mut() {
            if let Some(pos) = inbox.iter().position(|w| w.id == whispr_id) {
                inbox.remove(pos);
                return Ok(());
            }
        }
        Err(WhisprError::NotFound(format!("whispr {whispr_id}")))
    }

    fn mark_read(&mut self, whispr_id: &str) -> Result<()> {
        self.ensure_online()?;
        self.find_mut(whispr_id)
            .map(Whispr::mark_read)
            .ok_or_else(|| WhisprError::NotFound(format!("whispr {whispr_id}")))
    }
}
