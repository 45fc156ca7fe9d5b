//! JSON file-backed repository.
//!
//! Reads a whispr export (the same rows the hosted backend returns, grouped by
//! recipient) and persists deletes and read flags back to it with atomic file
//! writes (write-to-temp + rename).
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "inboxes": {
//!     "ana": [
//!       {
//!         "id": "w1",
//!         "content": "Who's your celebrity crush?",
//!         "type": "question",
//!         "created_at": "2024-01-03T10:00:00Z",
//!         "is_read": false,
//!         "metadata": {}
//!       }
//!     ]
//!   }
//! }
//! ```

use crate::domain::error::{Result, WhisprError};
use crate::domain::Whispr;
use crate::repository::backend::WhisprRepository;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExportData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    inboxes: BTreeMap<String, Vec<Whispr>>,
}

impl Default for ExportData {
    fn default() -> Self {
        Self {
            version: 1,
            inboxes: BTreeMap::new(),
        }
    }
}

/// Repository over a JSON export file.
///
/// The whole document is held in memory and rewritten on every change.
/// Changes are applied to a copy and only swapped in once the write
/// succeeded, so a failed call leaves both memory and disk untouched.
/// `Send` but not `Sync`: one dashboard owns it.
pub struct JsonRepository {
    file_path: PathBuf,
    data: ExportData,
}

impl JsonRepository {
    /// Opens an export file, or starts an empty one if it does not exist.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or the file
    /// exists but cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use whispr_dash::repository::{JsonRepository, WhisprRepository};
    /// use std::path::PathBuf;
    ///
    /// let repo = JsonRepository::open(PathBuf::from("/tmp/whisprs.json"))?;
    /// let inbox = repo.fetch_all("ana")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON whispr export");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("export missing, starting empty");
            ExportData::default()
        };

        tracing::debug!(inboxes = data.inboxes.len(), "export loaded");

        Ok(Self {
            file_path,
            data,
        })
    }

    /// Adds a whispr to a user's inbox and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails validation or the write fails.
    pub fn insert(&mut self, user_id: &str, whispr: Whispr) -> Result<()> {
        crate::domain::validate_content(&whispr.content)?;

        let mut next = self.data.clone();
        next.inboxes
            .entry(user_id.to_string())
            .or_default()
            .push(whispr);
        self.commit(next)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<ExportData> {
        let contents = std::fs::read_to_string(path)?;
        let data: ExportData = serde_json::from_str(&contents)
            .map_err(|e| WhisprError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "parsed whispr export");
        Ok(data)
    }

    /// Writes `next` to disk, then makes it the in-memory document.
    fn commit(&mut self, next: ExportData) -> Result<()> {
        Self::write_atomic(&self.file_path, &next)?;
        self.data = next;
        Ok(())
    }

    fn write_atomic(path: &Path, data: &ExportData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| WhisprError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::debug!(path = ?path, "whispr export saved");
        Ok(())
    }

    fn find(&self, whispr_id: &str) -> Option<&Whispr> {
        self.data
            .inboxes
            .values()
            .flat_map(|inbox| inbox.iter())
            .find(|w| w.id == whispr_id)
    }
}

impl WhisprRepository for JsonRepository {
    fn fetch_all(&self, user_id: &str) -> Result<Vec<Whispr>> {
        let _span = tracing::debug_span!("json_fetch_all", user_id = %user_id).entered();

        let inbox = self
            .data
            .inboxes
            .get(user_id)
            .cloned()
            .ok_or_else(|| WhisprError::NotFound(format!("user {user_id}")))?;

        tracing::debug!(count = inbox.len(), "fetched whisprs");
        Ok(inbox)
    }

    fn delete(&mut self, whispr_id: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_delete", whispr_id = %whispr_id).entered();

        let mut next = self.data.clone();
        let removed = next.inboxes.values_mut().any(|inbox| {
            inbox
                .iter()
                .position(|w| w.id == whispr_id)
                .map(|pos| inbox.remove(pos))
                .is_some()
        });

        if !removed {
            return Err(WhisprError::NotFound(format!("whispr {whispr_id}")));
        }

        self.commit(next)
    }

    fn mark_read(&mut self, whispr_id: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_mark_read", whispr_id = %whispr_id).entered();

        let whispr = self
            .find(whispr_id)
            .ok_or_else(|| WhisprError::NotFound(format!("whispr {whispr_id}")))?;

        if whispr.is_read {
            tracing::trace!("already read");
            return Ok(());
        }

        let mut next = self.data.clone();
        next.inboxes
            .values_mut()
            .flat_map(|inbox| inbox.iter_mut())
            .filter(|w| w.id == whispr_id)
            .for_each(Whispr::mark_read);
        self.commit(next)
    }
}
