//! Whispr dashboard core: filtering, sorting, and card navigation for
//! anonymous messages.
//!
//! The crate provides:
//! - A pure filter engine (type filter, substring search, sort, per-type counts)
//! - A card navigator with clamped stepping and horizontal swipe gestures
//! - A repository seam with in-memory and JSON export backends
//! - An event/action state machine that keeps derived state consistent

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line-oriented CLI (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action execution against a repository           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Filter Engine │   │ Navigator     │   │ Repository    │
//! │ (filter/)     │   │ (navigator/)  │   │ (repository/) │
//! │ - Type/search │   │ - Clamped idx │   │ - Trait seam  │
//! │ - Sort/counts │   │ - Swipes      │   │ - JSON/memory │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, UI & Infrastructure                        │
//! │  - Whispr model and errors (domain/)                │
//! │  - View models and text rendering (ui/)             │
//! │  - Data paths (infrastructure/)                     │
//! │  - Rotating file logs (observability/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Dashboard state machine with event/action model
//! - [`domain`]: Core domain types (Whispr, WhisprType, errors)
//! - [`filter`]: Filter engine and filter state
//! - [`navigator`]: Card navigator and swipe gestures
//! - [`repository`]: Repository trait and backends
//! - [`ui`]: View models and rendering
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file. Every key is optional:
//!
//! ```toml
//! user_id = "ana"
//! data_file = "~/.local/share/whispr/whisprs.json"
//! trace_level = "debug"
//! search_debounce_ms = 300
//! default_view = "card"
//! default_sort = "oldest"
//! color = true
//! ```
//!
//! # Examples
//!
//! ```rust
//! use whispr_dash::{handle_event, initialize, Config, Event};
//! use whispr_dash::domain::{Whispr, WhisprType};
//!
//! let mut state = initialize(&Config::default());
//!
//! let loaded = Event::WhisprsLoaded(vec![
//!     Whispr::new("w1", "spill it", WhisprType::Dare, "2024-01-01T10:00:00Z"),
//! ]);
//! handle_event(&mut state, &loaded)?;
//! handle_event(&mut state, &Event::SetSearch("SPILL".to_string()))?;
//! assert_eq!(state.outcome.visible_count(), 1);
//! # Ok::<(), whispr_dash::WhisprError>(())
//! ```

pub mod app;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod navigator;
pub mod observability;
pub mod repository;
pub mod ui;

pub use app::{handle_event, Action, Dashboard, DashboardState, Event};
pub use domain::{Result, Whispr, WhisprError, WhisprType};
pub use filter::{FilterState, SortOption, TypeFilter, ViewMode};
pub use navigator::{CardNavigator, SwipeDecision};
pub use repository::{InMemoryRepository, JsonRepository, WhisprRepository};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default export file name inside the data directory.
const DATA_FILE_NAME: &str = "whisprs.json";

/// Dashboard configuration.
///
/// # Example
///
/// ```rust
/// use whispr_dash::{Config, ViewMode};
///
/// let config = Config::from_toml_str("user_id = \"ana\"\ndefault_view = \"list\"")?;
/// assert_eq!(config.user_id, "ana");
/// assert_eq!(config.default_view, ViewMode::List);
/// assert_eq!(config.search_debounce_ms, 300);
/// # Ok::<(), whispr_dash::WhisprError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recipient whose inbox is shown. Default: `"me"`
    pub user_id: String,

    /// Path to the JSON export. `~` is expanded.
    ///
    /// Default: `<data dir>/whisprs.json`
    pub data_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `<data dir>/whispr.log`
    pub log_file: Option<String>,

    /// Quiet period before a search edit is applied. Default: 300
    pub search_debounce_ms: u64,

    pub default_view: ViewMode,
    pub default_sort: SortOption,

    /// Emit ANSI colors when rendering. Default: true
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_id: "me".to_string(),
            data_file: None,
            trace_level: None,
            log_file: None,
            search_debounce_ms: 300,
            default_view: ViewMode::default(),
            default_sort: SortOption::default(),
            color: true,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WhisprError::Config`] on malformed TOML, unknown enum values,
    /// or an empty `user_id`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| WhisprError::Config(e.to_string()))?;

        if config.user_id.trim().is_empty() {
            return Err(WhisprError::Config("user_id must not be empty".to_string()));
        }

        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`WhisprError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| WhisprError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Resolved location of the JSON export.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data_file.as_deref().map_or_else(
            || infrastructure::get_data_dir().join(DATA_FILE_NAME),
            |path| PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Creates an empty dashboard for the configured user.
///
/// The view and sort start at the configured defaults; the collection is
/// filled later by a fetch.
#[must_use]
pub fn initialize(config: &Config) -> DashboardState {
    tracing::debug!(user_id = %config.user_id, "initializing dashboard");

    let filter = FilterState::with_defaults(config.default_view, config.default_sort);
    DashboardState::new(config.user_id.clone(), filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.user_id, "me");
        assert_eq!(config.default_view, ViewMode::Grid);
        assert_eq!(config.default_sort, SortOption::Newest);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert!(config.color);
        assert!(config.data_path().ends_with(DATA_FILE_NAME));
    }

    #[test]
    fn full_config_parses() {
        let config = Config::from_toml_str(
            r#"
            user_id = "ana"
            data_file = "/srv/whispr/export.json"
            trace_level = "debug"
            search_debounce_ms = 50
            default_view = "card"
            default_sort = "type"
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.user_id, "ana");
        assert_eq!(config.data_path(), PathBuf::from("/srv/whispr/export.json"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.default_view, ViewMode::Card);
        assert_eq!(config.default_sort, SortOption::Type);
        assert!(!config.color);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(matches!(
            Config::from_toml_str("default_view = \"carousel\""),
            Err(WhisprError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("user_id = \"  \""),
            Err(WhisprError::Config(_))
        ));
        assert!(matches!(
            Config::from_file(Path::new("/nonexistent/whispr.toml")),
            Err(WhisprError::Config(_))
        ));
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whispr.toml");
        std::fs::write(&path, "user_id = \"bo\"\n").unwrap();
        assert_eq!(Config::from_file(&path).unwrap().user_id, "bo");
    }

    #[test]
    fn initialize_applies_default_modes() {
        let config = Config {
            default_view: ViewMode::List,
            default_sort: SortOption::Oldest,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.user_id, "me");
        assert_eq!(state.filter.view_mode, ViewMode::List);
        assert_eq!(state.filter.sort_option, SortOption::Oldest);
        assert!(state.whisprs.is_empty());
    }
}
