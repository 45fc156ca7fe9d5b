//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never touches the repository.
//! It returns `Action`s, and the caller executes them through
//! [`run_action`](crate::app::effects::run_action) or its own runtime. The
//! repository's answer comes back as a feedback [`Event`](crate::app::Event).
//!
//! # Example
//!
//! ```rust
//! use whispr_dash::app::Action;
//!
//! let actions = vec![
//!     Action::FetchAll { user_id: "ana".to_string() },
//!     Action::MarkRead { whispr_id: "w1".to_string() },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load the user's full whispr collection.
    FetchAll {
        user_id: String,
    },

    /// Permanently delete one whispr.
    Delete {
        whispr_id: String,
    },

    /// Flag one whispr as read.
    MarkRead {
        whispr_id: String,
    },

    /// Show a transient notification to the user.
    ShowToast {
        message: String,
        is_error: bool,
    },
}

impl Action {
    pub(crate) fn toast(message: impl Into<String>) -> Self {
        Self::ShowToast {
            message: message.into(),
            is_error: false,
        }
    }

    pub(crate) fn error_toast(message: impl Into<String>) -> Self {
        Self::ShowToast {
            message: message.into(),
            is_error: true,
        }
    }
}
