//! Application layer coordinating dashboard state, events, and actions.
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Repository
//!                           ↑                                          ↓
//!                           └──────────── Feedback Events ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`dashboard`]: Event loop wiring the handler to an injected repository
//! - [`debounce`]: Caller-owned search debounce timer
//! - [`effects`]: Executes actions against a repository
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Dashboard state container and view model computation

pub mod actions;
pub mod dashboard;
pub mod debounce;
pub mod effects;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use dashboard::Dashboard;
pub use debounce::SearchDebouncer;
pub use handler::{handle_event, Event, Operation};
pub use state::DashboardState;
