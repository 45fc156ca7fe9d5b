//! Data access for whisprs.
//!
//! # Modules
//!
//! - `backend`: the [`WhisprRepository`] trait consumed by the dashboard
//! - `json`: JSON export file implementation
//! - `memory`: in-process implementation for tests and demos

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::WhisprRepository;
pub use json::JsonRepository;
pub use memory::InMemoryRepository;
