//! Domain layer for the Whispr dashboard.
//!
//! Core types independent of any backend or rendering concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`whispr`]: Whispr record, type enumeration, and content validation
//!
//! # Examples
//!
//! ```
//! use whispr_dash::domain::{Whispr, WhisprType, Result};
//!
//! fn receive() -> Result<Whispr> {
//!     Ok(Whispr::new("w1", "you're great", WhisprType::Compliment, "2024-01-01"))
//! }
//! # receive().unwrap();
//! ```

pub mod error;
pub mod whispr;

pub use error::{Result, WhisprError};
pub use whispr::{validate_content, Whispr, WhisprType, MAX_CONTENT_LENGTH};
