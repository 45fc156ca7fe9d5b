//! Structured logging to a rotating file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → whispr.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Events written to `<data dir>/whispr.log` unless
//!   `log_file` overrides it
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: Events carry the fields of their enclosing spans
//!
//! # Configuration
//!
//! Level is taken from the `trace_level` config option, defaulting to
//! `"info"`. Any `EnvFilter` directive works, e.g. `"whispr_dash=debug"`.
//!
//! # Usage
//!
//! ```rust
//! use whispr_dash::observability::init_tracing;
//! use whispr_dash::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("dashboard starting");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
