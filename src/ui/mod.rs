//! Presentation layer: view models and their text rendering.
//!
//! ```text
//! DashboardState → compute_viewmodel → DashboardViewModel → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable dashboard state
//! - [`renderer`]: Line-oriented text renderer
//! - [`palette`]: Per-type accent colors and ANSI sequences

pub mod palette;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use viewmodel::{
    Body, CardInfo, DashboardViewModel, DisplayItem, EmptyState, FilterChip, HeaderInfo,
};
