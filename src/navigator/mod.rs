//! Card-view navigation: clamped position tracking and swipe gestures.
//!
//! - [`card`]: [`CardNavigator`], the current-index state machine
//! - [`gesture`]: [`SwipeGesture`] and the threshold constants

pub mod card;
pub mod gesture;

pub use card::CardNavigator;
pub use gesture::{SwipeDecision, SwipeGesture, MAX_TRANSLATE, MIN_SWIPE_DISTANCE};
