//! Horizontal swipe gesture tracking.
//!
//! A [`SwipeGesture`] lives from touch-start to release. While it is in flight
//! it only produces a visual drag offset; the navigation decision is made once,
//! on release, from the total horizontal distance.

/// Minimum horizontal travel, in input pixels, for a release to navigate.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Largest visual displacement applied to the card while dragging.
pub const MAX_TRANSLATE: f64 = 100.0;

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Swiped left past the threshold: advance to the following card.
    Next,
    /// Swiped right past the threshold: go back one card.
    Previous,
    /// Within the threshold: no navigation, snap back to neutral.
    Stay,
}

/// One in-flight touch gesture.
///
/// # Example
///
/// ```rust
/// use whispr_dash::navigator::{SwipeDecision, SwipeGesture};
///
/// let mut gesture = SwipeGesture::start(100.0);
/// gesture.track(70.0);
/// gesture.track(40.0);
/// assert_eq!(gesture.distance(), -60.0);
/// assert_eq!(gesture.drag_offset(), -60.0);
/// assert_eq!(gesture.decision(), SwipeDecision::Next);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    start_x: f64,
    last_x: Option<f64>,
}

impl SwipeGesture {
    #[must_use]
    pub const fn start(x: f64) -> Self {
        Self { start_x: x, last_x: None }
    }

    /// Records the latest pointer position.
    pub fn track(&mut self, x: f64) {
        self.last_x = Some(x);
    }

    /// Signed travel from the start position; zero until the first move.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.last_x.map_or(0.0, |x| x - self.start_x)
    }

    /// Visual displacement: the distance clamped to `±MAX_TRANSLATE`.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        let distance = self.distance();
        if distance == 0.0 {
            return 0.0;
        }
        distance.abs().clamp(0.0, MAX_TRANSLATE) * distance.signum()
    }

    #[must_use]
    pub fn decision(&self) -> SwipeDecision {
        let distance = self.distance();
        if distance < -MIN_SWIPE_DISTANCE {
            SwipeDecision::Next
        } else if distance > MIN_SWIPE_DISTANCE {
            SwipeDecision::Previous
        } else {
            SwipeDecision::Stay
        }
    }
}
