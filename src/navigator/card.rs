//! Single-item carousel position over an ordered list.
//!
//! [`CardNavigator`] owns the list it navigates. Replacing the list through
//! [`CardNavigator::set_items`] always resets the position to the first card,
//! which is how new filter results or a deletion land. Navigation clamps at
//! both ends; it never wraps.

use super::gesture::{SwipeDecision, SwipeGesture};

/// Current-card tracker driven by buttons and swipe gestures.
///
/// # Example
///
/// ```rust
/// use whispr_dash::navigator::CardNavigator;
///
/// let mut nav = CardNavigator::new(vec!["a", "b", "c"]);
/// nav.touch_start(100.0);
/// nav.touch_move(40.0);
/// nav.touch_end();
/// assert_eq!(nav.current(), Some(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct CardNavigator<T> {
    items: Vec<T>,
    current_index: usize,
    gesture: Option<SwipeGesture>,
}

impl<T> Default for CardNavigator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> CardNavigator<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items,
            current_index: 0,
            gesture: None,
        }
    }

    /// Replaces the backing list and resets to the first card.
    ///
    /// Any in-flight gesture is dropped along with the old list.
    pub fn set_items(&mut self, items: Vec<T>) {
        tracing::trace!(
            old_len = self.items.len(),
            new_len = items.len(),
            "card list replaced"
        );
        self.items = items;
        self.gesture = None;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Advances one card. Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one card. Returns whether the position changed.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.items.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Position of the current card, or `None` when the list is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current_index)
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Edits cards in place. The slice cannot grow or shrink, so the
    /// position is kept.
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Begins a gesture at `x`, discarding any gesture already in flight.
    pub fn touch_start(&mut self, x: f64) {
        self.gesture = Some(SwipeGesture::start(x));
    }

    /// Records pointer movement. Ignored when no gesture is active.
    pub fn touch_move(&mut self, x: f64) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.track(x);
        }
    }

    /// Ends the active gesture and applies its decision.
    ///
    /// Returns [`SwipeDecision::Stay`] when no gesture was active. A decision
    /// of `Next` or `Previous` is still clamped at the list ends.
    pub fn touch_end(&mut self) -> SwipeDecision {
        let Some(gesture) = self.gesture.take() else {
            return SwipeDecision::Stay;
        };

        let decision = gesture.decision();
        tracing::debug!(
            distance = gesture.distance(),
            decision = ?decision,
            "swipe released"
        );

        match decision {
            SwipeDecision::Next => {
                self.next();
            }
            SwipeDecision::Previous => {
                self.previous();
            }
            SwipeDecision::Stay => {}
        }
        decision
    }

    /// Visual drag offset of the active gesture, zero when idle.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.gesture.as_ref().map_or(0.0, SwipeGesture::drag_offset)
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }
}
