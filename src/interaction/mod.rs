pub use crate::core::BarKey;

/// Result of feeding a pointer position into [`HoverState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// Pointer moved onto a bar (possibly straight from another one).
    Entered(BarKey),
    /// Pointer left the hovered bar and is over none.
    Left,
    /// Nothing changed.
    Unchanged,
}

/// Pointer hover tracking over rendered bars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    hovered: Option<BarKey>,
    cursor_x: f64,
    cursor_y: f64,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<BarKey> {
        self.hovered
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    /// Records the pointer position and the bar under it, if any.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, hit: Option<BarKey>) -> HoverTransition {
        self.cursor_x = x;
        self.cursor_y = y;
        if hit == self.hovered {
            return HoverTransition::Unchanged;
        }
        self.hovered = hit;
        match hit {
            Some(key) => HoverTransition::Entered(key),
            None => HoverTransition::Left,
        }
    }

    pub fn on_pointer_leave(&mut self) -> HoverTransition {
        if self.hovered.take().is_some() {
            HoverTransition::Left
        } else {
            HoverTransition::Unchanged
        }
    }

    /// Forgets the hovered bar; used when geometry is rebuilt.
    pub fn clear(&mut self) {
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{BarKey, HoverState, HoverTransition};

    const KEY: BarKey = BarKey {
        period_index: 0,
        point_index: 0,
        value_index: 1,
    };

    #[test]
    fn enter_then_stay_then_leave() {
        let mut state = HoverState::default();
        assert_eq!(state.on_pointer_move(5.0, 5.0, Some(KEY)), HoverTransition::Entered(KEY));
        assert_eq!(state.on_pointer_move(6.0, 5.0, Some(KEY)), HoverTransition::Unchanged);
        assert_eq!(state.on_pointer_move(90.0, 5.0, None), HoverTransition::Left);
        assert_eq!(state.cursor(), (90.0, 5.0));
    }

    #[test]
    fn pointer_leave_without_hover_is_noop() {
        let mut state = HoverState::default();
        assert_eq!(state.on_pointer_leave(), HoverTransition::Unchanged);
    }
}
