//! Click-versus-drag classification for a single pointer gesture.
//!
//! Mouse and touch input are reduced to [`PointerPosition`] samples before they reach this
//! module. A gesture starts [`GesturePhase::Provisional`]; once the pointer has travelled the drag
//! threshold (Euclidean distance from the origin) it becomes [`GesturePhase::Dragging`] and stays
//! there until the gesture ends, even if the pointer returns to the origin.

use serde::{Deserialize, Serialize};

use crate::model::PointerPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Device that produced a pointer-down.
pub enum PointerSource {
    Mouse {
        /// `MouseEvent.button`; `0` is the primary button.
        button: i16,
    },
    Touch,
}

impl PointerSource {
    /// Only primary-button mouse presses and touches start gestures.
    pub fn is_primary(self) -> bool {
        match self {
            Self::Mouse { button } => button == 0,
            Self::Touch => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Below the drag threshold; still reversible into a click.
    Provisional,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Click,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub origin: PointerPosition,
    pub phase: GesturePhase,
}

impl Gesture {
    pub fn begin(origin: PointerPosition) -> Self {
        Self {
            origin,
            phase: GesturePhase::Provisional,
        }
    }

    /// Feeds a move sample and returns the resulting phase.
    pub fn update(&mut self, pointer: PointerPosition, threshold_px: i32) -> GesturePhase {
        if self.phase == GesturePhase::Provisional
            && reaches_threshold(self.origin, pointer, threshold_px)
        {
            self.phase = GesturePhase::Dragging;
        }
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn end(self) -> GestureOutcome {
        match self.phase {
            GesturePhase::Provisional => GestureOutcome::Click,
            GesturePhase::Dragging => GestureOutcome::Drag,
        }
    }
}

/// Returns whether `pointer` is at least `threshold_px` away from `origin`.
pub fn reaches_threshold(origin: PointerPosition, pointer: PointerPosition, threshold_px: i32) -> bool {
    let dx = i64::from(pointer.x) - i64::from(origin.x);
    let dy = i64::from(pointer.y) - i64::from(origin.y);
    let threshold = i64::from(threshold_px);
    dx * dx + dy * dy >= threshold * threshold
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any path that stays strictly inside the threshold circle ends as a click.
        #[test]
        fn paths_inside_threshold_are_clicks(
            steps in proptest::collection::vec((-3i32..=3, -3i32..=3), 0..20)
        ) {
            let origin = PointerPosition { x: 500, y: 500 };
            let mut gesture = Gesture::begin(origin);
            for (dx, dy) in steps {
                gesture.update(PointerPosition { x: origin.x + dx, y: origin.y + dy }, 5);
            }
            prop_assert_eq!(gesture.end(), GestureOutcome::Click);
        }

        /// Once any sample reaches the threshold the gesture ends as a drag.
        #[test]
        fn crossing_threshold_is_sticky(
            dx in 5i32..200,
            back in proptest::collection::vec((-2i32..=2, -2i32..=2), 0..10)
        ) {
            let origin = PointerPosition { x: 0, y: 0 };
            let mut gesture = Gesture::begin(origin);
            gesture.update(PointerPosition { x: dx, y: 0 }, 5);
            for (x, y) in back {
                gesture.update(PointerPosition { x, y }, 5);
            }
            prop_assert_eq!(gesture.end(), GestureOutcome::Drag);
        }
    }
}
