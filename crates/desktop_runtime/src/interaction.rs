//! The single active pointer session (drag or resize) and its listener bookkeeping.
//!
//! Starting a session emits [`RuntimeEffect::AttachGestureListeners`]; every path back to
//! [`InteractionState::Idle`] goes through [`release`], which emits the matching
//! [`RuntimeEffect::DetachGestureListeners`].

use crate::gesture::Gesture;
use crate::model::{IconId, PointerOffset, PointerPosition, Size, WindowId};
use crate::reducer::RuntimeEffect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Icon(IconId),
    Window(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub target: DragTarget,
    pub gesture: Gesture,
    pub pointer_offset: PointerOffset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub initial_size: Size,
    pub initial_pointer: PointerPosition,
    pub min_size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the session (of either kind) targets `window_id`.
    pub fn targets_window(&self, window_id: &WindowId) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging(session) => session.target == DragTarget::Window(window_id.clone()),
            Self::Resizing(session) => &session.window_id == window_id,
        }
    }

    /// Icon currently past the drag threshold, for styling.
    pub fn dragging_icon(&self) -> Option<&IconId> {
        match self {
            Self::Dragging(DragSession {
                target: DragTarget::Icon(icon_id),
                gesture,
                ..
            }) if gesture.is_dragging() => Some(icon_id),
            _ => None,
        }
    }
}

/// Installs `next` as the active session. Returns `false`, leaving state untouched, when another
/// session is already active.
pub(crate) fn acquire(
    interaction: &mut InteractionState,
    next: InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    if !interaction.is_idle() {
        leptos::logging::debug_warn!("pointer-down ignored: a gesture is already active");
        return false;
    }
    *interaction = next;
    effects.push(RuntimeEffect::AttachGestureListeners);
    true
}

/// Ends the active session, if any, and returns it.
pub(crate) fn release(
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) -> InteractionState {
    let previous = std::mem::take(interaction);
    if !previous.is_idle() {
        effects.push(RuntimeEffect::DetachGestureListeners);
    }
    previous
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resize_session(id: &str) -> InteractionState {
        InteractionState::Resizing(ResizeSession {
            window_id: WindowId::new(id),
            initial_size: Size { w: 300, h: 200 },
            initial_pointer: PointerPosition { x: 0, y: 0 },
            min_size: Size { w: 150, h: 150 },
        })
    }

    #[test]
    fn second_acquire_is_rejected_without_effects() {
        let mut interaction = InteractionState::Idle;
        let mut effects = Vec::new();

        assert!(acquire(&mut interaction, resize_session("a"), &mut effects));
        assert!(!acquire(&mut interaction, resize_session("b"), &mut effects));

        assert_eq!(effects, vec![RuntimeEffect::AttachGestureListeners]);
        assert!(interaction.targets_window(&WindowId::new("a")));
    }

    #[test]
    fn release_is_idempotent() {
        let mut interaction = resize_session("a");
        let mut effects = Vec::new();

        release(&mut interaction, &mut effects);
        release(&mut interaction, &mut effects);

        assert!(interaction.is_idle());
        assert_eq!(effects, vec![RuntimeEffect::DetachGestureListeners]);
    }
}
