//! Resize controller for the bottom-right window handle.

use crate::config::DesktopConfig;
use crate::interaction::{acquire, InteractionState, ResizeSession};
use crate::model::{DesktopState, PointerPosition, Size, WindowId};
use crate::reducer::{ReducerError, RuntimeEffect};

/// New window size for a pointer displacement of `(dx, dy)`; never below `min`.
pub fn resized(initial: Size, min: Size, dx: i32, dy: i32) -> Size {
    Size {
        w: min.w.max(initial.w + dx),
        h: min.h.max(initial.h + dy),
    }
}

pub(crate) fn start_resize(
    state: &DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
    config: &DesktopConfig,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let window = state
        .window(&window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
    if !window.is_visible() || window.is_maximized() {
        return Ok(());
    }

    let session = ResizeSession {
        initial_size: window.rect.size(),
        min_size: window.min_size.unwrap_or(config.min_window_size),
        initial_pointer: pointer,
        window_id,
    };
    acquire(interaction, InteractionState::Resizing(session), effects);
    Ok(())
}

pub(crate) fn update_size(
    state: &mut DesktopState,
    session: &ResizeSession,
    pointer: PointerPosition,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(window) = state
        .windows
        .iter_mut()
        .find(|w| w.id == session.window_id)
    else {
        return;
    };
    if !window.is_visible() || window.is_maximized() {
        return;
    }

    let dx = pointer.x - session.initial_pointer.x;
    let dy = pointer.y - session.initial_pointer.y;
    window.rect = window
        .rect
        .resized_to(resized(session.initial_size, session.min_size, dx, dy));

    if let Some(canvas_id) = &window.canvas_id {
        effects.push(RuntimeEffect::SyncCanvasBuffer {
            canvas_id: canvas_id.clone(),
        });
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn size_is_at_least_minimum(
            w in 150i32..2000,
            h in 150i32..2000,
            dx in -5000i32..5000,
            dy in -5000i32..5000,
        ) {
            let min = Size { w: 150, h: 150 };
            let size = resized(Size { w, h }, min, dx, dy);
            prop_assert!(size.w >= min.w && size.h >= min.h);
            if w + dx <= min.w {
                prop_assert_eq!(size.w, min.w);
            }
            if h + dy <= min.h {
                prop_assert_eq!(size.h, min.h);
            }
        }
    }
}
