//! Drag controller for desktop icons and window title bars.

use crate::config::DesktopConfig;
use crate::gesture::{Gesture, GestureOutcome, GesturePhase};
use crate::icon_grid::{clamp_axis, snap_to_grid};
use crate::interaction::{acquire, DragSession, DragTarget, InteractionState};
use crate::model::{
    DesktopMetrics, DesktopState, IconId, Point, PointerOffset, PointerPosition, Size, WindowId,
    WindowRect,
};
use crate::reducer::{ReducerError, RuntimeEffect};
use crate::window_manager;

/// Icon position for `pointer`, kept fully inside the icon container.
pub fn icon_drag_position(
    pointer: PointerPosition,
    offset: PointerOffset,
    container: WindowRect,
    icon: Size,
) -> Point {
    let x = pointer.x - container.x - offset.dx;
    let y = pointer.y - container.y - offset.dy;
    Point {
        x: clamp_axis(x, 0, container.w - icon.w),
        y: clamp_axis(y, 0, container.h - icon.h),
    }
}

/// Window position for `pointer`, kept inside the viewport and above the taskbar.
pub fn window_drag_position(
    pointer: PointerPosition,
    offset: PointerOffset,
    window: Size,
    metrics: DesktopMetrics,
) -> Point {
    let x = pointer.x - offset.dx;
    let y = pointer.y - offset.dy;
    Point {
        x: clamp_axis(x, 0, metrics.viewport.w - window.w),
        y: clamp_axis(
            y,
            0,
            metrics.viewport.h - window.h - metrics.taskbar_height,
        ),
    }
}

pub(crate) fn start_icon_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    icon_id: IconId,
    pointer: PointerPosition,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let container = state.metrics.container;
    let icon = state
        .icons
        .iter_mut()
        .find(|i| i.id == icon_id)
        .ok_or_else(|| ReducerError::IconNotFound(icon_id.clone()))?;

    let pointer_offset = PointerOffset {
        dx: pointer.x - container.x - icon.position.x,
        dy: pointer.y - container.y - icon.position.y,
    };
    let session = InteractionState::Dragging(DragSession {
        target: DragTarget::Icon(icon_id),
        gesture: Gesture::begin(pointer),
        pointer_offset,
    });

    if acquire(interaction, session, effects) {
        // A new drag on the same icon supersedes its pending snap animation.
        if let Some(token) = icon.snap_transition.take() {
            effects.push(RuntimeEffect::CancelTimer { token });
        }
    }
    Ok(())
}

pub(crate) fn start_window_drag(
    state: &DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let window = state
        .window(&window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
    if !window.is_visible() {
        return Ok(());
    }

    let pointer_offset = PointerOffset {
        dx: pointer.x - window.rect.x,
        dy: pointer.y - window.rect.y,
    };
    acquire(
        interaction,
        InteractionState::Dragging(DragSession {
            target: DragTarget::Window(window_id),
            gesture: Gesture::begin(pointer),
            pointer_offset,
        }),
        effects,
    );
    Ok(())
}

/// Applies a move sample. Targets that vanished or were hidden mid-gesture are left alone.
pub(crate) fn update_drag(
    state: &mut DesktopState,
    session: &mut DragSession,
    pointer: PointerPosition,
    config: &DesktopConfig,
) {
    if session.gesture.update(pointer, config.drag_threshold_px) != GesturePhase::Dragging {
        return;
    }

    let metrics = state.metrics;
    match &session.target {
        DragTarget::Icon(icon_id) => {
            if let Some(icon) = state.icons.iter_mut().find(|i| &i.id == icon_id) {
                icon.position = icon_drag_position(
                    pointer,
                    session.pointer_offset,
                    metrics.container,
                    config.icon_size,
                );
            }
        }
        DragTarget::Window(window_id) => {
            let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
                return;
            };
            if !window.is_visible() || window.is_maximized() {
                return;
            }
            let origin =
                window_drag_position(pointer, session.pointer_offset, window.rect.size(), metrics);
            window.rect = window.rect.moved_to(origin);
        }
    }
}

/// Finishes a released drag session: snaps a dragged icon, or treats an icon press that never
/// crossed the threshold as a click.
pub(crate) fn finish_drag(
    state: &mut DesktopState,
    session: DragSession,
    config: &DesktopConfig,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let DragTarget::Icon(icon_id) = session.target else {
        return Ok(());
    };

    match session.gesture.end() {
        GestureOutcome::Click => window_manager::click_icon(state, &icon_id, config, effects),
        GestureOutcome::Drag => {
            let token = state.allocate_timer();
            let container = state.metrics.container.size();
            let Some(icon) = state.icons.iter_mut().find(|i| i.id == icon_id) else {
                return Ok(());
            };
            icon.position = snap_to_grid(icon.position, config.icon_grid, container, config.icon_size);
            icon.snap_transition = Some(token);
            effects.push(RuntimeEffect::ScheduleTimer {
                token,
                delay_ms: config.snap_transition_ms,
            });
            Ok(())
        }
    }
}
