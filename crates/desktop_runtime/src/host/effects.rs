//! Runtime-effect dispatch for the desktop host boundary.

use leptos::logging;

use crate::{
    host::{gesture_listeners::GestureListeners, viewport, DesktopHostContext},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::AttachGestureListeners => {
            let listeners = GestureListeners::attach(runtime.dispatch);
            let replaced = host.gesture_listeners.borrow_mut().replace(listeners);
            if replaced.is_some() {
                logging::warn!("gesture listeners attached twice; dropping the stale set");
            }
            drop(replaced);
        }
        RuntimeEffect::DetachGestureListeners => {
            // Taken out first so the guard's Drop runs without the cell borrowed.
            let listeners = host.gesture_listeners.borrow_mut().take();
            drop(listeners);
        }
        RuntimeEffect::ScheduleTimer { token, delay_ms } => {
            host.timers.schedule(token, delay_ms, runtime.dispatch);
        }
        RuntimeEffect::CancelTimer { token } => host.timers.cancel(token),
        RuntimeEffect::SyncCanvasBuffer { canvas_id } => viewport::sync_canvas_buffer(&canvas_id),
    }
}
