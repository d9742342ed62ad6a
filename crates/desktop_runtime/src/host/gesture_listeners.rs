//! Window-level move/up listeners that live exactly as long as one pointer gesture.
//!
//! [`GestureListeners`] is created when the reducer emits
//! [`RuntimeEffect::AttachGestureListeners`](crate::RuntimeEffect::AttachGestureListeners) and
//! dropped on the matching detach; dropping it unregisters every listener it installed.

#[cfg(target_arch = "wasm32")]
use leptos::{ev, window_event_listener, Callable};
use leptos::Callback;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{model::PointerPosition, reducer::DesktopAction};

pub fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// First active touch, falling back to the first changed touch (the only one left on
/// `touchend`).
pub fn pointer_from_touch_event(ev: &web_sys::TouchEvent) -> Option<PointerPosition> {
    let touch = ev.touches().get(0).or_else(|| ev.changed_touches().get(0))?;
    Some(PointerPosition {
        x: touch.client_x(),
        y: touch.client_y(),
    })
}

/// RAII registration of the move/up listeners for the active gesture.
pub struct GestureListeners {
    removers: Vec<Box<dyn FnOnce()>>,
}

impl GestureListeners {
    /// Registers `mousemove`, `mouseup`, `touchmove` (non-passive), `touchend` and `touchcancel`
    /// on the window, each forwarding to `dispatch`.
    pub fn attach(dispatch: Callback<DesktopAction>) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let mut removers: Vec<Box<dyn FnOnce()>> = Vec::with_capacity(5);

            let handle = window_event_listener(ev::mousemove, move |ev| {
                dispatch.call(DesktopAction::PointerMove {
                    pointer: pointer_from_mouse_event(&ev),
                });
            });
            removers.push(Box::new(move || handle.remove()));

            let handle = window_event_listener(ev::mouseup, move |_| {
                dispatch.call(DesktopAction::PointerUp);
            });
            removers.push(Box::new(move || handle.remove()));

            let handle = window_event_listener(ev::touchend, move |_| {
                dispatch.call(DesktopAction::PointerUp);
            });
            removers.push(Box::new(move || handle.remove()));

            let handle = window_event_listener(ev::touchcancel, move |_| {
                dispatch.call(DesktopAction::PointerUp);
            });
            removers.push(Box::new(move || handle.remove()));

            if let Some(remove) = attach_touch_move(dispatch) {
                removers.push(remove);
            }

            Self { removers }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dispatch;
            Self {
                removers: Vec::new(),
            }
        }
    }
}

impl Drop for GestureListeners {
    fn drop(&mut self) {
        for remove in self.removers.drain(..) {
            remove();
        }
    }
}

/// `touchmove` must be registered with `passive: false`, otherwise `preventDefault` cannot stop
/// the page from scrolling under the finger.
#[cfg(target_arch = "wasm32")]
fn attach_touch_move(dispatch: Callback<DesktopAction>) -> Option<Box<dyn FnOnce()>> {
    let window = web_sys::window()?;
    let callback = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        ev.prevent_default();
        if let Some(pointer) = pointer_from_touch_event(&ev) {
            dispatch.call(DesktopAction::PointerMove { pointer });
        }
    });
    let function: js_sys::Function = callback.into_js_value().unchecked_into();

    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(false);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        &function,
        &options,
    ) {
        leptos::logging::warn!("touchmove listener registration failed: {err:?}");
        return None;
    }

    Some(Box::new(move || {
        let _ = window.remove_event_listener_with_callback("touchmove", &function);
    }))
}
