//! Fire-once timers scheduled by reducer effects, keyed by [`TimerToken`].

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::Callback;
#[cfg(target_arch = "wasm32")]
use leptos::{logging, set_timeout_with_handle, Callable};

use crate::{model::TimerToken, reducer::DesktopAction};

#[derive(Clone, Default)]
pub(super) struct TimerRegistry {
    handles: Rc<RefCell<HashMap<TimerToken, TimeoutHandle>>>,
}

impl TimerRegistry {
    /// Dispatches [`DesktopAction::TimerElapsed`] for `token` after `delay_ms`.
    pub(super) fn schedule(&self, token: TimerToken, delay_ms: u32, dispatch: Callback<DesktopAction>) {
        #[cfg(target_arch = "wasm32")]
        {
            let handles = self.handles.clone();
            let fire = move || {
                handles.borrow_mut().remove(&token);
                dispatch.call(DesktopAction::TimerElapsed { token });
            };
            match set_timeout_with_handle(
                fire,
                std::time::Duration::from_millis(u64::from(delay_ms)),
            ) {
                Ok(handle) => {
                    if let Some(previous) = self.handles.borrow_mut().insert(token, handle) {
                        previous.clear();
                    }
                }
                Err(err) => logging::warn!("scheduling timer {token:?} failed: {err:?}"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (token, delay_ms, dispatch);
    }

    /// Clears a pending timer. Unknown or already-fired tokens are ignored.
    pub(super) fn cancel(&self, token: TimerToken) {
        let handle = self.handles.borrow_mut().remove(&token);
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}
