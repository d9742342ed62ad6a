//! Host-side runtime helpers for executing reducer effects and querying browser geometry.
//!
//! The reducer never touches the DOM. Everything it needs from the browser arrives as a
//! [`DesktopAction`], and everything it wants done comes back as a [`RuntimeEffect`] that
//! [`DesktopHostContext::run_runtime_effect`] carries out here.

mod boot;
mod effects;
mod gesture_listeners;
mod timers;
mod viewport;

use std::{cell::RefCell, rc::Rc};

use leptos::Callback;

pub use self::gesture_listeners::GestureListeners;
pub(crate) use self::gesture_listeners::{pointer_from_mouse_event, pointer_from_touch_event};
pub(crate) use self::viewport::TASKBAR_DOM_ID;

use crate::{
    config::DesktopConfig,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone, Default)]
/// Browser resources owned on behalf of the reducer: the active gesture's listeners and pending
/// timers.
pub struct DesktopHostContext {
    gesture_listeners: Rc<RefCell<Option<GestureListeners>>>,
    timers: timers::TimerRegistry,
}

impl DesktopHostContext {
    /// Installs boot-time geometry measurement and the viewport resize listener.
    pub fn install_boot_measurement(&self, config: DesktopConfig, dispatch: Callback<DesktopAction>) {
        boot::install_boot_measurement(config, dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }
}
