#[cfg(target_arch = "wasm32")]
use leptos::{ev, on_cleanup, request_animation_frame, window_event_listener, Callable};
use leptos::Callback;

use crate::{config::DesktopConfig, reducer::DesktopAction};
#[cfg(target_arch = "wasm32")]
use crate::host::viewport::measure_metrics;

/// Measures geometry once the shell has rendered, and again on every viewport resize; each
/// measurement re-runs the icon layout.
pub(super) fn install_boot_measurement(config: DesktopConfig, dispatch: Callback<DesktopAction>) {
    #[cfg(target_arch = "wasm32")]
    {
        let boot_config = config.clone();
        request_animation_frame(move || {
            dispatch.call(DesktopAction::ViewportChanged {
                metrics: measure_metrics(&boot_config),
            });
        });

        let resize_listener = window_event_listener(ev::resize, move |_| {
            dispatch.call(DesktopAction::ViewportChanged {
                metrics: measure_metrics(&config),
            });
        });
        on_cleanup(move || resize_listener.remove());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (config, dispatch);
}
