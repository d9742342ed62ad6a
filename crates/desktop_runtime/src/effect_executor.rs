//! Drains reducer-emitted runtime effects into the host, in emission order.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }

        // Dispatches made while this batch drains enqueue into a fresh queue.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
