//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue, and boots the
//! host. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    catalog, effect_executor,
    config::DesktopConfig,
    host::DesktopHostContext,
    interaction::InteractionState,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Browser resources held for the reducer (gesture listeners, timers).
    pub host: StoredValue<DesktopHostContext>,
    /// Tunables shared by the reducer and the host.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn initial_state(config: &DesktopConfig) -> DesktopState {
    let mut state = DesktopState::new(catalog::default_windows(), catalog::default_icons(), config);
    window_manager::layout_icons(&mut state, config);
    state
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts geometry measurement.
pub fn DesktopProvider(
    /// Desktop tunables, usually parsed by the entry layer.
    #[prop(optional)]
    config: DesktopConfig,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::default());
    let state = create_rw_signal(initial_state(&config));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let config = store_value(config);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let result =
            config.with_value(|config| reduce_desktop(&mut desktop, &mut ui, config, action));
        match result {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    host.get_value()
        .install_boot_measurement(config.get_value(), dispatch);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
