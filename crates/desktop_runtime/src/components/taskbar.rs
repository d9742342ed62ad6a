use super::*;
use crate::host::TASKBAR_DOM_ID;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div id=TASKBAR_DOM_ID class="taskbar">
            <button
                id=START_BUTTON_DOM_ID
                class="start-button"
                class:pressed=move || state.get().start_menu_open
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                "Start"
            </button>
            <div id="taskbar-tabs" class="taskbar-tabs">
                <For
                    each=move || state.get().taskbar
                    key=|tab| (tab.window_id.clone(), tab.active)
                    let:tab
                >
                    {{
                        let window_id = tab.window_id.clone();
                        view! {
                            <button
                                class="taskbar-tab"
                                class:active=tab.active
                                data-window-id=tab.window_id.to_string()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::FocusWindow {
                                        window_id: window_id.clone(),
                                        from_taskbar: true,
                                    });
                                }
                            >
                                <img src=tab.icon.clone() alt="" />
                                <span>{tab.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </div>
    }
}
