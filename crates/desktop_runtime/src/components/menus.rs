use super::*;
use crate::catalog::{start_menu_items, DISPLAY_PROPERTIES_WINDOW_ID};
use crate::model::WindowId;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                id=START_MENU_DOM_ID
                class="start-menu"
                role="menu"
            >
                <ul class="start-menu-items">
                    {start_menu_items()
                        .iter()
                        .map(|item| {
                            view! {
                                <li
                                    role="menuitem"
                                    data-window-id=item.window_id
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenWindow {
                                            window_id: WindowId::new(item.window_id),
                                        });
                                    }
                                >
                                    <img src=item.image alt="" />
                                    <span>{item.label}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li
                        role="menuitem"
                        class="shutdown"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::ShutDown)
                    >
                        "Shut Down..."
                    </li>
                </ul>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        {move || {
            state.get().context_menu.map(|pointer| {
                view! {
                    <div
                        id=CONTEXT_MENU_DOM_ID
                        class="context-menu"
                        role="menu"
                        style=format!("left:{}px;top:{}px;", pointer.x, pointer.y)
                        on:contextmenu=move |ev| ev.prevent_default()
                    >
                        <div
                            role="menuitem"
                            on:click=move |_| runtime.dispatch_action(DesktopAction::LayoutIcons)
                        >
                            "Refresh"
                        </div>
                        <div
                            role="menuitem"
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::OpenWindow {
                                    window_id: WindowId::new(DISPLAY_PROPERTIES_WINDOW_ID),
                                });
                            }
                        >
                            "Properties"
                        </div>
                    </div>
                }
            })
        }}
    }
}
