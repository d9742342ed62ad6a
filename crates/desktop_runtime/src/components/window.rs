use super::*;
use crate::catalog::{DISPLAY_PROPERTIES_WINDOW_ID, VISUALIZER_CANVAS_ID};
use crate::model::{WindowId, WindowRecord};

fn window_style(win: &WindowRecord) -> String {
    let display = if win.is_visible() { "" } else { "display:none;" };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{}",
        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index, display
    )
}

/// One window element for the lifetime of the shell.
///
/// Geometry, stacking and visibility are reactive bindings on a stable node, so an in-flight touch
/// keeps its target and the visualizer canvas keeps its backing buffer across state changes.
#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let Some(record) = runtime
        .state
        .with_untracked(|state| state.window(&window_id).cloned())
    else {
        return ().into_view();
    };

    let watch_id = window_id.clone();
    let read = move |f: fn(&WindowRecord) -> String| {
        runtime
            .state
            .with(|state| state.window(&watch_id).map(f).unwrap_or_default())
    };
    let maximized_id = window_id.clone();
    let is_maximized = move || {
        runtime.state.with(|state| {
            state
                .window(&maximized_id)
                .is_some_and(WindowRecord::is_maximized)
        })
    };
    let maximized_label = is_maximized.clone();
    let maximized_handle = is_maximized.clone();
    let active_id = window_id.clone();
    let is_active =
        move || runtime.state.with(|state| state.active_window.as_ref() == Some(&active_id));

    let focus_id = window_id.clone();
    let focus = move || {
        runtime.dispatch_action(DesktopAction::FocusWindow {
            window_id: focus_id.clone(),
            from_taskbar: false,
        })
    };
    let focus_touch = focus.clone();

    let drag_id = window_id.clone();
    let begin_drag = move |pointer: PointerPosition, source: PointerSource| {
        runtime.dispatch_action(DesktopAction::BeginWindowDrag {
            window_id: drag_id.clone(),
            pointer,
            source,
        });
    };
    let begin_drag_touch = begin_drag.clone();

    let resize_id = window_id.clone();
    let begin_resize = move |pointer: PointerPosition, source: PointerSource| {
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: resize_id.clone(),
            pointer,
            source,
        });
    };
    let begin_resize_touch = begin_resize.clone();

    let control = move |action: fn(WindowId) -> DesktopAction| {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(action(window_id.clone()));
        }
    };

    let dom_id = record.id.to_string();
    let title = record.title.clone();
    let icon = record.icon.clone();

    view! {
        <div
            id=dom_id
            class="window"
            class:active=is_active
            class:maximized=is_maximized
            style=move || read(window_style)
            on:mousedown=move |_| focus()
            on:touchstart:undelegated=move |_| focus_touch()
        >
            <div
                class="title-bar"
                on:mousedown=move |ev: web_sys::MouseEvent| {
                    begin_drag(pointer_from_mouse_event(&ev), mouse_source(&ev));
                }
                on:touchstart:undelegated=move |ev: web_sys::TouchEvent| {
                    if let Some((pointer, source)) = touch_start(&ev) {
                        ev.prevent_default();
                        begin_drag_touch(pointer, source);
                    }
                }
            >
                <img class="title-bar-icon" src=icon alt="" />
                <span>{title}</span>
                <div class="title-bar-controls">
                    <button
                        aria-label="Minimize"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=control(|window_id| DesktopAction::MinimizeWindow { window_id })
                    >
                        "_"
                    </button>
                    <button
                        aria-label=move || if maximized_label() { "Restore" } else { "Maximize" }
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=control(|window_id| DesktopAction::ToggleMaximize { window_id })
                    >
                        "\u{25a1}"
                    </button>
                    <button
                        aria-label="Close"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=control(|window_id| DesktopAction::CloseWindow { window_id })
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </div>
            <div class="window-body">
                <WindowBody window=record />
            </div>
            <div
                class="resize-handle"
                style:display=move || if maximized_handle() { "none" } else { "" }
                on:mousedown=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    begin_resize(pointer_from_mouse_event(&ev), mouse_source(&ev));
                }
                on:touchstart:undelegated=move |ev: web_sys::TouchEvent| {
                    if let Some((pointer, source)) = touch_start(&ev) {
                        ev.prevent_default();
                        ev.stop_propagation();
                        begin_resize_touch(pointer, source);
                    }
                }
            />
        </div>
    }
    .into_view()
}

/// Placeholder bodies; the apps behind these windows live outside the window manager.
#[component]
fn WindowBody(window: WindowRecord) -> impl IntoView {
    if window.canvas_id.as_deref() == Some(VISUALIZER_CANVAS_ID) {
        return view! {
            <canvas id=VISUALIZER_CANVAS_ID class="visualizer"></canvas>
        }
        .into_view();
    }
    if window.id.as_str() == DISPLAY_PROPERTIES_WINDOW_ID {
        return view! {
            <p>"Display: 1024 x 768, 256 colors"</p>
        }
        .into_view();
    }
    view! {
        <p class="window-placeholder">{window.title}</p>
    }
    .into_view()
}
