use super::*;
use crate::model::{IconId, IconRecord};

/// Inline style placing an icon, with the eased snap transition while one is pending.
fn icon_style(icon: &IconRecord, snap_ms: u32) -> String {
    let transition = if icon.snap_transition.is_some() {
        format!("transition:left {snap_ms}ms ease-out, top {snap_ms}ms ease-out;")
    } else {
        String::new()
    };
    format!(
        "left:{}px;top:{}px;{}",
        icon.position.x, icon.position.y, transition
    )
}

/// One icon element for the lifetime of the shell.
///
/// Only the style and class bindings follow state. The node a touch started on must stay in the
/// document, or the rest of the touch sequence never reaches the gesture listeners.
#[component]
pub(super) fn DesktopIcon(icon_id: IconId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let snap_ms = runtime.config.with_value(|config| config.snap_transition_ms);

    let Some(icon) = runtime
        .state
        .with_untracked(|state| state.icon(&icon_id).cloned())
    else {
        return ().into_view();
    };

    let style_id = icon_id.clone();
    let style = move || {
        runtime.state.with(|state| {
            state
                .icon(&style_id)
                .map(|icon| icon_style(icon, snap_ms))
                .unwrap_or_default()
        })
    };
    let dragging_id = icon_id.clone();
    let is_dragging =
        move || runtime.interaction.with(|ui| ui.dragging_icon() == Some(&dragging_id));

    let mouse_id = icon_id.clone();
    let begin_mouse = move |ev: web_sys::MouseEvent| {
        // Suppresses native image dragging and text selection.
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginIconDrag {
            icon_id: mouse_id.clone(),
            pointer: pointer_from_mouse_event(&ev),
            source: mouse_source(&ev),
        });
    };
    let icon_dom_id = icon_id.to_string();
    let touch_id = icon_id;
    let begin_touch = move |ev: web_sys::TouchEvent| {
        let Some((pointer, source)) = touch_start(&ev) else {
            return;
        };
        // Keeps the browser from synthesizing a second, mouse-driven gesture.
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginIconDrag {
            icon_id: touch_id.clone(),
            pointer,
            source,
        });
    };

    let bound_window = icon.window_id.as_ref().map(|id| id.to_string());

    view! {
        <div
            class="desktop-icon"
            class:dragging=is_dragging
            data-icon-id=icon_dom_id
            data-window-id=bound_window
            style=style
            on:mousedown=begin_mouse
            on:touchstart:undelegated=begin_touch
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::CloseContextMenu);
            }
        >
            <img src=icon.image alt="" draggable="false" />
            <span>{icon.label}</span>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, TimerToken};
    use pretty_assertions::assert_eq;

    #[test]
    fn resting_icon_style_has_no_transition() {
        let mut icon = IconRecord::new("computer", "My Computer", "computer.png", None);
        icon.position = Point { x: 20, y: 120 };

        assert_eq!(icon_style(&icon, 100), "left:20px;top:120px;");
    }

    #[test]
    fn snapping_icon_eases_both_axes() {
        let mut icon = IconRecord::new("computer", "My Computer", "computer.png", None);
        icon.position = Point { x: 20, y: 20 };
        icon.snap_transition = Some(TimerToken(4));

        assert_eq!(
            icon_style(&icon, 100),
            "left:20px;top:20px;transition:left 100ms ease-out, top 100ms ease-out;"
        );
    }
}
