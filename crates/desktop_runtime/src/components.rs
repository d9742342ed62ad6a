//! Desktop shell UI composition and interaction surfaces.

mod icons;
mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{
    icons::DesktopIcon,
    menus::{DesktopContextMenu, StartMenu},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    gesture::PointerSource,
    host::{pointer_from_mouse_event, pointer_from_touch_event},
    model::PointerPosition,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn mouse_source(ev: &web_sys::MouseEvent) -> PointerSource {
    PointerSource::Mouse {
        button: ev.button(),
    }
}

/// Pointer and source for a gesture-starting touch, if the event carries a touch point.
fn touch_start(ev: &web_sys::TouchEvent) -> Option<(PointerPosition, PointerSource)> {
    pointer_from_touch_event(ev).map(|pointer| (pointer, PointerSource::Touch))
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

const START_BUTTON_DOM_ID: &str = "start";
const START_MENU_DOM_ID: &str = "startMenu";
const CONTEXT_MENU_DOM_ID: &str = "contextMenu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Menu surface a mouse-down landed on.
enum PressRegion {
    StartButton,
    StartMenu,
    ContextMenu,
    Elsewhere,
}

#[cfg(target_arch = "wasm32")]
fn press_region(ev: &web_sys::MouseEvent) -> PressRegion {
    use wasm_bindgen::JsCast;

    let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return PressRegion::Elsewhere;
    };
    let within = |id: &str| {
        element
            .closest(&format!("#{id}"))
            .ok()
            .flatten()
            .is_some()
    };
    if within(START_MENU_DOM_ID) {
        PressRegion::StartMenu
    } else if within(START_BUTTON_DOM_ID) {
        PressRegion::StartButton
    } else if within(CONTEXT_MENU_DOM_ID) {
        PressRegion::ContextMenu
    } else {
        PressRegion::Elsewhere
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn press_region(_: &web_sys::MouseEvent) -> PressRegion {
    PressRegion::Elsewhere
}

/// Menus closed by a mouse-down in `region`.
///
/// The start menu closes on any button outside itself and the Start button. The context menu
/// closes only on a primary press outside itself.
fn outside_press_action(
    region: PressRegion,
    button: i16,
    start_menu_open: bool,
    context_menu_open: bool,
) -> Option<DesktopAction> {
    let close_start = start_menu_open
        && !matches!(region, PressRegion::StartMenu | PressRegion::StartButton);
    let close_context = context_menu_open && button == 0 && region != PressRegion::ContextMenu;
    match (close_start, close_context) {
        (true, true) => Some(DesktopAction::DismissMenus),
        (true, false) => Some(DesktopAction::CloseStartMenu),
        (false, true) => Some(DesktopAction::CloseContextMenu),
        (false, false) => None,
    }
}

#[component]
/// Renders the full desktop shell: icon layer, windows, menus and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let container_id = runtime.config.with_value(|config| config.container_id.clone());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::EscapePressed);
    });
    on_cleanup(move || escape_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        let (start_menu_open, context_menu_open) = state
            .with_untracked(|desktop| (desktop.start_menu_open, desktop.context_menu.is_some()));
        if !start_menu_open && !context_menu_open {
            return;
        }
        if let Some(action) = outside_press_action(
            press_region(&ev),
            ev.button(),
            start_menu_open,
            context_menu_open,
        ) {
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let open_context_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::OpenContextMenu {
            pointer: pointer_from_mouse_event(&ev),
        });
    };

    view! {
        <Show when=move || !state.get().powered_off fallback=ShutdownScreen>
            <div class="desktop-shell">
                <div
                    id=container_id.clone()
                    class="desktop"
                    on:contextmenu=open_context_menu
                >
                    <For
                        each=move || state.get().icons
                        key=|icon| icon.id.clone()
                        let:icon
                    >
                        <DesktopIcon icon_id=icon.id />
                    </For>
                </div>

                <For
                    each=move || state.get().windows
                    key=|win| win.id.clone()
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>

                <DesktopContextMenu />
                <StartMenu />
                <Taskbar />
            </div>
        </Show>
    }
}

#[component]
fn ShutdownScreen() -> impl IntoView {
    view! {
        <div class="shutdown-screen" role="status">
            <p>"It is now safe to turn off your computer."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PRIMARY: i16 = 0;
    const SECONDARY: i16 = 2;

    #[test]
    fn presses_inside_the_start_menu_keep_it_open_for_item_activation() {
        assert_eq!(
            outside_press_action(PressRegion::StartMenu, PRIMARY, true, false),
            None
        );
    }

    #[test]
    fn start_button_press_leaves_the_toggle_to_its_click() {
        assert_eq!(
            outside_press_action(PressRegion::StartButton, PRIMARY, true, false),
            None
        );
    }

    #[test]
    fn any_button_elsewhere_closes_the_start_menu() {
        for button in [PRIMARY, SECONDARY] {
            assert_eq!(
                outside_press_action(PressRegion::Elsewhere, button, true, false),
                Some(DesktopAction::CloseStartMenu)
            );
        }
    }

    #[test]
    fn presses_inside_the_context_menu_keep_it_open_for_item_activation() {
        assert_eq!(
            outside_press_action(PressRegion::ContextMenu, PRIMARY, false, true),
            None
        );
    }

    #[test]
    fn only_a_primary_press_closes_the_context_menu() {
        assert_eq!(
            outside_press_action(PressRegion::Elsewhere, SECONDARY, false, true),
            None
        );
        assert_eq!(
            outside_press_action(PressRegion::Elsewhere, PRIMARY, false, true),
            Some(DesktopAction::CloseContextMenu)
        );
        assert_eq!(
            outside_press_action(PressRegion::StartButton, PRIMARY, false, true),
            Some(DesktopAction::CloseContextMenu)
        );
    }

    #[test]
    fn primary_press_elsewhere_closes_both_menus() {
        assert_eq!(
            outside_press_action(PressRegion::Elsewhere, PRIMARY, true, true),
            Some(DesktopAction::DismissMenus)
        );
    }

    #[test]
    fn nothing_to_close_yields_no_action() {
        assert_eq!(
            outside_press_action(PressRegion::Elsewhere, PRIMARY, false, false),
            None
        );
    }
}
