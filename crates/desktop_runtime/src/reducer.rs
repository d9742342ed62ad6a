//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::config::DesktopConfig;
use crate::drag;
use crate::gesture::PointerSource;
use crate::interaction::{release, InteractionState};
use crate::model::{DesktopMetrics, DesktopState, IconId, PointerPosition, TimerToken, WindowId};
use crate::resize;
use crate::window_manager;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or focus it when it already has a taskbar tab.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window and drop its taskbar tab.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
        /// Whether the request came from the window's taskbar tab.
        from_taskbar: bool,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window into the work area, or restore it.
    ToggleMaximize {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// The Escape key was pressed anywhere on the page.
    EscapePressed,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Open the desktop context menu at the pointer.
    OpenContextMenu {
        /// Viewport position of the right-click.
        pointer: PointerPosition,
    },
    /// Close the desktop context menu if open.
    CloseContextMenu,
    /// A pointer-down landed outside every menu.
    DismissMenus,
    /// Power the desktop off.
    ShutDown,
    /// Re-run the column-major icon layout.
    LayoutIcons,
    /// The host measured new browser geometry (boot or viewport resize); icons are re-laid out.
    ViewportChanged {
        /// Freshly measured geometry.
        metrics: DesktopMetrics,
    },
    /// Pointer-down on a desktop icon.
    BeginIconDrag {
        /// Pressed icon.
        icon_id: IconId,
        /// Pointer position at press.
        pointer: PointerPosition,
        /// Input device of the press.
        source: PointerSource,
    },
    /// Pointer-down on a window title bar.
    BeginWindowDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at press.
        pointer: PointerPosition,
        /// Input device of the press.
        source: PointerSource,
    },
    /// Pointer-down on a window resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at press.
        pointer: PointerPosition,
        /// Input device of the press.
        source: PointerSource,
    },
    /// Document-level pointer move during an active gesture.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Document-level pointer release (mouse up, touch end or touch cancel).
    PointerUp,
    /// A timer scheduled through [`RuntimeEffect::ScheduleTimer`] fired.
    TimerElapsed {
        /// Token the timer was scheduled with.
        token: TimerToken,
    },
}

impl DesktopAction {
    fn pointer_source(&self) -> Option<PointerSource> {
        match self {
            Self::BeginIconDrag { source, .. }
            | Self::BeginWindowDrag { source, .. }
            | Self::BeginResize { source, .. } => Some(*source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Install document-level move/up listeners for the gesture that just started.
    AttachGestureListeners,
    /// Remove the listeners installed by the matching [`RuntimeEffect::AttachGestureListeners`].
    DetachGestureListeners,
    /// Dispatch [`DesktopAction::TimerElapsed`] with `token` after `delay_ms`.
    ScheduleTimer {
        /// Token identifying the timer.
        token: TimerToken,
        /// Delay before the timer fires.
        delay_ms: u32,
    },
    /// Clear a timer that has not fired yet.
    CancelTimer {
        /// Token the timer was scheduled with.
        token: TimerToken,
    },
    /// Match a canvas backing buffer to its displayed size.
    SyncCanvasBuffer {
        /// DOM id of the canvas element.
        canvas_id: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),
    /// The target icon id was not found in the current state.
    #[error("icon not found: {0}")]
    IconNotFound(IconId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the only writer of [`DesktopState`] and [`InteractionState`]. Callers that
/// need all-or-nothing semantics reduce into a copy and keep it only on `Ok`.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a window or icon that is not present.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    if state.powered_off {
        return Ok(effects);
    }
    if action
        .pointer_source()
        .is_some_and(|source| !source.is_primary())
    {
        return Ok(effects);
    }

    match action {
        DesktopAction::OpenWindow { window_id } => {
            window_manager::open_window(state, &window_id)?;
            state.start_menu_open = false;
            state.context_menu = None;
        }
        DesktopAction::CloseWindow { window_id } => {
            window_manager::close_window(state, &window_id)?;
            if interaction.targets_window(&window_id) {
                release(interaction, &mut effects);
            }
        }
        DesktopAction::FocusWindow {
            window_id,
            from_taskbar,
        } => {
            window_manager::focus_window(state, &window_id, from_taskbar)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            window_manager::minimize_window(state, &window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            window_manager::toggle_maximize(state, &window_id)?;
        }
        DesktopAction::EscapePressed => {
            if state.start_menu_open || state.context_menu.is_some() {
                state.start_menu_open = false;
                state.context_menu = None;
            } else if let Some(window_id) = state.active_window.clone() {
                window_manager::close_window(state, &window_id)?;
                if interaction.targets_window(&window_id) {
                    release(interaction, &mut effects);
                }
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            state.context_menu = None;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::OpenContextMenu { pointer } => {
            state.context_menu = Some(pointer);
            state.start_menu_open = false;
        }
        DesktopAction::CloseContextMenu => {
            state.context_menu = None;
        }
        DesktopAction::DismissMenus => {
            state.start_menu_open = false;
            state.context_menu = None;
        }
        DesktopAction::ShutDown => {
            release(interaction, &mut effects);
            if let Some(pending) = state.clicks.pending() {
                effects.push(RuntimeEffect::CancelTimer {
                    token: pending.token,
                });
            }
            state.clicks = Default::default();
            state.start_menu_open = false;
            state.context_menu = None;
            state.powered_off = true;
        }
        DesktopAction::LayoutIcons => {
            window_manager::layout_icons(state, config);
            state.context_menu = None;
        }
        DesktopAction::ViewportChanged { metrics } => {
            state.metrics = metrics;
            window_manager::layout_icons(state, config);
        }
        DesktopAction::BeginIconDrag {
            icon_id, pointer, ..
        } => {
            drag::start_icon_drag(state, interaction, icon_id, pointer, &mut effects)?;
        }
        DesktopAction::BeginWindowDrag {
            window_id,
            pointer,
            ..
        } => {
            drag::start_window_drag(state, interaction, window_id, pointer, &mut effects)?;
        }
        DesktopAction::BeginResize {
            window_id,
            pointer,
            ..
        } => {
            resize::start_resize(state, interaction, window_id, pointer, config, &mut effects)?;
        }
        DesktopAction::PointerMove { pointer } => match interaction {
            InteractionState::Idle => {}
            InteractionState::Dragging(session) => {
                drag::update_drag(state, session, pointer, config);
            }
            InteractionState::Resizing(session) => {
                resize::update_size(state, session, pointer, &mut effects);
            }
        },
        DesktopAction::PointerUp => {
            if let InteractionState::Dragging(session) = release(interaction, &mut effects) {
                drag::finish_drag(state, session, config, &mut effects)?;
            }
        }
        DesktopAction::TimerElapsed { token } => {
            if !window_manager::expire_timer(state, token) {
                leptos::logging::debug_warn!("ignoring stale timer {token:?}");
            }
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{IconRecord, Size, WindowRecord, WindowRect, WindowVisibility};

    const MOUSE: PointerSource = PointerSource::Mouse { button: 0 };

    struct Harness {
        state: DesktopState,
        interaction: InteractionState,
        config: DesktopConfig,
    }

    impl Harness {
        fn new() -> Self {
            let config = DesktopConfig::default();
            let rect = WindowRect {
                x: 100,
                y: 100,
                w: 400,
                h: 300,
            };
            let mut state = DesktopState::new(
                vec![
                    WindowRecord::new("notes", "Notes", "notes.png", rect),
                    WindowRecord::new("paint", "Paint", "paint.png", rect),
                ],
                vec![IconRecord::new("notesIcon", "Notes", "notes.png", Some("notes"))],
                &config,
            );
            state.metrics = DesktopMetrics::for_viewport(Size { w: 1000, h: 700 }, 30);
            Self {
                state,
                interaction: InteractionState::default(),
                config,
            }
        }

        fn run(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
            reduce_desktop(&mut self.state, &mut self.interaction, &self.config, action)
                .expect("reduce")
        }

        fn open(&mut self, raw: &str) {
            self.run(DesktopAction::OpenWindow {
                window_id: WindowId::new(raw),
            });
        }
    }

    #[test]
    fn open_window_closes_menus() {
        let mut h = Harness::new();
        h.run(DesktopAction::ToggleStartMenu);
        assert!(h.state.start_menu_open);

        h.open("notes");

        assert!(!h.state.start_menu_open);
        assert_eq!(h.state.active_window, Some(WindowId::new("notes")));
    }

    #[test]
    fn closing_dragged_window_detaches_listeners() {
        let mut h = Harness::new();
        h.open("notes");
        let attach = h.run(DesktopAction::BeginWindowDrag {
            window_id: WindowId::new("notes"),
            pointer: PointerPosition { x: 150, y: 110 },
            source: MOUSE,
        });
        assert_eq!(attach, vec![RuntimeEffect::AttachGestureListeners]);

        let detach = h.run(DesktopAction::CloseWindow {
            window_id: WindowId::new("notes"),
        });

        assert_eq!(detach, vec![RuntimeEffect::DetachGestureListeners]);
        assert!(h.interaction.is_idle());
        assert!(h.run(DesktopAction::PointerUp).is_empty());
    }

    #[test]
    fn closing_other_window_keeps_session() {
        let mut h = Harness::new();
        h.open("notes");
        h.open("paint");
        h.run(DesktopAction::BeginResize {
            window_id: WindowId::new("notes"),
            pointer: PointerPosition { x: 500, y: 400 },
            source: MOUSE,
        });

        let effects = h.run(DesktopAction::CloseWindow {
            window_id: WindowId::new("paint"),
        });

        assert!(effects.is_empty());
        assert!(h.interaction.targets_window(&WindowId::new("notes")));
    }

    #[test]
    fn non_primary_button_is_ignored() {
        let mut h = Harness::new();
        let effects = h.run(DesktopAction::BeginIconDrag {
            icon_id: IconId::new("notesIcon"),
            pointer: PointerPosition { x: 30, y: 30 },
            source: PointerSource::Mouse { button: 2 },
        });

        assert!(effects.is_empty());
        assert!(h.interaction.is_idle());
    }

    #[test]
    fn escape_closes_menus_before_windows() {
        let mut h = Harness::new();
        h.open("notes");
        h.run(DesktopAction::OpenContextMenu {
            pointer: PointerPosition { x: 10, y: 10 },
        });

        h.run(DesktopAction::EscapePressed);
        assert_eq!(h.state.context_menu, None);
        assert!(h.state.window(&WindowId::new("notes")).unwrap().is_visible());

        h.run(DesktopAction::EscapePressed);
        assert_eq!(
            h.state.window(&WindowId::new("notes")).unwrap().visibility,
            WindowVisibility::Closed
        );
        assert!(h.state.taskbar.is_empty());
    }

    #[test]
    fn shutdown_releases_session_and_freezes_state() {
        let mut h = Harness::new();
        h.run(DesktopAction::BeginIconDrag {
            icon_id: IconId::new("notesIcon"),
            pointer: PointerPosition { x: 30, y: 30 },
            source: MOUSE,
        });

        let effects = h.run(DesktopAction::ShutDown);
        assert_eq!(effects, vec![RuntimeEffect::DetachGestureListeners]);
        assert!(h.state.powered_off);

        let before = h.state.clone();
        assert!(h.run(DesktopAction::ToggleStartMenu).is_empty());
        h.open("notes");
        assert_eq!(h.state, before);
    }

    #[test]
    fn viewport_change_relays_icons() {
        let mut h = Harness::new();
        h.state.icons[0].position = crate::model::Point { x: 500, y: 500 };

        h.run(DesktopAction::ViewportChanged {
            metrics: DesktopMetrics::for_viewport(Size { w: 800, h: 600 }, 40),
        });

        assert_eq!(h.state.metrics.taskbar_height, 40);
        assert_eq!(h.state.icons[0].position, crate::model::Point { x: 20, y: 20 });
    }

    #[test]
    fn missing_targets_are_errors() {
        let mut h = Harness::new();
        let err = reduce_desktop(
            &mut h.state,
            &mut h.interaction,
            &h.config,
            DesktopAction::BeginIconDrag {
                icon_id: IconId::new("ghost"),
                pointer: PointerPosition::default(),
                source: MOUSE,
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::IconNotFound(IconId::new("ghost")));
        assert!(h.interaction.is_idle());
    }
}
