//! Window lifecycle transitions used by the desktop reducer: taskbar tab binding, z-order,
//! minimize/maximize state, and icon double-click handling.

use crate::click::ClickResolution;
use crate::config::DesktopConfig;
use crate::icon_grid::layout_positions;
use crate::model::{
    DesktopState, IconId, TaskbarTab, TimerToken, WindowId, WindowRecord, WindowVisibility,
};
use crate::reducer::{ReducerError, RuntimeEffect};

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

fn clear_active_if(state: &mut DesktopState, window_id: &WindowId) {
    if state.active_window.as_ref() == Some(window_id) {
        state.active_window = None;
    }
}

/// Opens a window, or focuses it when it already has a taskbar tab.
pub fn open_window(state: &mut DesktopState, window_id: &WindowId) -> Result<(), ReducerError> {
    if state.tab(window_id).is_some() {
        return focus_window(state, window_id, false);
    }

    let window = find_window_mut(state, window_id)?;
    window.visibility = WindowVisibility::Open;
    let tab = TaskbarTab {
        window_id: window_id.clone(),
        title: window.title.clone(),
        icon: window.icon.clone(),
        active: false,
    };
    state.taskbar.push(tab);
    focus_window(state, window_id, false)
}

/// Raises `window_id` above every other window and marks its tab active.
///
/// A click on the tab of the window that is already active and visible minimizes it instead.
pub fn focus_window(
    state: &mut DesktopState,
    window_id: &WindowId,
    from_taskbar: bool,
) -> Result<(), ReducerError> {
    let is_active = state.active_window.as_ref() == Some(window_id);
    let visibility = find_window_mut(state, window_id)?.visibility;

    if from_taskbar && is_active && visibility == WindowVisibility::Open {
        return minimize_window(state, window_id);
    }
    if visibility == WindowVisibility::Closed {
        return Ok(());
    }

    state.z_counter = state.z_counter.saturating_add(1);
    let z_index = state.z_counter;
    let window = find_window_mut(state, window_id)?;
    window.visibility = WindowVisibility::Open;
    window.z_index = z_index;

    for tab in &mut state.taskbar {
        tab.active = &tab.window_id == window_id;
    }
    state.active_window = Some(window_id.clone());
    Ok(())
}

/// Hides the window and drops its taskbar tab. Reopening creates a fresh tab.
pub fn close_window(state: &mut DesktopState, window_id: &WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.visibility = WindowVisibility::Closed;
    state.taskbar.retain(|tab| &tab.window_id != window_id);
    clear_active_if(state, window_id);
    Ok(())
}

pub fn minimize_window(state: &mut DesktopState, window_id: &WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.visibility == WindowVisibility::Closed {
        return Ok(());
    }
    window.visibility = WindowVisibility::Minimized;
    if let Some(tab) = state.taskbar.iter_mut().find(|t| &t.window_id == window_id) {
        tab.active = false;
    }
    clear_active_if(state, window_id);
    Ok(())
}

/// Maximizes into the work area, or restores the geometry saved by the last maximize.
pub fn toggle_maximize(state: &mut DesktopState, window_id: &WindowId) -> Result<(), ReducerError> {
    let work_area = state.metrics.work_area();
    let window = find_window_mut(state, window_id)?;
    match window.saved_rect.take() {
        Some(saved) => window.rect = saved,
        None => {
            window.saved_rect = Some(window.rect);
            window.rect = work_area;
        }
    }
    Ok(())
}

/// Feeds an icon click into the double-click tracker; the second click on the same icon inside
/// the double-click window opens the icon's window.
pub fn click_icon(
    state: &mut DesktopState,
    icon_id: &IconId,
    config: &DesktopConfig,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let target = state
        .icon(icon_id)
        .ok_or_else(|| ReducerError::IconNotFound(icon_id.clone()))?
        .window_id
        .clone();
    let Some(window_id) = target else {
        return Ok(());
    };

    let mut next_token = state.next_timer_token;
    let resolution = state.clicks.click(icon_id, || {
        let token = TimerToken(next_token);
        next_token = next_token.saturating_add(1);
        token
    });
    state.next_timer_token = next_token;

    match resolution {
        ClickResolution::Pending { token, replaced } => {
            if let Some(replaced) = replaced {
                effects.push(RuntimeEffect::CancelTimer { token: replaced });
            }
            effects.push(RuntimeEffect::ScheduleTimer {
                token,
                delay_ms: config.double_click_ms,
            });
            Ok(())
        }
        ClickResolution::DoubleClick { cancelled } => {
            effects.push(RuntimeEffect::CancelTimer { token: cancelled });
            open_window(state, &window_id)
        }
    }
}

/// Resolves an elapsed timer. Returns `false` for tokens that were cancelled or superseded.
pub fn expire_timer(state: &mut DesktopState, token: TimerToken) -> bool {
    if state.clicks.expire(token) {
        return true;
    }
    match state
        .icons
        .iter_mut()
        .find(|icon| icon.snap_transition == Some(token))
    {
        Some(icon) => {
            icon.snap_transition = None;
            true
        }
        None => false,
    }
}

/// Re-runs the column-major icon layout for the current metrics.
pub fn layout_icons(state: &mut DesktopState, config: &DesktopConfig) {
    let positions = layout_positions(state.icons.len(), state.metrics, config.icon_grid);
    for (icon, position) in state.icons.iter_mut().zip(positions) {
        icon.position = position;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    fn desktop() -> DesktopState {
        let rect = WindowRect {
            x: 100,
            y: 80,
            w: 400,
            h: 300,
        };
        DesktopState::new(
            vec![
                WindowRecord::new("a", "Alpha", "a.png", rect),
                WindowRecord::new("b", "Beta", "b.png", rect),
            ],
            Vec::new(),
            &DesktopConfig::default(),
        )
    }

    fn id(raw: &str) -> WindowId {
        WindowId::new(raw)
    }

    fn z(state: &DesktopState, raw: &str) -> u32 {
        state.window(&id(raw)).map(|w| w.z_index).unwrap_or_default()
    }

    #[test]
    fn open_creates_one_tab_and_focuses() {
        let mut state = desktop();
        open_window(&mut state, &id("a")).unwrap();
        open_window(&mut state, &id("a")).unwrap();

        assert_eq!(state.taskbar.len(), 1);
        assert_eq!(state.taskbar[0].title, "Alpha");
        assert!(state.taskbar[0].active);
        assert_eq!(state.active_window, Some(id("a")));
        assert!(state.window(&id("a")).unwrap().is_visible());
    }

    #[test]
    fn focus_strictly_increases_z_order() {
        let mut state = desktop();
        open_window(&mut state, &id("a")).unwrap();
        open_window(&mut state, &id("b")).unwrap();

        focus_window(&mut state, &id("a"), false).unwrap();
        let a_before = z(&state, "a");
        focus_window(&mut state, &id("b"), false).unwrap();
        let b = z(&state, "b");
        focus_window(&mut state, &id("a"), false).unwrap();
        let a_after = z(&state, "a");

        assert!(a_after > b && b > a_before);
    }

    #[test]
    fn taskbar_click_on_active_window_minimizes() {
        let mut state = desktop();
        open_window(&mut state, &id("a")).unwrap();

        focus_window(&mut state, &id("a"), true).unwrap();

        let win = state.window(&id("a")).unwrap();
        assert_eq!(win.visibility, WindowVisibility::Minimized);
        assert_eq!(state.active_window, None);
        assert!(!state.taskbar[0].active);

        focus_window(&mut state, &id("a"), true).unwrap();
        assert!(state.window(&id("a")).unwrap().is_visible());
        assert_eq!(state.active_window, Some(id("a")));
    }

    #[test]
    fn taskbar_click_on_other_window_keeps_both_tabs() {
        let mut state = desktop();
        open_window(&mut state, &id("a")).unwrap();
        open_window(&mut state, &id("b")).unwrap();

        focus_window(&mut state, &id("a"), true).unwrap();

        assert_eq!(state.active_window, Some(id("a")));
        assert_eq!(state.taskbar.len(), 2);
        assert!(state.window(&id("b")).unwrap().is_visible());
        let active: Vec<_> = state.taskbar.iter().map(|t| t.active).collect();
        assert_eq!(active, vec![true, false]);
    }

    #[test]
    fn close_removes_tab_and_active_reference() {
        let mut state = desktop();
        open_window(&mut state, &id("a")).unwrap();
        close_window(&mut state, &id("a")).unwrap();

        assert!(state.taskbar.is_empty());
        assert_eq!(state.active_window, None);
        assert_eq!(
            state.window(&id("a")).unwrap().visibility,
            WindowVisibility::Closed
        );

        // Focusing a closed window does not resurrect it.
        focus_window(&mut state, &id("a"), false).unwrap();
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn maximize_then_restore_round_trips_geometry() {
        let mut state = desktop();
        open_window(&mut state, &id("a")).unwrap();
        let before = state.window(&id("a")).unwrap().rect;

        toggle_maximize(&mut state, &id("a")).unwrap();
        let maximized = state.window(&id("a")).unwrap();
        assert!(maximized.is_maximized());
        assert_eq!(maximized.rect, state.metrics.work_area());

        toggle_maximize(&mut state, &id("a")).unwrap();
        let restored = state.window(&id("a")).unwrap();
        assert!(!restored.is_maximized());
        assert_eq!(restored.rect, before);
    }

    #[test]
    fn missing_window_is_reported_not_panicked() {
        let mut state = desktop();
        let err = close_window(&mut state, &id("nope")).unwrap_err();
        assert_eq!(err, ReducerError::WindowNotFound(id("nope")));
    }
}
