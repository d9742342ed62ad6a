use std::fmt;

use serde::{Deserialize, Serialize};

use crate::click::ClickTracker;
use crate::config::DesktopConfig;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// DOM id of a desktop window (for example `mediaPlayer`).
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(pub String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Handle for a fire-once deferred callback scheduled by the host.
pub struct TimerToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Distance from a dragged target's top-left corner to the pointer.
pub struct PointerOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn origin(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    pub fn moved_to(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    pub fn resized_to(self, size: Size) -> Self {
        Self {
            w: size.w,
            h: size.h,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Browser geometry the window and icon math is bounded by.
pub struct DesktopMetrics {
    pub viewport: Size,
    pub taskbar_height: i32,
    /// Bounding rect of the icon container, in viewport coordinates.
    pub container: WindowRect,
}

impl DesktopMetrics {
    /// Builds metrics for a desktop whose icon container fills the area above the taskbar.
    pub fn for_viewport(viewport: Size, taskbar_height: i32) -> Self {
        Self {
            viewport,
            taskbar_height,
            container: WindowRect {
                x: 0,
                y: 0,
                w: viewport.w,
                h: viewport.h - taskbar_height,
            },
        }
    }

    /// The rectangle a maximized window fills.
    pub fn work_area(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.viewport.w,
            h: self.viewport.h - self.taskbar_height,
        }
    }
}

impl Default for DesktopMetrics {
    fn default() -> Self {
        Self::for_viewport(Size { w: 1024, h: 768 }, 30)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowVisibility {
    /// No taskbar tab; the window markup exists but is hidden.
    Closed,
    Open,
    /// Hidden, but still bound to its taskbar tab.
    Minimized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    /// Image shown on the window's taskbar tab.
    pub icon: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub visibility: WindowVisibility,
    /// Geometry to restore; present exactly while the window is maximized.
    pub saved_rect: Option<WindowRect>,
    pub min_size: Option<Size>,
    /// Canvas whose backing buffer follows the window size.
    pub canvas_id: Option<String>,
}

impl WindowRecord {
    pub fn new(id: &str, title: &str, icon: &str, rect: WindowRect) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.to_string(),
            icon: icon.to_string(),
            rect,
            z_index: 0,
            visibility: WindowVisibility::Closed,
            saved_rect: None,
            min_size: None,
            canvas_id: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == WindowVisibility::Open
    }

    pub fn is_maximized(&self) -> bool {
        self.saved_rect.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarTab {
    pub window_id: WindowId,
    pub title: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    pub id: IconId,
    pub label: String,
    pub image: String,
    /// Window opened by double-clicking the icon.
    pub window_id: Option<WindowId>,
    /// Top-left corner relative to the icon container.
    pub position: Point,
    /// Pending clear of the eased snap animation.
    pub snap_transition: Option<TimerToken>,
}

impl IconRecord {
    pub fn new(id: &str, label: &str, image: &str, window_id: Option<&str>) -> Self {
        Self {
            id: IconId::new(id),
            label: label.to_string(),
            image: image.to_string(),
            window_id: window_id.map(WindowId::new),
            position: Point::default(),
            snap_transition: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// Taskbar tabs in the order their windows were opened.
    pub taskbar: Vec<TaskbarTab>,
    pub icons: Vec<IconRecord>,
    pub active_window: Option<WindowId>,
    /// Global z-order counter; only ever incremented.
    pub z_counter: u32,
    pub start_menu_open: bool,
    /// Viewport position of the open desktop context menu.
    pub context_menu: Option<PointerPosition>,
    pub powered_off: bool,
    pub metrics: DesktopMetrics,
    pub clicks: ClickTracker,
    pub next_timer_token: u64,
}

impl DesktopState {
    pub fn new(windows: Vec<WindowRecord>, icons: Vec<IconRecord>, config: &DesktopConfig) -> Self {
        Self {
            windows,
            taskbar: Vec::new(),
            icons,
            active_window: None,
            z_counter: config.z_index_base,
            start_menu_open: false,
            context_menu: None,
            powered_off: false,
            metrics: DesktopMetrics::for_viewport(
                DesktopMetrics::default().viewport,
                config.taskbar_height_px,
            ),
            clicks: ClickTracker::default(),
            next_timer_token: 1,
        }
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn icon(&self, icon_id: &IconId) -> Option<&IconRecord> {
        self.icons.iter().find(|i| &i.id == icon_id)
    }

    pub fn tab(&self, window_id: &WindowId) -> Option<&TaskbarTab> {
        self.taskbar.iter().find(|t| &t.window_id == window_id)
    }

    pub fn allocate_timer(&mut self) -> TimerToken {
        let token = TimerToken(self.next_timer_token);
        self.next_timer_token = self.next_timer_token.saturating_add(1);
        token
    }
}
