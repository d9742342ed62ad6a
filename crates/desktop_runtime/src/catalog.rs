//! Static window and icon catalog the shell boots with.

use crate::model::{IconRecord, Size, WindowRecord, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub rect: WindowRect,
    pub min_size: Option<Size>,
    pub canvas_id: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub image: &'static str,
    pub window_id: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartMenuItem {
    pub label: &'static str,
    pub image: &'static str,
    pub window_id: &'static str,
}

/// Canvas the media player draws its visualizer into.
pub const VISUALIZER_CANVAS_ID: &str = "visualizer";

pub const DISPLAY_PROPERTIES_WINDOW_ID: &str = "displayPropertiesWindow";

const fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
    WindowRect { x, y, w, h }
}

const WINDOW_REGISTRY: [WindowDescriptor; 6] = [
    WindowDescriptor {
        id: "myComputerWindow",
        title: "My Computer",
        icon: "icons/computer.png",
        rect: rect(140, 60, 420, 300),
        min_size: None,
        canvas_id: None,
    },
    WindowDescriptor {
        id: "mediaPlayerWindow",
        title: "Media Player",
        icon: "icons/media.png",
        rect: rect(220, 100, 460, 360),
        min_size: Some(Size { w: 320, h: 260 }),
        canvas_id: Some(VISUALIZER_CANVAS_ID),
    },
    WindowDescriptor {
        id: "imageViewerWindow",
        title: "Image Viewer",
        icon: "icons/images.png",
        rect: rect(260, 80, 520, 420),
        min_size: Some(Size { w: 300, h: 250 }),
        canvas_id: None,
    },
    WindowDescriptor {
        id: "aboutMeWindow",
        title: "About Me",
        icon: "icons/notepad.png",
        rect: rect(180, 120, 380, 280),
        min_size: None,
        canvas_id: None,
    },
    WindowDescriptor {
        id: "recycleBinWindow",
        title: "Recycle Bin",
        icon: "icons/recycle.png",
        rect: rect(300, 140, 360, 260),
        min_size: None,
        canvas_id: None,
    },
    WindowDescriptor {
        id: DISPLAY_PROPERTIES_WINDOW_ID,
        title: "Display Properties",
        icon: "icons/display.png",
        rect: rect(320, 90, 360, 400),
        min_size: None,
        canvas_id: None,
    },
];

const ICON_REGISTRY: [IconDescriptor; 5] = [
    IconDescriptor {
        id: "myComputerIcon",
        label: "My Computer",
        image: "icons/computer.png",
        window_id: Some("myComputerWindow"),
    },
    IconDescriptor {
        id: "mediaPlayerIcon",
        label: "Media Player",
        image: "icons/media.png",
        window_id: Some("mediaPlayerWindow"),
    },
    IconDescriptor {
        id: "imageViewerIcon",
        label: "Pictures",
        image: "icons/images.png",
        window_id: Some("imageViewerWindow"),
    },
    IconDescriptor {
        id: "aboutMeIcon",
        label: "About Me",
        image: "icons/notepad.png",
        window_id: Some("aboutMeWindow"),
    },
    IconDescriptor {
        id: "recycleBinIcon",
        label: "Recycle Bin",
        image: "icons/recycle.png",
        window_id: Some("recycleBinWindow"),
    },
];

const START_MENU: [StartMenuItem; 4] = [
    StartMenuItem {
        label: "My Computer",
        image: "icons/computer.png",
        window_id: "myComputerWindow",
    },
    StartMenuItem {
        label: "Media Player",
        image: "icons/media.png",
        window_id: "mediaPlayerWindow",
    },
    StartMenuItem {
        label: "Image Viewer",
        image: "icons/images.png",
        window_id: "imageViewerWindow",
    },
    StartMenuItem {
        label: "About Me",
        image: "icons/notepad.png",
        window_id: "aboutMeWindow",
    },
];

pub fn window_registry() -> &'static [WindowDescriptor] {
    &WINDOW_REGISTRY
}

pub fn icon_registry() -> &'static [IconDescriptor] {
    &ICON_REGISTRY
}

pub fn start_menu_items() -> &'static [StartMenuItem] {
    &START_MENU
}

pub fn default_windows() -> Vec<WindowRecord> {
    window_registry()
        .iter()
        .map(|d| {
            let mut record = WindowRecord::new(d.id, d.title, d.icon, d.rect);
            record.min_size = d.min_size;
            record.canvas_id = d.canvas_id.map(str::to_string);
            record
        })
        .collect()
}

pub fn default_icons() -> Vec<IconRecord> {
    icon_registry()
        .iter()
        .map(|d| IconRecord::new(d.id, d.label, d.image, d.window_id))
        .collect()
}
