//! Window and icon manager for a browser-hosted retro desktop.
//!
//! The pointer-interaction state machine (click vs. drag vs. resize, z-order, taskbar tabs, grid
//! snapping) lives in plain Rust behind [`reduce_desktop`]; [`DesktopProvider`] and
//! [`DesktopShell`] wire it to the DOM with Leptos.

pub mod catalog;
pub mod click;
pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod gesture;
pub mod host;
pub mod icon_grid;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod resize;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig, IconGridConfig};
pub use gesture::PointerSource;
pub use interaction::InteractionState;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
