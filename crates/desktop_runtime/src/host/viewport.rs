#[cfg(target_arch = "wasm32")]
use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{config::DesktopConfig, model::DesktopMetrics};
#[cfg(target_arch = "wasm32")]
use crate::model::{Size, WindowRect};

/// DOM id of the taskbar element.
pub(crate) const TASKBAR_DOM_ID: &str = "taskbar";

pub(super) fn measure_metrics(config: &DesktopConfig) -> DesktopMetrics {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = DesktopMetrics::default().viewport;
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.w);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.h);
            let document = window.document();

            let taskbar_height = document
                .as_ref()
                .and_then(|doc| doc.get_element_by_id(TASKBAR_DOM_ID))
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| el.offset_height())
                .filter(|height| *height > 0)
                .unwrap_or(config.taskbar_height_px);

            let mut metrics =
                DesktopMetrics::for_viewport(Size { w: width, h: height }, taskbar_height);
            if let Some(container) = document
                .as_ref()
                .and_then(|doc| doc.get_element_by_id(&config.container_id))
            {
                let rect = container.get_bounding_client_rect();
                metrics.container = WindowRect {
                    x: rect.left() as i32,
                    y: rect.top() as i32,
                    w: rect.width() as i32,
                    h: rect.height() as i32,
                };
            }
            return metrics;
        }
    }

    DesktopMetrics::for_viewport(DesktopMetrics::default().viewport, config.taskbar_height_px)
}

/// Sets the canvas backing buffer to its displayed client size.
pub(super) fn sync_canvas_buffer(canvas_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            logging::warn!("canvas `{canvas_id}` not found for buffer sync");
            return;
        };
        canvas.set_width(canvas.client_width().max(0) as u32);
        canvas.set_height(canvas.client_height().max(0) as u32);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = canvas_id;
}
