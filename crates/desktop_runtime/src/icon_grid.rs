//! Desktop icon grid: initial column-major layout and drop snapping.

use crate::config::IconGridConfig;
use crate::model::{DesktopMetrics, Point, Size};

/// Clamps `value` into `[lo, hi]`; when the range is empty the lower bound wins.
pub fn clamp_axis(value: i32, lo: i32, hi: i32) -> i32 {
    value.min(hi).max(lo)
}

pub fn cell_origin(grid: IconGridConfig, col: i32, row: i32) -> Point {
    Point {
        x: grid.x + col * grid.w,
        y: grid.y + row * grid.h,
    }
}

/// Places `count` icons column-major, wrapping to a new column before an icon would overlap the
/// taskbar.
pub fn layout_positions(count: usize, metrics: DesktopMetrics, grid: IconGridConfig) -> Vec<Point> {
    let usable_height = metrics.viewport.h - metrics.taskbar_height;
    let mut col = 0;
    let mut row = 0;
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let top = grid.y + row * grid.h;
        if top + grid.h > usable_height {
            col += 1;
            row = 0;
        }
        positions.push(cell_origin(grid, col, row));
        row += 1;
    }

    positions
}

fn snap_axis(current: i32, origin: i32, cell: i32) -> i32 {
    if cell <= 0 {
        return current;
    }
    let cells = (f64::from(current - origin) / f64::from(cell)).round() as i32;
    cells * cell + origin
}

/// Snaps a dropped icon to the nearest grid cell, then keeps it inside the container.
pub fn snap_to_grid(current: Point, grid: IconGridConfig, container: Size, icon: Size) -> Point {
    let snapped_x = snap_axis(current.x, grid.x, grid.w);
    let snapped_y = snap_axis(current.y, grid.y, grid.h);
    Point {
        x: clamp_axis(snapped_x, grid.x, container.w - icon.w),
        y: clamp_axis(snapped_y, grid.y, container.h - icon.h),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn snapping_is_idempotent(x in 0i32..2000, y in 0i32..1200) {
            let grid = IconGridConfig::default();
            // Far edges land exactly on a cell so clamped drops are grid points too.
            let container = Size { w: 20 + 20 * 90 + 70, h: 20 + 10 * 90 + 80 };
            let icon = Size { w: 70, h: 80 };

            let once = snap_to_grid(Point { x, y }, grid, container, icon);
            let twice = snap_to_grid(once, grid, container, icon);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn snapped_icon_stays_inside_container(x in -500i32..3000, y in -500i32..3000) {
            let grid = IconGridConfig::default();
            let container = Size { w: 1024, h: 738 };
            let icon = Size { w: 70, h: 80 };

            let snapped = snap_to_grid(Point { x, y }, grid, container, icon);
            prop_assert!(snapped.x >= grid.x && snapped.x <= container.w - icon.w);
            prop_assert!(snapped.y >= grid.y && snapped.y <= container.h - icon.h);
        }

        #[test]
        fn layout_never_overlaps_taskbar(count in 0usize..40, height in 200i32..1400) {
            let grid = IconGridConfig::default();
            let metrics = DesktopMetrics::for_viewport(Size { w: 1920, h: height }, 30);
            for pos in layout_positions(count, metrics, grid) {
                prop_assert!(pos.y + grid.h <= height - 30);
            }
        }
    }
}
