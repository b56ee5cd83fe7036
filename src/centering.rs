use tracing::debug;

use crate::display::DisplayMonitor;
use crate::error::Error;
use crate::geometry::Point;
use crate::window::{WindowSnapshot, WindowState, classify};

/// Outcome of a centering computation for an eligible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Move the window so its top-left lands here, size unchanged.
    At(Point),
    /// The window already sits where it belongs (maximized, full screen or
    /// minimized). Reported as success; the window must not be moved.
    AlreadyPlaced,
}

/// Computes the top-left coordinate that centers `window` on `display`.
///
/// The target is the geometric midpoint of the work area (or the full
/// bounds when `use_work_area` is false). The result is never clamped: a
/// window whose centered position still hangs over a display edge is
/// accepted as-is.
pub fn compute_target(
    window: &WindowSnapshot,
    display: &DisplayMonitor,
    use_work_area: bool,
) -> Result<Placement, Error> {
    if window.is_minimized {
        return Ok(Placement::AlreadyPlaced);
    }

    match classify(window.bounds, display) {
        WindowState::Maximized | WindowState::FullScreen => Ok(Placement::AlreadyPlaced),
        WindowState::OutOfBounds => Err(Error::Unpositionable),
        WindowState::Normal => {
            let r = display.reference_rect(use_work_area);
            let target = Point {
                x: r.x + r.width / 2 - window.bounds.width / 2,
                y: r.y + r.height / 2 - window.bounds.height / 2,
            };
            debug!(
                hwnd = window.hwnd,
                x = target.x,
                y = target.y,
                "computed center target"
            );
            Ok(Placement::At(target))
        }
    }
}
