use crate::display::DisplayMonitor;
use crate::geometry::Rect;

/// Everything the engine needs to know about one top-level window, captured
/// in a single pass while enumerating. Built fresh per window and discarded
/// after processing; never cached across windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub hwnd: isize,
    pub process_id: u32,
    /// Best effort. May be empty when the window carries no text.
    pub title: String,
    pub bounds: Rect,
    pub is_valid: bool,
    pub is_visible: bool,
    pub is_tool_window: bool,
    pub is_minimized: bool,
}

impl WindowSnapshot {
    /// A window qualifies for centering only when every condition holds.
    /// Failing any of them is a normal skip, never an error.
    pub fn is_eligible(&self) -> bool {
        self.is_valid
            && self.is_visible
            && !self.title.is_empty()
            && !self.is_tool_window
            && !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Maximized,
    FullScreen,
    OutOfBounds,
}

/// Classifies a window against its assigned display. Evaluated in fixed
/// order, first match wins: a maximized window is sized exactly to the work
/// area and would otherwise trip the size check below it.
pub fn classify(bounds: Rect, display: &DisplayMonitor) -> WindowState {
    if bounds == display.work_area {
        return WindowState::Maximized;
    }
    if bounds == display.bounds {
        return WindowState::FullScreen;
    }
    if bounds.disjoint(&display.bounds)
        || bounds.width > display.bounds.width
        || bounds.height > display.bounds.height
    {
        return WindowState::OutOfBounds;
    }
    WindowState::Normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn display() -> DisplayMonitor {
        DisplayMonitor::new(
            1,
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1040),
            true,
        )
    }

    fn snapshot() -> WindowSnapshot {
        WindowSnapshot {
            hwnd: 0x1000,
            process_id: 4242,
            title: "Untitled - Notepad".into(),
            bounds: Rect::new(100, 100, 800, 600),
            is_valid: true,
            is_visible: true,
            is_tool_window: false,
            is_minimized: false,
        }
    }

    #[test]
    fn eligible_window() {
        assert!(snapshot().is_eligible());
    }

    #[test]
    fn every_failing_condition_disqualifies() {
        let mut w = snapshot();
        w.is_valid = false;
        assert!(!w.is_eligible());

        let mut w = snapshot();
        w.is_visible = false;
        assert!(!w.is_eligible());

        let mut w = snapshot();
        w.title.clear();
        assert!(!w.is_eligible());

        let mut w = snapshot();
        w.is_tool_window = true;
        assert!(!w.is_eligible());

        let mut w = snapshot();
        w.is_minimized = true;
        assert!(!w.is_eligible());
    }

    #[test]
    fn classify_normal() {
        assert_eq!(
            classify(Rect::new(100, 100, 800, 600), &display()),
            WindowState::Normal
        );
    }

    #[test]
    fn classify_maximized_matches_work_area() {
        assert_eq!(
            classify(Rect::new(0, 0, 1920, 1040), &display()),
            WindowState::Maximized
        );
    }

    #[test]
    fn classify_full_screen_matches_bounds() {
        assert_eq!(
            classify(Rect::new(0, 0, 1920, 1080), &display()),
            WindowState::FullScreen
        );
    }

    #[test]
    fn classify_entirely_beside_display() {
        assert_eq!(
            classify(Rect::new(2000, 0, 800, 600), &display()),
            WindowState::OutOfBounds
        );
    }

    #[test]
    fn classify_oversized_in_one_dimension() {
        assert_eq!(
            classify(Rect::new(0, 0, 2500, 600), &display()),
            WindowState::OutOfBounds
        );
        assert_eq!(
            classify(Rect::new(0, 0, 800, 1200), &display()),
            WindowState::OutOfBounds
        );
    }

    // When the taskbar is hidden the work area equals the bounds; the
    // work-area check still wins because it runs first.
    #[test]
    fn maximized_beats_full_screen_when_rects_coincide() {
        let display = DisplayMonitor::new(
            1,
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1080),
            true,
        );
        assert_eq!(
            classify(Rect::new(0, 0, 1920, 1080), &display),
            WindowState::Maximized
        );
    }

    #[test]
    fn classification_table() {
        let display = display();
        let cases = [
            (Rect::new(0, 0, 1920, 1040), WindowState::Maximized),
            (Rect::new(0, 0, 1920, 1080), WindowState::FullScreen),
            (Rect::new(2000, 0, 800, 600), WindowState::OutOfBounds),
            (Rect::new(100, 100, 800, 600), WindowState::Normal),
            (Rect::new(-100, -100, 400, 300), WindowState::Normal),
            (Rect::new(0, 0, 0, 0), WindowState::Normal),
        ];
        for (bounds, expected) in cases {
            assert_eq!(classify(bounds, &display), expected, "{bounds:?}");
        }
    }
}
