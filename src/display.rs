use crate::geometry::Rect;

/// A detected screen display. `bounds` is the full monitor rectangle,
/// `work_area` the portion not covered by the taskbar or other appbars.
/// The work area is also the rectangle a maximized window fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMonitor {
    pub handle: isize,
    pub bounds: Rect,
    pub work_area: Rect,
    pub is_primary: bool,
}

impl DisplayMonitor {
    pub fn new(handle: isize, bounds: Rect, work_area: Rect, is_primary: bool) -> Self {
        debug_assert!(bounds.contains(&work_area));
        Self {
            handle,
            bounds,
            work_area,
            is_primary,
        }
    }

    /// The rectangle centering is computed against.
    pub fn reference_rect(&self, use_work_area: bool) -> Rect {
        if use_work_area {
            self.work_area
        } else {
            self.bounds
        }
    }
}

/// All displays active at the start of the run. Built once, read-only
/// afterwards; window-to-display binding is resolved through the handle the
/// OS reports for a window, never recomputed from geometry.
#[derive(Debug, Clone)]
pub struct DisplayRegistry {
    displays: Vec<DisplayMonitor>,
}

impl DisplayRegistry {
    pub fn new(displays: Vec<DisplayMonitor>) -> Self {
        Self { displays }
    }

    pub fn by_handle(&self, handle: isize) -> Option<&DisplayMonitor> {
        self.displays.iter().find(|d| d.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayMonitor> {
        self.displays.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_registry() -> DisplayRegistry {
        DisplayRegistry::new(vec![
            DisplayMonitor::new(
                1,
                Rect::new(0, 0, 1920, 1080),
                Rect::new(0, 0, 1920, 1040),
                true,
            ),
            DisplayMonitor::new(
                2,
                Rect::new(1920, 0, 2560, 1440),
                Rect::new(1920, 0, 2560, 1400),
                false,
            ),
        ])
    }

    #[test]
    fn lookup_by_handle() {
        let registry = sample_registry();
        let second = registry.by_handle(2).unwrap();
        assert_eq!(second.bounds, Rect::new(1920, 0, 2560, 1440));
        assert!(!second.is_primary);
    }

    #[test]
    fn unknown_handle_is_a_miss_not_an_error() {
        let registry = sample_registry();
        assert!(registry.by_handle(99).is_none());
    }

    #[test]
    fn work_area_within_bounds() {
        let registry = sample_registry();
        for display in registry.iter() {
            assert!(display.bounds.contains(&display.work_area));
        }
    }

    #[test]
    fn reference_rect_selection() {
        let display = DisplayMonitor::new(
            1,
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1040),
            true,
        );
        assert_eq!(display.reference_rect(true), display.work_area);
        assert_eq!(display.reference_rect(false), display.bounds);
    }
}
