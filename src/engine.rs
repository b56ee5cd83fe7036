use crate::centering::{Placement, compute_target};
use crate::display::{DisplayMonitor, DisplayRegistry};
use crate::error::Result;
use crate::exclusion::{ExclusionList, FilterMode, should_skip};
use crate::geometry::Point;
use crate::window::WindowSnapshot;

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub use_work_area: bool,
    pub mode: FilterMode,
}

/// Everything a per-window decision needs, assembled once before the window
/// pass and read-only for the rest of the run.
#[derive(Debug)]
pub struct RunContext {
    pub registry: DisplayRegistry,
    pub exclusions: ExclusionList,
    pub options: Options,
}

impl RunContext {
    pub fn new(registry: DisplayRegistry, exclusions: ExclusionList, options: Options) -> Self {
        Self {
            registry,
            exclusions,
            options,
        }
    }
}

/// What to do with one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Move(Point),
    AlreadyPlaced,
    Ineligible,
    Excluded,
}

/// The per-window decision chain: eligibility, then the exclusion filter,
/// then classification and centering. Pure over the snapshot; the OS calls
/// all happen before and after this.
pub fn evaluate(
    window: &WindowSnapshot,
    exe_base_name: &str,
    display: &DisplayMonitor,
    ctx: &RunContext,
) -> Result<Verdict> {
    if !window.is_eligible() {
        return Ok(Verdict::Ineligible);
    }
    if should_skip(exe_base_name, &ctx.exclusions, ctx.options.mode) {
        return Ok(Verdict::Excluded);
    }
    match compute_target(window, display, ctx.options.use_work_area)? {
        Placement::At(point) => Ok(Verdict::Move(point)),
        Placement::AlreadyPlaced => Ok(Verdict::AlreadyPlaced),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub examined: usize,
    pub centered: usize,
    pub already_placed: usize,
    pub skipped: usize,
}

/// One full pass: build the display registry, load the exclusion list, then
/// visit every top-level window. No window-level failure terminates the
/// run, and a skipped window is left completely untouched.
#[cfg(windows)]
pub fn run(config: &crate::config::Config) -> Result<RunSummary> {
    use tracing::info;

    use crate::win32;

    let registry = win32::build_display_registry()?;
    info!(displays = registry.len(), "display registry built");

    let exclusions = ExclusionList::load(&config.exclude_file);
    let ctx = RunContext::new(
        registry,
        exclusions,
        Options {
            use_work_area: config.use_work_area,
            mode: config.mode,
        },
    );

    let mut summary = RunSummary::default();
    for hwnd in win32::enumerate_windows() {
        process_window(hwnd, &ctx, &mut summary);
    }

    info!(
        examined = summary.examined,
        centered = summary.centered,
        already_placed = summary.already_placed,
        skipped = summary.skipped,
        "run complete"
    );
    Ok(summary)
}

#[cfg(windows)]
fn process_window(hwnd: isize, ctx: &RunContext, summary: &mut RunSummary) {
    use tracing::{debug, info, warn};

    use crate::error::Error;
    use crate::exclusion::executable_base_name;
    use crate::win32;

    summary.examined += 1;

    let Some(window) = win32::window_snapshot(hwnd) else {
        summary.skipped += 1;
        return;
    };

    // Ineligible windows are the common case (hidden helpers, untitled
    // message-only windows); skip them before touching the process.
    if !window.is_eligible() {
        summary.skipped += 1;
        return;
    }

    let Some(display) = ctx.registry.by_handle(win32::monitor_from_window(hwnd)) else {
        warn!(hwnd, title = %window.title, "{}", Error::DisplayNotFound);
        summary.skipped += 1;
        return;
    };

    let exe_path = match win32::executable_path(window.process_id) {
        Ok(path) => path,
        Err(err) => {
            // Commonly a protected system process denying the query.
            warn!(hwnd, title = %window.title, %err, "skipping window");
            summary.skipped += 1;
            return;
        }
    };
    let exe = executable_base_name(&exe_path);

    match evaluate(&window, exe, display, ctx) {
        Ok(Verdict::Move(target)) => match win32::set_window_position(hwnd, target) {
            Ok(()) => {
                info!(title = %window.title, exe, x = target.x, y = target.y, "window centered");
                summary.centered += 1;
            }
            Err(err) => {
                // E.g. the window closed between classification and move.
                warn!(hwnd, title = %window.title, %err, "skipping window");
                summary.skipped += 1;
            }
        },
        Ok(Verdict::AlreadyPlaced) => {
            debug!(title = %window.title, exe, "already placed");
            summary.already_placed += 1;
        }
        Ok(Verdict::Ineligible) => {
            summary.skipped += 1;
        }
        Ok(Verdict::Excluded) => {
            debug!(title = %window.title, exe, "excluded by filter");
            summary.skipped += 1;
        }
        Err(err) => {
            warn!(hwnd, title = %window.title, %err, "skipping window");
            summary.skipped += 1;
        }
    }
}
