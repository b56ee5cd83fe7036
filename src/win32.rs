use std::{
    ffi::OsString,
    os::windows::ffi::OsStringExt,
};

use tracing::warn;
use windows::{
    Win32::{
        Foundation::{CloseHandle, HWND, LPARAM, RECT},
        Graphics::Gdi::{
            EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST,
            MONITORINFO, MonitorFromWindow,
        },
        System::Threading::{
            OpenProcess, PROCESS_NAME_FORMAT, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
            QueryFullProcessImageNameW,
        },
        UI::WindowsAndMessaging::{
            EnumWindows, GWL_EXSTYLE, GetWindowLongW, GetWindowRect, GetWindowTextLengthW,
            GetWindowTextW, GetWindowThreadProcessId, HWND_TOP, IsIconic, IsWindow,
            IsWindowVisible, MONITORINFOF_PRIMARY, SWP_NOSIZE, SWP_NOZORDER, SetWindowPos,
            WS_EX_TOOLWINDOW,
        },
    },
    core::{BOOL, PWSTR},
};

use crate::display::{DisplayMonitor, DisplayRegistry};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::hwnd;
use crate::window::WindowSnapshot;

fn rect_from(rect: RECT) -> Rect {
    Rect::new(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
    )
}

unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprc_monitor: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let displays = unsafe { &mut *(lparam.0 as *mut Vec<DisplayMonitor>) };

    let mut mi = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    if unsafe { GetMonitorInfoW(hmonitor, &mut mi).as_bool() } {
        displays.push(DisplayMonitor::new(
            hmonitor.0 as isize,
            rect_from(mi.rcMonitor),
            rect_from(mi.rcWork),
            mi.dwFlags & MONITORINFOF_PRIMARY != 0,
        ));
    }

    true.into()
}

/// Enumerates every active display. Fails when the enumeration call itself
/// fails or yields nothing; both leave nothing to center against.
pub fn build_display_registry() -> Result<DisplayRegistry> {
    let mut displays: Vec<DisplayMonitor> = Vec::new();
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(monitor_enum_proc),
            LPARAM(&mut displays as *mut _ as isize),
        )
    };
    if !ok.as_bool() {
        return Err(Error::DisplayEnumeration(
            "EnumDisplayMonitors failed".into(),
        ));
    }
    if displays.is_empty() {
        return Err(Error::DisplayEnumeration("no active displays".into()));
    }
    Ok(DisplayRegistry::new(displays))
}

extern "system" fn window_enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<isize>) };
    handles.push(hwnd.0 as isize);
    true.into()
}

/// Collects every top-level window handle. The push-style callback is
/// drained into a plain sequence so the driver can iterate at its own pace.
pub fn enumerate_windows() -> Vec<isize> {
    let mut handles: Vec<isize> = Vec::new();
    if let Err(err) = unsafe {
        EnumWindows(
            Some(window_enum_proc),
            LPARAM(&mut handles as *mut _ as isize),
        )
    } {
        warn!(%err, "window enumeration stopped early");
    }
    handles
}

/// The display the OS associates with this window. Partially off-screen
/// windows resolve to the nearest display.
pub fn monitor_from_window(hwnd: isize) -> isize {
    unsafe { MonitorFromWindow(hwnd!(hwnd), MONITOR_DEFAULTTONEAREST).0 as isize }
}

fn window_title(hwnd: HWND) -> String {
    unsafe {
        let length = GetWindowTextLengthW(hwnd);
        if length == 0 {
            return String::new();
        }

        let mut buffer: Vec<u16> = vec![0; (length + 1) as usize];
        let copied = GetWindowTextW(hwnd, &mut buffer);

        if copied > 0 {
            buffer.truncate(copied as usize);
            OsString::from_wide(&buffer).to_string_lossy().into_owned()
        } else {
            String::new()
        }
    }
}

/// Captures one window's state in a single pass. Returns None when the
/// geometry cannot be fetched; such a window is skipped.
pub fn window_snapshot(hwnd: isize) -> Option<WindowSnapshot> {
    let h = hwnd!(hwnd);

    let mut rect = RECT::default();
    unsafe { GetWindowRect(h, &mut rect) }.ok()?;

    let mut process_id: u32 = 0;
    unsafe { GetWindowThreadProcessId(h, Some(&mut process_id)) };

    let ex_style = unsafe { GetWindowLongW(h, GWL_EXSTYLE) } as u32;

    Some(WindowSnapshot {
        hwnd,
        process_id,
        title: window_title(h),
        bounds: rect_from(rect),
        is_valid: unsafe { IsWindow(Some(h)) }.as_bool(),
        is_visible: unsafe { IsWindowVisible(h) }.as_bool(),
        is_tool_window: ex_style & WS_EX_TOOLWINDOW.0 != 0,
        is_minimized: unsafe { IsIconic(h) }.as_bool(),
    })
}

/// Full path of the executable owning `process_id`. Protected system
/// processes refuse the query; the caller treats that as a skip.
pub fn executable_path(process_id: u32) -> Result<String> {
    if process_id == 0 {
        return Err(Error::ExecutableQuery("window has no owning process".into()));
    }

    unsafe {
        let handle = OpenProcess(
            PROCESS_QUERY_INFORMATION | PROCESS_VM_READ,
            false,
            process_id,
        )
        .map_err(|err| Error::ExecutableQuery(err.to_string()))?;

        let mut buffer: Vec<u16> = vec![0; 1024];
        let mut size: u32 = buffer.len() as u32;

        let result = QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_FORMAT(0),
            PWSTR(buffer.as_mut_ptr()),
            &mut size,
        );

        _ = CloseHandle(handle);

        result.map_err(|err| Error::ExecutableQuery(err.to_string()))?;
        buffer.truncate(size as usize);
        Ok(OsString::from_wide(&buffer).to_string_lossy().into_owned())
    }
}

/// Moves the window's top-left to `target`, keeping size and z-order.
pub fn set_window_position(hwnd: isize, target: Point) -> Result<()> {
    let h = hwnd!(hwnd);
    if !unsafe { IsWindow(Some(h)) }.as_bool() {
        return Err(Error::PositionSet("window no longer exists".into()));
    }
    unsafe {
        SetWindowPos(
            h,
            Some(HWND_TOP),
            target.x,
            target.y,
            0,
            0,
            SWP_NOSIZE | SWP_NOZORDER,
        )
    }
    .map_err(|err| Error::PositionSet(err.to_string()))
}
