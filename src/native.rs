//! Win32 dialog calls
//!
//! Runs a [`NativeRequest`] on the executor's worker thread and reports the
//! outcome in the same text form the desktop helpers use, so a single
//! parser handles every backend: the pressed button's label for message
//! boxes, one path per line for file dialogs.

use std::path::Path;

use tracing::warn;
use windows::core::{HSTRING, PCWSTR, PWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::System::Com::{
    CoInitializeEx, CoTaskMemFree, CoUninitialize, COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Controls::Dialogs::{
    CommDlgExtendedError, GetOpenFileNameW, GetSaveFileNameW, OFN_ALLOWMULTISELECT, OFN_EXPLORER,
    OFN_NOCHANGEDIR, OFN_OVERWRITEPROMPT, OFN_PATHMUSTEXIST, OPENFILENAMEW,
};
use windows::Win32::UI::Shell::{
    SHBrowseForFolderW, SHGetPathFromIDListW, BFFM_INITIALIZED, BFFM_SETSELECTIONW, BIF_NEWDIALOGSTYLE,
    BIF_RETURNONLYFSDIRS, BROWSEINFOW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetForegroundWindow, MessageBoxW, PeekMessageW, SendMessageW, TranslateMessage,
    IDABORT, IDCANCEL, IDIGNORE, IDNO, IDOK, IDRETRY, IDYES, MESSAGEBOX_RESULT, MESSAGEBOX_STYLE, MSG,
    PM_REMOVE,
};

use crate::command::NativeRequest;
use crate::errors::DialogError;
use crate::executor::RawOutput;
use crate::types::{Button, FileKind};

/// Result buffer size for open/save dialogs, large enough for multi-select
const FILE_BUFFER_LEN: usize = 32 * 1024;

const MAX_PATH: usize = 260;

impl NativeRequest {
    /// Show the dialog and wait for the user
    pub fn run(self) -> RawOutput {
        let _com = ComApartment::enter();
        match self {
            NativeRequest::Message { title, text, style } => message_box(&title, &text, style),
            NativeRequest::File {
                kind: FileKind::Folder,
                title,
                default_path,
                ..
            } => browse_for_folder(&title, &default_path),
            NativeRequest::File {
                kind,
                title,
                default_path,
                filter,
                multiselect,
                confirm_overwrite,
            } => file_dialog(kind, &title, &default_path, &filter, multiselect, confirm_overwrite),
        }
    }
}

/// Single-threaded COM apartment for the calling thread, left on drop.
///
/// The shell folder browser needs it; the worker threads start without one.
struct ComApartment {
    initialized: bool,
}

impl ComApartment {
    fn enter() -> Self {
        // S_FALSE (already initialized) still has to be balanced
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        if hr.is_err() {
            let error = DialogError::Native(format!("CoInitializeEx failed: {hr:?}"));
            warn!(error = %error, "COM unavailable for dialog thread");
        }
        Self {
            initialized: hr.is_ok(),
        }
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        if self.initialized {
            unsafe { CoUninitialize() };
        }
    }
}

/// Dispatch pending window messages for the calling thread
pub(crate) fn pump_messages() {
    let mut msg = MSG::default();
    unsafe {
        while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

fn message_box(title: &str, text: &str, style: u32) -> RawOutput {
    let result = unsafe {
        MessageBoxW(
            Some(GetForegroundWindow()),
            &HSTRING::from(text),
            &HSTRING::from(title),
            MESSAGEBOX_STYLE(style),
        )
    };

    match button_for(result) {
        Some(button) => RawOutput::new(format!("{}\n", button.label()), 0),
        None => {
            warn!(
                "{}",
                DialogError::Native(format!("MessageBoxW returned {}", result.0))
            );
            RawOutput::failed()
        }
    }
}

fn button_for(result: MESSAGEBOX_RESULT) -> Option<Button> {
    Some(match result {
        IDOK => Button::Ok,
        IDCANCEL => Button::Cancel,
        IDYES => Button::Yes,
        IDNO => Button::No,
        IDABORT => Button::Abort,
        IDRETRY => Button::Retry,
        IDIGNORE => Button::Ignore,
        _ => return None,
    })
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn file_dialog(
    kind: FileKind,
    title: &str,
    default_path: &str,
    filter: &str,
    multiselect: bool,
    confirm_overwrite: bool,
) -> RawOutput {
    let mut buffer = vec![0u16; FILE_BUFFER_LEN];

    // A default that names a file pre-fills the name box; a directory only sets
    // the starting folder
    let default = Path::new(default_path);
    let initial_dir = if default.is_dir() {
        Some(wide(default_path))
    } else {
        let name: Vec<u16> = default
            .file_name()
            .map(|n| n.to_string_lossy().encode_utf16().collect())
            .unwrap_or_default();
        let len = name.len().min(FILE_BUFFER_LEN - 1);
        buffer[..len].copy_from_slice(&name[..len]);
        default
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| wide(&p.to_string_lossy()))
    };

    let wtitle = wide(title);
    // Double terminator ends the filter list
    let wfilter: Vec<u16> = filter.encode_utf16().chain([0, 0]).collect();

    let mut flags = OFN_NOCHANGEDIR | OFN_EXPLORER;
    match kind {
        FileKind::Save if confirm_overwrite => flags |= OFN_OVERWRITEPROMPT,
        FileKind::Open => {
            flags |= OFN_PATHMUSTEXIST;
            if multiselect {
                flags |= OFN_ALLOWMULTISELECT;
            }
        }
        _ => {}
    }

    let mut ofn = OPENFILENAMEW {
        lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
        hwndOwner: unsafe { GetForegroundWindow() },
        lpstrFilter: if filter.is_empty() {
            PCWSTR::null()
        } else {
            PCWSTR(wfilter.as_ptr())
        },
        nFilterIndex: 1,
        lpstrFile: PWSTR(buffer.as_mut_ptr()),
        nMaxFile: FILE_BUFFER_LEN as u32,
        lpstrInitialDir: initial_dir
            .as_ref()
            .map_or(PCWSTR::null(), |d| PCWSTR(d.as_ptr())),
        lpstrTitle: PCWSTR(wtitle.as_ptr()),
        Flags: flags,
        ..Default::default()
    };

    let accepted = unsafe {
        if kind == FileKind::Save {
            GetSaveFileNameW(&mut ofn).as_bool()
        } else {
            GetOpenFileNameW(&mut ofn).as_bool()
        }
    };

    if !accepted {
        let code = unsafe { CommDlgExtendedError() };
        if code.0 != 0 {
            warn!(
                "{}",
                DialogError::Native(format!("common dialog error {:#x}", code.0))
            );
        }
        return RawOutput::new(String::new(), 1);
    }

    RawOutput::new(selected_paths(&buffer), 0)
}

/// Explorer-style multi-select returns `dir\0name\0name\0\0`; a single
/// selection is just `path\0`.
fn selected_paths(buffer: &[u16]) -> String {
    let parts: Vec<String> = buffer
        .split(|c| *c == 0)
        .take_while(|part| !part.is_empty())
        .map(String::from_utf16_lossy)
        .collect();

    let paths: Vec<String> = match parts.as_slice() {
        [] => Vec::new(),
        [single] => vec![single.clone()],
        [dir, names @ ..] => names
            .iter()
            .map(|name| Path::new(dir).join(name).to_string_lossy().into_owned())
            .collect(),
    };

    paths.iter().map(|p| format!("{p}\n")).collect()
}

unsafe extern "system" fn browse_callback(
    hwnd: HWND,
    msg: u32,
    _lparam: LPARAM,
    data: LPARAM,
) -> i32 {
    if msg == BFFM_INITIALIZED && data.0 != 0 {
        SendMessageW(hwnd, BFFM_SETSELECTIONW, Some(WPARAM(1)), Some(data));
    }
    0
}

fn browse_for_folder(title: &str, default_path: &str) -> RawOutput {
    let wtitle = wide(title);
    let wdefault = wide(default_path);

    let info = BROWSEINFOW {
        hwndOwner: unsafe { GetForegroundWindow() },
        lpszTitle: PCWSTR(wtitle.as_ptr()),
        ulFlags: BIF_RETURNONLYFSDIRS | BIF_NEWDIALOGSTYLE,
        lpfn: Some(browse_callback),
        lParam: LPARAM(if default_path.is_empty() {
            0
        } else {
            wdefault.as_ptr() as isize
        }),
        ..Default::default()
    };

    let list = unsafe { SHBrowseForFolderW(&info) };
    if list.is_null() {
        return RawOutput::new(String::new(), 1);
    }

    let mut path = [0u16; MAX_PATH];
    let found = unsafe { SHGetPathFromIDListW(list, &mut path).as_bool() };
    unsafe { CoTaskMemFree(Some(list as *const _)) };

    if !found {
        return RawOutput::new(String::new(), 1);
    }

    let len = path.iter().position(|c| *c == 0).unwrap_or(path.len());
    RawOutput::new(format!("{}\n", String::from_utf16_lossy(&path[..len])), 0)
}
