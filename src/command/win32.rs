//! Windows: PowerShell balloon notifications and Win32 dialog parameters
//!
//! The [`NativeRequest`] values built here are plain data; the calls that
//! consume them live in `native.rs` and only exist on Windows.

use super::BuiltCommand;
use crate::config::DialogConfig;
use crate::shell::powershell_quote;
use crate::types::{Choice, FileKind, FileRequest, Icon, MessageRequest, NotifyRequest};

// MessageBoxW style bits
pub(crate) const MB_OK: u32 = 0x0000_0000;
pub(crate) const MB_OKCANCEL: u32 = 0x0000_0001;
pub(crate) const MB_ABORTRETRYIGNORE: u32 = 0x0000_0002;
pub(crate) const MB_YESNOCANCEL: u32 = 0x0000_0003;
pub(crate) const MB_YESNO: u32 = 0x0000_0004;
pub(crate) const MB_RETRYCANCEL: u32 = 0x0000_0005;
pub(crate) const MB_ICONERROR: u32 = 0x0000_0010;
pub(crate) const MB_ICONQUESTION: u32 = 0x0000_0020;
pub(crate) const MB_ICONWARNING: u32 = 0x0000_0030;
pub(crate) const MB_ICONINFORMATION: u32 = 0x0000_0040;
pub(crate) const MB_TOPMOST: u32 = 0x0004_0000;

/// Parameters for a Win32 dialog call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeRequest {
    /// `MessageBoxW`
    Message {
        title: String,
        text: String,
        style: u32,
    },
    /// `GetOpenFileNameW`, `GetSaveFileNameW` or `SHBrowseForFolderW`
    File {
        kind: FileKind,
        title: String,
        default_path: String,
        /// `Label\0pat;pat\0...` without the final terminator
        filter: String,
        multiselect: bool,
        confirm_overwrite: bool,
    },
}

pub(super) fn notify(req: &NotifyRequest, config: &DialogConfig) -> BuiltCommand {
    let delay_ms = u64::from(config.notification_secs) * 1000;
    let icon = match req.effective_icon() {
        Icon::Warning => "Warning",
        Icon::Error => "Error",
        Icon::Info | Icon::Question => "Info",
    };

    let script = [
        "Add-Type -AssemblyName System.Windows.Forms;".to_string(),
        format!("$exe = (Get-Process -id {}).Path;", std::process::id()),
        "$popup = New-Object System.Windows.Forms.NotifyIcon;".to_string(),
        "$popup.Icon = [System.Drawing.Icon]::ExtractAssociatedIcon($exe);".to_string(),
        "$popup.Visible = $true;".to_string(),
        format!(
            "$popup.ShowBalloonTip({delay_ms}, {}, {}, '{icon}');",
            powershell_quote(&req.title),
            powershell_quote(&req.message)
        ),
        // Keep the icon alive until the balloon has faded
        format!("Start-Sleep -Milliseconds {delay_ms};"),
        "$popup.Dispose();".to_string(),
    ]
    .join(" ");

    BuiltCommand::shell(format!(
        "powershell.exe -NoProfile -WindowStyle Hidden -Command \"{script}\""
    ))
}

pub(super) fn message(req: &MessageRequest) -> BuiltCommand {
    let icon = match req.icon {
        Icon::Info => MB_ICONINFORMATION,
        Icon::Warning => MB_ICONWARNING,
        Icon::Error => MB_ICONERROR,
        Icon::Question => MB_ICONQUESTION,
    };
    let buttons = match req.choice {
        Choice::Ok => MB_OK,
        Choice::OkCancel => MB_OKCANCEL,
        Choice::YesNo => MB_YESNO,
        Choice::YesNoCancel => MB_YESNOCANCEL,
        Choice::RetryCancel => MB_RETRYCANCEL,
        Choice::AbortRetryIgnore => MB_ABORTRETRYIGNORE,
    };

    native(NativeRequest::Message {
        title: req.title.clone(),
        text: req.text.clone(),
        style: MB_TOPMOST | icon | buttons,
    })
}

pub(super) fn file(req: &FileRequest) -> BuiltCommand {
    let filter = req
        .filters
        .iter()
        .map(|f| format!("{}\0{}\0", f.label, f.joined(";")))
        .collect::<String>();

    native(NativeRequest::File {
        kind: req.kind,
        title: req.title.clone(),
        default_path: req.default_path.clone(),
        filter,
        multiselect: req.multiselect,
        confirm_overwrite: req.confirm_overwrite,
    })
}

fn native(request: NativeRequest) -> BuiltCommand {
    BuiltCommand {
        invocation: super::Invocation::Native(request),
        mappings: super::ButtonMap::new(),
    }
}
