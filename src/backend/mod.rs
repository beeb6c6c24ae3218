//! Dialog backends and selection
//!
//! A backend is the mechanism that actually puts a dialog on screen: the
//! Win32 API, AppleScript through `osascript`, or one of the Linux desktop
//! helpers. Which one is used depends on the platform, on what [`probe`]
//! found installed, and on the desktop session the process runs in.

pub mod probe;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DialogError;
pub use probe::{DesktopHint, Prober};

/// Linux desktop helper binaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Helper {
    Zenity,
    Matedialog,
    Qarma,
    Kdialog,
}

impl Helper {
    /// Fallback order when no desktop hint applies
    pub const PRIORITY: [Helper; 4] = [
        Helper::Zenity,
        Helper::Matedialog,
        Helper::Qarma,
        Helper::Kdialog,
    ];

    pub fn program(self) -> &'static str {
        match self {
            Helper::Zenity => "zenity",
            Helper::Matedialog => "matedialog",
            Helper::Qarma => "qarma",
            Helper::Kdialog => "kdialog",
        }
    }

    /// matedialog and qarma are zenity clones with the same flags
    pub fn speaks_zenity(self) -> bool {
        !matches!(self, Helper::Kdialog)
    }
}

impl fmt::Display for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for Helper {
    type Err = DialogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Helper::PRIORITY
            .into_iter()
            .find(|h| h.program().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DialogError::InvalidHelper(s.to_string()))
    }
}

/// Mechanism used to show dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Win32 common dialogs, PowerShell for notifications
    Win32,
    /// AppleScript via `osascript`
    Osascript,
    /// A Linux desktop helper
    Desktop(Helper),
    /// Nothing usable found; dialogs are no-ops
    Unavailable,
}

impl Backend {
    pub fn is_available(self) -> bool {
        !matches!(self, Backend::Unavailable)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Win32 => f.write_str("win32"),
            Backend::Osascript => f.write_str("osascript"),
            Backend::Desktop(helper) => write!(f, "{helper}"),
            Backend::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// Target platform family, split out so selection can be tested anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

/// Which helper programs were found on the search path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Backends {
    pub zenity: bool,
    pub matedialog: bool,
    pub qarma: bool,
    pub kdialog: bool,
    pub osascript: bool,
}

impl Backends {
    pub fn has(&self, helper: Helper) -> bool {
        match helper {
            Helper::Zenity => self.zenity,
            Helper::Matedialog => self.matedialog,
            Helper::Qarma => self.qarma,
            Helper::Kdialog => self.kdialog,
        }
    }

    pub fn set(&mut self, helper: Helper, present: bool) {
        match helper {
            Helper::Zenity => self.zenity = present,
            Helper::Matedialog => self.matedialog = present,
            Helper::Qarma => self.qarma = present,
            Helper::Kdialog => self.kdialog = present,
        }
    }

    /// Pick a backend.
    ///
    /// Precedence: platform native mechanism, then the configured helper,
    /// then the helper matching the desktop session, then the fixed
    /// [`Helper::PRIORITY`] order.
    pub fn select(
        &self,
        platform: Platform,
        preferred: Option<Helper>,
        hint: DesktopHint,
    ) -> Backend {
        match platform {
            Platform::Windows => return Backend::Win32,
            Platform::MacOs if self.osascript => return Backend::Osascript,
            _ => {}
        }

        if let Some(helper) = preferred.filter(|h| self.has(*h)) {
            return Backend::Desktop(helper);
        }

        if let Some(helper) = hint.helper().filter(|h| self.has(*h)) {
            return Backend::Desktop(helper);
        }

        Helper::PRIORITY
            .into_iter()
            .find(|h| self.has(*h))
            .map_or(Backend::Unavailable, Backend::Desktop)
    }
}
