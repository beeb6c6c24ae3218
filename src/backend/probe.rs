//! Helper detection
//!
//! Each candidate program is looked up with `command -v` under `/bin/sh`,
//! run through the same [`Executor`] that later runs the dialogs. Exit code 0
//! means the program is on the search path.
//!
//! The search path defaults to the process `PATH` and can be replaced, which
//! is how tests point detection at a directory of fake helpers.

use std::ffi::OsString;

use tracing::debug;

use super::{Backends, Helper};
use crate::command::Invocation;
use crate::executor::Executor;
use crate::shell;

/// Desktop session family, used to break ties between installed helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesktopHint {
    Kde,
    Gnome,
    Mate,
    Lxqt,
    /// Some other desktop was named
    Other,
    /// No session variables set
    #[default]
    Unknown,
}

impl DesktopHint {
    /// Read `XDG_CURRENT_DESKTOP`, `DESKTOP_SESSION` and `KDE_FULL_SESSION`
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("XDG_CURRENT_DESKTOP").ok().as_deref(),
            std::env::var("DESKTOP_SESSION").ok().as_deref(),
            std::env::var("KDE_FULL_SESSION").ok().as_deref(),
        )
    }

    pub fn from_vars(
        current_desktop: Option<&str>,
        desktop_session: Option<&str>,
        kde_full_session: Option<&str>,
    ) -> Self {
        if kde_full_session.is_some_and(|v| !v.is_empty()) {
            return DesktopHint::Kde;
        }

        // XDG_CURRENT_DESKTOP is colon-separated, e.g. "ubuntu:GNOME"
        let names = current_desktop
            .into_iter()
            .chain(desktop_session)
            .flat_map(|v| v.split(':'))
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>();

        if names.is_empty() {
            return DesktopHint::Unknown;
        }

        for name in &names {
            let hint = match name.as_str() {
                n if n.contains("kde") || n.contains("plasma") => DesktopHint::Kde,
                n if n.contains("lxqt") => DesktopHint::Lxqt,
                "mate" => DesktopHint::Mate,
                n if n.contains("gnome")
                    || n.contains("unity")
                    || n.contains("cinnamon")
                    || n.contains("budgie")
                    || n.contains("pantheon") =>
                {
                    DesktopHint::Gnome
                }
                _ => continue,
            };
            return hint;
        }

        DesktopHint::Other
    }

    /// Helper native to this desktop
    pub fn helper(self) -> Option<Helper> {
        match self {
            DesktopHint::Kde => Some(Helper::Kdialog),
            DesktopHint::Gnome => Some(Helper::Zenity),
            DesktopHint::Mate => Some(Helper::Matedialog),
            DesktopHint::Lxqt => Some(Helper::Qarma),
            DesktopHint::Other | DesktopHint::Unknown => None,
        }
    }
}

/// Looks for helper programs on a search path
#[derive(Debug, Clone, Default)]
pub struct Prober {
    search_path: Option<OsString>,
}

impl Prober {
    /// Probe the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe an explicit `PATH`-style value instead of the inherited one
    pub fn with_search_path(path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(path.into()),
        }
    }

    pub fn search_path(&self) -> Option<&OsString> {
        self.search_path.as_ref()
    }

    /// Check every known program
    pub fn probe(&self) -> Backends {
        let mut found = Backends::default();
        if cfg!(target_os = "windows") {
            return found;
        }

        for helper in Helper::PRIORITY {
            found.set(helper, self.has_program(helper.program()));
        }
        if cfg!(target_os = "macos") {
            found.osascript = self.has_program("osascript");
        }

        debug!(
            zenity = found.zenity,
            matedialog = found.matedialog,
            qarma = found.qarma,
            kdialog = found.kdialog,
            osascript = found.osascript,
            "Probed dialog helpers"
        );
        found
    }

    /// Whether `program` resolves on the search path
    pub fn has_program(&self, program: &str) -> bool {
        let line = format!("command -v {} >/dev/null 2>&1", shell::quote(program));
        let mut exec = Executor::with_search_path(self.search_path.clone());
        exec.start(&Invocation::Shell(line));
        exec.result().exit_code == 0
    }
}
