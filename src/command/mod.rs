//! Command building
//!
//! Turns a dialog request into something the [`Executor`](crate::executor::Executor)
//! can run for the selected [`Backend`]:
//!
//! - a shell command line for the desktop helpers and `osascript`
//!   (and for PowerShell notifications on Windows)
//! - a [`NativeRequest`] with Win32 parameters for message boxes and file
//!   dialogs on Windows
//!
//! Alongside the invocation the builder returns a [`ButtonMap`]: helpers
//! without a native yes/no/cancel primitive report the button through their
//! exit code, and the map says which code means which button.

mod kdialog;
mod osascript;
mod win32;
mod zenity;

use crate::backend::Backend;
use crate::config::DialogConfig;
use crate::types::{Button, FileRequest, Icon, MessageRequest, NotifyRequest};

pub use win32::NativeRequest;

/// What the executor runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Command line for `/bin/sh -c` (or program + raw arguments on Windows)
    Shell(String),
    /// Win32 dialog call made on a worker thread
    Native(NativeRequest),
}

impl Invocation {
    pub fn command_line(&self) -> Option<&str> {
        match self {
            Invocation::Shell(line) => Some(line),
            Invocation::Native(_) => None,
        }
    }
}

/// Exit code to button table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonMap(Vec<(i32, Button)>);

impl ButtonMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same code replace earlier ones
    pub fn insert(&mut self, exit_code: i32, button: Button) {
        self.0.retain(|(code, _)| *code != exit_code);
        self.0.push((exit_code, button));
    }

    pub fn get(&self, exit_code: i32) -> Option<Button> {
        self.0
            .iter()
            .find(|(code, _)| *code == exit_code)
            .map(|(_, button)| *button)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(i32, Button); N]> for ButtonMap {
    fn from(entries: [(i32, Button); N]) -> Self {
        let mut map = ButtonMap::new();
        for (code, button) in entries {
            map.insert(code, button);
        }
        map
    }
}

/// Output of the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    pub invocation: Invocation,
    pub mappings: ButtonMap,
}

impl BuiltCommand {
    pub fn shell(line: String) -> Self {
        Self {
            invocation: Invocation::Shell(line),
            mappings: ButtonMap::new(),
        }
    }

    pub fn with_mappings(mut self, mappings: ButtonMap) -> Self {
        self.mappings = mappings;
        self
    }
}

/// Anything that can be turned into a runnable dialog command
pub trait CommandSource {
    /// `None` when `backend` cannot show this dialog
    fn build(&self, backend: Backend, config: &DialogConfig) -> Option<BuiltCommand>;
}

impl CommandSource for NotifyRequest {
    fn build(&self, backend: Backend, config: &DialogConfig) -> Option<BuiltCommand> {
        match backend {
            Backend::Desktop(helper) if helper.speaks_zenity() => {
                Some(zenity::notify(helper, self))
            }
            Backend::Desktop(_) => Some(kdialog::notify(self, config)),
            Backend::Osascript => Some(osascript::notify(self)),
            Backend::Win32 => Some(win32::notify(self, config)),
            Backend::Unavailable => None,
        }
    }
}

impl CommandSource for MessageRequest {
    fn build(&self, backend: Backend, config: &DialogConfig) -> Option<BuiltCommand> {
        match backend {
            Backend::Desktop(helper) if helper.speaks_zenity() => {
                Some(zenity::message(helper, self, config))
            }
            Backend::Desktop(_) => Some(kdialog::message(self)),
            Backend::Osascript => Some(osascript::message(self)),
            Backend::Win32 => Some(win32::message(self)),
            Backend::Unavailable => None,
        }
    }
}

impl CommandSource for FileRequest {
    fn build(&self, backend: Backend, _config: &DialogConfig) -> Option<BuiltCommand> {
        match backend {
            Backend::Desktop(helper) if helper.speaks_zenity() => Some(zenity::file(helper, self)),
            Backend::Desktop(_) => Some(kdialog::file(self)),
            Backend::Osascript => Some(osascript::file(self)),
            Backend::Win32 => Some(win32::file(self)),
            Backend::Unavailable => None,
        }
    }
}

/// Icon vocabulary shared by zenity and kdialog
fn icon_name(icon: Icon) -> &'static str {
    match icon {
        Icon::Info => "information",
        Icon::Warning => "warning",
        Icon::Error => "error",
        Icon::Question => "question",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Helper;
    use crate::types::Choice;

    #[test]
    fn test_button_map_insert_replaces() {
        let mut map = ButtonMap::from([(0, Button::Yes), (1, Button::No)]);
        map.insert(1, Button::Cancel);
        assert_eq!(map.get(0), Some(Button::Yes));
        assert_eq!(map.get(1), Some(Button::Cancel));
        assert_eq!(map.get(2), None);
    }

    #[test]
    fn test_unavailable_backend_builds_nothing() {
        let config = DialogConfig::default();
        let msg = MessageRequest::new("t", "x", Choice::Ok, Icon::Info);
        assert!(msg.build(Backend::Unavailable, &config).is_none());
        let note = NotifyRequest::new("t", "x", Icon::Info);
        assert!(note.build(Backend::Unavailable, &config).is_none());
        let file = FileRequest::open("t");
        assert!(file.build(Backend::Unavailable, &config).is_none());
    }

    #[test]
    fn test_zenity_clones_use_own_program_name() {
        let config = DialogConfig::default();
        let msg = MessageRequest::new("t", "x", Choice::Ok, Icon::Info);
        for helper in [Helper::Zenity, Helper::Matedialog, Helper::Qarma] {
            let built = msg.build(Backend::Desktop(helper), &config).unwrap();
            let line = built.invocation.command_line().unwrap().to_string();
            assert!(line.starts_with(helper.program()), "{line}");
            assert!(line.contains("--info"), "{line}");
        }
    }

    #[test]
    fn test_every_backend_handles_every_request() {
        let config = DialogConfig::default();
        let backends = [
            Backend::Win32,
            Backend::Osascript,
            Backend::Desktop(Helper::Zenity),
            Backend::Desktop(Helper::Kdialog),
        ];
        for backend in backends {
            for choice in Choice::ALL {
                for icon in Icon::ALL {
                    let msg = MessageRequest::new("t", "x", choice, icon);
                    assert!(msg.build(backend, &config).is_some());
                }
            }
            assert!(FileRequest::save("s").build(backend, &config).is_some());
        }
    }
}
