//! Dialog request value types
//!
//! Everything a caller can ask for: icons, button sets, the buttons a user
//! can answer with, file filters, and the three request kinds.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::DialogError;

/// Icon shown next to the dialog text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Info,
    Warning,
    Error,
    Question,
}

impl Icon {
    pub const ALL: [Icon; 4] = [Icon::Info, Icon::Warning, Icon::Error, Icon::Question];
}

/// Set of buttons a message box offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Ok,
    #[default]
    OkCancel,
    YesNo,
    YesNoCancel,
    RetryCancel,
    AbortRetryIgnore,
}

impl Choice {
    pub const ALL: [Choice; 6] = [
        Choice::Ok,
        Choice::OkCancel,
        Choice::YesNo,
        Choice::YesNoCancel,
        Choice::RetryCancel,
        Choice::AbortRetryIgnore,
    ];

    /// Buttons in display order
    pub fn buttons(self) -> &'static [Button] {
        match self {
            Choice::Ok => &[Button::Ok],
            Choice::OkCancel => &[Button::Ok, Button::Cancel],
            Choice::YesNo => &[Button::Yes, Button::No],
            Choice::YesNoCancel => &[Button::Yes, Button::No, Button::Cancel],
            Choice::RetryCancel => &[Button::Retry, Button::Cancel],
            Choice::AbortRetryIgnore => &[Button::Abort, Button::Retry, Button::Ignore],
        }
    }
}

/// Button the user answered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Cancel,
    Ok,
    Yes,
    No,
    Abort,
    Retry,
    Ignore,
}

impl Button {
    /// English label as printed by the helpers
    pub fn label(self) -> &'static str {
        match self {
            Button::Cancel => "Cancel",
            Button::Ok => "OK",
            Button::Yes => "Yes",
            Button::No => "No",
            Button::Abort => "Abort",
            Button::Retry => "Retry",
            Button::Ignore => "Ignore",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named group of glob patterns, e.g. `Text Files` / `*.txt *.text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub label: String,
    pub patterns: Vec<String>,
}

impl Filter {
    pub fn new(label: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            label: label.into(),
            patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Patterns joined with `sep`
    pub fn joined(&self, sep: &str) -> String {
        self.patterns.join(sep)
    }
}

impl FromStr for Filter {
    type Err = DialogError;

    /// Parses `label=pattern [pattern...]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((label, patterns)) = s.split_once('=') else {
            return Err(DialogError::InvalidFilter(s.to_string()));
        };
        let label = label.trim();
        let patterns: Vec<String> = patterns.split_whitespace().map(String::from).collect();
        if label.is_empty() || patterns.is_empty() {
            return Err(DialogError::InvalidFilter(s.to_string()));
        }
        Ok(Self {
            label: label.to_string(),
            patterns,
        })
    }
}

/// Transient desktop notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    pub title: String,
    pub message: String,
    pub icon: Icon,
}

impl NotifyRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon,
        }
    }

    /// Notifications have no question icon
    pub fn effective_icon(&self) -> Icon {
        match self.icon {
            Icon::Question => Icon::Info,
            icon => icon,
        }
    }
}

/// Modal message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRequest {
    pub title: String,
    pub text: String,
    pub choice: Choice,
    pub icon: Icon,
}

impl MessageRequest {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        choice: Choice,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            choice,
            icon,
        }
    }
}

/// Which file dialog to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Open,
    Save,
    Folder,
}

/// File or folder selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    pub kind: FileKind,
    pub title: String,
    pub default_path: String,
    pub filters: Vec<Filter>,
    pub multiselect: bool,
    pub confirm_overwrite: bool,
}

impl FileRequest {
    pub fn new(kind: FileKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            default_path: String::new(),
            filters: Vec::new(),
            multiselect: false,
            confirm_overwrite: true,
        }
    }

    pub fn open(title: impl Into<String>) -> Self {
        Self::new(FileKind::Open, title)
    }

    pub fn save(title: impl Into<String>) -> Self {
        Self::new(FileKind::Save, title)
    }

    pub fn folder(title: impl Into<String>) -> Self {
        Self::new(FileKind::Folder, title)
    }

    pub fn default_path(mut self, path: impl Into<String>) -> Self {
        self.default_path = path.into();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Only meaningful for [`FileKind::Open`]
    pub fn multiselect(mut self, multiselect: bool) -> Self {
        self.multiselect = multiselect && self.kind == FileKind::Open;
        self
    }

    /// Only meaningful for [`FileKind::Save`]
    pub fn confirm_overwrite(mut self, confirm: bool) -> Self {
        self.confirm_overwrite = confirm;
        self
    }
}
