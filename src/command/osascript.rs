//! AppleScript via `osascript`
//!
//! Each script line becomes its own `-e` argument. `display dialog` prints
//! `button returned:<Label>` and fails with exit code 1 when the cancel
//! button is pressed, so the map sends code 1 to whatever button plays the
//! cancel role for the set.

use std::path::Path;

use super::{BuiltCommand, ButtonMap};
use crate::shell::{applescript_quote, join, quote};
use crate::types::{Button, Choice, FileKind, FileRequest, Icon, MessageRequest, NotifyRequest};

/// Icon file shipped with macOS, referenced by name
fn bundled_icon(name: &str) -> String {
    format!(
        "alias ((path to library folder from system domain) as text & \
         \"CoreServices:CoreTypes.bundle:Contents:Resources:{name}.icns\")"
    )
}

fn osascript<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = vec!["osascript".to_string()];
    for line in lines {
        words.push("-e".to_string());
        words.push(quote(line.as_ref()));
    }
    join(words)
}

pub(super) fn notify(req: &NotifyRequest) -> BuiltCommand {
    let script = format!(
        "display notification {} with title {}",
        applescript_quote(&req.message),
        applescript_quote(&req.title)
    );
    BuiltCommand::shell(osascript([script]))
}

pub(super) fn message(req: &MessageRequest) -> BuiltCommand {
    let (default, cancel) = match req.choice {
        Choice::Ok => (Button::Ok, Button::Ok),
        Choice::OkCancel => (Button::Ok, Button::Cancel),
        Choice::YesNo => (Button::Yes, Button::No),
        Choice::YesNoCancel => (Button::Yes, Button::Cancel),
        Choice::RetryCancel => (Button::Retry, Button::Cancel),
        Choice::AbortRetryIgnore => (Button::Abort, Button::Retry),
    };

    let buttons = req
        .choice
        .buttons()
        .iter()
        .map(|b| applescript_quote(b.label()))
        .collect::<Vec<_>>()
        .join(", ");

    let icon = match req.icon {
        Icon::Info => bundled_icon("ToolBarInfo"),
        Icon::Warning => "caution".to_string(),
        Icon::Error => "stop".to_string(),
        Icon::Question => bundled_icon("GenericQuestionMarkIcon"),
    };

    let script = format!(
        "display dialog {} with title {} buttons {{{}}} default button {} cancel button {} with icon {}",
        applescript_quote(&req.text),
        applescript_quote(&req.title),
        buttons,
        applescript_quote(default.label()),
        applescript_quote(cancel.label()),
        icon
    );

    BuiltCommand::shell(osascript([script])).with_mappings(ButtonMap::from([(1, cancel)]))
}

pub(super) fn file(req: &FileRequest) -> BuiltCommand {
    let mut choose = String::from("set ret to choose");
    match req.kind {
        FileKind::Open => {
            choose.push_str(" file");
            if req.multiselect {
                choose.push_str(" with multiple selections allowed");
            }
        }
        FileKind::Save => choose.push_str(" file name"),
        FileKind::Folder => choose.push_str(" folder"),
    }

    let (location, name) = split_default_path(req);
    if let Some(location) = location {
        choose.push_str(&format!(
            " default location (POSIX file {})",
            applescript_quote(&location)
        ));
    }
    if let Some(name) = name {
        choose.push_str(&format!(" default name {}", applescript_quote(&name)));
    }

    choose.push_str(&format!(" with prompt {}", applescript_quote(&req.title)));

    if req.kind == FileKind::Open {
        if let Some(types) = type_list(req) {
            choose.push_str(&format!(" of type {{{types}}}"));
        }
    }

    let mut lines = vec![choose];
    if req.kind == FileKind::Open && req.multiselect {
        lines.extend(
            [
                "set s to \"\"",
                "repeat with i in ret",
                "set s to s & (POSIX path of i) & \"\\n\"",
                "end repeat",
                "s",
            ]
            .map(String::from),
        );
    } else {
        lines.push("POSIX path of ret".to_string());
    }

    BuiltCommand::shell(osascript(lines))
}

/// Existing directories become the default location; otherwise the file name
/// is the default name (save dialogs only) and its parent the location.
fn split_default_path(req: &FileRequest) -> (Option<String>, Option<String>) {
    if req.default_path.is_empty() {
        return (None, None);
    }

    let path = Path::new(&req.default_path);
    if req.kind == FileKind::Folder || path.is_dir() {
        return (Some(req.default_path.clone()), None);
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().into_owned());
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|_| req.kind == FileKind::Save);
    (parent, name)
}

/// `of type` list from `*.ext` patterns.
///
/// macOS gives the user no way to switch filters, so any catch-all pattern
/// disables filtering altogether.
fn type_list(req: &FileRequest) -> Option<String> {
    let mut types = Vec::new();
    for pattern in req.filters.iter().flat_map(|f| f.patterns.iter()) {
        if pattern == "*" || pattern == "*.*" {
            return None;
        }
        if let Some(ext) = pattern.strip_prefix("*.") {
            types.push(applescript_quote(ext));
        }
    }
    (!types.is_empty()).then(|| types.join(","))
}
