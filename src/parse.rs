//! Raw output to typed results
//!
//! Button detection is a best-effort heuristic. Helpers print the English
//! label of the pressed button (osascript prefixes it with
//! `button returned:`), so the parser matches known labels at the end of
//! stdout. A localized or future helper printing something else falls
//! through to the exit-code table and finally to "0 is OK".

use crate::command::ButtonMap;
use crate::executor::RawOutput;
use crate::types::Button;

/// Labels checked against the end of stdout, in priority order
const LABEL_ORDER: [Button; 7] = [
    Button::Cancel,
    Button::Ok,
    Button::Yes,
    Button::No,
    Button::Abort,
    Button::Retry,
    Button::Ignore,
];

/// Converts executor output into a dialog result
pub trait ResultParser {
    type Output;

    fn parse(&self, raw: &RawOutput) -> Self::Output;
}

/// Message box answers
#[derive(Debug, Clone, Default)]
pub struct ButtonParser {
    mappings: ButtonMap,
}

impl ButtonParser {
    pub fn new(mappings: ButtonMap) -> Self {
        Self { mappings }
    }
}

impl ResultParser for ButtonParser {
    type Output = Button;

    fn parse(&self, raw: &RawOutput) -> Button {
        if raw.exit_code < 0 {
            return Button::Cancel;
        }

        for button in LABEL_ORDER {
            let answered = raw
                .stdout
                .strip_suffix('\n')
                .is_some_and(|line| line.ends_with(button.label()));
            if answered {
                return button;
            }
        }

        if let Some(button) = self.mappings.get(raw.exit_code) {
            return button;
        }

        if raw.exit_code == 0 {
            Button::Ok
        } else {
            Button::Cancel
        }
    }
}

/// One path per line
#[derive(Debug, Clone, Copy, Default)]
pub struct PathListParser;

impl ResultParser for PathListParser {
    type Output = Vec<String>;

    fn parse(&self, raw: &RawOutput) -> Vec<String> {
        if raw.exit_code < 0 {
            return Vec::new();
        }

        raw.stdout
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect()
    }
}

/// First path, or an empty string when nothing was chosen
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePathParser;

impl ResultParser for SinglePathParser {
    type Output = String;

    fn parse(&self, raw: &RawOutput) -> String {
        PathListParser
            .parse(raw)
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}

/// Just the exit code, for dialogs with nothing to report
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCodeParser;

impl ResultParser for ExitCodeParser {
    type Output = i32;

    fn parse(&self, raw: &RawOutput) -> i32 {
        raw.exit_code
    }
}
