use std::time::Duration;

use super::Dialog;
use crate::parse::ButtonParser;
use crate::session::Session;
use crate::types::{Button, Choice, Icon, MessageRequest};

/// Message box with a fixed button set
#[derive(Debug)]
pub struct Message {
    inner: Dialog<ButtonParser>,
}

impl Message {
    pub fn new(session: &Session, request: &MessageRequest) -> Self {
        Self {
            inner: Dialog::launch(session, request, ButtonParser::new),
        }
    }

    /// Shorthand for [`Message::new`] with a fresh request
    pub fn show(session: &Session, title: &str, text: &str, choice: Choice, icon: Icon) -> Self {
        Self::new(session, &MessageRequest::new(title, text, choice, icon))
    }

    pub fn ready(&mut self, timeout: Duration) -> bool {
        self.inner.ready(timeout)
    }

    /// Block until the user answers. Cancel if no backend was available.
    pub fn result(&mut self) -> Button {
        self.inner.result()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::backend::{DesktopHint, Helper, Platform, Prober};
    use crate::config::DialogConfig;
    use crate::testing::install_fake;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        Session::with_parts(
            DialogConfig::default(),
            Prober::with_search_path(dir.path()),
            Platform::Unix,
            DesktopHint::Unknown,
        )
    }

    #[test]
    fn test_no_backend_is_cancel() {
        let tmp = TempDir::new().unwrap();
        let mut msg = Message::show(&session(&tmp), "T", "B", Choice::YesNo, Icon::Info);
        assert!(msg.ready(Duration::ZERO));
        assert_eq!(msg.result(), Button::Cancel);
    }

    #[test]
    fn test_fake_zenity_answers_yes() {
        let tmp = TempDir::new().unwrap();
        install_fake(tmp.path(), "zenity", "echo Yes");
        let s = session(&tmp);
        assert_eq!(s.backend(), crate::backend::Backend::Desktop(Helper::Zenity));

        let mut msg = Message::show(&s, "T", "B", Choice::YesNoCancel, Icon::Question);
        assert_eq!(msg.result(), Button::Yes);
        // Repeated calls give the same answer
        assert_eq!(msg.result(), Button::Yes);
    }

    #[test]
    fn test_fake_zenity_receives_quoted_arguments() {
        let tmp = TempDir::new().unwrap();
        // Echo back the argument after --title, then answer OK
        install_fake(
            tmp.path(),
            "zenity",
            r#"while [ $# -gt 0 ]; do [ "$1" = "--title" ] && printf '%s\n' "$2"; shift; done; exit 0"#,
        );
        let s = session(&tmp);
        let request = MessageRequest::new(r#"It's "odd" \ $HOME"#, "B", Choice::OkCancel, Icon::Info);
        let mut msg = Message::new(&s, &request);
        let raw = msg.inner.raw();
        assert_eq!(raw.stdout, "It's \"odd\" \\ $HOME\n");
        assert_eq!(msg.result(), Button::Ok);
    }

    #[test]
    fn test_fake_kdialog_exit_code_table() {
        let tmp = TempDir::new().unwrap();
        install_fake(tmp.path(), "kdialog", "exit 1");
        let s = session(&tmp);

        let mut msg = Message::show(&s, "T", "B", Choice::YesNoCancel, Icon::Info);
        assert_eq!(msg.result(), Button::No);

        let mut msg = Message::show(&s, "T", "B", Choice::AbortRetryIgnore, Icon::Info);
        assert_eq!(msg.result(), Button::Retry);

        let mut msg = Message::show(&s, "T", "B", Choice::OkCancel, Icon::Info);
        assert_eq!(msg.result(), Button::Cancel);
    }
}
