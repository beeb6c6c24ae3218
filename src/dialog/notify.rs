use std::time::Duration;

use super::Dialog;
use crate::parse::ExitCodeParser;
use crate::session::Session;
use crate::types::{Icon, NotifyRequest};

/// Desktop notification. Nothing to answer; only completion can be observed.
#[derive(Debug)]
pub struct Notify {
    inner: Dialog<ExitCodeParser>,
}

impl Notify {
    pub fn new(session: &Session, request: &NotifyRequest) -> Self {
        Self {
            inner: Dialog::launch(session, request, |_| ExitCodeParser),
        }
    }

    /// Shorthand for [`Notify::new`] with a fresh request
    pub fn show(session: &Session, title: &str, message: &str, icon: Icon) -> Self {
        Self::new(session, &NotifyRequest::new(title, message, icon))
    }

    pub fn ready(&mut self, timeout: Duration) -> bool {
        self.inner.ready(timeout)
    }

    /// Block until the helper exits and return its exit code (-1 if it never ran)
    pub fn wait(&mut self) -> i32 {
        self.inner.result()
    }
}
