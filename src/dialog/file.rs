use std::time::Duration;

use super::Dialog;
use crate::parse::{PathListParser, SinglePathParser};
use crate::session::Session;
use crate::types::{FileKind, FileRequest};

/// File open dialog; several paths when multiselect is on
#[derive(Debug)]
pub struct OpenFile {
    inner: Dialog<PathListParser>,
}

impl OpenFile {
    pub fn new(session: &Session, request: &FileRequest) -> Self {
        debug_assert_eq!(request.kind, FileKind::Open);
        Self {
            inner: Dialog::launch(session, request, |_| PathListParser),
        }
    }

    pub fn ready(&mut self, timeout: Duration) -> bool {
        self.inner.ready(timeout)
    }

    /// Selected paths; empty when cancelled
    pub fn result(&mut self) -> Vec<String> {
        self.inner.result()
    }
}

/// File save dialog
#[derive(Debug)]
pub struct SaveFile {
    inner: Dialog<SinglePathParser>,
}

impl SaveFile {
    pub fn new(session: &Session, request: &FileRequest) -> Self {
        debug_assert_eq!(request.kind, FileKind::Save);
        Self {
            inner: Dialog::launch(session, request, |_| SinglePathParser),
        }
    }

    pub fn ready(&mut self, timeout: Duration) -> bool {
        self.inner.ready(timeout)
    }

    /// Chosen path; empty when cancelled
    pub fn result(&mut self) -> String {
        self.inner.result()
    }
}

/// Folder selection dialog
#[derive(Debug)]
pub struct SelectFolder {
    inner: Dialog<SinglePathParser>,
}

impl SelectFolder {
    pub fn new(session: &Session, request: &FileRequest) -> Self {
        debug_assert_eq!(request.kind, FileKind::Folder);
        Self {
            inner: Dialog::launch(session, request, |_| SinglePathParser),
        }
    }

    pub fn ready(&mut self, timeout: Duration) -> bool {
        self.inner.ready(timeout)
    }

    /// Chosen folder; empty when cancelled
    pub fn result(&mut self) -> String {
        self.inner.result()
    }
}
