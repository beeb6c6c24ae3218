//! Dialog facades
//!
//! Each facade pairs a request ([`CommandSource`]) with a [`ResultParser`]
//! on top of one [`Executor`]. The command starts as soon as the facade is
//! constructed; callers poll with `ready` or block in `result`.
//!
//! [`Dialog`] is the generic form and can be used directly with custom
//! sources and parsers.

mod file;
mod message;
mod notify;

pub use file::{OpenFile, SaveFile, SelectFolder};
pub use message::Message;
pub use notify::Notify;

use std::time::Duration;

use tracing::debug;

use crate::command::{ButtonMap, CommandSource};
use crate::executor::{Executor, RawOutput};
use crate::parse::ResultParser;
use crate::session::Session;

/// A running dialog
#[derive(Debug)]
pub struct Dialog<P> {
    executor: Executor,
    parser: P,
}

impl<P: ResultParser> Dialog<P> {
    /// Build the command for the session's backend and start it.
    ///
    /// `parser` receives the exit-code table produced by the builder. When
    /// the backend cannot show this dialog nothing is launched and the
    /// dialog is immediately ready with a failed (-1) result.
    pub fn launch<S, F>(session: &Session, source: &S, parser: F) -> Self
    where
        S: CommandSource + ?Sized,
        F: FnOnce(ButtonMap) -> P,
    {
        let mut executor = session.executor();

        let parser = match source.build(session.backend(), session.config()) {
            Some(built) => {
                executor.start(&built.invocation);
                parser(built.mappings)
            }
            None => {
                debug!(backend = %session.backend(), "No dialog backend for request, skipping");
                executor.skip();
                parser(ButtonMap::new())
            }
        };

        Self { executor, parser }
    }

    /// Wait at most `timeout` for the user
    pub fn ready(&mut self, timeout: Duration) -> bool {
        self.executor.ready(timeout)
    }

    /// Block until the user answers, then parse
    pub fn result(&mut self) -> P::Output {
        let raw = self.executor.result();
        self.parser.parse(&raw)
    }

    /// Unparsed output, blocking like [`Dialog::result`]
    pub fn raw(&mut self) -> RawOutput {
        self.executor.result()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::backend::{Backend, DesktopHint, Platform, Prober};
    use crate::command::{BuiltCommand, Invocation};
    use crate::config::DialogConfig;
    use crate::parse::PathListParser;
    use tempfile::TempDir;

    /// Runs an arbitrary shell line regardless of backend
    struct Script(&'static str);

    impl CommandSource for Script {
        fn build(&self, _backend: Backend, _config: &DialogConfig) -> Option<BuiltCommand> {
            Some(BuiltCommand::shell(self.0.to_string()))
        }
    }

    fn empty_session(dir: &TempDir) -> Session {
        Session::with_parts(
            DialogConfig::default(),
            Prober::with_search_path(dir.path()),
            Platform::Unix,
            DesktopHint::Unknown,
        )
    }

    #[test]
    fn test_custom_source_and_parser() {
        let tmp = TempDir::new().unwrap();
        let session = empty_session(&tmp);
        let mut dialog = Dialog::launch(&session, &Script("echo /a; echo /b"), |_| PathListParser);
        assert_eq!(dialog.result(), vec!["/a", "/b"]);
        assert_eq!(dialog.raw().exit_code, 0);
    }

    #[test]
    fn test_source_declining_backend_is_noop() {
        struct Never;
        impl CommandSource for Never {
            fn build(&self, _: Backend, _: &DialogConfig) -> Option<BuiltCommand> {
                None
            }
        }

        let tmp = TempDir::new().unwrap();
        let session = empty_session(&tmp);
        let mut dialog = Dialog::launch(&session, &Never, |_| PathListParser);
        assert!(dialog.ready(Duration::ZERO));
        assert!(dialog.result().is_empty());
        assert_eq!(dialog.raw(), RawOutput::failed());
    }

    #[test]
    fn test_parser_receives_builder_mappings() {
        struct Mapped;
        impl CommandSource for Mapped {
            fn build(&self, _: Backend, _: &DialogConfig) -> Option<BuiltCommand> {
                Some(BuiltCommand {
                    invocation: Invocation::Shell("exit 2".to_string()),
                    mappings: ButtonMap::from([(2, crate::types::Button::Ignore)]),
                })
            }
        }

        let tmp = TempDir::new().unwrap();
        let session = empty_session(&tmp);
        let mut dialog =
            Dialog::launch(&session, &Mapped, crate::parse::ButtonParser::new);
        assert_eq!(dialog.result(), crate::types::Button::Ignore);
    }
}
