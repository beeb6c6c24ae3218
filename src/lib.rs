// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::missing_panics_doc)] // Internal functions don't need # Panics docs
#![allow(clippy::must_use_candidate)] // Not all getters need #[must_use]
#![allow(clippy::module_name_repetitions)] // e.g., DialogConfig in config module is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around KDialog, AppleScript, etc.
#![allow(clippy::struct_excessive_bools)] // Backends is a set of flags
#![allow(clippy::cast_possible_truncation)] // We're careful with our casts
#![allow(clippy::cast_possible_wrap)] // Win32 return codes fit in i32
#![allow(clippy::match_same_arms)] // Explicit arms are clearer than combined patterns
#![allow(clippy::needless_pass_by_value)] // PathBuf by value is fine for config loading
#![allow(clippy::trivially_copy_pass_by_ref)] // &self on Copy types follows Rust conventions

//! portable-dialogs - notifications, message boxes and file dialogs
//!
//! Shows native-looking dialogs by driving whatever the system offers:
//! `zenity`, `matedialog`, `qarma` or `kdialog` on Linux and the BSDs,
//! `osascript` on macOS, and the Win32 API on Windows.
//!
//! ```no_run
//! use portable_dialogs::{Button, Choice, DialogConfig, Icon, Message, Session};
//!
//! let session = Session::new(DialogConfig::load());
//! let mut msg = Message::show(&session, "Quit", "Really quit?", Choice::YesNo, Icon::Question);
//! if msg.result() == Button::Yes {
//!     // ...
//! }
//! ```
//!
//! Dialogs are asynchronous: constructing one launches it, `ready` polls
//! with a timeout and `result` blocks. With no usable backend every dialog
//! is immediately ready and answers Cancel (or an empty path).

pub mod backend;
pub mod command;
pub mod config;
pub mod dialog;
pub mod errors;
pub mod executor;
#[cfg(target_os = "windows")]
mod native;
pub mod parse;
pub mod session;
pub mod shell;
#[cfg(all(test, unix))]
mod testing;
pub mod types;

pub use backend::{Backend, Backends, DesktopHint, Helper, Platform, Prober};
pub use command::{BuiltCommand, ButtonMap, CommandSource, Invocation};
pub use config::DialogConfig;
pub use dialog::{Dialog, Message, Notify, OpenFile, SaveFile, SelectFolder};
pub use errors::{DialogError, Result};
pub use executor::{Executor, RawOutput};
pub use parse::ResultParser;
pub use session::Session;
pub use types::{
    Button, Choice, FileKind, FileRequest, Filter, Icon, MessageRequest, NotifyRequest,
};
