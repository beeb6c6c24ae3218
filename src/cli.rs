//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use portable_dialogs::{Choice, Filter, Helper, Icon};
use std::io;
use std::path::PathBuf;

/// Show notifications, message boxes and file dialogs from the shell
#[derive(Parser, Debug)]
#[command(name = "pdialog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/portable-dialogs/config.toml)
    #[arg(short, long, env = "PDIALOG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Helper to prefer over the desktop default (zenity, matedialog, qarma, kdialog)
    #[arg(long, global = true)]
    pub helper: Option<Helper>,

    /// Log every helper command line
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which helpers are installed and which backend would be used
    Probe,

    /// Show a desktop notification
    Notify {
        title: String,
        message: String,

        #[arg(short, long, value_enum, default_value_t = Icon::Info)]
        icon: Icon,

        /// Wait for the helper to exit before returning
        #[arg(short, long, default_value_t = false)]
        wait: bool,
    },

    /// Ask a question with a message box and print the button pressed
    ///
    /// Exits 0 for OK/Yes/Retry/Ignore, 1 for Cancel/No/Abort.
    Message {
        title: String,
        text: String,

        #[arg(short, long, value_enum, default_value_t = Choice::OkCancel)]
        buttons: Choice,

        #[arg(short, long, value_enum, default_value_t = Icon::Info)]
        icon: Icon,
    },

    /// Pick one or more existing files
    Open {
        #[arg(short, long, default_value = "Open")]
        title: String,

        /// Starting directory or file
        #[arg(short, long)]
        path: Option<String>,

        /// File filter, e.g. 'Images=*.png *.jpg' (repeatable)
        #[arg(short, long)]
        filter: Vec<Filter>,

        /// Allow selecting several files
        #[arg(short, long, default_value_t = false)]
        multiple: bool,
    },

    /// Choose a file name to save to
    Save {
        #[arg(short, long, default_value = "Save")]
        title: String,

        /// Suggested directory or file name
        #[arg(short, long)]
        path: Option<String>,

        /// File filter, e.g. 'Text=*.txt' (repeatable)
        #[arg(short, long)]
        filter: Vec<Filter>,

        /// Do not ask before overwriting an existing file
        #[arg(long, default_value_t = false)]
        no_confirm: bool,
    },

    /// Pick a directory
    Folder {
        #[arg(short, long, default_value = "Select Folder")]
        title: String,

        /// Starting directory
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print an example config file
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "pdialog", &mut io::stdout());
}
