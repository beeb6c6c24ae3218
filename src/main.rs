//! pdialog - desktop dialogs from the command line
//!
//! Thin wrapper over the `portable_dialogs` library:
//!   pdialog probe                      # show detected helpers
//!   pdialog message "Title" "Text"     # prints the button, exit 1 on Cancel/No/Abort
//!   pdialog open --multiple            # prints one path per line

mod cli;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::Result;
use portable_dialogs::{
    Button, DialogConfig, FileRequest, Message, MessageRequest, Notify, NotifyRequest, OpenFile,
    SaveFile, SelectFolder, Session,
};
use serde_json::json;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often `message` logs that it is still waiting
const WAIT_LOG_INTERVAL: Duration = Duration::from_secs(1);

/// Set up stderr logging, plus a rolling log file when `log_dir` is given
fn init_logging(log_level: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let log_filter = format!("portable_dialogs={log_level},pdialog={log_level}");

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "pdialog.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Config from `--config` or the default location, with CLI overrides applied
fn load_config(cli: &Cli) -> DialogConfig {
    let path = cli.config.clone().unwrap_or_else(DialogConfig::default_path);
    let mut config = DialogConfig::load_from_path(path);

    if cli.verbose {
        config.verbose = true;
    }
    if cli.helper.is_some() {
        config.preferred_helper = cli.helper;
    }
    config
}

fn print_paths(paths: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(paths)?);
    } else {
        for path in paths {
            println!("{path}");
        }
    }
    Ok(())
}

/// Success unless the answer was a refusal
fn button_exit_code(button: Button) -> ExitCode {
    match button {
        Button::Ok | Button::Yes | Button::Retry | Button::Ignore => ExitCode::SUCCESS,
        Button::Cancel | Button::No | Button::Abort => ExitCode::FAILURE,
    }
}

fn run_probe(session: &Session, json: bool) -> Result<ExitCode> {
    let backends = session.backends();

    if json {
        let report = json!({
            "backend": session.backend().to_string(),
            "available": session.available(),
            "desktop": format!("{:?}", session.desktop_hint()),
            "helpers": backends,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Backend: {}", session.backend());
        println!("Desktop: {:?}", session.desktop_hint());
        for helper in portable_dialogs::Helper::PRIORITY {
            let mark = if backends.has(helper) { "found" } else { "-" };
            println!("  {:<12} {}", helper.program(), mark);
        }
        if cfg!(target_os = "macos") {
            let mark = if backends.osascript { "found" } else { "-" };
            println!("  {:<12} {}", "osascript", mark);
        }
    }

    Ok(if session.available() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_message(session: &Session, request: &MessageRequest, json: bool) -> Result<ExitCode> {
    let mut message = Message::new(session, request);
    while !message.ready(WAIT_LOG_INTERVAL) {
        tracing::info!("Waiting for user input...");
    }

    let button = message.result();
    if json {
        println!("{}", serde_json::to_string(&json!({ "button": button }))?);
    } else {
        println!("{button}");
    }
    Ok(button_exit_code(button))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Subcommands that never touch the backends
    match &cli.command {
        Commands::Completions { shell } => {
            cli::print_completions(*shell);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Config => {
            print!("{}", DialogConfig::example());
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    color_eyre::install()?;
    let _guard = init_logging(&cli.log_level, cli.log_dir.as_deref())?;

    tracing::debug!("Starting pdialog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli);
    let session = Session::new(config);
    if !session.available() {
        tracing::warn!("No dialog backend found; dialogs will be cancelled");
    }

    match cli.command {
        Commands::Probe => run_probe(&session, cli.json),
        Commands::Notify {
            title,
            message,
            icon,
            wait,
        } => {
            let mut notify = Notify::new(&session, &NotifyRequest::new(title, message, icon));
            if wait {
                let code = notify.wait();
                tracing::debug!(exit_code = code, "Notification helper exited");
            } else {
                // Give the helper a moment to start before the process exits
                notify.ready(Duration::from_millis(500));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Message {
            title,
            text,
            buttons,
            icon,
        } => run_message(
            &session,
            &MessageRequest::new(title, text, buttons, icon),
            cli.json,
        ),
        Commands::Open {
            title,
            path,
            filter,
            multiple,
        } => {
            let request = FileRequest::open(title)
                .default_path(path.unwrap_or_default())
                .filters(filter)
                .multiselect(multiple);
            let paths = OpenFile::new(&session, &request).result();
            print_paths(&paths, cli.json)?;
            Ok(if paths.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Save {
            title,
            path,
            filter,
            no_confirm,
        } => {
            let request = FileRequest::save(title)
                .default_path(path.unwrap_or_default())
                .filters(filter)
                .confirm_overwrite(!no_confirm);
            single_path(SaveFile::new(&session, &request).result(), cli.json)
        }
        Commands::Folder { title, path } => {
            let request = FileRequest::folder(title).default_path(path.unwrap_or_default());
            single_path(SelectFolder::new(&session, &request).result(), cli.json)
        }
        Commands::Config | Commands::Completions { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn single_path(path: String, json: bool) -> Result<ExitCode> {
    if path.is_empty() {
        if json {
            println!("null");
        }
        return Ok(ExitCode::FAILURE);
    }

    if json {
        println!("{}", serde_json::to_string(&path)?);
    } else {
        println!("{path}");
    }
    Ok(ExitCode::SUCCESS)
}
