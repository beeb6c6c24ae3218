//! kdialog command lines
//!
//! kdialog has no yes/no/cancel buttons with arbitrary labels and prints
//! nothing for message boxes, so button sets are emulated with label
//! overrides and the answer is read from the exit code (0, 1, 2 for the
//! first, second and third button).

use super::{icon_name, BuiltCommand, ButtonMap};
use crate::config::DialogConfig;
use crate::shell::{join, quote};
use crate::types::{Button, Choice, FileKind, FileRequest, Icon, MessageRequest, NotifyRequest};

pub(super) fn notify(req: &NotifyRequest, config: &DialogConfig) -> BuiltCommand {
    BuiltCommand::shell(join([
        "kdialog".to_string(),
        "--icon".to_string(),
        icon_name(req.effective_icon()).to_string(),
        "--title".to_string(),
        quote(&req.title),
        "--passivepopup".to_string(),
        quote(&req.message),
        config.notification_secs.to_string(),
    ]))
}

pub(super) fn message(req: &MessageRequest) -> BuiltCommand {
    let mut words = vec!["kdialog".to_string()];

    if req.choice == Choice::Ok {
        words.push(
            match req.icon {
                Icon::Error => "--error",
                Icon::Warning => "--sorry",
                Icon::Info | Icon::Question => "--msgbox",
            }
            .to_string(),
        );
    } else {
        let warning = matches!(req.icon, Icon::Warning | Icon::Error);
        let three = req.choice.buttons().len() == 3;
        words.push(format!(
            "--{}yesno{}",
            if warning { "warning" } else { "" },
            if three { "cancel" } else { "" }
        ));
    }

    words.extend([quote(&req.text), "--title".to_string(), quote(&req.title)]);

    // Label overrides must come after the dialog flag
    let labels: &[(&str, Button)] = match req.choice {
        Choice::OkCancel => &[("--yes-label", Button::Ok), ("--no-label", Button::Cancel)],
        Choice::RetryCancel => &[("--yes-label", Button::Retry), ("--no-label", Button::Cancel)],
        Choice::AbortRetryIgnore => &[
            ("--yes-label", Button::Abort),
            ("--no-label", Button::Retry),
            ("--cancel-label", Button::Ignore),
        ],
        Choice::Ok | Choice::YesNo | Choice::YesNoCancel => &[],
    };
    for (flag, button) in labels {
        words.push((*flag).to_string());
        words.push(button.label().to_string());
    }

    let mut mappings = ButtonMap::new();
    if req.choice != Choice::Ok {
        for (code, button) in req.choice.buttons().iter().enumerate() {
            mappings.insert(code as i32, *button);
        }
    }

    BuiltCommand::shell(join(words)).with_mappings(mappings)
}

pub(super) fn file(req: &FileRequest) -> BuiltCommand {
    let mut words = vec!["kdialog".to_string()];

    words.push(
        match req.kind {
            FileKind::Open => "--getopenfilename",
            FileKind::Save => "--getsavefilename",
            FileKind::Folder => "--getexistingdirectory",
        }
        .to_string(),
    );
    if req.multiselect {
        words.extend(["--multiple", "--separate-output"].map(String::from));
    }

    words.push(quote(&req.default_path));

    if req.kind != FileKind::Folder && !req.filters.is_empty() {
        let filter = req
            .filters
            .iter()
            .map(|f| format!("{} ({})", f.label, f.joined(" ")))
            .collect::<Vec<_>>()
            .join(" | ");
        words.push(quote(&filter));
    }

    words.extend(["--title".to_string(), quote(&req.title)]);

    BuiltCommand::shell(join(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Filter;

    fn words(built: &BuiltCommand) -> Vec<String> {
        shell_words::split(built.invocation.command_line().unwrap()).unwrap()
    }

    #[test]
    fn test_message_flags() {
        let cases = [
            (Choice::Ok, Icon::Info, "--msgbox"),
            (Choice::Ok, Icon::Question, "--msgbox"),
            (Choice::Ok, Icon::Warning, "--sorry"),
            (Choice::Ok, Icon::Error, "--error"),
            (Choice::OkCancel, Icon::Info, "--yesno"),
            (Choice::YesNo, Icon::Question, "--yesno"),
            (Choice::YesNo, Icon::Warning, "--warningyesno"),
            (Choice::YesNoCancel, Icon::Info, "--yesnocancel"),
            (Choice::YesNoCancel, Icon::Error, "--warningyesnocancel"),
            (Choice::RetryCancel, Icon::Info, "--yesno"),
            (Choice::AbortRetryIgnore, Icon::Warning, "--warningyesnocancel"),
        ];
        for (choice, icon, flag) in cases {
            let req = MessageRequest::new("T", "B", choice, icon);
            let w = words(&message(&req));
            assert_eq!(w[1], flag, "{choice:?}/{icon:?}");
            assert_eq!(w[2], "B");
        }
    }

    #[test]
    fn test_message_every_choice_and_icon() {
        for choice in Choice::ALL {
            for icon in Icon::ALL {
                let req = MessageRequest::new("T", "B", choice, icon);
                let built = message(&req);
                let w = words(&built);

                let warning = matches!(icon, Icon::Warning | Icon::Error);
                let three = matches!(choice, Choice::YesNoCancel | Choice::AbortRetryIgnore);
                let flag = match (choice, icon) {
                    (Choice::Ok, Icon::Error) => "--error",
                    (Choice::Ok, Icon::Warning) => "--sorry",
                    (Choice::Ok, Icon::Info | Icon::Question) => "--msgbox",
                    _ => match (warning, three) {
                        (false, false) => "--yesno",
                        (true, false) => "--warningyesno",
                        (false, true) => "--yesnocancel",
                        (true, true) => "--warningyesnocancel",
                    },
                };
                assert_eq!(w[..5], ["kdialog", flag, "B", "--title", "T"], "{choice:?}/{icon:?}");

                let labels: &[&str] = match choice {
                    Choice::OkCancel => &["--yes-label", "OK", "--no-label", "Cancel"],
                    Choice::RetryCancel => &["--yes-label", "Retry", "--no-label", "Cancel"],
                    Choice::AbortRetryIgnore => &[
                        "--yes-label",
                        "Abort",
                        "--no-label",
                        "Retry",
                        "--cancel-label",
                        "Ignore",
                    ],
                    Choice::Ok | Choice::YesNo | Choice::YesNoCancel => &[],
                };
                assert_eq!(&w[5..], labels, "{choice:?}/{icon:?}");

                let table: &[Button] = match choice {
                    Choice::Ok => &[],
                    Choice::OkCancel => &[Button::Ok, Button::Cancel],
                    Choice::YesNo => &[Button::Yes, Button::No],
                    Choice::YesNoCancel => &[Button::Yes, Button::No, Button::Cancel],
                    Choice::RetryCancel => &[Button::Retry, Button::Cancel],
                    Choice::AbortRetryIgnore => &[Button::Abort, Button::Retry, Button::Ignore],
                };
                for (code, button) in table.iter().enumerate() {
                    assert_eq!(built.mappings.get(code as i32), Some(*button), "{choice:?}");
                }
                assert_eq!(built.mappings.get(table.len() as i32), None, "{choice:?}");
            }
        }
    }

    #[test]
    fn test_emulated_buttons_have_exit_code_table() {
        let req = MessageRequest::new("T", "B", Choice::AbortRetryIgnore, Icon::Info);
        let built = message(&req);
        let w = words(&built);
        let yes = w.iter().position(|s| s == "--yes-label").unwrap();
        assert_eq!(w[yes + 1], "Abort");
        let cancel = w.iter().position(|s| s == "--cancel-label").unwrap();
        assert_eq!(w[cancel + 1], "Ignore");

        assert_eq!(built.mappings.get(0), Some(Button::Abort));
        assert_eq!(built.mappings.get(1), Some(Button::Retry));
        assert_eq!(built.mappings.get(2), Some(Button::Ignore));
    }

    #[test]
    fn test_yes_no_cancel_table() {
        let req = MessageRequest::new("T", "B", Choice::YesNoCancel, Icon::Info);
        let built = message(&req);
        assert_eq!(built.mappings.get(0), Some(Button::Yes));
        assert_eq!(built.mappings.get(1), Some(Button::No));
        assert_eq!(built.mappings.get(2), Some(Button::Cancel));
        assert!(!words(&built).contains(&"--yes-label".to_string()));
    }

    #[test]
    fn test_ok_has_no_table() {
        let req = MessageRequest::new("T", "B", Choice::Ok, Icon::Info);
        assert!(message(&req).mappings.is_empty());
    }

    #[test]
    fn test_notify_uses_configured_duration() {
        let config = DialogConfig {
            notification_secs: 9,
            ..DialogConfig::default()
        };
        let req = NotifyRequest::new("T", "M", Icon::Warning);
        assert_eq!(
            words(&notify(&req, &config)),
            vec!["kdialog", "--icon", "warning", "--title", "T", "--passivepopup", "M", "9"]
        );
    }

    #[test]
    fn test_file_dialogs() {
        let req = FileRequest::open("Open")
            .default_path("/home")
            .filter(Filter::new("Images", &["*.png", "*.jpg"]))
            .filter(Filter::new("All", &["*"]))
            .multiselect(true);
        let w = words(&file(&req));
        assert_eq!(
            w,
            vec![
                "kdialog",
                "--getopenfilename",
                "--multiple",
                "--separate-output",
                "/home",
                "Images (*.png *.jpg) | All (*)",
                "--title",
                "Open"
            ]
        );

        assert_eq!(words(&file(&FileRequest::save("S")))[1], "--getsavefilename");
        let folder = words(&file(&FileRequest::folder("F")));
        assert_eq!(folder[1], "--getexistingdirectory");
        assert_eq!(folder[2], "");
    }
}
