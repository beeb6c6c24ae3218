//! zenity, matedialog and qarma command lines

use super::{icon_name, BuiltCommand};
use crate::backend::Helper;
use crate::config::DialogConfig;
use crate::shell::{join, quote};
use crate::types::{Choice, FileKind, FileRequest, Icon, MessageRequest, NotifyRequest};

pub(super) fn notify(helper: Helper, req: &NotifyRequest) -> BuiltCommand {
    let text = format!("{}\n{}", req.title, req.message);
    BuiltCommand::shell(join([
        helper.program().to_string(),
        "--notification".to_string(),
        "--window-icon".to_string(),
        icon_name(req.effective_icon()).to_string(),
        "--text".to_string(),
        quote(&text),
    ]))
}

pub(super) fn message(helper: Helper, req: &MessageRequest, config: &DialogConfig) -> BuiltCommand {
    let mut words = vec![helper.program().to_string()];

    match req.choice {
        Choice::Ok => words.push(
            match req.icon {
                Icon::Error => "--error",
                Icon::Warning => "--warning",
                Icon::Info | Icon::Question => "--info",
            }
            .to_string(),
        ),
        Choice::OkCancel => {
            words.extend(["--question", "--cancel-label=Cancel", "--ok-label=OK"].map(String::from));
        }
        // --switch drops the stock buttons; each extra button prints its label
        choice => {
            words.extend(["--question", "--switch"].map(String::from));
            for button in choice.buttons().iter().rev() {
                words.push(quote(&format!("--extra-button={}", button.label())));
            }
        }
    }

    words.extend([
        "--title".to_string(),
        quote(&req.title),
        format!("--width={}", config.message_width),
        "--height=0".to_string(),
        "--text".to_string(),
        quote(&req.text),
        format!("--icon-name=dialog-{}", icon_name(req.icon)),
    ]);

    BuiltCommand::shell(join(words))
}

pub(super) fn file(helper: Helper, req: &FileRequest) -> BuiltCommand {
    let mut words = vec![helper.program().to_string(), "--file-selection".to_string()];

    if !req.default_path.is_empty() {
        words.push(quote(&format!("--filename={}", req.default_path)));
    }
    words.extend([
        "--title".to_string(),
        quote(&req.title),
        quote("--separator=\n"),
    ]);

    if req.kind != FileKind::Folder {
        for filter in &req.filters {
            words.push("--file-filter".to_string());
            words.push(quote(&format!("{} | {}", filter.label, filter.joined(" "))));
        }
    }

    match req.kind {
        FileKind::Save => {
            words.push("--save".to_string());
            if req.confirm_overwrite {
                words.push("--confirm-overwrite".to_string());
            }
        }
        FileKind::Folder => words.push("--directory".to_string()),
        FileKind::Open => {
            if req.multiselect {
                words.push("--multiple".to_string());
            }
        }
    }

    BuiltCommand::shell(join(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Filter;

    fn line(built: &BuiltCommand) -> String {
        built.invocation.command_line().unwrap().to_string()
    }

    #[test]
    fn test_message_flags_per_choice_and_icon() {
        let config = DialogConfig::default();
        let cases = [
            (Choice::Ok, Icon::Info, "--info"),
            (Choice::Ok, Icon::Question, "--info"),
            (Choice::Ok, Icon::Warning, "--warning"),
            (Choice::Ok, Icon::Error, "--error"),
            (Choice::OkCancel, Icon::Info, "--ok-label=OK"),
            (Choice::YesNo, Icon::Info, "'--extra-button=Yes'"),
            (Choice::YesNoCancel, Icon::Warning, "'--extra-button=Cancel'"),
            (Choice::RetryCancel, Icon::Error, "'--extra-button=Retry'"),
            (Choice::AbortRetryIgnore, Icon::Question, "'--extra-button=Ignore'"),
        ];
        for (choice, icon, flag) in cases {
            let req = MessageRequest::new("Title", "Body", choice, icon);
            let l = line(&message(Helper::Zenity, &req, &config));
            assert!(l.contains(flag), "{choice:?}/{icon:?}: {l}");
            assert!(
                l.contains(&format!("--icon-name=dialog-{}", icon_name(icon))),
                "{l}"
            );
        }
    }

    fn expected_icon_name(icon: Icon) -> &'static str {
        match icon {
            Icon::Info => "information",
            Icon::Warning => "warning",
            Icon::Error => "error",
            Icon::Question => "question",
        }
    }

    #[test]
    fn test_message_every_choice_and_icon() {
        let config = DialogConfig::default();
        for choice in Choice::ALL {
            for icon in Icon::ALL {
                let req = MessageRequest::new("T", "B", choice, icon);
                let w = shell_words::split(&line(&message(Helper::Zenity, &req, &config))).unwrap();

                // Extra buttons are listed last-to-first
                let expected: &[&str] = match (choice, icon) {
                    (Choice::Ok, Icon::Error) => &["--error"],
                    (Choice::Ok, Icon::Warning) => &["--warning"],
                    (Choice::Ok, Icon::Info | Icon::Question) => &["--info"],
                    (Choice::OkCancel, _) => &["--question", "--cancel-label=Cancel", "--ok-label=OK"],
                    (Choice::YesNo, _) => &[
                        "--question",
                        "--switch",
                        "--extra-button=No",
                        "--extra-button=Yes",
                    ],
                    (Choice::YesNoCancel, _) => &[
                        "--question",
                        "--switch",
                        "--extra-button=Cancel",
                        "--extra-button=No",
                        "--extra-button=Yes",
                    ],
                    (Choice::RetryCancel, _) => &[
                        "--question",
                        "--switch",
                        "--extra-button=Cancel",
                        "--extra-button=Retry",
                    ],
                    (Choice::AbortRetryIgnore, _) => &[
                        "--question",
                        "--switch",
                        "--extra-button=Ignore",
                        "--extra-button=Retry",
                        "--extra-button=Abort",
                    ],
                };

                let title = w.iter().position(|s| s == "--title").unwrap();
                assert_eq!(&w[1..title], expected, "{choice:?}/{icon:?}");
                assert_eq!(
                    &w[title..],
                    &[
                        "--title".to_string(),
                        "T".to_string(),
                        "--width=300".to_string(),
                        "--height=0".to_string(),
                        "--text".to_string(),
                        "B".to_string(),
                        format!("--icon-name=dialog-{}", expected_icon_name(icon)),
                    ],
                    "{choice:?}/{icon:?}"
                );
                assert!(message(Helper::Zenity, &req, &config).mappings.is_empty());
            }
        }
    }

    #[test]
    fn test_message_switch_only_for_emulated_sets() {
        let config = DialogConfig::default();
        for choice in Choice::ALL {
            let req = MessageRequest::new("t", "x", choice, Icon::Info);
            let l = line(&message(Helper::Zenity, &req, &config));
            let emulated = !matches!(choice, Choice::Ok | Choice::OkCancel);
            assert_eq!(l.contains("--switch"), emulated, "{l}");
        }
    }

    #[test]
    fn test_message_parses_back_into_words() {
        let config = DialogConfig::default();
        let req = MessageRequest::new("It's", "a \"b\"", Choice::YesNo, Icon::Info);
        let words = shell_words::split(&line(&message(Helper::Zenity, &req, &config))).unwrap();
        assert_eq!(words[0], "zenity");
        let title = words.iter().position(|w| w == "--title").unwrap();
        assert_eq!(words[title + 1], "It's");
        let text = words.iter().position(|w| w == "--text").unwrap();
        assert_eq!(words[text + 1], "a \"b\"");
        assert!(words.contains(&"--width=300".to_string()));
    }

    #[test]
    fn test_notify() {
        let req = NotifyRequest::new("Hi", "there", Icon::Question);
        let words = shell_words::split(&line(&notify(Helper::Qarma, &req))).unwrap();
        assert_eq!(
            words,
            vec![
                "qarma",
                "--notification",
                "--window-icon",
                "information",
                "--text",
                "Hi\nthere"
            ]
        );
    }

    #[test]
    fn test_file_open_multiselect_with_filters() {
        let req = FileRequest::open("Pick")
            .default_path("/tmp/")
            .filter(Filter::new("Text Files", &["*.txt", "*.text"]))
            .filter(Filter::new("All Files", &["*"]))
            .multiselect(true);
        let words = shell_words::split(&line(&file(Helper::Zenity, &req))).unwrap();
        assert!(words.contains(&"--file-selection".to_string()));
        assert!(words.contains(&"--filename=/tmp/".to_string()));
        assert!(words.contains(&"--separator=\n".to_string()));
        assert!(words.contains(&"Text Files | *.txt *.text".to_string()));
        assert!(words.contains(&"All Files | *".to_string()));
        assert!(words.contains(&"--multiple".to_string()));
        assert!(!words.contains(&"--save".to_string()));
    }

    #[test]
    fn test_file_save_and_folder() {
        let save = line(&file(Helper::Zenity, &FileRequest::save("Save")));
        assert!(save.contains("--save"));
        assert!(save.contains("--confirm-overwrite"));
        assert!(!save.contains("--filename"));

        let quiet = FileRequest::save("Save").confirm_overwrite(false);
        assert!(!line(&file(Helper::Zenity, &quiet)).contains("--confirm-overwrite"));

        let folder = FileRequest::folder("Dir").filter(Filter::new("Text", &["*.txt"]));
        let l = line(&file(Helper::Matedialog, &folder));
        assert!(l.starts_with("matedialog --file-selection"));
        assert!(l.contains("--directory"));
        assert!(!l.contains("--file-filter"));
    }
}
