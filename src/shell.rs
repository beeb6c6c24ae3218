//! Quoting for the three languages commands are written in
//!
//! - POSIX shell: everything goes inside single quotes, a literal `'` becomes `'\''`
//! - PowerShell: single-quoted, `'` and `"` are doubled
//! - AppleScript: double-quoted, `\` and `"` are backslash-escaped

/// Quote a string for `/bin/sh`
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Quote a string for a PowerShell `-Command` argument
///
/// Double quotes are doubled too because the whole script itself sits
/// inside a double-quoted command-line argument.
pub fn powershell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' || c == '"' {
            out.push(c);
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Quote a string literal for AppleScript
pub fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', r"\\").replace('"', "\\\""))
}

/// Join already-quoted words into a command line
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("hello world"), "'hello world'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_quote_single_quote() {
        assert_eq!(quote("don't"), r"'don'\''t'");
    }

    #[test]
    fn test_quote_round_trip() {
        let title = r#"It's a "quoted" \ title"#;
        let line = join([quote("zenity"), "--title".to_string(), quote(title)]);
        let words = shell_words::split(&line).unwrap();
        assert_eq!(words, vec!["zenity", "--title", title]);
    }

    #[test]
    fn test_quote_round_trip_newlines_and_dollars() {
        let text = "line one\nline two $HOME `id` !";
        let words = shell_words::split(&quote(text)).unwrap();
        assert_eq!(words, vec![text]);
    }

    #[test]
    fn test_powershell_quote() {
        assert_eq!(powershell_quote("it's"), "'it''s'");
        assert_eq!(powershell_quote(r#"say "hi""#), r#"'say ""hi""'"#);
    }

    #[test]
    fn test_applescript_quote() {
        assert_eq!(applescript_quote(r#"a "b" \c"#), r#""a \"b\" \\c""#);
    }

    #[cfg(unix)]
    #[test]
    fn test_quote_survives_real_shell() {
        let text = r#"It's "odd" \n $PATH"#;
        let output = std::process::Command::new("/bin/sh")
            .arg("-c")
            .arg(format!("printf '%s' {}", quote(text)))
            .output()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), text);
    }
}
