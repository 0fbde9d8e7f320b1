//! Dialog enumerations and the text-console fallback.
//!
//! The console path exists so every adapter can resolve a dialog even when
//! no graphical tool is installed. Its core is parameterized over the I/O
//! streams, which lets tests drive it without a terminal.

use std::io::{self, BufRead, Write};

/// The dialog flavors the application can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Informational message with a single dismiss button.
    Info,
    /// Warning message with a single dismiss button.
    Warning,
    /// Error message with a single dismiss button.
    Error,
    /// Question answered with yes or no.
    YesNo,
    /// Confirmation answered with ok or cancel.
    OkCancel,
}

/// The answer a dialog resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok,
    Yes,
    No,
    Cancel,
}

impl DialogKind {
    /// Severity label printed by the console fallback.
    fn label(self) -> &'static str {
        match self {
            DialogKind::Info => "INFO",
            DialogKind::Warning => "WARNING",
            DialogKind::Error => "ERROR",
            DialogKind::YesNo | DialogKind::OkCancel => "QUESTION",
        }
    }
}

/// Shows `message` on the terminal and resolves the answer from stdin.
///
/// Message kinds print and return [`DialogResult::Ok`]. Question kinds
/// prompt until a line parses as an answer; end of input resolves to the
/// dismissive answer (`No` or `Cancel`) so headless runs terminate.
pub fn console_dialog(kind: DialogKind, title: &str, message: &str) -> DialogResult {
    let stdin = io::stdin();
    console_dialog_io(kind, title, message, &mut stdin.lock(), &mut io::stdout())
}

/// I/O-parameterized core of [`console_dialog`].
fn console_dialog_io<R: BufRead, W: Write>(
    kind: DialogKind,
    title: &str,
    message: &str,
    input: &mut R,
    output: &mut W,
) -> DialogResult {
    // Terminal output is best-effort; a closed pipe must not take the
    // application down with it.
    let _ = writeln!(output, "{}: {title}", kind.label());
    let _ = writeln!(output, "{message}");

    match kind {
        DialogKind::YesNo => {
            prompt(input, output, "Type 'yes' or 'no': ", parse_yes_no).unwrap_or(DialogResult::No)
        }
        DialogKind::OkCancel => prompt(input, output, "Type 'ok' or 'cancel': ", parse_ok_cancel)
            .unwrap_or(DialogResult::Cancel),
        _ => DialogResult::Ok,
    }
}

/// Re-asks `ask` until a line parses; `None` on end of input or read error.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    ask: &str,
    parse: fn(&str) -> Option<DialogResult>,
) -> Option<DialogResult> {
    loop {
        let _ = write!(output, "{ask}");
        let _ = output.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                if let Some(result) = parse(line.trim()) {
                    return Some(result);
                }
            }
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<DialogResult> {
    match answer.to_ascii_lowercase().as_str() {
        "yes" | "y" => Some(DialogResult::Yes),
        "no" | "n" => Some(DialogResult::No),
        _ => None,
    }
}

fn parse_ok_cancel(answer: &str) -> Option<DialogResult> {
    match answer.to_ascii_lowercase().as_str() {
        "ok" => Some(DialogResult::Ok),
        "cancel" => Some(DialogResult::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(kind: DialogKind, input: &str) -> (DialogResult, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut written = Vec::new();
        let result = console_dialog_io(kind, "Title", "Body text", &mut reader, &mut written);
        (result, String::from_utf8(written).unwrap())
    }

    #[test]
    fn test_message_kinds_print_and_return_ok() {
        for kind in [DialogKind::Info, DialogKind::Warning, DialogKind::Error] {
            let (result, output) = run(kind, "");
            assert_eq!(result, DialogResult::Ok);
            assert!(output.contains("Title"));
            assert!(output.contains("Body text"));
        }
        let (_, output) = run(DialogKind::Warning, "");
        assert!(output.starts_with("WARNING: Title"));
    }

    #[test]
    fn test_yes_no_accepts_answers() {
        assert_eq!(run(DialogKind::YesNo, "yes\n").0, DialogResult::Yes);
        assert_eq!(run(DialogKind::YesNo, "no\n").0, DialogResult::No);
        assert_eq!(run(DialogKind::YesNo, "y\n").0, DialogResult::Yes);
        assert_eq!(run(DialogKind::YesNo, "N\n").0, DialogResult::No);
    }

    #[test]
    fn test_ok_cancel_accepts_answers() {
        assert_eq!(run(DialogKind::OkCancel, "ok\n").0, DialogResult::Ok);
        assert_eq!(run(DialogKind::OkCancel, "OK\n").0, DialogResult::Ok);
        assert_eq!(run(DialogKind::OkCancel, "cancel\n").0, DialogResult::Cancel);
    }

    #[test]
    fn test_question_reprompts_on_junk() {
        let (result, output) = run(DialogKind::YesNo, "maybe\nsure\nyes\n");
        assert_eq!(result, DialogResult::Yes);
        assert_eq!(output.matches("Type 'yes' or 'no': ").count(), 3);
    }

    #[test]
    fn test_end_of_input_resolves_to_dismissal() {
        assert_eq!(run(DialogKind::YesNo, "").0, DialogResult::No);
        assert_eq!(run(DialogKind::OkCancel, "what\n").0, DialogResult::Cancel);
    }

    #[test]
    fn test_question_prints_question_label() {
        let (_, output) = run(DialogKind::OkCancel, "ok\n");
        assert!(output.starts_with("QUESTION: Title"));
    }
}
