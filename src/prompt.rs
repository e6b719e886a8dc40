//! Interactive value prompting.

use crate::envfile::display_value;
use serde_json::Value;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Asks the user for the value of a single configuration key.
pub trait Prompter {
    /// Returns the value to store for `key`, given the template's value as a hint.
    fn prompt(&mut self, key: &str, template_value: &Value) -> io::Result<String>;
}

/// Line-oriented prompter: writes a prompt, reads one line back.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, key: &str, template_value: &Value) -> io::Result<String> {
        write!(self.output, "{}", prompt_label(key, template_value))?;
        self.output.flush()?;

        let mut line = Vec::new();
        // EOF leaves `line` empty, which falls through to the default rule.
        self.input.read_until(b'\n', &mut line)?;
        Ok(resolve_input(&String::from_utf8_lossy(&line), template_value))
    }
}

/// `  key [hint]: `, with the hint omitted for null template values.
pub fn prompt_label(key: &str, template_value: &Value) -> String {
    if template_value.is_null() {
        format!("  {key}: ")
    } else {
        format!("  {key} [{}]: ", display_value(template_value))
    }
}

/// Trim the raw input; empty input falls back to the template value only when
/// that value is a string. Non-string hints are informational and yield "".
pub fn resolve_input(raw: &str, template_value: &Value) -> String {
    let value = raw.trim();
    if value.is_empty() {
        if let Value::String(default) = template_value {
            return default.clone();
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn prompt_once(input: &str, key: &str, template_value: &Value) -> (String, String) {
        let mut out: Vec<u8> = Vec::new();
        let value = {
            let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes()), &mut out);
            prompter.prompt(key, template_value).expect("prompt")
        };
        (value, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn label_includes_hint_for_non_null_values() {
        assert_eq!(prompt_label("name", &json!("Bob")), "  name [Bob]: ");
        assert_eq!(prompt_label("port", &json!(8080)), "  port [8080]: ");
        assert_eq!(prompt_label("name", &Value::Null), "  name: ");
    }

    #[test]
    fn entered_value_is_trimmed() {
        let (value, shown) = prompt_once("  Alice \n", "name", &Value::Null);
        assert_eq!(value, "Alice");
        assert_eq!(shown, "  name: ");
    }

    #[test]
    fn empty_input_applies_string_default() {
        let (value, _) = prompt_once("\n", "name", &json!("Bob"));
        assert_eq!(value, "Bob");
    }

    #[test]
    fn empty_input_ignores_non_string_default() {
        let (value, shown) = prompt_once("   \n", "port", &json!(8080));
        assert_eq!(value, "");
        assert_eq!(shown, "  port [8080]: ");

        assert_eq!(resolve_input("", &json!(true)), "");
        assert_eq!(resolve_input("", &json!({"a": 1})), "");
        assert_eq!(resolve_input("", &Value::Null), "");
    }

    #[test]
    fn end_of_input_counts_as_empty_line() {
        let (value, _) = prompt_once("", "name", &json!("Bob"));
        assert_eq!(value, "Bob");
    }

    #[test]
    fn input_is_stored_verbatim_without_coercion() {
        let (value, _) = prompt_once("9090\n", "port", &json!(8080));
        assert_eq!(value, "9090");
    }

    #[test]
    fn invalid_utf8_is_accepted_lossily() {
        let mut out: Vec<u8> = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new(&b"caf\xe9\n"[..]), &mut out);
        let value = prompter.prompt("name", &Value::Null).expect("prompt");
        assert_eq!(value, "caf\u{FFFD}");
    }

    #[test]
    fn reads_one_line_per_prompt() {
        let mut out: Vec<u8> = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("first\nsecond\n".as_bytes()), &mut out);
        assert_eq!(prompter.prompt("a", &Value::Null).expect("a"), "first");
        assert_eq!(prompter.prompt("b", &Value::Null).expect("b"), "second");
    }
}
