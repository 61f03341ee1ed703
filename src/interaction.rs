//! User interaction capability
//!
//! The services never talk to a terminal directly. Anything that needs a
//! yes/no decision or wants to tell the user something goes through
//! [`Interaction`], which each front end implements.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Synchronous prompts and notices supplied by the front end
pub trait Interaction {
    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show an informational message
    fn notify(&mut self, message: &str);
}

/// Interaction over standard input/output
#[derive(Debug, Default)]
pub struct TerminalInteraction {
    /// Answer yes to every prompt without reading input
    assume_yes: bool,
}

impl TerminalInteraction {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        ask(&mut stdin.lock(), &mut stdout.lock(), prompt)
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Write a `[y/N]` prompt and read one answer line. Anything other than
/// `y`/`yes` (including EOF and read errors) counts as no.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> bool {
    if write!(output, "{} [y/N] ", prompt)
        .and_then(|_| output.flush())
        .is_err()
    {
        return false;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}

/// Interaction with pre-recorded answers, for embedding and tests
///
/// Prompts beyond the scripted answers are declined.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_accepts_yes() {
        let mut out = Vec::new();
        assert!(ask(&mut Cursor::new("y\n"), &mut out, "Delete?"));
        assert!(ask(&mut Cursor::new("YES\n"), &mut Vec::new(), "Delete?"));
        assert_eq!(String::from_utf8(out).unwrap(), "Delete? [y/N] ");
    }

    #[test]
    fn test_ask_defaults_to_no() {
        assert!(!ask(&mut Cursor::new("\n"), &mut Vec::new(), "Delete?"));
        assert!(!ask(&mut Cursor::new("nope\n"), &mut Vec::new(), "Delete?"));
        assert!(!ask(&mut Cursor::new(""), &mut Vec::new(), "Delete?"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut interaction = TerminalInteraction::new(true);
        assert!(interaction.confirm("Delete?"));
    }

    #[test]
    fn test_scripted_interaction() {
        let mut interaction = ScriptedInteraction::new([true, false]);
        assert!(interaction.confirm("first"));
        assert!(!interaction.confirm("second"));
        assert!(!interaction.confirm("unscripted"));
        interaction.notify("done");

        assert_eq!(interaction.prompts, vec!["first", "second", "unscripted"]);
        assert_eq!(interaction.notices, vec!["done"]);
    }
}
