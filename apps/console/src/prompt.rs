//! # Prompter
//!
//! Line-oriented terminal I/O behind a trait, so the menu loop and the
//! order flow can be driven by a script in tests.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prompter                                                               │
//! │  ├── ask(question) → Some(line)   one line, newline stripped            │
//! │  ├── ask(question) → None         end of input (Ctrl-D, closed pipe)    │
//! │  └── say(line)                    one line of output                    │
//! │                                                                         │
//! │  StdinPrompter<R, W>   any BufRead + Write (stdin/stdout in main)       │
//! │  ScriptedPrompter      canned answers, records a transcript             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers and sink for output lines.
pub trait Prompter {
    /// Shows `question` and reads one line, or `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;

    /// Writes one line.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

// =============================================================================
// Terminal
// =============================================================================

/// Prompter over a reader and a writer.
#[derive(Debug)]
pub struct StdinPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StdinPrompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for StdinPrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and go through normal validation
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays canned answers and keeps everything shown, for tests and demos.
///
/// Questions are recorded as `"> question answer"` lines so a transcript
/// reads like a terminal session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every line shown so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// True if `line` was shown verbatim.
    pub fn said(&self, line: &str) -> bool {
        self.transcript.iter().any(|shown| shown == line)
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        let answer = self.answers.pop_front();
        self.transcript.push(format!(
            "> {}{}",
            question,
            answer.as_deref().unwrap_or("<EOF>")
        ));
        Ok(answer)
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_prompter_reads_lines() {
        let input = io::Cursor::new("first\r\nsecond\nlast");
        let mut prompter = StdinPrompter::new(input, Vec::new());

        assert_eq!(prompter.ask("1? ").unwrap().as_deref(), Some("first"));
        assert_eq!(prompter.ask("2? ").unwrap().as_deref(), Some("second"));
        assert_eq!(prompter.ask("3? ").unwrap().as_deref(), Some("last"));
        assert_eq!(prompter.ask("4? ").unwrap(), None);

        prompter.say("done").unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "1? 2? 3? 4? done\n");
    }

    #[test]
    fn test_stdin_prompter_keeps_inner_whitespace() {
        let mut prompter = StdinPrompter::new(io::Cursor::new("  ada  \n"), Vec::new());
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("  ada  "));
    }

    #[test]
    fn test_stdin_prompter_replaces_invalid_utf8() {
        let input = io::Cursor::new(&b"Jos\xe9\nnext\n"[..]);
        let mut prompter = StdinPrompter::new(input, Vec::new());

        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("Jos\u{FFFD}"));
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_scripted_prompter() {
        let mut prompter = ScriptedPrompter::new(["1", "q"]);
        assert_eq!(prompter.ask("Choice? ").unwrap().as_deref(), Some("1"));
        prompter.say("hello").unwrap();
        assert_eq!(prompter.remaining(), 1);
        assert_eq!(prompter.ask("Again? ").unwrap().as_deref(), Some("q"));
        assert_eq!(prompter.ask("More? ").unwrap(), None);

        assert_eq!(
            prompter.transcript(),
            ["> Choice? 1", "hello", "> Again? q", "> More? <EOF>"]
        );
        assert!(prompter.said("hello"));
    }
}
