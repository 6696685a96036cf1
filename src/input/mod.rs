//! Feedback input sources
//!
//! A source produces the three raw feedback strings; parsing them is the
//! parser's job. Sources: interactive prompts over any reader/writer pair,
//! or values fixed up front (command-line flags).

use std::io::{self, BufRead, Write};

/// The three feedback strings exactly as entered, trimmed and lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedback {
    pub green: String,
    pub yellow: String,
    pub gray: String,
}

impl RawFeedback {
    pub fn new(green: impl AsRef<str>, yellow: impl AsRef<str>, gray: impl AsRef<str>) -> Self {
        Self {
            green: normalize(green.as_ref()),
            yellow: normalize(yellow.as_ref()),
            gray: normalize(gray.as_ref()),
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Anything that can supply a round of feedback
pub trait FeedbackSource {
    /// Read the next round of feedback
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying input cannot be read.
    fn read_constraints(&mut self) -> io::Result<Option<RawFeedback>>;
}

/// Feedback fixed in advance; yields it once
#[derive(Debug, Clone)]
pub struct StaticFeedback {
    feedback: Option<RawFeedback>,
}

impl StaticFeedback {
    #[must_use]
    pub const fn new(feedback: RawFeedback) -> Self {
        Self {
            feedback: Some(feedback),
        }
    }
}

impl FeedbackSource for StaticFeedback {
    fn read_constraints(&mut self) -> io::Result<Option<RawFeedback>> {
        Ok(self.feedback.take())
    }
}

/// Interactive prompts
pub struct PromptFeedback<R, W> {
    reader: R,
    writer: W,
    placeholder: char,
}

impl PromptFeedback<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdio(placeholder: char) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), placeholder)
    }
}

impl<R: BufRead, W: Write> PromptFeedback<R, W> {
    pub const fn new(reader: R, writer: W, placeholder: char) -> Self {
        Self {
            reader,
            writer,
            placeholder,
        }
    }

    /// Print `prompt` and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(normalize(&line)))
    }

    /// Ask a yes/no question; anything but yes (or end of input) is no
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the prompt cannot be written or read.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("\n{question} (yes/no)\n>>> "))?;
        Ok(matches!(answer.as_deref(), Some("yes" | "y")))
    }

    /// Consume the prompt and return its writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> FeedbackSource for PromptFeedback<R, W> {
    fn read_constraints(&mut self) -> io::Result<Option<RawFeedback>> {
        let p = self.placeholder;
        let example: String = [p, p, 'a', p, p].iter().collect();

        let Some(green) = self.ask(&format!(
            "\n🟩 Which letters are correct? Use '{p}' for unknowns. E.g. '{example}'\n>>> "
        ))?
        else {
            return Ok(None);
        };
        let Some(yellow) = self.ask(
            "\n🟨 Which letters are used but in the wrong positions? \
             Format being 'a1 b3' meaning 'a not in pos 1, b not in pos 3'\n>>> ",
        )?
        else {
            return Ok(None);
        };
        let Some(gray) =
            self.ask("\n⬜ Which letters are still available? Just list them. E.g. 'xqz'\n>>> ")?
        else {
            return Ok(None);
        };

        Ok(Some(RawFeedback {
            green,
            yellow,
            gray,
        }))
    }
}
