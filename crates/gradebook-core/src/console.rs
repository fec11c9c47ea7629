//! Explicit console abstraction for interactive record input.
//!
//! Records never touch process-global stdin/stdout. A [`Console`] borrows a
//! reader and a writer, so sessions can run against a terminal or against
//! in-memory buffers in tests.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::Score;

/// What to do when a score line is not a valid integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePolicy {
    /// Fail with [`CatalogError::InvalidScore`].
    #[default]
    Reject,
    /// Report the bad value and ask again until a number or end of input.
    Reprompt,
    /// Store zero and log a warning.
    Zero,
}

impl fmt::Display for ScorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorePolicy::Reject => write!(f, "reject"),
            ScorePolicy::Reprompt => write!(f, "reprompt"),
            ScorePolicy::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for ScorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(ScorePolicy::Reject),
            "reprompt" | "retry" => Ok(ScorePolicy::Reprompt),
            "zero" => Ok(ScorePolicy::Zero),
            other => Err(format!("unknown score policy: {other}")),
        }
    }
}

/// A line-oriented prompt/response channel.
pub struct Console<'a> {
    reader: &'a mut dyn BufRead,
    writer: &'a mut dyn Write,
    policy: ScorePolicy,
}

impl<'a> Console<'a> {
    /// Create a console that rejects malformed scores.
    pub fn new(reader: &'a mut dyn BufRead, writer: &'a mut dyn Write) -> Self {
        Self {
            reader,
            writer,
            policy: ScorePolicy::default(),
        }
    }

    /// Replace the malformed-score policy.
    pub fn with_policy(mut self, policy: ScorePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The output side, for rendering.
    pub fn writer(&mut self) -> &mut dyn Write {
        &mut *self.writer
    }

    /// Print `caption` followed by a space and flush, leaving the cursor on
    /// the same line.
    pub fn prompt(&mut self, caption: &str) -> Result<(), CatalogError> {
        write!(self.writer, "{caption} ")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. Returns `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, CatalogError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompt with `caption` and read a line, failing at end of input.
    pub fn ask(&mut self, caption: &str) -> Result<String, CatalogError> {
        self.prompt(caption)?;
        self.read_line()?.ok_or_else(|| CatalogError::UnexpectedEof {
            field: caption.to_string(),
        })
    }

    /// Prompt with `caption` and read an integer score, applying the policy
    /// when the line does not parse.
    pub fn ask_score(&mut self, caption: &str) -> Result<Score, CatalogError> {
        loop {
            let line = self.ask(caption)?;
            let token = line.trim();
            match token.parse::<Score>() {
                Ok(score) => return Ok(score),
                Err(_) => match self.policy {
                    ScorePolicy::Reject => {
                        return Err(CatalogError::InvalidScore {
                            field: caption.to_string(),
                            input: token.to_string(),
                        })
                    }
                    ScorePolicy::Zero => {
                        tracing::warn!("invalid number {token:?} for {caption} stored as 0");
                        return Ok(0);
                    }
                    ScorePolicy::Reprompt => {
                        writeln!(self.writer, "Invalid number: {token}")?;
                    }
                },
            }
        }
    }
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn with_console<T>(
        input: &str,
        policy: ScorePolicy,
        f: impl FnOnce(&mut Console<'_>) -> T,
    ) -> (T, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(&mut reader, &mut out).with_policy(policy);
            f(&mut console)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn read_line_strips_terminators() {
        let (lines, _) = with_console("one\r\ntwo\nthree", ScorePolicy::Reject, |c| {
            vec![
                c.read_line().unwrap(),
                c.read_line().unwrap(),
                c.read_line().unwrap(),
                c.read_line().unwrap(),
            ]
        });
        assert_eq!(
            lines,
            vec![
                Some("one".to_string()),
                Some("two".to_string()),
                Some("three".to_string()),
                None
            ]
        );
    }

    #[test]
    fn ask_writes_prompt() {
        let (answer, out) = with_console("Linear Algebra\n", ScorePolicy::Reject, |c| {
            c.ask("Exam in:").unwrap()
        });
        assert_eq!(answer, "Linear Algebra");
        assert_eq!(out, "Exam in: ");
    }

    #[test]
    fn ask_at_eof_names_the_field() {
        let (result, _) = with_console("", ScorePolicy::Reject, |c| c.ask("Test in:"));
        match result {
            Err(CatalogError::UnexpectedEof { field }) => assert_eq!(field, "Test in:"),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn score_is_trimmed_and_parsed() {
        let (score, _) = with_console("  -7 \n", ScorePolicy::Reject, |c| {
            c.ask_score("Grade:").unwrap()
        });
        assert_eq!(score, -7);
    }

    #[test]
    fn reject_policy_fails_on_garbage() {
        let (result, _) = with_console("five\n", ScorePolicy::Reject, |c| c.ask_score("Grade:"));
        match result {
            Err(CatalogError::InvalidScore { field, input }) => {
                assert_eq!(field, "Grade:");
                assert_eq!(input, "five");
            }
            other => panic!("expected InvalidScore, got {other:?}"),
        }
    }

    #[test]
    fn reject_policy_fails_on_overflow() {
        let (result, _) = with_console("99999999999\n", ScorePolicy::Reject, |c| {
            c.ask_score("Grade:")
        });
        assert!(matches!(result, Err(CatalogError::InvalidScore { .. })));
    }

    #[test]
    fn zero_policy_coerces() {
        let (score, _) = with_console("n/a\n", ScorePolicy::Zero, |c| {
            c.ask_score("Grade:").unwrap()
        });
        assert_eq!(score, 0);
    }

    #[test]
    fn reprompt_policy_asks_again() {
        let (score, out) = with_console("abc\n\n42\n", ScorePolicy::Reprompt, |c| {
            c.ask_score("Points scored:").unwrap()
        });
        assert_eq!(score, 42);
        assert_eq!(
            out,
            "Points scored: Invalid number: abc\nPoints scored: Invalid number: \nPoints scored: "
        );
    }

    #[test]
    fn reprompt_policy_stops_at_eof() {
        let (result, _) = with_console("abc\n", ScorePolicy::Reprompt, |c| c.ask_score("Grade:"));
        assert!(matches!(result, Err(CatalogError::UnexpectedEof { .. })));
    }

    #[test]
    fn policy_parses() {
        assert_eq!("Reject".parse::<ScorePolicy>().unwrap(), ScorePolicy::Reject);
        assert_eq!("retry".parse::<ScorePolicy>().unwrap(), ScorePolicy::Reprompt);
        assert_eq!("zero".parse::<ScorePolicy>().unwrap(), ScorePolicy::Zero);
        assert!("ignore".parse::<ScorePolicy>().is_err());
    }
}
