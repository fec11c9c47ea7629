//! The polymorphic record capability and its three variants.
//!
//! Every variant has the same shape, a growable text label and an integer
//! score, and differs only in the captions it prompts and prints with. The
//! shared behavior lives in provided methods on [`Record`]; implementers
//! only expose their fields and kind.

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::error::CatalogError;
use crate::model::{RecordKind, Score};

// ---------------------------------------------------------------------------
// Record trait
// ---------------------------------------------------------------------------

/// One scored assessment that can be read from a console and displayed.
pub trait Record: fmt::Debug {
    /// Which variant this record is.
    fn kind(&self) -> RecordKind;

    /// The assessment subject.
    fn label(&self) -> &str;

    /// The grade or point value.
    fn score(&self) -> Score;

    fn set_label(&mut self, label: String);

    fn set_score(&mut self, score: Score);

    /// Read the label, then the score, from `console`.
    ///
    /// The label is the whole line as typed. If reading the score fails the
    /// label has already been stored and the score keeps its old value.
    fn input(&mut self, console: &mut Console<'_>) -> Result<(), CatalogError> {
        let captions = self.kind().captions();
        let label = console.ask(captions.subject)?;
        self.set_label(label);
        let score = console.ask_score(captions.score)?;
        self.set_score(score);
        Ok(())
    }

    /// Write the caption-prefixed two-line rendering of this record.
    fn display(&self, out: &mut dyn Write) -> Result<(), CatalogError> {
        let captions = self.kind().captions();
        writeln!(out, "{} {}", captions.subject, self.label())?;
        writeln!(out, "{} {}", captions.score, self.score())?;
        Ok(())
    }

    /// A serializable snapshot of this record.
    fn view(&self) -> RecordView {
        let captions = self.kind().captions();
        RecordView {
            kind: self.kind(),
            subject_caption: captions.subject.to_string(),
            label: self.label().to_string(),
            score_caption: captions.score.to_string(),
            score: self.score(),
        }
    }
}

/// Flattened, owned form of a record used for JSON and table output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub kind: RecordKind,
    pub subject_caption: String,
    pub label: String,
    pub score_caption: String,
    pub score: Score,
}

/// Construct an empty record of the given kind.
pub fn new_record(kind: RecordKind) -> Box<dyn Record> {
    match kind {
        RecordKind::Exam => Box::new(ExamRecord::new()),
        RecordKind::FinalExam => Box::new(FinalExamRecord::new()),
        RecordKind::Test => Box::new(TestRecord::new()),
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// A regular exam and the grade received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamRecord {
    label: String,
    score: Score,
}

impl ExamRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: Score) -> Self {
        Self {
            label: String::new(),
            score,
        }
    }

    pub fn with_label_and_score(label: impl Into<String>, score: Score) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

impl Record for ExamRecord {
    fn kind(&self) -> RecordKind {
        RecordKind::Exam
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn score(&self) -> Score {
        self.score
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}

/// A final exam and the average grade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalExamRecord {
    label: String,
    score: Score,
}

impl FinalExamRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: Score) -> Self {
        Self {
            label: String::new(),
            score,
        }
    }

    pub fn with_label_and_score(label: impl Into<String>, score: Score) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

impl Record for FinalExamRecord {
    fn kind(&self) -> RecordKind {
        RecordKind::FinalExam
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn score(&self) -> Score {
        self.score
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}

/// A test and the points scored on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRecord {
    label: String,
    score: Score,
}

impl TestRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: Score) -> Self {
        Self {
            label: String::new(),
            score,
        }
    }

    pub fn with_label_and_score(label: impl Into<String>, score: Score) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

impl Record for TestRecord {
    fn kind(&self) -> RecordKind {
        RecordKind::Test
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn score(&self) -> Score {
        self.score
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}
