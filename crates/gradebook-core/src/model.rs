//! Core data model types for gradebook.
//!
//! The three record variants share one data shape and differ only in the
//! captions they print, so the variant set is modelled as a closed enum
//! carrying its caption pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An integer grade or point value.
pub type Score = i32;

/// The concrete kinds of assessment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Exam,
    FinalExam,
    Test,
}

/// Caption pair printed in front of a record's subject and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captions {
    /// Caption in front of the subject label.
    pub subject: &'static str,
    /// Caption in front of the score.
    pub score: &'static str,
}

impl RecordKind {
    /// Every kind, in the order an interactive session prompts for them.
    pub const ALL: [RecordKind; 3] = [RecordKind::Test, RecordKind::Exam, RecordKind::FinalExam];

    /// The fixed caption pair for this kind.
    pub fn captions(self) -> Captions {
        match self {
            RecordKind::Exam => Captions {
                subject: "Exam in:",
                score: "Grade:",
            },
            RecordKind::FinalExam => Captions {
                subject: "Final exam:",
                score: "Average grade:",
            },
            RecordKind::Test => Captions {
                subject: "Test in:",
                score: "Points scored:",
            },
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Exam => write!(f, "exam"),
            RecordKind::FinalExam => write!(f, "final_exam"),
            RecordKind::Test => write!(f, "test"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exam" => Ok(RecordKind::Exam),
            "final_exam" | "final-exam" | "finalexam" => Ok(RecordKind::FinalExam),
            "test" => Ok(RecordKind::Test),
            other => Err(format!("unknown record kind: {other}")),
        }
    }
}
