//! Output rendering for a populated record list.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use comfy_table::Table;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::list::{ListState, RecordList};

/// How the list is printed after a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Each record's own caption-prefixed display.
    #[default]
    Text,
    /// Pretty-printed JSON array of record views.
    Json,
    /// A bordered table.
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Write `list` to `out` in the requested format, head to tail.
pub fn render(
    list: &RecordList,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CatalogError> {
    match format {
        OutputFormat::Text => {
            list.show(out)?;
        }
        OutputFormat::Json => {
            ensure_live(list)?;
            let json = serde_json::to_string_pretty(&list.views())?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Table => {
            ensure_live(list)?;
            writeln!(out, "{}", to_table(list))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn ensure_live(list: &RecordList) -> Result<(), CatalogError> {
    if list.state() == ListState::Released {
        return Err(CatalogError::Released);
    }
    Ok(())
}

fn to_table(list: &RecordList) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Subject", "Score"]);

    for record in list.iter() {
        let captions = record.kind().captions();
        table.add_row(vec![
            record.kind().to_string(),
            format!("{} {}", captions.subject, record.label()),
            format!("{} {}", captions.score, record.score()),
        ]);
    }
    table
}
