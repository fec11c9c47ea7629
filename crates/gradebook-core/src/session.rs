//! Interactive session driver.
//!
//! Prompts for one record of each configured kind, hands each record to the
//! list as soon as it is populated, then prints the separator. Any input
//! failure aborts the session and is returned to the caller; records already
//! inserted are released with the partially built list.
//!
//! Because every record is inserted as soon as it is read, the listing is
//! the reverse of the prompt order: the kind prompted last is shown first.

use crate::config::GradebookConfig;
use crate::console::Console;
use crate::error::CatalogError;
use crate::list::RecordList;
use crate::model::RecordKind;
use crate::record::new_record;

/// Settings for a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Kinds to prompt for, in order.
    pub order: Vec<RecordKind>,
    /// Line printed after the last record is read.
    pub separator: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&GradebookConfig::default())
    }
}

impl From<&GradebookConfig> for SessionOptions {
    fn from(config: &GradebookConfig) -> Self {
        Self {
            order: config.order.clone(),
            separator: config.separator.clone(),
        }
    }
}

/// Run one interactive session and return the populated list.
pub fn run_session(
    console: &mut Console<'_>,
    options: &SessionOptions,
) -> Result<RecordList, CatalogError> {
    let mut list = RecordList::new();

    for &kind in &options.order {
        let mut record = new_record(kind);
        record.input(console)?;
        list.insert(record)?;
    }

    let out = console.writer();
    writeln!(out)?;
    writeln!(out, "{}", options.separator)?;

    tracing::info!(records = list.len(), "session complete");
    Ok(list)
}
