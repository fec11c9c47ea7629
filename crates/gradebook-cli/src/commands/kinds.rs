//! The `gradebook kinds` command.

use anyhow::Result;

use gradebook_core::RecordKind;

pub fn execute() -> Result<()> {
    for kind in RecordKind::ALL {
        let captions = kind.captions();
        println!(
            "{:<12} {:<14} {}",
            kind.to_string(),
            captions.subject,
            captions.score
        );
    }
    Ok(())
}
