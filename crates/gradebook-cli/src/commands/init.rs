//! The `gradebook init` command.

use std::path::Path;

use anyhow::{Context, Result};

use gradebook_core::config::CONFIG_FILE_NAME;

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(CONFIG_FILE_NAME, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext step:");
    println!("  gradebook run");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Line printed between input and the listing.
separator = "---------------------------------"

# What to do with a score that is not an integer: reject, reprompt, zero.
score_policy = "reject"

# Listing format: text, json, table.
format = "text"

# Record kinds prompted for, in order. Listed newest first.
order = ["test", "exam", "final_exam"]
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = gradebook_core::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, gradebook_core::GradebookConfig::default());
    }
}
