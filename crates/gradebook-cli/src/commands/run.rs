//! The `gradebook run` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use gradebook_core::render::render;
use gradebook_core::{
    load_config_from, run_session, Console, OutputFormat, ScorePolicy, SessionOptions,
};

pub fn execute(
    config_path: Option<PathBuf>,
    format: Option<String>,
    score_policy: Option<String>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;

    if let Some(format) = format {
        config.format = format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?;
    }
    if let Some(policy) = score_policy {
        config.score_policy = policy.parse::<ScorePolicy>().map_err(anyhow::Error::msg)?;
    }
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut console = Console::new(&mut reader, &mut writer).with_policy(config.score_policy);

    let mut list = run_session(&mut console, &SessionOptions::from(&config))
        .context("failed to read records")?;
    render(&list, config.format, console.writer()).context("failed to display records")?;

    let released = list.release();
    tracing::debug!(released, "session finished");
    Ok(())
}
