use std::path::Path;

use anyhow::Result;

use recenter::config::{Config, DEFAULT_CONFIG_FILE};
use recenter::logging;

fn main() -> Result<()> {
    let config = Config::load(Path::new(DEFAULT_CONFIG_FILE))?;
    logging::init(&config)?;

    run(&config)
}

// One pass over all windows; individual skips and failures never change the
// exit code. Only a failed display enumeration aborts.
#[cfg(windows)]
fn run(config: &Config) -> Result<()> {
    recenter::engine::run(config)?;
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: &Config) -> Result<()> {
    anyhow::bail!("recenter repositions Win32 windows and only runs on Windows");
}
