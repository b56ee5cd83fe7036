use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Error;

const RUN_DELIMITER: &str = "----------------------------------------";

/// Installs the global tracing subscriber. With a configured log file,
/// output appends there and each run is introduced by a delimiter and a
/// local timestamp; otherwise events go to stderr.
///
/// `RUST_LOG` overrides the configured level when set.
pub fn init(config: &Config) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|err| Error::Config(err.to_string()))?;

    match &config.log_file {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{RUN_DELIMITER}")?;
            writeln!(file, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
    }

    Ok(())
}
