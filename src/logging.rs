//! Logger setup
//!
//! Records go to stdout, a log file truncated at startup, or both. Each line
//! reads `<timestamp> <LEVEL> [<target>]: <message>`. `RUST_LOG` overrides
//! the configured default level.

use crate::config::LogSettings;
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::File;
use std::io::{self, Write};

/// Fan a byte stream out to several sinks
pub struct Tee {
    sinks: Vec<Box<dyn Write + Send>>,
}

impl Tee {
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn Write + Send>>) -> Self {
        Self { sinks }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in &mut self.sinks {
            sink.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    let mut sinks: Vec<Box<dyn Write + Send>> = Vec::new();
    if settings.console {
        sinks.push(Box::new(io::stdout()));
    }
    if let Some(path) = &settings.file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        sinks.push(Box::new(file));
    }

    Builder::from_env(Env::default().default_filter_or(settings.default_level.to_string()))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}]: {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(Tee::new(sinks))))
        .try_init()
        .context("Failed to install logger")
}
