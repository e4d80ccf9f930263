//! env_logger setup: plain user-facing lines on stdout, optional timestamps,
//! and an optional plain-text copy in a log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::error::CliError;

/// Writes log records to stdout, hiding any active spinner while doing so,
/// and copies them to the log file with ANSI escapes removed.
struct LogWriter {
    file: Option<File>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        crate::spinner::suspend(|| io::stdout().write_all(buf))?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        match &mut self.file {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

pub(crate) fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Off)
        .filter_module("gamelist", level_filter(quiet, verbose))
        .format(move |buf, record| {
            if verbose {
                let prefix = match record.level() {
                    Level::Error => "ERROR",
                    Level::Warn => "WARN ",
                    Level::Info => "INFO ",
                    Level::Debug => "DEBUG",
                    Level::Trace => "TRACE",
                };
                writeln!(
                    buf,
                    "{} {} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    prefix,
                    record.args()
                )
            } else {
                writeln!(buf, "{}", record.args())
            }
        });

    let file = logfile.map(File::create).transpose()?;
    builder.target(env_logger::Target::Pipe(Box::new(LogWriter { file })));

    builder
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))
}
