//! Diagnostic log file.
//!
//! Fatal errors (missing config, input or output files) and skipped traces
//! are appended to `trace2dox.log` in the working directory, one record per
//! line:
//!
//! ```text
//! 2024-01-01 12:00:00,123 ERROR Input file trace.log not found!
//! ```
//!
//! `RUST_LOG` adjusts the level (default `info`). If the file can't be opened
//! the records go to stderr instead.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use env_logger::{Env, Target, WriteStyle};

/// Log file name, relative to the working directory.
pub const LOG_FILENAME: &str = "trace2dox.log";

fn open_log_file(path: &Path) -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

/// Install the global logger.
///
/// Call once, early in main(), after the command line has been parsed so that
/// usage errors never touch the log.
pub fn init(path: &Path) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        });

    match open_log_file(path) {
        Some(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    // Ignore the error if a logger is already installed
    let _ = builder.try_init();
}
