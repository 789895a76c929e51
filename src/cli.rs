//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, Layer};
use crate::filter::Logic;

/// Exit status for usage errors, including `--help`.
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug, Default)]
#[command(
    name = "trace2dox",
    version,
    about = "Convert a trace log into an mscgen sequence diagram for Doxygen",
    long_about = None,
    after_help = "Without any parameters every message is included with full entity names."
)]
pub struct Cli {
    /// Input file to read from (default: trace.log)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file to write to (default: trace.msc)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Namespace pattern removed from entity names (default: MAISA_)
    #[arg(short, long, value_name = "PATTERN")]
    pub namespace: Option<String>,

    /// Message filter: comma-separated entities, each optionally NAME:DISPLAY
    #[arg(short, long, value_name = "LIST")]
    pub filter: Option<String>,

    /// Logic to use with the filter list, a=sender and b=receiver (default: AND)
    #[arg(short, long, value_enum, ignore_case = true, value_name = "MODE")]
    pub logic: Option<Logic>,

    /// Configuration file (default: .trace2dox)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The command-line configuration layer: only flags that were given.
    pub fn overrides(&self) -> Layer {
        let path = |path: &PathBuf| path.to_string_lossy().into_owned();

        let mut layer = Layer::new();
        if let Some(input) = &self.input {
            layer.insert(config::INFILE.into(), path(input));
        }
        if let Some(output) = &self.output {
            layer.insert(config::OUTFILE.into(), path(output));
        }
        if let Some(namespace) = &self.namespace {
            layer.insert(config::NAMESPACE.into(), namespace.clone());
        }
        if let Some(filter) = &self.filter {
            layer.insert(config::FILTERS.into(), filter.clone());
        }
        if let Some(logic) = self.logic {
            layer.insert(config::LOGIC.into(), logic.to_string());
        }
        if let Some(config_file) = &self.config {
            layer.insert(config::CONFIG_FILE.into(), path(config_file));
        }
        layer
    }
}
