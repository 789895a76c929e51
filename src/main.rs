use std::path::Path;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use trace2dox::cli::{Cli, USAGE_EXIT_CODE};
use trace2dox::diagnostic_log::{self, LOG_FILENAME};
use trace2dox::error::exit_code;
use trace2dox::{Settings, run};

fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayVersion => 0,
            _ => USAGE_EXIT_CODE,
        };
        let _ = err.print();
        process::exit(code)
    })
}

fn main() {
    let cli = parse_cli();
    diagnostic_log::init(Path::new(LOG_FILENAME));

    let result = Settings::load(&cli.overrides())
        .map_err(anyhow::Error::from)
        .and_then(|settings| run(&settings));

    if let Err(err) = result {
        log::error!("{err:#}");
        eprintln!("trace2dox: {err:#}");
        process::exit(exit_code(&err).unwrap_or(1));
    }
}
