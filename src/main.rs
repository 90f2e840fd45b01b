mod cli;
mod config;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::ExitStatus;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::from(u8::from(ExitStatus::Usage));
        }
    };

    let logging_ready = match logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("warning: failed to initialize logging: {err}");
            false
        }
    };

    let config = RunConfig::for_mode(cli.mode);
    let mut stdout = std::io::stdout().lock();
    match pipeline::run(&config, &mut stdout) {
        Ok(_) => ExitCode::from(u8::from(ExitStatus::Success)),
        Err(err) => {
            logging::report_failure(&err, logging_ready, &mut std::io::stderr());
            ExitCode::from(u8::from(err.exit_status()))
        }
    }
}
