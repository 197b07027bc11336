//! amqmon CLI entry point.

use amqmon::cli::{self, Cli};
use amqmon::core::MonitorError;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        },
        Err(_) => {
            // The calling pipeline reads error messages from stdout.
            let err = MonitorError::InvalidParametersNumber;
            println!("{}", err);
            return exit_code(&err);
        },
    };

    cli::init_logging();

    match cli::execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            exit_code(&err)
        },
    }
}

fn exit_code(err: &MonitorError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}
