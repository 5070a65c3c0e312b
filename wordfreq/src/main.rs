// src/main.rs
use clap::Parser as _;
use clap::error::ErrorKind;
use std::process::ExitCode;

use wordfreq::{Args, WordCountError, run};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let err = WordCountError::InvalidArguments(err.to_string().trim().to_owned());
            return report(&anyhow::Error::new(err));
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Maps a failed run to its user-facing message and exit code.
fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");
    err.downcast_ref::<WordCountError>()
        .map_or(ExitCode::FAILURE, |kind| {
            println!("{}", kind.user_message());
            ExitCode::from(kind.exit_code())
        })
}
