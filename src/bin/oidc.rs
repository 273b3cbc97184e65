//! oidc: Convert object identifiers between dotted text and BER content bytes.
//!
//! Part of the ber-oid CLI utilities.

use ber_oid::cli::args::Args;
use ber_oid::cli::run;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    args.log.init_tracing();

    let stdout = std::io::stdout();
    match run(&args.command, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
