//! Product listing CLI.
//!
//! This binary installs the tracing subscriber and delegates to
//! `product_catalogue::catalogue_cli`, which loads settings and the catalogue,
//! renders the view for the configured selection, and optionally keeps
//! reading filter commands from stdin.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use product_catalogue::catalogue_cli::run;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        if let Err(write_err) = writeln!(io::stderr().lock(), "tracing init failed: {err}") {
            drop(write_err);
        }
    }

    match run(env::args_os(), io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
