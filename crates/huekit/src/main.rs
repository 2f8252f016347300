use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::CommandFactory;

use huekit::{logging, Cli, Config};

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();

    let base_dir = match std::env::current_dir().context("cannot determine the working directory")
    {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Unexpected error: {:#}", err);
            return ExitCode::from(1);
        }
    };
    let config = Config::from_matches(matches, base_dir).unwrap_or_else(|e| e.exit());

    logging::init(config.verbosity);

    let result = huekit::run(&config, config.frontend(), &mut io::stdout());
    let code = huekit::report(
        result,
        &config.painter(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(code)
}
