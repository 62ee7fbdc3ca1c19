mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, load config, start logging and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("mdl error: {:#}", err);
        std::process::exit(1);
    }
}
