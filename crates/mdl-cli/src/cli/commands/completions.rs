//! `mdl completions <shell>` and `mdl man` – generated from the clap definition.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use std::io;

pub fn run_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mdl", &mut io::stdout());
    Ok(())
}

pub fn run_man() -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(&mut io::stdout())?;
    Ok(())
}
