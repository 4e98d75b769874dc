//! migseq CLI - scaffolds sequentially numbered migration directories

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::{exit_code_for, init_logging, ExitCode};
use commands::scaffold;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(err) = scaffold::execute(&cli).await {
        if err.downcast_ref::<ExitCode>().is_none() {
            eprintln!("Error: {err}");
        }
        std::process::exit(exit_code_for(&err));
    }
}
