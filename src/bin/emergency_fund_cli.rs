// src/bin/emergency_fund_cli.rs

use clap::Parser;
use emergency_fund::commands::cli::CliArgs;
use emergency_fund::{initialize_environment, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_environment();

    let args = CliArgs::parse();
    run(args).await
}
