use clap::Parser;

mod cli;
mod commands;
mod endpoint;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    endpoint::init_logging(cli.verbose);
    commands::run_command(cli).await
}
