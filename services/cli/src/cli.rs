use crate::check::{run_check, CheckArgs};
use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand};
use gigfloww::config::AppConfig;
use gigfloww::error::AppError;
use gigfloww::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "gigfloww",
    about = "Exercise the GigFloww freelancer signup rules from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Script a complete signup session and print the resulting profile (default command)
    Demo(DemoArgs),
    /// Run the field validators against individual values
    Check(CheckArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config).await,
        Command::Check(args) => run_check(args),
    }
}
