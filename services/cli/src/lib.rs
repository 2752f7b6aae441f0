mod check;
mod cli;
mod demo;
mod infra;

use gigfloww::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
