mod cli;
mod infra;
mod quiz;
mod routes;
mod server;

use color_compass::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
