mod cli;
mod demo;
mod infra;
mod quote;
mod render;
mod routes;
mod server;

use retail_pricing::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
