mod cli;
mod infra;
mod report;
mod routes;
mod server;

use epc_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
