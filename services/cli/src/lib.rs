mod cli;
mod report;

use vacancy_stats::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
