mod export;
mod summary;
pub mod table;
pub mod views;

pub use export::{render_json, write_csv, write_csv_file};
pub use summary::{render_board_table, TABLE_HEADER};
pub use table::render_table;
pub use views::{BoardReportView, LanguageRow};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unable to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
