use super::views::BoardReportView;
use super::ReportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    board: &'a str,
    language: &'a str,
    vacancies_found: usize,
    vacancies_processed: usize,
    average_salary: u64,
}

/// Writes every board's rows to `writer`, one CSV record per language.
pub fn write_csv<W: Write>(writer: W, views: &[BoardReportView]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for view in views {
        for row in &view.rows {
            csv_writer.serialize(CsvRow {
                board: view.board_label,
                language: &row.language,
                vacancies_found: row.vacancies_found,
                vacancies_processed: row.vacancies_processed,
                average_salary: row.average_salary,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(
    path: P,
    views: &[BoardReportView],
) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, views)
}

pub fn render_json(views: &[BoardReportView]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(views)?)
}
