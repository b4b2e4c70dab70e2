use crate::boards::Board;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardReportView {
    pub board: Board,
    pub board_label: &'static str,
    pub title: &'static str,
    pub generated_on: NaiveDate,
    pub rows: Vec<LanguageRow>,
}
