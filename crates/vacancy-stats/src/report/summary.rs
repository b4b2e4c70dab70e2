use super::table::render_table;
use super::views::{BoardReportView, LanguageRow};
use crate::stats::BoardStatistics;
use chrono::NaiveDate;

pub const TABLE_HEADER: [&str; 4] = [
    "Язык программирования",
    "Найдено вакансий",
    "Обработано вакансий",
    "Средняя зарплата",
];

impl BoardStatistics {
    pub fn summary(&self, generated_on: NaiveDate) -> BoardReportView {
        let rows = self
            .entries()
            .iter()
            .map(|entry| LanguageRow {
                language: entry.language.clone(),
                vacancies_found: entry.statistics.vacancies_found,
                vacancies_processed: entry.statistics.vacancies_processed,
                average_salary: entry.statistics.average_salary,
            })
            .collect();

        BoardReportView {
            board: self.board,
            board_label: self.board.label(),
            title: self.board.table_title(),
            generated_on,
            rows,
        }
    }
}

impl LanguageRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.language.clone(),
            self.vacancies_found.to_string(),
            self.vacancies_processed.to_string(),
            self.average_salary.to_string(),
        ]
    }
}

/// Comparison table for one board, titled after the board.
pub fn render_board_table(view: &BoardReportView) -> String {
    let rows: Vec<Vec<String>> = view.rows.iter().map(LanguageRow::cells).collect();
    render_table(view.title, &TABLE_HEADER, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::Board;
    use crate::stats::LanguageStatistics;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid report date")
    }

    #[test]
    fn summary_keeps_language_order_and_labels() {
        let mut statistics = BoardStatistics::new(Board::HeadHunter);
        statistics.insert(
            "Python",
            LanguageStatistics {
                vacancies_found: 12,
                vacancies_processed: 10,
                average_salary: 210_000,
            },
        );
        statistics.insert("Go", LanguageStatistics::default());

        let view = statistics.summary(report_date());
        assert_eq!(view.title, "HeadHunter Moscow");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].language, "Python");
        assert_eq!(view.rows[1].average_salary, 0);

        let table = render_board_table(&view);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("+HeadHunter Moscow"));
        assert!(lines[1].contains("Язык программирования"));
        assert!(lines[3].contains("| Python "));
        assert!(lines[3].contains("| 210000 "));
        assert!(lines[4].contains("| Go "));
    }
}
