use crate::boards::{fetch_all_vacancies, Board, BoardError, VacancyRecord, VacancySource};
use serde::Serialize;

/// Programming languages compared in every report, in display order.
pub const LANGUAGES: [&str; 8] = [
    "Python",
    "JavaScript",
    "Java",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStatistics {
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

impl LanguageStatistics {
    /// Aggregates records using each record's own board salary rule.
    pub fn from_records(records: &[VacancyRecord]) -> Self {
        aggregate(records, VacancyRecord::predict_rub_salary)
    }
}

/// Counts `records` and averages the salaries `predict` manages to derive.
pub fn aggregate<T, F>(records: &[T], predict: F) -> LanguageStatistics
where
    F: Fn(&T) -> Option<f64>,
{
    let mut salary_sum = 0.0;
    let mut not_computable = 0;

    for record in records {
        match predict(record) {
            Some(salary) => salary_sum += salary,
            None => not_computable += 1,
        }
    }

    let vacancies_found = records.len();
    let vacancies_processed = vacancies_found - not_computable;
    let average_salary = if vacancies_processed > 0 {
        (salary_sum / vacancies_processed as f64).floor() as u64
    } else {
        0
    };

    LanguageStatistics {
        vacancies_found,
        vacancies_processed,
        average_salary,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageEntry {
    pub language: String,
    #[serde(flatten)]
    pub statistics: LanguageStatistics,
}

/// Per-language statistics for a single board, in configured language order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStatistics {
    pub board: Board,
    entries: Vec<LanguageEntry>,
}

impl BoardStatistics {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            entries: Vec::new(),
        }
    }

    /// Records statistics for `language`, replacing an earlier entry in place.
    pub fn insert(&mut self, language: impl Into<String>, statistics: LanguageStatistics) {
        let language = language.into();
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.language == language)
        {
            Some(entry) => entry.statistics = statistics,
            None => self.entries.push(LanguageEntry {
                language,
                statistics,
            }),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStatistics> {
        self.entries
            .iter()
            .find(|entry| entry.language == language)
            .map(|entry| &entry.statistics)
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetches and aggregates every language from `source`, one after another.
pub async fn collect_board_statistics<S, L>(
    source: &S,
    languages: &[L],
    max_pages: u32,
) -> Result<BoardStatistics, BoardError>
where
    S: VacancySource + ?Sized,
    L: AsRef<str>,
{
    let mut statistics = BoardStatistics::new(source.board());

    for language in languages {
        let language = language.as_ref();
        let vacancies = fetch_all_vacancies(source, language, max_pages).await?;
        let language_statistics = LanguageStatistics::from_records(&vacancies);
        tracing::info!(
            board = %source.board(),
            language,
            found = language_statistics.vacancies_found,
            processed = language_statistics.vacancies_processed,
            average_salary = language_statistics.average_salary,
            "language statistics collected"
        );
        statistics.insert(language, language_statistics);
    }

    Ok(statistics)
}
