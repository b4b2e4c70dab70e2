//! Job board clients and the pagination driver shared between them.

pub mod headhunter;
pub mod superjob;

pub use headhunter::{HeadHunterClient, HeadHunterSearch, HeadHunterVacancy, HhSalary};
pub use superjob::{SuperJobClient, SuperJobSearch, SuperJobVacancy};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Results requested per page from either board.
pub const PAGE_SIZE: u32 = 100;

/// Prefix put in front of the language name in every search phrase.
pub const SEARCH_PREFIX: &str = "Программист";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Board {
    HeadHunter,
    SuperJob,
}

impl Board {
    pub const fn ordered() -> [Self; 2] {
        [Self::HeadHunter, Self::SuperJob]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HeadHunter => "HeadHunter",
            Self::SuperJob => "SuperJob",
        }
    }

    pub const fn table_title(self) -> &'static str {
        match self {
            Self::HeadHunter => "HeadHunter Moscow",
            Self::SuperJob => "SuperJob Moscow",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A vacancy as decoded from one of the boards.
#[derive(Debug, Clone, PartialEq)]
pub enum VacancyRecord {
    HeadHunter(HeadHunterVacancy),
    SuperJob(SuperJobVacancy),
}

impl VacancyRecord {
    pub fn board(&self) -> Board {
        match self {
            Self::HeadHunter(_) => Board::HeadHunter,
            Self::SuperJob(_) => Board::SuperJob,
        }
    }

    /// Expected salary in roubles, or `None` if the record is not computable.
    pub fn predict_rub_salary(&self) -> Option<f64> {
        match self {
            Self::HeadHunter(vacancy) => vacancy.rub_salary_range()?.estimate(),
            Self::SuperJob(vacancy) => vacancy.rub_salary_range()?.estimate(),
        }
    }
}

impl From<HeadHunterVacancy> for VacancyRecord {
    fn from(value: HeadHunterVacancy) -> Self {
        Self::HeadHunter(value)
    }
}

impl From<SuperJobVacancy> for VacancyRecord {
    fn from(value: SuperJobVacancy) -> Self {
        Self::SuperJob(value)
    }
}

/// One page of search results together with the board's continuation signal.
#[derive(Debug, Clone, Default)]
pub struct VacancyPage {
    pub records: Vec<VacancyRecord>,
    pub more: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("{board} request failed: {source}")]
    Http {
        board: Board,
        #[source]
        source: reqwest::Error,
    },
    #[error("{board} API returned {status}: {message}")]
    Api {
        board: Board,
        status: u16,
        message: String,
    },
}

impl BoardError {
    pub fn board(&self) -> Board {
        match self {
            Self::Http { board, .. } | Self::Api { board, .. } => *board,
        }
    }
}

/// A searchable job board. Implementations issue exactly one request per call.
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn board(&self) -> Board;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage, BoardError>;
}

/// Pages through `source` until it reports no more results or `max_pages`
/// requests have been made.
pub async fn fetch_all_vacancies<S>(
    source: &S,
    language: &str,
    max_pages: u32,
) -> Result<Vec<VacancyRecord>, BoardError>
where
    S: VacancySource + ?Sized,
{
    let board = source.board();
    let mut vacancies = Vec::new();

    for page in 0..max_pages {
        let VacancyPage { records, more } = source.fetch_page(language, page).await?;
        tracing::debug!(%board, language, page, records = records.len(), more, "fetched page");
        vacancies.extend(records);

        if !more {
            return Ok(vacancies);
        }
    }

    tracing::warn!(
        %board,
        language,
        max_pages,
        collected = vacancies.len(),
        "page limit reached before the board ran out of results"
    );
    Ok(vacancies)
}

/// Numeric field that decodes to `None` instead of failing when the board sends
/// something other than a number.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_f64()))
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_str().map(str::to_string)))
}

/// Result list where an undecodable item becomes an empty record, so it still
/// counts as found but never as processed.
pub(crate) fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).unwrap_or_else(|err| {
                tracing::debug!(%err, "malformed vacancy decoded as empty record");
                T::default()
            })
        })
        .collect())
}

pub(crate) fn search_phrase(language: &str) -> String {
    format!("{SEARCH_PREFIX} {language}")
}

pub(crate) async fn ensure_success(
    board: Board,
    response: reqwest::Response,
) -> Result<reqwest::Response, BoardError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(BoardError::Api {
        board,
        status: status.as_u16(),
        message,
    })
}
