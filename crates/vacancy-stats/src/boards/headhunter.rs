use super::{
    ensure_success, lenient_amount, lenient_records, lenient_text, search_phrase, Board,
    BoardError, VacancyPage, VacancySource, PAGE_SIZE,
};
use crate::salary::SalaryRange;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

const RUB_CURRENCY: &str = "RUR";

/// Search filters sent with every HeadHunter request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadHunterSearch {
    pub professional_role: u32,
    pub area: String,
    pub period_days: u32,
    pub only_with_salary: bool,
}

impl HeadHunterSearch {
    /// Developer vacancies in Moscow published during the last 30 days.
    pub fn moscow_developers() -> Self {
        Self {
            professional_role: 96,
            area: "1".to_string(),
            period_days: 30,
            only_with_salary: true,
        }
    }
}

impl Default for HeadHunterSearch {
    fn default() -> Self {
        Self::moscow_developers()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HhSalary {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub to: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeadHunterVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

impl HeadHunterVacancy {
    /// Salary range of a rouble-denominated vacancy, `None` for anything else.
    pub fn rub_salary_range(&self) -> Option<SalaryRange> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }

        let range = SalaryRange::from_raw(salary.from, salary.to);
        (!range.is_empty()).then_some(range)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    items: Vec<HeadHunterVacancy>,
    #[serde(default)]
    pages: u32,
}

impl SearchResponse {
    /// HeadHunter stops being asked for more once the requested page index
    /// reaches the reported page count.
    fn into_page(self, requested: u32) -> VacancyPage {
        VacancyPage {
            more: requested < self.pages,
            records: self.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    professional_role: u32,
    area: &'a str,
    period: u32,
    text: String,
    only_with_salary: bool,
    page: u32,
    per_page: u32,
}

pub struct HeadHunterClient {
    client: reqwest::Client,
    base_url: String,
    search: HeadHunterSearch,
}

impl HeadHunterClient {
    pub fn new(
        base_url: impl Into<String>,
        search: HeadHunterSearch,
        user_agent: &str,
    ) -> Result<Self, BoardError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| BoardError::Http {
                board: Board::HeadHunter,
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            search,
        })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.base_url)
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    fn board(&self) -> Board {
        Board::HeadHunter
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage, BoardError> {
        let query = SearchQuery {
            professional_role: self.search.professional_role,
            area: &self.search.area,
            period: self.search.period_days,
            text: search_phrase(language),
            only_with_salary: self.search.only_with_salary,
            page,
            per_page: PAGE_SIZE,
        };
        let http = |source| BoardError::Http {
            board: Board::HeadHunter,
            source,
        };

        let response = self
            .client
            .get(self.vacancies_url())
            .query(&query)
            .send()
            .await
            .map_err(http)?;
        let response = ensure_success(Board::HeadHunter, response).await?;

        let body: SearchResponse = response.json().await.map_err(http)?;
        Ok(body.into_page(page))
    }
}
