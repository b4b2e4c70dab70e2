use super::{
    ensure_success, lenient_amount, lenient_records, lenient_text, search_phrase, Board,
    BoardError, VacancyPage, VacancySource, PAGE_SIZE,
};
use crate::salary::SalaryRange;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru/2.0";

/// Header carrying the SuperJob application secret.
pub const APP_ID_HEADER: &str = "X-Api-App-Id";

const RUB_CURRENCY: &str = "rub";

/// Search filters sent with every SuperJob request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperJobSearch {
    pub town: u32,
    pub catalogue: u32,
}

impl SuperJobSearch {
    /// "Development, programming" catalogue in Moscow.
    pub fn moscow_developers() -> Self {
        Self {
            town: 4,
            catalogue: 48,
        }
    }
}

impl Default for SuperJobSearch {
    fn default() -> Self {
        Self::moscow_developers()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuperJobVacancy {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub payment_to: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: Option<String>,
}

impl SuperJobVacancy {
    /// Salary range of a rouble vacancy with at least one positive bound.
    pub fn rub_salary_range(&self) -> Option<SalaryRange> {
        if self.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }

        let range = SalaryRange::from_raw(self.payment_from, self.payment_to);
        (!range.is_empty()).then_some(range)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    objects: Vec<SuperJobVacancy>,
    #[serde(default)]
    more: bool,
}

impl SearchResponse {
    fn into_page(self) -> VacancyPage {
        VacancyPage {
            more: self.more,
            records: self.objects.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery {
    town: u32,
    keyword: String,
    catalogues: u32,
    page: u32,
    count: u32,
}

pub struct SuperJobClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    search: SuperJobSearch,
}

impl SuperJobClient {
    pub fn new(
        base_url: impl Into<String>,
        token: String,
        search: SuperJobSearch,
        user_agent: &str,
    ) -> Result<Self, BoardError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| BoardError::Http {
                board: Board::SuperJob,
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            search,
        })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies/", self.base_url)
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    fn board(&self) -> Board {
        Board::SuperJob
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage, BoardError> {
        let query = SearchQuery {
            town: self.search.town,
            keyword: search_phrase(language),
            catalogues: self.search.catalogue,
            page,
            count: PAGE_SIZE,
        };
        let http = |source| BoardError::Http {
            board: Board::SuperJob,
            source,
        };

        let response = self
            .client
            .get(self.vacancies_url())
            .header(APP_ID_HEADER, &self.token)
            .query(&query)
            .send()
            .await
            .map_err(http)?;
        let response = ensure_success(Board::SuperJob, response).await?;

        let body: SearchResponse = response.json().await.map_err(http)?;
        Ok(body.into_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(currency: &str, from: f64, to: f64) -> SuperJobVacancy {
        SuperJobVacancy {
            currency: Some(currency.to_string()),
            payment_from: Some(from),
            payment_to: Some(to),
        }
    }

    #[test]
    fn zero_bounds_are_not_computable() {
        assert!(vacancy("rub", 0.0, 0.0).rub_salary_range().is_none());
    }

    #[test]
    fn upper_only_rouble_vacancy_is_computable() {
        let range = vacancy("rub", 0.0, 50_000.0)
            .rub_salary_range()
            .expect("upper bound is enough");
        assert_eq!(range.estimate(), Some(40_000.0));
    }

    #[test]
    fn foreign_currency_is_skipped() {
        assert!(vacancy("usd", 1_000.0, 2_000.0).rub_salary_range().is_none());
    }

    #[test]
    fn more_flag_drives_continuation() {
        let body = serde_json::json!({
            "objects": [
                { "id": 7, "payment_from": 90000, "payment_to": 0, "currency": "rub", "town": { "id": 4 } }
            ],
            "total": 1,
            "more": false
        });
        let response: SearchResponse = serde_json::from_value(body).expect("response decodes");
        let page = response.into_page();
        assert!(!page.more);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].predict_rub_salary(), Some(108_000.0));
    }

    #[test]
    fn malformed_payment_only_spoils_its_own_record() {
        let body = serde_json::json!({
            "objects": [
                { "id": 1, "payment_from": 100000, "payment_to": 200000, "currency": "rub" },
                { "id": 2, "payment_from": "договорная", "payment_to": null, "currency": "rub" },
                { "id": 3, "payment_from": 60000, "payment_to": 0, "currency": 643 },
                "not a vacancy"
            ],
            "more": false
        });
        let response: SearchResponse = serde_json::from_value(body).expect("response decodes");
        let page = response.into_page();

        let statistics = crate::stats::LanguageStatistics::from_records(&page.records);
        assert_eq!(statistics.vacancies_found, 4);
        assert_eq!(statistics.vacancies_processed, 1);
        assert_eq!(statistics.average_salary, 150_000);
    }
}
