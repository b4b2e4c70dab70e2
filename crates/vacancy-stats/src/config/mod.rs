use crate::boards::{headhunter, superjob, HeadHunterSearch, SuperJobSearch};
use std::env;
use std::fmt;

/// Requests per language before pagination gives up. HeadHunter never serves
/// more than 2000 results, i.e. 20 pages of 100.
pub const DEFAULT_MAX_PAGES: u32 = 20;

pub const DEFAULT_USER_AGENT: &str = concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"));

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
    pub fetch: FetchConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let headhunter_base_url = env::var("HEADHUNTER_BASE_URL")
            .unwrap_or_else(|_| headhunter::DEFAULT_BASE_URL.to_string());
        let superjob_base_url = env::var("SUPERJOB_BASE_URL")
            .unwrap_or_else(|_| superjob::DEFAULT_BASE_URL.to_string());
        let superjob_token = env::var("SUPERJOB_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let max_pages = match env::var("VACANCY_MAX_PAGES") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|pages| *pages > 0)
                .ok_or(ConfigError::InvalidMaxPages { value: raw })?,
            Err(_) => DEFAULT_MAX_PAGES,
        };
        let user_agent =
            env::var("VACANCY_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            headhunter: HeadHunterConfig {
                base_url: headhunter_base_url,
                search: HeadHunterSearch::moscow_developers(),
            },
            superjob: SuperJobConfig {
                base_url: superjob_base_url,
                token: superjob_token,
                search: SuperJobSearch::moscow_developers(),
            },
            fetch: FetchConfig {
                max_pages,
                user_agent,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// SuperJob credential, required once the SuperJob board is queried.
    pub fn superjob_token(&self) -> Result<&str, ConfigError> {
        self.superjob
            .token
            .as_deref()
            .ok_or(ConfigError::MissingCredential {
                variable: "SUPERJOB_TOKEN",
            })
    }
}

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    pub search: HeadHunterSearch,
}

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub search: SuperJobSearch,
}

/// Pagination and transport settings shared by both boards.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub max_pages: u32,
    pub user_agent: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingCredential { variable: &'static str },
    InvalidMaxPages { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingCredential { variable } => {
                write!(f, "{variable} must be set to query SuperJob")
            }
            ConfigError::InvalidMaxPages { value } => {
                write!(f, "VACANCY_MAX_PAGES must be a positive integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
