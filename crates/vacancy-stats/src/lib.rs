//! Vacancy counts and average salaries per programming language, collected
//! from the HeadHunter and SuperJob search APIs.

pub mod boards;
pub mod config;
pub mod error;
pub mod report;
pub mod salary;
pub mod stats;
pub mod telemetry;

pub use boards::{Board, BoardError, VacancyPage, VacancyRecord, VacancySource};
pub use salary::{predict_salary, SalaryRange};
pub use stats::{BoardStatistics, LanguageStatistics, LANGUAGES};
