use async_trait::async_trait;
use std::sync::Mutex;
use vacancy_stats::boards::{fetch_all_vacancies, SuperJobVacancy};
use vacancy_stats::stats::collect_board_statistics;
use vacancy_stats::{Board, BoardError, VacancyPage, VacancyRecord, VacancySource};

/// Replays a fixed sequence of pages and remembers what was asked for.
struct ScriptedBoard {
    pages: Vec<VacancyPage>,
    fail_on: Option<&'static str>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl ScriptedBoard {
    fn new(pages: Vec<VacancyPage>) -> Self {
        Self {
            pages,
            fail_on: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl VacancySource for ScriptedBoard {
    fn board(&self) -> Board {
        Board::SuperJob
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage, BoardError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push((language.to_string(), page));

        if self.fail_on == Some(language) {
            return Err(BoardError::Api {
                board: Board::SuperJob,
                status: 503,
                message: "maintenance".to_string(),
            });
        }

        Ok(self.pages.get(page as usize).cloned().unwrap_or_default())
    }
}

fn rub_vacancy(from: f64, to: f64) -> VacancyRecord {
    SuperJobVacancy {
        currency: Some("rub".to_string()),
        payment_from: Some(from),
        payment_to: Some(to),
    }
    .into()
}

fn page(records: Vec<VacancyRecord>, more: bool) -> VacancyPage {
    VacancyPage { records, more }
}

#[tokio::test]
async fn stops_when_board_reports_no_more_pages() {
    let board = ScriptedBoard::new(vec![
        page(vec![rub_vacancy(100_000.0, 0.0)], true),
        page(vec![rub_vacancy(0.0, 50_000.0)], false),
        page(vec![rub_vacancy(1.0, 1.0)], false),
    ]);

    let vacancies = fetch_all_vacancies(&board, "Go", 20)
        .await
        .expect("pages fetched");

    assert_eq!(vacancies.len(), 2);
    assert_eq!(
        board.requests(),
        vec![("Go".to_string(), 0), ("Go".to_string(), 1)]
    );
}

#[tokio::test]
async fn stops_after_page_cap_on_endless_board() {
    let endless: Vec<VacancyPage> = (0..10)
        .map(|_| page(vec![rub_vacancy(1.0, 2.0)], true))
        .collect();
    let board = ScriptedBoard::new(endless);

    let vacancies = fetch_all_vacancies(&board, "Ruby", 3)
        .await
        .expect("pages fetched");

    assert_eq!(vacancies.len(), 3);
    let pages: Vec<u32> = board.requests().into_iter().map(|(_, page)| page).collect();
    assert_eq!(pages, vec![0, 1, 2]);
}

#[tokio::test]
async fn collects_every_language_in_order() {
    let board = ScriptedBoard::new(vec![page(
        vec![
            rub_vacancy(100_000.0, 200_000.0),
            rub_vacancy(0.0, 0.0),
            rub_vacancy(0.0, 50_000.0),
        ],
        false,
    )]);

    let statistics = collect_board_statistics(&board, &["Python", "Java"], 20)
        .await
        .expect("statistics collected");

    assert_eq!(statistics.board, Board::SuperJob);
    let languages: Vec<&str> = statistics
        .entries()
        .iter()
        .map(|entry| entry.language.as_str())
        .collect();
    assert_eq!(languages, ["Python", "Java"]);

    let python = statistics.get("Python").expect("python present");
    assert_eq!(python.vacancies_found, 3);
    assert_eq!(python.vacancies_processed, 2);
    assert_eq!(python.average_salary, 95_000);
}

#[tokio::test]
async fn first_failure_aborts_the_board() {
    let mut board = ScriptedBoard::new(vec![page(vec![rub_vacancy(1.0, 1.0)], false)]);
    board.fail_on = Some("Java");

    let err = collect_board_statistics(&board, &["Python", "Java", "Go"], 20)
        .await
        .expect_err("failure propagates");

    assert!(matches!(err, BoardError::Api { status: 503, .. }));
    let languages: Vec<String> = board.requests().into_iter().map(|(lang, _)| lang).collect();
    assert_eq!(languages, ["Python", "Java"]);
}

#[tokio::test]
async fn language_without_vacancies_reports_zeroes() {
    let board = ScriptedBoard::new(vec![page(Vec::new(), false)]);

    let statistics = collect_board_statistics(&board, &["Go"], 20)
        .await
        .expect("statistics collected");

    let go = statistics.get("Go").expect("go present");
    assert_eq!(go.vacancies_found, 0);
    assert_eq!(go.vacancies_processed, 0);
    assert_eq!(go.average_salary, 0);
}
