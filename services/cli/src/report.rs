use crate::cli::{OutputFormat, ReportArgs};
use chrono::Local;
use tracing::info;
use vacancy_stats::boards::{HeadHunterClient, SuperJobClient};
use vacancy_stats::config::AppConfig;
use vacancy_stats::error::AppError;
use vacancy_stats::report::{render_board_table, render_json, write_csv_file, BoardReportView};
use vacancy_stats::stats::{collect_board_statistics, BoardStatistics};
use vacancy_stats::{telemetry, Board, LANGUAGES};

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let boards = args.selected_boards();
    // Fail before the first request rather than after HeadHunter is done.
    if boards.contains(&Board::SuperJob) {
        config.superjob_token()?;
    }

    info!(
        boards = boards.len(),
        max_pages = config.fetch.max_pages,
        "collecting vacancy statistics"
    );

    let today = Local::now().date_naive();
    let mut views: Vec<BoardReportView> = Vec::with_capacity(boards.len());
    for board in boards {
        let statistics = collect_board(&config, board).await?;
        let view = statistics.summary(today);
        if args.format == OutputFormat::Table {
            println!("{}", render_board_table(&view));
        }
        views.push(view);
    }

    if args.format == OutputFormat::Json {
        println!("{}", render_json(&views)?);
    }

    if let Some(path) = args.csv {
        write_csv_file(&path, &views)?;
        info!(path = %path.display(), "statistics exported");
    }

    Ok(())
}

async fn collect_board(config: &AppConfig, board: Board) -> Result<BoardStatistics, AppError> {
    let max_pages = config.fetch.max_pages;
    let user_agent = config.fetch.user_agent.as_str();

    let statistics = match board {
        Board::HeadHunter => {
            let client = HeadHunterClient::new(
                config.headhunter.base_url.clone(),
                config.headhunter.search.clone(),
                user_agent,
            )?;
            collect_board_statistics(&client, &LANGUAGES, max_pages).await?
        }
        Board::SuperJob => {
            let client = SuperJobClient::new(
                config.superjob.base_url.clone(),
                config.superjob_token()?.to_string(),
                config.superjob.search,
                user_agent,
            )?;
            collect_board_statistics(&client, &LANGUAGES, max_pages).await?
        }
    };

    Ok(statistics)
}
