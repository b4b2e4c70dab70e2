use crate::report::run_report;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;
use vacancy_stats::error::AppError;
use vacancy_stats::Board;

#[derive(Parser, Debug)]
#[command(
    name = "vacancy-stats",
    about = "Compare vacancy counts and average salaries of programming languages on HeadHunter and SuperJob",
    version
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BoardArg {
    #[value(name = "headhunter", alias = "hh")]
    HeadHunter,
    #[value(name = "superjob", alias = "sj")]
    SuperJob,
}

impl From<BoardArg> for Board {
    fn from(value: BoardArg) -> Self {
        match value {
            BoardArg::HeadHunter => Board::HeadHunter,
            BoardArg::SuperJob => Board::SuperJob,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Board to query; repeat to select several (defaults to all boards)
    #[arg(long = "board", value_enum)]
    pub(crate) boards: Vec<BoardArg>,
    /// How statistics are printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
    /// Also write every row to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

impl ReportArgs {
    /// Selected boards in canonical order, HeadHunter first.
    pub(crate) fn selected_boards(&self) -> Vec<Board> {
        Board::ordered()
            .into_iter()
            .filter(|board| {
                self.boards.is_empty()
                    || self.boards.iter().any(|arg| Board::from(*arg) == *board)
            })
            .collect()
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    run_report(cli.report).await
}
