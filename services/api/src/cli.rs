use crate::quiz::{run_catalog, run_quiz, run_score, CatalogArgs, QuizArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use color_compass::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ColorCompass",
    about = "Take, score, and serve the ColorCompass personality questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer the questionnaire interactively in the terminal
    Quiz(QuizArgs),
    /// Score a CSV answer export and print the assessment
    Score(ScoreArgs),
    /// Print the question catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz(args) => run_quiz(args),
        Command::Score(args) => run_score(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
