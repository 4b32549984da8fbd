use crate::infra::parse_language;
use clap::{Args, ValueEnum};
use color_compass::config::AppConfig;
use color_compass::error::AppError;
use color_compass::questionnaire::locale::locale;
use color_compass::questionnaire::report::views::CatalogView;
use color_compass::questionnaire::{
    compute_results, Advance, AnswerImporter, Language, OptionId, QuestionCatalog,
    QuestionnaireResults, QuizSession, Rating, SessionServiceError, TextFormat,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Questionnaire language (en or de). Defaults to APP_LANGUAGE.
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    /// Fixed seed for the statement order. Defaults to APP_SHUFFLE_SEED.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export with question_id,option_id,rating columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Language of the printed assessment
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuizOutcome {
    Completed,
    Quit,
}

enum Step {
    Rated,
    Back,
    Quit,
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let language = args.lang.unwrap_or(config.questionnaire.language);
    let seed = args.seed.or(config.questionnaire.shuffle_seed);

    let mut session = QuizSession::new(language, seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    print_introduction(language, &mut out)?;
    if play(&mut session, &mut input, &mut out)? == QuizOutcome::Completed {
        let results = session.compute_results().clone();
        print_results(&results, OutputFormat::Markdown, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        lang,
        format,
    } = args;
    let language = configured_language(lang)?;
    let catalog = QuestionCatalog::standard(language);
    let imported = AnswerImporter::from_path(&answers, &catalog)?;
    let results = compute_results(&imported, &catalog, language);

    let mut out = io::stdout().lock();
    print_results(&results, format, &mut out)
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard(configured_language(args.lang)?);
    let mut out = io::stdout().lock();
    print_catalog(&catalog, args.format, &mut out)
}

/// The `--lang` flag when given, otherwise APP_LANGUAGE.
fn configured_language(flag: Option<Language>) -> Result<Language, AppError> {
    match flag {
        Some(language) => Ok(language),
        None => Ok(AppConfig::load()?.questionnaire.language),
    }
}

/// Walk a session through every question, reading one rating per line.
///
/// `b` returns to the previous question and `q` stops without results.
pub(crate) fn play<R, W>(
    session: &mut QuizSession,
    input: &mut R,
    out: &mut W,
) -> Result<QuizOutcome, AppError>
where
    R: BufRead,
    W: Write,
{
    session.start();
    let language = session.language();
    let text = locale(language);
    let total = session.catalog().len();

    loop {
        let Some(question) = session.current_question() else {
            return Ok(QuizOutcome::Quit);
        };
        writeln!(
            out,
            "\n{}",
            text.question_heading(session.current_index() + 1, total)
        )?;
        writeln!(out, "{}", question.text)?;

        let presented: Vec<(OptionId, &'static str)> = session
            .presented_options()
            .iter()
            .map(|option| (option.id.clone(), option.text))
            .collect();

        let mut step = Step::Rated;
        for (position, (option, statement)) in presented.iter().enumerate() {
            step = rate_statement(session, input, out, position, option, statement)?;
            if !matches!(step, Step::Rated) {
                break;
            }
        }

        match step {
            Step::Quit => return Ok(QuizOutcome::Quit),
            Step::Back => {
                session
                    .reset_question()
                    .map_err(SessionServiceError::from)?;
                session.back();
                session
                    .reset_question()
                    .map_err(SessionServiceError::from)?;
            }
            Step::Rated => match session.advance() {
                Ok(Advance::Finished) => return Ok(QuizOutcome::Completed),
                Ok(Advance::Advanced { .. }) => {}
                Err(err) => {
                    writeln!(out, "  ! {}", err.localized(language))?;
                    session
                        .reset_question()
                        .map_err(SessionServiceError::from)?;
                }
            },
        }
    }
}

fn rate_statement<R, W>(
    session: &mut QuizSession,
    input: &mut R,
    out: &mut W,
    position: usize,
    option: &OptionId,
    statement: &str,
) -> Result<Step, AppError>
where
    R: BufRead,
    W: Write,
{
    let language = session.language();
    loop {
        write!(out, "  {}) {} [6/3/2/0]: ", position + 1, statement)?;
        out.flush()?;

        let Some(line) = read_command(input)? else {
            return Ok(Step::Quit);
        };
        match line.as_str() {
            "q" => return Ok(Step::Quit),
            "b" => return Ok(Step::Back),
            raw => {
                let rating = raw.parse::<u8>().ok().and_then(Rating::from_value);
                let Some(rating) = rating else {
                    writeln!(out, "  ! {}", rating_hint(language))?;
                    continue;
                };
                match session.submit_rating(option, rating) {
                    Ok(()) => return Ok(Step::Rated),
                    Err(err) => writeln!(out, "  ! {}", err.localized(language))?,
                }
            }
        }
    }
}

fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_ascii_lowercase()))
}

fn rating_hint(language: Language) -> String {
    Rating::ordered()
        .into_iter()
        .map(|rating| format!("{} = {}", rating.value(), rating.label(language)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_introduction<W: Write>(language: Language, out: &mut W) -> Result<(), AppError> {
    let text = locale(language);
    writeln!(out, "{}\n", text.app_name)?;
    writeln!(out, "{}\n", text.app_description)?;
    writeln!(out, "{}", text.instructions)?;
    for rating in Rating::ordered() {
        let entry = text.rating(rating);
        writeln!(out, "  {} - {}: {}", rating.value(), entry.label, entry.explanation)?;
    }
    writeln!(out, "\n{}", text.important_instruction)?;
    Ok(())
}

pub(crate) fn print_results<W: Write>(
    results: &QuestionnaireResults,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let text_format = match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results.view(TextFormat::Plain))?;
            writeln!(out, "{json}")?;
            return Ok(());
        }
        OutputFormat::Text => TextFormat::Plain,
        OutputFormat::Markdown => TextFormat::Markdown,
    };

    let text = locale(results.language);
    writeln!(out, "\n{}", text.results_title)?;
    writeln!(out, "{}\n", results.type_label())?;
    for entry in &results.percentages {
        writeln!(
            out,
            "  {:<20} {:>5.1}%  ({} points)",
            entry.category.display_name(results.language),
            entry.percentage,
            entry.score
        )?;
    }
    writeln!(out, "\n{}\n", results.render(text_format))?;
    writeln!(out, "{}", results.share_text())?;
    writeln!(out, "{}", text.important_notice)?;
    Ok(())
}

fn print_catalog<W: Write>(
    catalog: &QuestionCatalog,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&CatalogView::new(catalog))?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let text = locale(catalog.language);
    for (index, question) in catalog.questions.iter().enumerate() {
        writeln!(out, "{}", text.question_heading(index + 1, catalog.len()))?;
        writeln!(out, "{}", question.text)?;
        for option in &question.options {
            writeln!(out, "  {:<4} {}", option.id, option.text)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_compass::questionnaire::ProfileKind;
    use std::env;
    use std::io::Cursor;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn run(session: &mut QuizSession, script: &str) -> (QuizOutcome, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = play(session, &mut input, &mut out).expect("quiz runs");
        (outcome, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn full_script_completes_the_questionnaire() {
        let mut session = QuizSession::new(Language::English, Some(11));
        let script = "6\n3\n2\n0\n".repeat(25);

        let (outcome, output) = run(&mut session, &script);

        assert_eq!(outcome, QuizOutcome::Completed);
        assert!(session.is_finished());
        assert_eq!(session.answers().completed_count(session.catalog()), 25);
        assert!(output.contains("Question 25 of 25"));
        assert_ne!(
            session.compute_results().type_result.kind,
            ProfileKind::Undetermined
        );
    }

    #[test]
    fn repeated_rating_is_explained_and_asked_again() {
        let mut session = QuizSession::new(Language::German, Some(3));
        let (outcome, output) = run(&mut session, "6\n6\n3\n2\n0\nq\n");

        assert_eq!(outcome, QuizOutcome::Quit);
        assert!(output.contains(&locale(Language::German).unique_rating_message(Rating::VeryMuch)));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers().completed_count(session.catalog()), 1);
    }

    #[test]
    fn invalid_input_lists_the_scale() {
        let mut session = QuizSession::new(Language::English, Some(3));
        let (outcome, output) = run(&mut session, "5\n");

        assert_eq!(outcome, QuizOutcome::Quit);
        assert!(output.contains("6 = Applies very much"));
    }

    #[test]
    fn back_clears_both_questions() {
        let mut session = QuizSession::new(Language::English, Some(5));
        let (outcome, _) = run(&mut session, "6\n3\n2\n0\n6\nb\n");

        assert_eq!(outcome, QuizOutcome::Quit);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_untouched());
    }

    #[test]
    fn json_results_are_machine_readable() {
        let results = QuestionnaireResults::from_scores(Default::default(), Language::English);
        let mut out = Vec::new();
        print_results(&results, OutputFormat::Json, &mut out).expect("prints");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("json output");
        assert_eq!(value["type_result"]["type_code"], "not_determined");
    }

    #[test]
    fn text_catalog_lists_every_option() {
        let catalog = QuestionCatalog::standard(Language::English);
        let mut out = Vec::new();
        print_catalog(&catalog, OutputFormat::Text, &mut out).expect("prints");

        let output = String::from_utf8(out).expect("utf8 output");
        assert!(output.contains("25d"));
        assert!(output.contains("Question 1 of 25"));
    }

    #[test]
    fn language_flag_falls_back_to_app_language() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        env::set_var("APP_LANGUAGE", "de");

        let fallback = configured_language(None);
        let flagged = configured_language(Some(Language::English));
        env::remove_var("APP_LANGUAGE");

        assert_eq!(fallback.expect("config loads"), Language::German);
        assert_eq!(flagged.expect("flag wins"), Language::English);
    }
}
