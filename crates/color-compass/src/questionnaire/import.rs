use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::answers::{AnswerSet, RatingError};
use super::catalog::QuestionCatalog;
use super::domain::{InvalidRating, OptionId, QuestionId, Rating};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownQuestion { row: usize, question_id: u32 },
    InvalidRating { row: usize, source: InvalidRating },
    Rating { row: usize, source: RatingError },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read answers file: {}", err),
            ImportError::Csv(err) => write!(f, "invalid answers CSV data: {}", err),
            ImportError::UnknownQuestion { row, question_id } => {
                write!(f, "row {}: question {} does not exist", row, question_id)
            }
            ImportError::InvalidRating { row, source } => write!(f, "row {}: {}", row, source),
            ImportError::Rating { row, source } => write!(f, "row {}: {}", row, source),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::UnknownQuestion { .. } => None,
            ImportError::InvalidRating { source, .. } => Some(source),
            ImportError::Rating { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: u32,
    option_id: String,
    rating: u8,
}

/// Loads an answer set from `question_id,option_id,rating` rows.
///
/// Every row goes through the same validation as interactive rating, so a
/// file that repeats a rating within a question is rejected.
pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<AnswerSet, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<AnswerSet, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = AnswerSet::for_catalog(catalog);
        let mut applied = 0usize;

        for (offset, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            // Header is line 1.
            let row = offset + 2;
            let record = record?;
            apply_row(&mut answers, catalog, row, record)?;
            applied += 1;
        }

        info!(rows = applied, "imported answers");
        Ok(answers)
    }
}

fn apply_row(
    answers: &mut AnswerSet,
    catalog: &QuestionCatalog,
    row: usize,
    record: AnswerRow,
) -> Result<(), ImportError> {
    let question_id = QuestionId(record.question_id);
    let index = catalog
        .questions
        .iter()
        .position(|question| question.id == question_id)
        .ok_or(ImportError::UnknownQuestion {
            row,
            question_id: record.question_id,
        })?;
    let rating = Rating::try_from(record.rating)
        .map_err(|source| ImportError::InvalidRating { row, source })?;
    let option = normalize_option(question_id, &record.option_id);

    answers
        .set_rating(catalog, index, &option, rating)
        .map_err(|source| ImportError::Rating { row, source })
}

/// Accepts either the full id (`7c`) or the bare letter (`c`).
fn normalize_option(question: QuestionId, raw: &str) -> OptionId {
    let trimmed = raw.trim().to_ascii_lowercase();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => OptionId::new(question, letter),
        _ => OptionId(trimmed),
    }
}
