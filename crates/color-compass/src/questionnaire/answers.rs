use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::catalog::QuestionCatalog;
use super::domain::{Language, OptionId, QuestionId, Rating};

/// Ratings a respondent has given to one question's options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub ratings: BTreeMap<OptionId, Rating>,
}

impl Answer {
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            question_id,
            ratings: BTreeMap::new(),
        }
    }

    pub fn rating_of(&self, option: &OptionId) -> Option<Rating> {
        self.ratings.get(option).copied()
    }

    /// Option currently holding `rating`, other than `except`.
    fn holder_of(&self, rating: Rating, except: &OptionId) -> Option<&OptionId> {
        self.ratings
            .iter()
            .find(|(option, assigned)| **assigned == rating && *option != except)
            .map(|(option, _)| option)
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("rating \"{}\" is already assigned to option {assigned_to}", .rating.label(Language::English))]
    DuplicateRating {
        rating: Rating,
        assigned_to: OptionId,
    },
    #[error("option {option} does not belong to question {question}")]
    UnknownOption {
        question: QuestionId,
        option: OptionId,
    },
    #[error("question index {index} is out of range (catalog has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
}

impl RatingError {
    /// Respondent-facing message in the given language.
    pub fn localized(&self, language: Language) -> String {
        match self {
            Self::DuplicateRating { rating, .. } => {
                super::locale::locale(language).unique_rating_message(*rating)
            }
            other => other.to_string(),
        }
    }
}

/// One answer per catalog question, in catalog order.
///
/// `version` increases on every successful mutation so derived results can be
/// cached against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    answers: Vec<Answer>,
    version: u64,
}

impl AnswerSet {
    pub fn for_catalog(catalog: &QuestionCatalog) -> Self {
        Self {
            answers: catalog
                .questions
                .iter()
                .map(|question| Answer::new(question.id))
                .collect(),
            version: 0,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    /// Assign `rating` to `option` within the question at `index`.
    ///
    /// A rating already held by a different option is rejected and the answer
    /// is left exactly as it was. Re-rating the same option overwrites.
    pub fn set_rating(
        &mut self,
        catalog: &QuestionCatalog,
        index: usize,
        option: &OptionId,
        rating: Rating,
    ) -> Result<(), RatingError> {
        let len = self.answers.len();
        let question = catalog
            .question(index)
            .ok_or(RatingError::QuestionOutOfRange { index, len })?;
        if question.option(option).is_none() {
            return Err(RatingError::UnknownOption {
                question: question.id,
                option: option.clone(),
            });
        }
        let answer = self
            .answers
            .get_mut(index)
            .ok_or(RatingError::QuestionOutOfRange { index, len })?;

        if let Some(holder) = answer.holder_of(rating, option) {
            return Err(RatingError::DuplicateRating {
                rating,
                assigned_to: holder.clone(),
            });
        }

        answer.ratings.insert(option.clone(), rating);
        self.version += 1;
        Ok(())
    }

    /// Complete means every option is rated and no rating repeats.
    pub fn is_complete(&self, catalog: &QuestionCatalog, index: usize) -> bool {
        let Some(question) = catalog.question(index) else {
            return false;
        };
        let Some(answer) = self.answers.get(index) else {
            return false;
        };
        let option_count = question.option_count();
        let distinct: BTreeSet<Rating> = answer.ratings.values().copied().collect();
        option_count > 0 && answer.ratings.len() == option_count && distinct.len() == option_count
    }

    pub fn completed_count(&self, catalog: &QuestionCatalog) -> usize {
        (0..self.answers.len())
            .filter(|index| self.is_complete(catalog, *index))
            .count()
    }

    /// Clear the ratings of a single question.
    pub fn reset(&mut self, index: usize) -> Result<(), RatingError> {
        let len = self.answers.len();
        let answer = self
            .answers
            .get_mut(index)
            .ok_or(RatingError::QuestionOutOfRange { index, len })?;
        answer.ratings.clear();
        self.version += 1;
        Ok(())
    }

    /// Drop every rating. The version keeps counting so caches never see a
    /// cleared set under an old version.
    pub fn clear(&mut self) {
        for answer in &mut self.answers {
            answer.ratings.clear();
        }
        self.version += 1;
    }

    pub fn is_untouched(&self) -> bool {
        self.answers.iter().all(Answer::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (QuestionCatalog, AnswerSet) {
        let catalog = QuestionCatalog::standard(Language::English);
        let answers = AnswerSet::for_catalog(&catalog);
        (catalog, answers)
    }

    #[test]
    fn completion_requires_the_full_bijection() {
        let (catalog, mut answers) = fixture();
        let ratings = Rating::ordered();
        for (position, letter) in ['a', 'b', 'c'].into_iter().enumerate() {
            answers
                .set_rating(&catalog, 0, &OptionId::new(QuestionId(1), letter), ratings[position])
                .expect("distinct rating");
            assert!(!answers.is_complete(&catalog, 0));
        }
        answers
            .set_rating(&catalog, 0, &OptionId::from("1d"), Rating::Least)
            .expect("last rating");
        assert!(answers.is_complete(&catalog, 0));
        assert_eq!(answers.completed_count(&catalog), 1);
    }

    #[test]
    fn duplicate_rating_is_rejected_without_mutation() {
        let (catalog, mut answers) = fixture();
        answers
            .set_rating(&catalog, 0, &OptionId::from("1a"), Rating::VeryMuch)
            .expect("first rating");
        let before = answers.clone();

        let err = answers
            .set_rating(&catalog, 0, &OptionId::from("1b"), Rating::VeryMuch)
            .expect_err("duplicate");
        assert_eq!(
            err,
            RatingError::DuplicateRating {
                rating: Rating::VeryMuch,
                assigned_to: OptionId::from("1a"),
            }
        );
        assert_eq!(answers, before);
    }

    #[test]
    fn same_option_may_be_rerated() {
        let (catalog, mut answers) = fixture();
        let option = OptionId::from("3b");
        answers
            .set_rating(&catalog, 2, &option, Rating::Less)
            .expect("first");
        answers
            .set_rating(&catalog, 2, &option, Rating::Less)
            .expect("same value again");
        answers
            .set_rating(&catalog, 2, &option, Rating::Applies)
            .expect("overwrite");
        assert_eq!(answers.answer(2).and_then(|a| a.rating_of(&option)), Some(Rating::Applies));
    }

    #[test]
    fn foreign_option_and_bad_index_are_rejected() {
        let (catalog, mut answers) = fixture();
        assert!(matches!(
            answers.set_rating(&catalog, 0, &OptionId::from("2a"), Rating::Least),
            Err(RatingError::UnknownOption { .. })
        ));
        assert_eq!(
            answers.set_rating(&catalog, 25, &OptionId::from("26a"), Rating::Least),
            Err(RatingError::QuestionOutOfRange { index: 25, len: 25 })
        );
        assert_eq!(answers.version(), 0);
    }

    #[test]
    fn reset_only_touches_one_question() {
        let (catalog, mut answers) = fixture();
        answers
            .set_rating(&catalog, 0, &OptionId::from("1a"), Rating::VeryMuch)
            .expect("q1");
        answers
            .set_rating(&catalog, 1, &OptionId::from("2a"), Rating::VeryMuch)
            .expect("q2");
        answers.reset(0).expect("in range");
        assert!(answers.answer(0).is_some_and(Answer::is_empty));
        assert!(!answers.answer(1).is_some_and(Answer::is_empty));
    }

    #[test]
    fn every_mutation_bumps_the_version() {
        let (catalog, mut answers) = fixture();
        answers
            .set_rating(&catalog, 0, &OptionId::from("1a"), Rating::VeryMuch)
            .expect("rating");
        answers.reset(0).expect("reset");
        answers.clear();
        assert_eq!(answers.version(), 3);
        assert!(answers.is_untouched());
    }

    #[test]
    fn duplicate_message_is_localized() {
        let err = RatingError::DuplicateRating {
            rating: Rating::Applies,
            assigned_to: OptionId::from("1a"),
        };
        assert!(err.localized(Language::German).contains("\"Trifft zu\""));
        assert!(err.to_string().contains("\"Applies\""));
    }
}
