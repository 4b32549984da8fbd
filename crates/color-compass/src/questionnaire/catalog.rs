use serde::Serialize;

use super::domain::{CategoryWeights, Language, OptionId, QuestionId};
use super::locale::{locale, QuestionText};

pub const QUESTION_COUNT: usize = 25;
pub const OPTION_LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Weights for options `a`..`d`, ordered red, yellow, green, blue.
const VARIANT_A: [CategoryWeights; 4] = [
    CategoryWeights::new(6, 2, 0, 1),
    CategoryWeights::new(1, 6, 2, 0),
    CategoryWeights::new(0, 1, 6, 2),
    CategoryWeights::new(2, 0, 1, 6),
];

const VARIANT_B: [CategoryWeights; 4] = [
    CategoryWeights::new(6, 1, 0, 2),
    CategoryWeights::new(1, 6, 2, 0),
    CategoryWeights::new(0, 2, 6, 1),
    CategoryWeights::new(2, 0, 1, 6),
];

const VARIANT_B_QUESTIONS: [u32; 7] = [2, 5, 6, 10, 16, 18, 20];

pub fn weights_for(question: QuestionId, letter_index: usize) -> Option<CategoryWeights> {
    let table = if VARIANT_B_QUESTIONS.contains(&question.0) {
        &VARIANT_B
    } else {
        &VARIANT_A
    };
    table.get(letter_index).copied()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOption {
    pub id: OptionId,
    pub text: &'static str,
    pub weights: CategoryWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, id: &OptionId) -> Option<&QuestionOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// The fixed questionnaire in one language.
///
/// Ids and weights are identical across languages; only the texts differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCatalog {
    pub language: Language,
    pub questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard(language: Language) -> Self {
        let questions = locale(language)
            .questions
            .iter()
            .enumerate()
            .map(|(position, text)| build_question(position, text))
            .collect();
        Self {
            language,
            questions,
        }
    }

    /// Question at a 0-based position.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn build_question(position: usize, text: &'static QuestionText) -> Question {
    let id = QuestionId(position as u32 + 1);
    let options = OPTION_LETTERS
        .iter()
        .zip(text.options.iter())
        .enumerate()
        .filter_map(|(letter_index, (letter, option_text))| {
            weights_for(id, letter_index).map(|weights| QuestionOption {
                id: OptionId::new(id, *letter),
                text: *option_text,
                weights,
            })
        })
        .collect();
    Question {
        id,
        text: text.text,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::domain::Category;

    #[test]
    fn standard_catalog_has_twenty_five_questions_of_four_options() {
        let catalog = QuestionCatalog::standard(Language::English);
        assert_eq!(catalog.len(), QUESTION_COUNT);
        for (position, question) in catalog.questions.iter().enumerate() {
            assert_eq!(question.id, QuestionId(position as u32 + 1));
            assert_eq!(question.option_count(), 4);
        }
    }

    #[test]
    fn each_option_leads_with_its_own_colour() {
        let catalog = QuestionCatalog::standard(Language::German);
        for question in &catalog.questions {
            for (option, category) in question.options.iter().zip(Category::ordered()) {
                assert_eq!(option.weights.weight(category), 6, "{}", option.id);
            }
        }
    }

    #[test]
    fn variant_b_questions_swap_secondary_weights() {
        let catalog = QuestionCatalog::standard(Language::English);
        let second = catalog.question_by_id(QuestionId(2)).expect("question 2");
        assert_eq!(second.options[0].weights, CategoryWeights::new(6, 1, 0, 2));
        assert_eq!(second.options[2].weights, CategoryWeights::new(0, 2, 6, 1));

        let first = catalog.question_by_id(QuestionId(1)).expect("question 1");
        assert_eq!(first.options[0].weights, CategoryWeights::new(6, 2, 0, 1));
    }

    #[test]
    fn ids_and_weights_do_not_depend_on_language() {
        let english = QuestionCatalog::standard(Language::English);
        let german = QuestionCatalog::standard(Language::German);
        for (en, de) in english.questions.iter().zip(&german.questions) {
            assert_eq!(en.id, de.id);
            assert_ne!(en.text, de.text);
            for (a, b) in en.options.iter().zip(&de.options) {
                assert_eq!(a.id, b.id);
                assert_eq!(a.weights, b.weights);
            }
        }
    }

    #[test]
    fn option_lookup_uses_full_id() {
        let catalog = QuestionCatalog::standard(Language::English);
        let question = catalog.question(6).expect("question 7");
        assert!(question.option(&OptionId::from("7c")).is_some());
        assert!(question.option(&OptionId::from("6c")).is_none());
    }
}
