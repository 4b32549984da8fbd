use serde::Serialize;

use super::super::classify::{ProfileKind, TypeResult};
use super::super::domain::Category;
use super::super::scoring::PercentageResult;

/// Minimum lead of the top colour in a balanced profile before it is called out.
pub const STRONGEST_EMPHASIS_GAP: f64 = 3.0;
/// The runner-up needs more than this share to be described on its own.
pub const SECONDARY_PREFERENCE_FLOOR: f64 = 20.0;

/// Colour pairs with a dedicated combination paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    RedYellow,
    GreenBlue,
    RedBlue,
    YellowGreen,
}

impl Pairing {
    /// Pairing formed by two categories, in either order.
    pub fn of(a: Category, b: Category) -> Option<Self> {
        use Category::*;
        match (a, b) {
            (DynamicRed, FreeSpiritYellow) | (FreeSpiritYellow, DynamicRed) => Some(Self::RedYellow),
            (BalanceGreen, LogicBlue) | (LogicBlue, BalanceGreen) => Some(Self::GreenBlue),
            (DynamicRed, LogicBlue) | (LogicBlue, DynamicRed) => Some(Self::RedBlue),
            (FreeSpiritYellow, BalanceGreen) | (BalanceGreen, FreeSpiritYellow) => {
                Some(Self::YellowGreen)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub category: Category,
    pub percentage: f64,
}

/// One paragraph of the assessment, still independent of language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum NarrativeBlock {
    NoScores,
    BalancedIntro,
    BalancedDistribution {
        entries: Vec<DistributionEntry>,
    },
    /// Rendered with the first two strengths and first motivation of `first`.
    BalancedStrongestEmphasis {
        first: Category,
        second: Category,
        second_percentage: f64,
    },
    BalancedGeneralEmphasis {
        first: Category,
        first_percentage: f64,
        second: Category,
        second_percentage: f64,
    },
    Combination {
        pairing: Pairing,
    },
    BalancedAdvice,
    DominantIntro {
        first: Category,
        first_percentage: f64,
        second: Category,
        second_percentage: f64,
    },
    DominantPreference {
        category: Category,
    },
    SecondaryPreference {
        category: Category,
    },
    LessInFocus {
        third: Category,
        third_percentage: f64,
        fourth: Category,
        fourth_percentage: f64,
    },
    Conclusion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Narrative {
    pub blocks: Vec<NarrativeBlock>,
}

impl Narrative {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NarrativeBlock> {
        self.blocks.iter()
    }
}

/// Select the assessment paragraphs for a ranked profile.
pub fn compose(ranked: &[PercentageResult], type_result: &TypeResult) -> Narrative {
    let no_scores = Narrative {
        blocks: vec![NarrativeBlock::NoScores],
    };
    if type_result.kind == ProfileKind::Undetermined {
        return no_scores;
    }
    let [first, second, third, fourth] = ranked else {
        return no_scores;
    };

    let mut blocks = Vec::with_capacity(8);
    if type_result.is_balanced {
        blocks.push(NarrativeBlock::BalancedIntro);
        blocks.push(NarrativeBlock::BalancedDistribution {
            entries: ranked
                .iter()
                .map(|entry| DistributionEntry {
                    category: entry.category,
                    percentage: entry.percentage,
                })
                .collect(),
        });
        if first.percentage - second.percentage > STRONGEST_EMPHASIS_GAP {
            blocks.push(NarrativeBlock::BalancedStrongestEmphasis {
                first: first.category,
                second: second.category,
                second_percentage: second.percentage,
            });
        } else {
            blocks.push(NarrativeBlock::BalancedGeneralEmphasis {
                first: first.category,
                first_percentage: first.percentage,
                second: second.category,
                second_percentage: second.percentage,
            });
        }
        if let Some(pairing) = Pairing::of(first.category, second.category) {
            blocks.push(NarrativeBlock::Combination { pairing });
        }
        blocks.push(NarrativeBlock::BalancedAdvice);
    } else {
        blocks.push(NarrativeBlock::DominantIntro {
            first: first.category,
            first_percentage: first.percentage,
            second: second.category,
            second_percentage: second.percentage,
        });
        blocks.push(NarrativeBlock::DominantPreference {
            category: first.category,
        });
        let runner_up_described = second.percentage > SECONDARY_PREFERENCE_FLOOR;
        if runner_up_described {
            blocks.push(NarrativeBlock::SecondaryPreference {
                category: second.category,
            });
            if let Some(pairing) = Pairing::of(first.category, second.category) {
                blocks.push(NarrativeBlock::Combination { pairing });
            }
        }
        blocks.push(NarrativeBlock::LessInFocus {
            third: third.category,
            third_percentage: third.percentage,
            fourth: fourth.category,
            fourth_percentage: fourth.percentage,
        });
    }
    blocks.push(NarrativeBlock::Conclusion);

    Narrative { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_is_symmetric() {
        for a in Category::ordered() {
            for b in Category::ordered() {
                assert_eq!(Pairing::of(a, b), Pairing::of(b, a));
            }
        }
        assert_eq!(
            Pairing::of(Category::LogicBlue, Category::DynamicRed),
            Some(Pairing::RedBlue)
        );
        assert_eq!(
            Pairing::of(Category::DynamicRed, Category::BalanceGreen),
            None
        );
    }
}
