use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The four colour dimensions every option is weighted against.
///
/// Declaration order is the canonical presentation order and doubles as the
/// tie-break order when categories are ranked by percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DynamicRed,
    FreeSpiritYellow,
    BalanceGreen,
    LogicBlue,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::DynamicRed,
            Self::FreeSpiritYellow,
            Self::BalanceGreen,
            Self::LogicBlue,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::DynamicRed => 0,
            Self::FreeSpiritYellow => 1,
            Self::BalanceGreen => 2,
            Self::LogicBlue => 3,
        }
    }

    /// Uppercase letter used when building type codes.
    pub const fn initial(self) -> char {
        match self {
            Self::DynamicRed => 'D',
            Self::FreeSpiritYellow => 'F',
            Self::BalanceGreen => 'B',
            Self::LogicBlue => 'L',
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::DynamicRed => "dynamic_red",
            Self::FreeSpiritYellow => "free_spirit_yellow",
            Self::BalanceGreen => "balance_green",
            Self::LogicBlue => "logic_blue",
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            Self::DynamicRed => "#ef4444",
            Self::FreeSpiritYellow => "#f59e0b",
            Self::BalanceGreen => "#22c55e",
            Self::LogicBlue => "#3b82f6",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::DynamicRed => "🔴",
            Self::FreeSpiritYellow => "🟡",
            Self::BalanceGreen => "🟢",
            Self::LogicBlue => "🔵",
        }
    }

    /// Parse an externally supplied category key.
    ///
    /// Accepts the snake_case keys, the single-letter initials, and the
    /// German colour names used by earlier exports.
    pub fn from_key(raw: &str) -> Result<Self, CategoryError> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "dynamic_red" | "d" | "red" | "dynamikrot" => Ok(Self::DynamicRed),
            "free_spirit_yellow" | "f" | "yellow" | "freigeistgelb" => Ok(Self::FreeSpiritYellow),
            "balance_green" | "b" | "green" | "balancegrün" | "balancegruen" => {
                Ok(Self::BalanceGreen)
            }
            "logic_blue" | "l" | "blue" | "logikblau" => Ok(Self::LogicBlue),
            _ => Err(CategoryError::Unknown(raw.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("unknown category '{0}'")]
    Unknown(String),
    #[error("category '{0}' is given more than once")]
    Duplicate(Category),
}

/// How strongly a statement applies to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Least,
    Less,
    Applies,
    VeryMuch,
}

impl Rating {
    /// Ratings in the order they are offered to respondents.
    pub const fn ordered() -> [Self; 4] {
        [Self::VeryMuch, Self::Applies, Self::Less, Self::Least]
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::VeryMuch => 6,
            Self::Applies => 3,
            Self::Less => 2,
            Self::Least => 0,
        }
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            6 => Some(Self::VeryMuch),
            3 => Some(Self::Applies),
            2 => Some(Self::Less),
            0 => Some(Self::Least),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(InvalidRating(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating value {0} is not one of 6, 3, 2, 0")]
pub struct InvalidRating(pub u8);

/// Languages the questionnaire texts are available in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub const fn ordered() -> [Self; 2] {
        [Self::English, Self::German]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            _ => Err(UnsupportedLanguage(raw.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}' (expected en or de)")]
pub struct UnsupportedLanguage(pub String);

/// Numeric question identifier, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Option identifier such as `"7c"`: question id followed by a letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub String);

impl OptionId {
    pub fn new(question: QuestionId, letter: char) -> Self {
        Self(format!("{}{}", question.0, letter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

/// Per-category weights attached to a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWeights([u8; 4]);

impl CategoryWeights {
    pub const fn new(red: u8, yellow: u8, green: u8, blue: u8) -> Self {
        Self([red, yellow, green, blue])
    }

    pub const fn weight(&self, category: Category) -> u8 {
        self.0[category.index()]
    }
}

impl Serialize for CategoryWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for category in Category::ordered() {
            map.serialize_entry(category.key(), &self.weight(category))?;
        }
        map.end()
    }
}

/// Accumulated score per category.
///
/// Only the aggregator adds to a vector; callers build one from explicit
/// entries when classifying raw totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector([u32; 4]);

impl ScoreVector {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, u32)>,
    {
        let mut scores = Self::default();
        for (category, score) in entries {
            scores.0[category.index()] = score;
        }
        scores
    }

    /// Build a vector from string keys, rejecting anything outside the closed set.
    ///
    /// Two keys naming the same category (`red` and `dynamic_red`) are an error.
    pub fn try_from_keys(raw: &BTreeMap<String, u32>) -> Result<Self, CategoryError> {
        let mut scores = Self::default();
        let mut seen = [false; 4];
        for (key, score) in raw {
            let category = Category::from_key(key)?;
            if std::mem::replace(&mut seen[category.index()], true) {
                return Err(CategoryError::Duplicate(category));
            }
            scores.0[category.index()] = *score;
        }
        Ok(scores)
    }

    pub const fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// Sum of all categories, widened so raw `u32` totals cannot overflow.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&score| u64::from(score)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub(crate) fn add(&mut self, category: Category, amount: u32) {
        let slot = &mut self.0[category.index()];
        *slot = slot.saturating_add(amount);
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.key(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_indices() {
        for (position, category) in Category::ordered().into_iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn initials_are_distinct() {
        let initials: std::collections::HashSet<char> = Category::ordered()
            .into_iter()
            .map(Category::initial)
            .collect();
        assert_eq!(initials.len(), 4);
    }

    #[test]
    fn from_key_accepts_legacy_names_and_rejects_unknown() {
        assert_eq!(Category::from_key("Logikblau"), Ok(Category::LogicBlue));
        assert_eq!(Category::from_key(" f "), Ok(Category::FreeSpiritYellow));
        assert_eq!(
            Category::from_key("purple"),
            Err(CategoryError::Unknown("purple".to_string()))
        );
    }

    #[test]
    fn rating_values_round_trip_through_u8() {
        for rating in Rating::ordered() {
            assert_eq!(Rating::try_from(rating.value()), Ok(rating));
        }
        assert_eq!(Rating::try_from(4), Err(InvalidRating(4)));
    }

    #[test]
    fn rating_deserializes_from_numeric_value() {
        let rating: Rating = serde_json::from_str("3").expect("valid rating");
        assert_eq!(rating, Rating::Applies);
        assert!(serde_json::from_str::<Rating>("5").is_err());
    }

    #[test]
    fn language_parses_codes() {
        assert_eq!("DE".parse::<Language>(), Ok(Language::German));
        assert_eq!("english".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn score_vector_serializes_every_category() {
        let scores = ScoreVector::from_entries([(Category::BalanceGreen, 12)]);
        let json = serde_json::to_value(scores).expect("serializes");
        assert_eq!(json["balance_green"], 12);
        assert_eq!(json["dynamic_red"], 0);
        assert_eq!(scores.total(), 12);
    }

    #[test]
    fn total_does_not_overflow_on_extreme_scores() {
        let scores = ScoreVector::from_entries([
            (Category::DynamicRed, u32::MAX),
            (Category::LogicBlue, 1),
        ]);
        assert_eq!(scores.total(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn try_from_keys_rejects_aliases_of_one_category() {
        let mut raw = BTreeMap::new();
        raw.insert("red".to_string(), 5);
        raw.insert("dynamic_red".to_string(), 9);
        assert_eq!(
            ScoreVector::try_from_keys(&raw),
            Err(CategoryError::Duplicate(Category::DynamicRed))
        );
    }

    #[test]
    fn try_from_keys_rejects_unknown_categories() {
        let mut raw = BTreeMap::new();
        raw.insert("red".to_string(), 4);
        raw.insert("magenta".to_string(), 1);
        assert!(matches!(
            ScoreVector::try_from_keys(&raw),
            Err(CategoryError::Unknown(key)) if key == "magenta"
        ));
    }
}
