//! Word cards - static card data.
//!
//! A `Card` is loaded once from a dataset and never mutated. The deck moves
//! cards around by value; cloning is cheap enough for the handful of short
//! strings a card carries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Dataset-assigned card identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Forbidden words on a card. Taboo cards usually carry five.
pub type ForbiddenWords = SmallVec<[String; 5]>;

/// A word to describe plus the words the describer may not say.
///
/// ## Example
///
/// ```
/// use word_guess::cards::Card;
///
/// let card = Card::new("c1", "Kitap", ["Okumak", "Sayfa", "Yazar"])
///     .with_difficulty("easy");
///
/// assert_eq!(card.word, "Kitap");
/// assert!(card.is_forbidden("sayfa"));
/// assert!(!card.is_forbidden("Kalem"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub word: String,
    pub forbidden_words: ForbiddenWords,
    pub difficulty: String,
}

impl Card {
    /// Create a card with an empty difficulty tag.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, word: impl Into<String>, forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: CardId::new(id),
            word: word.into(),
            forbidden_words: forbidden.into_iter().map(Into::into).collect(),
            difficulty: String::new(),
        }
    }

    /// Set the difficulty tag (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Case-insensitive check against the forbidden list.
    #[must_use]
    pub fn is_forbidden(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.forbidden_words.iter().any(|w| w.to_lowercase() == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("k-12");
        assert_eq!(id.as_str(), "k-12");
        assert_eq!(format!("{}", id), "Card(k-12)");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("1", "Deniz", ["Mavi", "Su", "Dalga", "Kum", "Yaz"])
            .with_difficulty("medium");

        assert_eq!(card.id, CardId::new("1"));
        assert_eq!(card.forbidden_words.len(), 5);
        assert!(!card.forbidden_words.spilled());
        assert_eq!(card.difficulty, "medium");
    }

    #[test]
    fn test_forbidden_order_preserved() {
        let card = Card::new("1", "Güneş", ["Sıcak", "Işık", "Yaz"]);
        let words: Vec<_> = card.forbidden_words.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["Sıcak", "Işık", "Yaz"]);
    }

    #[test]
    fn test_dataset_record_format() {
        let json = r#"{
            "id": "w-1",
            "word": "Futbol",
            "forbiddenWords": ["Top", "Gol", "Saha"],
            "difficulty": "easy"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, CardId::new("w-1"));
        assert_eq!(card.word, "Futbol");
        assert_eq!(card.forbidden_words.as_slice(), ["Top", "Gol", "Saha"]);
        assert_eq!(card.difficulty, "easy");

        let out = serde_json::to_value(&card).unwrap();
        assert!(out.get("forbiddenWords").is_some());
    }
}
