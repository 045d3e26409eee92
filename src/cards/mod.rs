//! Card system: word cards, the deck, datasets and categories.
//!
//! ## Key Types
//!
//! - `Card`: Immutable word card with its forbidden words
//! - `Deck`: Shuffled draw pile plus a recycled discard pile
//! - `CardSource`: Loads a dataset's cards by name
//! - `CategoryCatalog`: Selectable categories and the dataset each one uses

pub mod card;
pub mod category;
pub mod deck;
pub mod source;

pub use card::{Card, CardId, ForbiddenWords};
pub use category::{Category, CategoryCatalog, CategoryStatus};
pub use deck::Deck;
pub use source::{parse_cards, CardSource, JsonDirSource, StaticSource};
