//! The deck: a shuffled draw pile plus a discard pile.
//!
//! Every loaded card is always in exactly one place: the draw pile
//! (`remaining`), the discard pile, or in play (held by the caller between
//! `draw` and `discard`). When the draw pile runs out, the discard pile is
//! shuffled and becomes the new draw pile.
//!
//! Both piles are `im::Vector` so the deck clones in O(1).

use im::Vector;
use tracing::debug;

use super::card::Card;
use crate::core::GameRng;

/// Draw pile and discard pile for one card set.
///
/// ## Usage
///
/// ```
/// use word_guess::cards::{Card, Deck};
/// use word_guess::core::GameRng;
///
/// let mut rng = GameRng::new(1);
/// let mut deck = Deck::new();
/// deck.load(vec![Card::new("a", "Elma", ["Meyve"])], &mut rng);
///
/// let card = deck.draw(&mut rng).unwrap();
/// deck.discard(card);
///
/// // The discard pile is recycled once the draw pile is empty.
/// assert!(deck.draw(&mut rng).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    /// The full card set, kept for `reset`.
    cards: Vector<Card>,

    /// Draw pile. Cards are drawn from the front.
    remaining: Vector<Card>,

    /// Cards already judged this game.
    discarded: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly shuffled copy of `cards`.
    ///
    /// Clears the discard pile.
    pub fn load(&mut self, cards: impl IntoIterator<Item = Card>, rng: &mut GameRng) {
        self.cards = cards.into_iter().collect();
        self.reset(rng);
    }

    /// Reshuffle the full card set into the draw pile and clear the discard pile.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.remaining = shuffled(self.cards.iter().cloned(), rng);
        self.discarded.clear();
        debug!(cards = self.remaining.len(), "deck shuffled");
    }

    /// Take one card from the draw pile.
    ///
    /// Recycles the discard pile when the draw pile is empty. Returns `None`
    /// only when both piles are empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.remaining.is_empty() {
            if self.discarded.is_empty() {
                return None;
            }
            let recycled = std::mem::take(&mut self.discarded);
            debug!(cards = recycled.len(), "recycling discard pile");
            self.remaining = shuffled(recycled, rng);
        }
        self.remaining.pop_front()
    }

    /// Put a judged card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discarded.push_back(card);
    }

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discarded_len(&self) -> usize {
        self.discarded.len()
    }

    /// Size of the loaded card set.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are loaded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The draw pile, front first.
    pub fn remaining(&self) -> impl Iterator<Item = &Card> {
        self.remaining.iter()
    }

    /// The discard pile, oldest first.
    pub fn discarded(&self) -> impl Iterator<Item = &Card> {
        self.discarded.iter()
    }
}

fn shuffled(cards: impl IntoIterator<Item = Card>, rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = cards.into_iter().collect();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}
