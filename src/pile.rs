//! Piles of cards and the run transfer primitive.

use alloc::vec::Vec;
use core::ops::Range;

use crate::card::Card;
use crate::geometry::Rect;

/// An ordered pile of cards and the rectangle it is drawn in.
///
/// Index 0 is the bottom card; the last card is on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// Cards in the pile.
    cards: Vec<Card>,
    /// Where the pile is drawn.
    rect: Rect,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            rect: Rect::new(0, 0, 0, 0),
        }
    }

    /// Creates a pile holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            rect: Rect::new(0, 0, 0, 0),
        }
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the bottom card.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns where the pile is drawn.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Moves the pile on screen.
    pub const fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Puts a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of face-down cards before the first face-up one.
    #[must_use]
    pub fn facedown_len(&self) -> usize {
        self.cards
            .iter()
            .take_while(|card| !card.is_face_up())
            .count()
    }

    /// Turns the top card face up. Returns `true` if a card was flipped.
    pub fn reveal_top(&mut self) -> bool {
        self.cards.last_mut().is_some_and(Card::reveal)
    }

    /// Removes the cards in `range`, returning them in order.
    pub(crate) fn remove_range(&mut self, range: Range<usize>) -> Vec<Card> {
        self.cards.drain(range).collect()
    }
}

/// Moves `source[start..]` onto the top of `destination`, keeping order.
///
/// Returns the number of cards moved. A `start` past the end of `source`
/// moves nothing. Afterwards `source.len() == start` whenever `start` was
/// in range.
///
/// This one primitive lifts a run into the held pile, drops it on a target
/// and snaps it back to where it came from.
///
/// ```
/// use solrs::{Card, Pile, Suit, move_run};
///
/// let mut source = Pile::from_cards(vec![
///     Card::new(Suit::Spades, 9),
///     Card::new(Suit::Spades, 8),
///     Card::new(Suit::Spades, 7),
/// ]);
/// let mut held = Pile::new();
///
/// assert_eq!(move_run(&mut source, &mut held, 1), 2);
/// assert_eq!(source.len(), 1);
/// assert_eq!(held.bottom().map(|card| card.rank), Some(8));
/// ```
pub fn move_run(source: &mut Pile, destination: &mut Pile, start: usize) -> usize {
    if start > source.len() {
        return 0;
    }

    let moved = source.len() - start;
    destination.cards.extend(source.cards.drain(start..));
    debug_assert_eq!(source.len(), start);

    moved
}
