//! Card types and deck utilities.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

/// Rank of an ace, the lowest card of a suit.
pub const ACE: u8 = 1;

/// Rank of a king, the highest card of a suit.
pub const KING: u8 = 13;

/// Number of ranks in one suit.
pub const RANKS_PER_SUIT: usize = KING as usize;

/// Card suit.
///
/// Suits are ordered so that `index() / 2` yields the color class:
/// spades and clubs are black (0), hearts and diamonds are red (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns the suit index (`0..=3`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the color class (0 = black, 1 = red).
    #[must_use]
    pub const fn color_class(self) -> u8 {
        self.index() / 2
    }

    /// Returns whether the suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.color_class() == 1
    }
}

/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// The back of the card is showing.
    FaceDown,
    /// The face of the card is showing.
    #[default]
    FaceUp,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is face up or face down.
    pub orientation: Orientation,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but never form runs or complete sequences.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            orientation: Orientation::FaceUp,
        }
    }

    /// Creates a new face-down card.
    #[must_use]
    pub const fn face_down(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            orientation: Orientation::FaceDown,
        }
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.orientation, Orientation::FaceUp)
    }

    /// Turns the card face up. Returns `true` if it was face down.
    pub const fn reveal(&mut self) -> bool {
        let was_hidden = !self.is_face_up();
        self.orientation = Orientation::FaceUp;
        was_hidden
    }

    /// Turns the card face down.
    pub const fn conceal(&mut self) {
        self.orientation = Orientation::FaceDown;
    }

}

/// An ordered set of cards built from one or more standard decks.
///
/// Cards are generated suit-major in rank order, face up, and are only
/// permuted by [`Deck::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `copies` repetitions of every rank of the given suits.
    ///
    /// ```
    /// use solrs::{Deck, Suit};
    ///
    /// let deck = Deck::new(&[Suit::Spades, Suit::Hearts], 4);
    /// assert_eq!(deck.len(), 104);
    /// ```
    #[must_use]
    pub fn new(suits: &[Suit], copies: u8) -> Self {
        let mut cards = Vec::with_capacity(copies as usize * suits.len() * RANKS_PER_SUIT);

        for _ in 0..copies {
            for &suit in suits {
                for rank in ACE..=KING {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Builds a single standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&Suit::ALL, 1)
    }

    /// Shuffles the deck in place with an unbiased Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Gives up the deck, handing its cards to the caller.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
