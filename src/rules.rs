//! Move legality.
//!
//! Everything here is a pure function of pile contents. Illegal moves are
//! not errors: callers snap the held run back to where it came from.

use core::ops::Range;

use crate::card::{ACE, Card, KING, RANKS_PER_SUIT, Suit};
use crate::pile::Pile;

/// How two suits are compared when building runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SuitMatch {
    /// Cards must share the same suit.
    #[default]
    Suit,
    /// Cards must share a color class (`index / 2`).
    Color,
    /// Cards must share `index / 3`, grouping spades, clubs and hearts
    /// against diamonds.
    ///
    /// Some historical rule sets used this grouping. It is almost
    /// certainly a mistake for a color check and is kept only so those
    /// games can be reproduced.
    Triad,
    /// Cards must alternate between red and black.
    AlternatingColor,
}

impl SuitMatch {
    /// Returns whether `above` may rest on `below` under this comparison.
    #[must_use]
    pub const fn matches(self, below: Suit, above: Suit) -> bool {
        match self {
            Self::Suit => below.index() == above.index(),
            Self::Color => below.color_class() == above.color_class(),
            Self::Triad => below.index() / 3 == above.index() / 3,
            Self::AlternatingColor => below.is_red() != above.is_red(),
        }
    }
}

/// Which suit checks apply when lifting and dropping runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Whether every card of a lifted run must match the one below it.
    pub enforce_suit_on_pickup: bool,
    /// Whether a dropped run must match the card it lands on.
    pub enforce_suit_on_place: bool,
    /// The comparison used by both checks.
    pub suit_match: SuitMatch,
}

impl RuleSet {
    /// Spider rules: runs are lifted only when same-suited, but may be
    /// dropped on any card one rank higher.
    #[must_use]
    pub const fn spider() -> Self {
        Self {
            enforce_suit_on_pickup: true,
            enforce_suit_on_place: false,
            suit_match: SuitMatch::Suit,
        }
    }

    /// Freecell rules: runs alternate colors both when lifted and dropped.
    #[must_use]
    pub const fn freecell() -> Self {
        Self {
            enforce_suit_on_pickup: true,
            enforce_suit_on_place: true,
            suit_match: SuitMatch::AlternatingColor,
        }
    }

    fn follows(&self, below: &Card, above: &Card, check_suit: bool) -> bool {
        is_next_lower(below, above)
            && (!check_suit || self.suit_match.matches(below.suit, above.suit))
    }
}

fn is_next_lower(below: &Card, above: &Card) -> bool {
    below.rank.checked_sub(1) == Some(above.rank)
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::spider()
    }
}

/// Returns whether the cards from `start` to the top of the pile can be
/// lifted together.
///
/// The card at `start` and every card above it must be face up, and each
/// card must be exactly one rank below the card it rests on (matching its
/// suit when `rules` asks for it). A single face-up top card can always
/// be lifted.
#[must_use]
pub fn can_pick_up(pile: &Pile, start: usize, rules: &RuleSet) -> bool {
    let Some(first) = pile.get(start) else {
        return false;
    };

    if !first.is_face_up() {
        return false;
    }

    pile.cards()[start..].windows(2).all(|pair| {
        pair[1].is_face_up() && rules.follows(&pair[0], &pair[1], rules.enforce_suit_on_pickup)
    })
}

/// Returns whether the held run may be dropped on `destination`.
///
/// An empty destination accepts any run. Otherwise the bottom card of the
/// run must be one rank below the destination's top card.
#[must_use]
pub fn can_place(held: &Pile, destination: &Pile, rules: &RuleSet) -> bool {
    let Some(bottom) = held.bottom() else {
        return false;
    };

    destination
        .top()
        .is_none_or(|top| rules.follows(top, bottom, rules.enforce_suit_on_place))
}

/// Returns whether the held run may be parked in a free cell.
#[must_use]
pub fn can_place_on_cell(held: &Pile, cell: &Pile) -> bool {
    held.len() == 1 && cell.is_empty()
}

/// Returns whether the held run may be played to a foundation built up
/// from the ace by suit.
#[must_use]
pub fn can_place_on_foundation(held: &Pile, foundation: &Pile) -> bool {
    let [card] = held.cards() else {
        return false;
    };

    match foundation.top() {
        None => card.rank == ACE,
        Some(top) => top.suit == card.suit && is_next_lower(card, top),
    }
}

/// Finds a complete King-to-Ace run of one suit.
///
/// The run must be face up and contiguous. When several exist, the one
/// whose king sits lowest in the pile wins.
#[must_use]
pub fn find_complete_run(pile: &Pile) -> Option<Range<usize>> {
    let cards = pile.cards();

    (0..cards.len())
        .filter(|&start| cards[start].rank == KING && cards[start].is_face_up())
        .find(|&start| {
            let Some(run) = cards.get(start..start + RANKS_PER_SUIT) else {
                return false;
            };
            let suit = run[0].suit;
            run.iter().all(|card| card.is_face_up() && card.suit == suit)
                && run.windows(2).all(|pair| is_next_lower(&pair[0], &pair[1]))
        })
        .map(|start| start..start + RANKS_PER_SUIT)
}
