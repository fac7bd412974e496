//! Pile addressing and move outcomes.

use crate::card::Card;
use crate::geometry::Rect;

/// Identifies one pile of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    /// A tableau pile.
    Tableau(usize),
    /// A free cell.
    Cell(usize),
    /// A foundation pile.
    Foundation(usize),
}

/// The pile and card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseTarget {
    /// The pile under the pointer.
    pub pile: PileId,
    /// The card under the pointer, if any.
    pub card: Option<usize>,
}

/// What happened when a held run was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing was held.
    Idle,
    /// The run was accepted by a new pile.
    Placed {
        /// Where the run came from.
        from: PileId,
        /// Where the run landed.
        to: PileId,
        /// Number of cards moved.
        cards: usize,
    },
    /// The run was returned to the pile it came from.
    SnappedBack {
        /// The pile the run returned to.
        to: PileId,
    },
}

/// One card to draw, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawItem {
    /// The pile the card belongs to, or `None` for the held pile.
    pub pile: Option<PileId>,
    /// Position of the card within its pile.
    pub index: usize,
    /// The card.
    pub card: Card,
    /// Where to draw it.
    pub rect: Rect,
}
