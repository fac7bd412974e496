use crate::error::MoveError;
use crate::geometry::{self, Point, Rect, to_i32};
use crate::options::FoundationRule;
use crate::pile::{Pile, move_run};
use crate::rules;

use super::{GameState, MouseTarget, MoveOutcome, PileId};

impl GameState {
    /// Returns the pile and card under the pointer.
    ///
    /// Returns `None` only when there is no pile at all under the
    /// pointer's row.
    #[must_use]
    pub fn target_at(&self, point: Point) -> Option<MouseTarget> {
        let slots = self.top_row_slots();
        if slots > 0 && point.y < self.tableau_top() {
            let slot_width = self.window.0 / to_i32(slots);
            let slot = geometry::pile_index_at(point.x, slot_width, slots);
            let pile = if slot < self.cells.len() {
                PileId::Cell(slot)
            } else {
                PileId::Foundation(slot - self.cells.len())
            };
            let card = self.pile(pile).and_then(|p| p.len().checked_sub(1));
            return Some(MouseTarget { pile, card });
        }

        if self.tableau.is_empty() {
            return None;
        }

        let column = geometry::pile_index_at(point.x, self.column_width(), self.tableau.len());
        let pile = &self.tableau[column];
        let card = geometry::card_index_at(
            pile,
            point.y - pile.rect().y,
            self.card_size,
            self.options.layout,
        );

        log::trace!("pointer at {point:?} targets pile {column}, card {card:?}");
        Some(MouseTarget {
            pile: PileId::Tableau(column),
            card,
        })
    }

    /// Returns whether the cards from `index` up can be lifted off a pile.
    #[must_use]
    pub fn can_lift(&self, id: PileId, index: usize) -> bool {
        let Some(pile) = self.pile(id) else {
            return false;
        };

        match id {
            PileId::Tableau(_) => rules::can_pick_up(pile, index, &self.options.rules),
            PileId::Cell(_) => index == 0 && pile.len() == 1,
            PileId::Foundation(_) => false,
        }
    }

    /// Returns whether a pile would accept the held cards.
    #[must_use]
    pub fn accepts(&self, id: PileId) -> bool {
        let Some(pile) = self.pile(id) else {
            return false;
        };

        match id {
            PileId::Tableau(_) => rules::can_place(&self.held, pile, &self.options.rules),
            PileId::Cell(_) => rules::can_place_on_cell(&self.held, pile),
            PileId::Foundation(_) => {
                self.options.foundation_rule == FoundationRule::BuildUp
                    && rules::can_place_on_foundation(&self.held, pile)
            }
        }
    }

    fn lift(&mut self, id: PileId, index: usize) -> usize {
        let Some((pile, held)) = self.pile_and_held(id) else {
            return 0;
        };
        let moved = move_run(pile, held, index);
        self.origin = Some(id);
        moved
    }

    fn drop_held(&mut self, id: PileId) -> usize {
        let Some((pile, held)) = self.pile_and_held(id) else {
            return 0;
        };
        let moved = move_run(held, pile, 0);
        self.origin = None;
        moved
    }

    /// Reveals what was under a moved run and sweeps any run it completed.
    fn settle(&mut self, from: PileId, to: PileId) {
        if let PileId::Tableau(index) = from {
            if self.tableau.get_mut(index).is_some_and(Pile::reveal_top) {
                log::debug!("revealed the top card of pile {index}");
            }
        }
        if let PileId::Tableau(index) = to {
            self.collect_complete_run(index);
        }
    }

    /// Handles a pointer press: lifts the run under the pointer if it can
    /// be picked up.
    ///
    /// Returns `true` if cards were lifted.
    pub fn press(&mut self, point: Point) -> bool {
        if !self.held.is_empty() {
            return false;
        }

        let Some(MouseTarget {
            pile,
            card: Some(index),
        }) = self.target_at(point)
        else {
            return false;
        };

        if !self.can_lift(pile, index) {
            log::trace!("cannot lift {pile:?} from card {index}");
            return false;
        }

        let lifted = self.lift(pile, index);
        self.drag(point);
        log::debug!("lifted {lifted} cards from {pile:?}");
        true
    }

    /// Handles pointer motion: the held pile follows the pointer.
    pub fn drag(&mut self, point: Point) {
        let size = self.card_size;
        self.held.set_rect(Rect::new(
            point.x - size.w / 2,
            point.y - size.h / 4,
            size.w,
            self.window.1,
        ));
    }

    /// Handles a pointer release: drops the held run on the pile under the
    /// pointer if it is accepted, otherwise returns it to its origin.
    pub fn release(&mut self, point: Point) -> MoveOutcome {
        let Some(from) = self.origin else {
            return MoveOutcome::Idle;
        };
        if self.held.is_empty() {
            self.origin = None;
            return MoveOutcome::Idle;
        }

        let destination = self
            .target_at(point)
            .map(|target| target.pile)
            .filter(|&to| to != from && self.accepts(to));

        let Some(to) = destination else {
            self.drop_held(from);
            log::debug!("snapped back to {from:?}");
            return MoveOutcome::SnappedBack { to: from };
        };

        let cards = self.drop_held(to);
        self.settle(from, to);
        log::debug!("moved {cards} cards from {from:?} to {to:?}");

        MoveOutcome::Placed { from, to, cards }
    }

    /// Moves the run starting at `index` of `from` onto `to`, following
    /// the same rules as a pointer drag.
    ///
    /// Returns the number of cards moved.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are already held, either pile or the card
    /// does not exist, the run cannot be lifted, or `to` does not accept
    /// it. A rejected run is left where it was.
    pub fn move_cards(
        &mut self,
        from: PileId,
        index: usize,
        to: PileId,
    ) -> Result<usize, MoveError> {
        if !self.held.is_empty() {
            return Err(MoveError::HandOccupied);
        }
        if from == to {
            return Err(MoveError::SamePile);
        }

        let source = self.pile(from).ok_or(MoveError::PileNotFound)?;
        self.pile(to).ok_or(MoveError::PileNotFound)?;
        if index >= source.len() {
            return Err(MoveError::CardNotFound);
        }
        if !self.can_lift(from, index) {
            return Err(MoveError::CannotPickUp);
        }

        self.lift(from, index);
        if !self.accepts(to) {
            self.drop_held(from);
            return Err(MoveError::CannotPlace);
        }

        let cards = self.drop_held(to);
        self.settle(from, to);
        log::debug!("moved {cards} cards from {from:?} to {to:?}");

        Ok(cards)
    }
}
