use alloc::vec::Vec;

use crate::geometry::{CardSize, Rect, StackOffsets, to_i32};
use crate::options::{FoundationRule, StackLayout};
use crate::pile::Pile;

use super::{DrawItem, GameState, PileId};

/// Gap between the window edge and the first row of piles.
const EDGE: i32 = 3;

/// Space trimmed from the right and bottom of each pile slot.
const GUTTER: i32 = 5;

impl GameState {
    /// Returns whether free cells and foundations are shown in a row
    /// above the tableau.
    #[must_use]
    pub fn has_top_row(&self) -> bool {
        !self.cells.is_empty() || self.options.foundation_rule == FoundationRule::BuildUp
    }

    pub(super) fn top_row_slots(&self) -> usize {
        if self.has_top_row() {
            self.cells.len() + self.foundations.len()
        } else {
            0
        }
    }

    /// Returns the y coordinate where the tableau begins.
    #[must_use]
    pub fn tableau_top(&self) -> i32 {
        self.tableau.first().map_or(EDGE, |pile| pile.rect().y)
    }

    /// Returns the current window size.
    #[must_use]
    pub const fn window(&self) -> (i32, i32) {
        self.window
    }

    /// Returns the horizontal distance between tableau columns.
    pub(super) fn column_width(&self) -> i32 {
        self.window.0 / to_i32(self.tableau.len()).max(1)
    }

    /// Lays every pile out for a window of the given size.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.window = (width, height);

        let columns = self.tableau.len().max(self.top_row_slots());
        self.card_size = CardSize::for_window(width, columns);

        let top = if self.has_top_row() {
            EDGE + self.card_size.h
        } else {
            EDGE
        };

        let column_width = self.column_width();
        for (index, pile) in self.tableau.iter_mut().enumerate() {
            pile.set_rect(Rect::new(
                column_width * to_i32(index) + EDGE,
                top,
                column_width - GUTTER,
                height - top - GUTTER,
            ));
        }

        let slots = self.top_row_slots();
        if slots > 0 {
            let slot_width = width / to_i32(slots);
            let card_h = self.card_size.h;
            let top_row = self.cells.iter_mut().chain(self.foundations.iter_mut());
            for (index, pile) in top_row.enumerate() {
                pile.set_rect(Rect::new(
                    slot_width * to_i32(index) + EDGE,
                    EDGE,
                    slot_width - GUTTER,
                    card_h - GUTTER,
                ));
            }
        }

        log::trace!("resized to {width}x{height}, card size {:?}", self.card_size);
    }

    /// Returns every visible card with the rectangle to draw it in, in
    /// paint order. The held pile is painted last.
    #[must_use]
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::new();

        for (index, pile) in self.tableau.iter().enumerate() {
            self.push_stacked(&mut items, Some(PileId::Tableau(index)), pile, self.options.layout);
        }

        if self.has_top_row() {
            let slots = self
                .cells
                .iter()
                .enumerate()
                .map(|(index, pile)| (PileId::Cell(index), pile))
                .chain(
                    self.foundations
                        .iter()
                        .enumerate()
                        .map(|(index, pile)| (PileId::Foundation(index), pile)),
                );
            for (id, pile) in slots {
                push_squared(&mut items, id, pile, self.card_size);
            }
        }

        self.push_stacked(&mut items, None, &self.held, StackLayout::Uniform);
        items
    }

    fn push_stacked(
        &self,
        items: &mut Vec<DrawItem>,
        pile_id: Option<PileId>,
        pile: &Pile,
        layout: StackLayout,
    ) {
        let offsets = StackOffsets::resolve(pile, self.card_size, layout);
        items.extend(pile.cards().iter().enumerate().map(|(index, &card)| DrawItem {
            pile: pile_id,
            index,
            card,
            rect: offsets.card_rect(pile.rect(), index, self.card_size),
        }));
    }
}

/// Cells and foundations draw every card in the same spot.
fn push_squared(items: &mut Vec<DrawItem>, id: PileId, pile: &Pile, card_size: CardSize) {
    let margin = card_size.margin();
    let rect = pile.rect();
    items.extend(pile.cards().iter().enumerate().map(|(index, &card)| DrawItem {
        pile: Some(id),
        index,
        card,
        rect: Rect::new(
            rect.x + margin,
            rect.y + margin,
            card_size.w - 2 * margin,
            card_size.h - 2 * margin,
        ),
    }));
}
