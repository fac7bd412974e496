use alloc::vec::Vec;

use crate::card::{Card, Deck};
use crate::error::DealError;
use crate::options::DealRule;
use crate::pile::Pile;

use super::GameState;

impl GameState {
    /// Deals a shuffled deck: the stock is held back and the rest goes
    /// round-robin onto the tableau.
    pub(super) fn deal_initial(&mut self, deck: Deck) {
        let mut cards = deck.into_cards();
        let stock_len = self.options.stock_len().min(cards.len());
        let stock_cards = cards.split_off(cards.len() - stock_len);
        let piles = self.tableau.len();

        for (index, mut card) in cards.into_iter().enumerate() {
            if self.options.conceal_dealt {
                card.conceal();
            }
            self.tableau[index % piles].push(card);
        }

        for pile in &mut self.tableau {
            pile.reveal_top();
        }

        self.stock = stock_cards
            .chunks(piles)
            .map(|set| {
                let mut set: Vec<Card> = set.to_vec();
                set.iter_mut().for_each(Card::conceal);
                Pile::from_cards(set)
            })
            .collect();

        log::debug!(
            "dealt {} cards to {piles} piles, {} stock sets held back",
            self.options.deck_len() - stock_len,
            self.stock.len()
        );
    }

    /// Deals one stock set: a face-up card onto every tableau pile.
    ///
    /// Returns the number of stock sets left.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are held, the stock is empty, or the deal
    /// rule forbids dealing while a tableau pile is empty.
    pub fn try_deal_next_set(&mut self) -> Result<usize, DealError> {
        if !self.held.is_empty() {
            return Err(DealError::HandOccupied);
        }

        if self.options.deal_rule == DealRule::RefuseOnEmptyPile
            && self.tableau.iter().any(Pile::is_empty)
        {
            return Err(DealError::EmptyPile);
        }

        let mut set = self.stock.pop().ok_or(DealError::StockEmpty)?;

        for pile in &mut self.tableau {
            let Some(mut card) = set.pop() else {
                break;
            };
            card.reveal();
            pile.push(card);
        }

        let collected = self.collect_all_complete_runs();
        log::debug!(
            "dealt a stock set, {} left, {collected} runs completed",
            self.stock.len()
        );

        Ok(self.stock.len())
    }

    /// Deals one stock set if allowed.
    ///
    /// Returns the number of stock sets left, unchanged when the deal is
    /// refused.
    pub fn deal_next_set(&mut self) -> usize {
        self.try_deal_next_set().unwrap_or_else(|err| {
            log::debug!("deal refused: {err}");
            self.stock.len()
        })
    }
}
