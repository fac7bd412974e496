use crate::options::FoundationRule;
use crate::pile::Pile;
use crate::rules;

use super::GameState;

impl GameState {
    /// Sweeps a complete King-to-Ace run off a tableau pile into the first
    /// empty foundation and reveals the card left on top.
    ///
    /// Only one run is collected per call. Returns `true` if a run moved.
    pub fn collect_complete_run(&mut self, pile_index: usize) -> bool {
        if self.options.foundation_rule != FoundationRule::CompleteRuns {
            return false;
        }

        let Some(pile) = self.tableau.get_mut(pile_index) else {
            return false;
        };
        let Some(run) = rules::find_complete_run(pile) else {
            return false;
        };
        let Some(foundation) = self.foundations.iter_mut().find(|f| f.is_empty()) else {
            log::warn!("complete run on pile {pile_index} but every foundation is full");
            return false;
        };

        for card in pile.remove_range(run) {
            foundation.push(card);
        }
        pile.reveal_top();

        log::debug!("collected a complete run from pile {pile_index}");
        true
    }

    /// Collects complete runs from every tableau pile.
    ///
    /// Returns the number of runs collected.
    pub fn collect_all_complete_runs(&mut self) -> usize {
        let mut collected = 0;
        for index in 0..self.tableau.len() {
            while self.collect_complete_run(index) {
                collected += 1;
            }
        }
        collected
    }

    /// Returns the number of foundations holding cards.
    #[must_use]
    pub fn completed_runs(&self) -> usize {
        self.foundations.iter().filter(|f| !f.is_empty()).count()
    }

    /// Returns whether every card has left the tableau, cells and stock.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.held.is_empty()
            && self.stock.is_empty()
            && self.tableau.iter().chain(&self.cells).all(Pile::is_empty)
    }
}
