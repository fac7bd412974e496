//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Deck;
use crate::error::SetupError;
use crate::geometry::CardSize;
use crate::options::GameOptions;
use crate::pile::Pile;

mod deal;
mod foundation;
mod layout;
mod pointer;
pub mod state;

pub use state::{DrawItem, MouseTarget, MoveOutcome, PileId};

/// Window size used until the first [`GameState::resize`].
pub const DEFAULT_WINDOW: (i32, i32) = (800, 600);

/// A solitaire game: every pile, the run held by the pointer, and the
/// random number generator used for dealing.
///
/// The state is owned by the caller's event loop and mutated only through
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Game options.
    pub options: GameOptions,
    /// Tableau piles, left to right.
    pub tableau: Vec<Pile>,
    /// Stock sets waiting to be dealt; the last one is dealt next.
    pub stock: Vec<Pile>,
    /// Free cells.
    pub cells: Vec<Pile>,
    /// Foundation piles.
    pub foundations: Vec<Pile>,
    /// Cards attached to the pointer.
    held: Pile,
    /// Where the held cards were lifted from.
    origin: Option<PileId>,
    /// Current card sprite size.
    card_size: CardSize,
    /// Current window size.
    window: (i32, i32),
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates and deals a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not describe a playable game.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{GameOptions, GameState};
    ///
    /// let game = GameState::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.tableau.len(), 10);
    /// assert_eq!(game.stock_remaining(), 5);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        options.validate()?;

        let mut game = Self {
            options,
            tableau: (0..options.tableau_piles).map(|_| Pile::new()).collect(),
            stock: Vec::new(),
            cells: (0..options.free_cells).map(|_| Pile::new()).collect(),
            foundations: (0..options.foundations).map(|_| Pile::new()).collect(),
            held: Pile::new(),
            origin: None,
            card_size: CardSize::for_window(DEFAULT_WINDOW.0, options.tableau_piles),
            window: DEFAULT_WINDOW,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        game.redeal();
        game.resize(DEFAULT_WINDOW.0, DEFAULT_WINDOW.1);

        Ok(game)
    }

    /// Creates a freshly shuffled deck for these options.
    fn create_deck(options: &GameOptions, rng: &mut ChaCha8Rng) -> Deck {
        let mut deck = Deck::new(options.suits.suits(), options.copies);
        deck.shuffle(rng);
        deck
    }

    /// Clears every pile and deals a new shuffled deck.
    pub fn redeal(&mut self) {
        for pile in self
            .tableau
            .iter_mut()
            .chain(self.cells.iter_mut())
            .chain(self.foundations.iter_mut())
        {
            pile.clear();
        }
        self.stock.clear();
        self.held.clear();
        self.origin = None;

        let deck = Self::create_deck(&self.options, &mut self.rng);
        self.deal_initial(deck);
    }

    /// Returns the pile with the given ID.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Tableau(index) => self.tableau.get(index),
            PileId::Cell(index) => self.cells.get(index),
            PileId::Foundation(index) => self.foundations.get(index),
        }
    }

    /// Borrows a pile and the held pile at the same time.
    fn pile_and_held(&mut self, id: PileId) -> Option<(&mut Pile, &mut Pile)> {
        let Self {
            tableau,
            cells,
            foundations,
            held,
            ..
        } = self;

        let pile = match id {
            PileId::Tableau(index) => tableau.get_mut(index),
            PileId::Cell(index) => cells.get_mut(index),
            PileId::Foundation(index) => foundations.get_mut(index),
        }?;

        Some((pile, held))
    }

    /// Returns the cards attached to the pointer.
    #[must_use]
    pub const fn held(&self) -> &Pile {
        &self.held
    }

    /// Returns the pile the held cards were lifted from.
    #[must_use]
    pub const fn origin(&self) -> Option<PileId> {
        self.origin
    }

    /// Returns the current card sprite size.
    #[must_use]
    pub const fn card_size(&self) -> CardSize {
        self.card_size
    }

    /// Returns the number of stock sets left to deal.
    #[must_use]
    pub fn stock_remaining(&self) -> usize {
        self.stock.len()
    }

    /// Returns the number of cards across every pile, including held ones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tableau
            .iter()
            .chain(&self.stock)
            .chain(&self.cells)
            .chain(&self.foundations)
            .map(Pile::len)
            .sum::<usize>()
            + self.held.len()
    }
}
