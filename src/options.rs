//! Game configuration options.

use crate::card::{RANKS_PER_SUIT, Suit};
use crate::error::SetupError;
use crate::rules::RuleSet;

/// Which suits make up the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuitSet {
    /// Spades only.
    One,
    /// Spades and hearts.
    Two,
    /// All four suits.
    #[default]
    Four,
}

impl SuitSet {
    /// Returns the suits in the set.
    #[must_use]
    pub const fn suits(self) -> &'static [Suit] {
        match self {
            Self::One => &[Suit::Spades],
            Self::Two => &[Suit::Spades, Suit::Hearts],
            Self::Four => &Suit::ALL,
        }
    }
}

/// How the cards of a pile are spaced vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StackLayout {
    /// Every card uses the same gap.
    #[default]
    Uniform,
    /// Face-down cards are packed tightly and only face-up cards compress.
    Tiered,
}

/// When the stock may be dealt onto the tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealRule {
    /// Refuse to deal while any tableau pile is empty.
    #[default]
    RefuseOnEmptyPile,
    /// Deal whenever stock remains.
    Unrestricted,
}

/// What the foundations do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum FoundationRule {
    /// There are no foundations.
    None,
    /// Complete King-to-Ace runs are swept off the tableau into them.
    #[default]
    CompleteRuns,
    /// Single cards are played to them, ace first, building up by suit.
    BuildUp,
}

/// Configuration options for a solitaire game.
///
/// Start from a preset and use the builder pattern to customize options:
///
/// ```
/// use solrs::{GameOptions, StackLayout, SuitSet};
///
/// let options = GameOptions::spider(SuitSet::Two)
///     .with_layout(StackLayout::Uniform)
///     .with_stock_sets(4);
/// assert_eq!(options.deck_len(), 104);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of tableau piles.
    pub tableau_piles: usize,
    /// Suits in the deck.
    pub suits: SuitSet,
    /// How many times each suit is repeated.
    pub copies: u8,
    /// Number of stock sets held back for [`deal_next_set`](crate::GameState::deal_next_set).
    /// Each set holds one card per tableau pile.
    pub stock_sets: usize,
    /// Whether dealt cards start face down, except each pile's top card.
    pub conceal_dealt: bool,
    /// Number of free cells.
    pub free_cells: usize,
    /// Number of foundation piles.
    pub foundations: usize,
    /// Suit rules for lifting and dropping runs.
    pub rules: RuleSet,
    /// Vertical spacing of tableau piles.
    pub layout: StackLayout,
    /// When the stock may be dealt.
    pub deal_rule: DealRule,
    /// What the foundations do.
    pub foundation_rule: FoundationRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::spider(SuitSet::Four)
    }
}

impl GameOptions {
    /// Spider: ten piles from 104 cards, five stock sets, completed runs
    /// swept to eight foundations.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{GameOptions, SuitSet};
    ///
    /// let options = GameOptions::spider(SuitSet::One);
    /// assert_eq!(options.copies, 8);
    /// assert_eq!(options.deck_len(), 104);
    /// ```
    #[must_use]
    pub const fn spider(suits: SuitSet) -> Self {
        Self {
            tableau_piles: 10,
            suits,
            copies: (8 / suits.suits().len()) as u8,
            stock_sets: 5,
            conceal_dealt: true,
            free_cells: 0,
            foundations: 8,
            rules: RuleSet::spider(),
            layout: StackLayout::Tiered,
            deal_rule: DealRule::RefuseOnEmptyPile,
            foundation_rule: FoundationRule::CompleteRuns,
        }
    }

    /// Freecell: eight face-up piles from one deck, four free cells and
    /// four foundations built up by suit.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{FoundationRule, GameOptions};
    ///
    /// let options = GameOptions::freecell();
    /// assert_eq!(options.deck_len(), 52);
    /// assert_eq!(options.foundation_rule, FoundationRule::BuildUp);
    /// ```
    #[must_use]
    pub const fn freecell() -> Self {
        Self {
            tableau_piles: 8,
            suits: SuitSet::Four,
            copies: 1,
            stock_sets: 0,
            conceal_dealt: false,
            free_cells: 4,
            foundations: 4,
            rules: RuleSet::freecell(),
            layout: StackLayout::Uniform,
            deal_rule: DealRule::Unrestricted,
            foundation_rule: FoundationRule::BuildUp,
        }
    }

    /// Returns the total number of cards in play.
    #[must_use]
    pub const fn deck_len(&self) -> usize {
        self.copies as usize * self.suits.suits().len() * RANKS_PER_SUIT
    }

    /// Returns the number of cards held back in the stock.
    #[must_use]
    pub const fn stock_len(&self) -> usize {
        self.stock_sets * self.tableau_piles
    }

    /// Checks that the options describe a playable layout.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no tableau piles, no cards, more
    /// stock than cards, or too few foundations to hold every suit run.
    pub const fn validate(&self) -> Result<(), SetupError> {
        if self.tableau_piles == 0 {
            return Err(SetupError::NoTableau);
        }
        if self.copies == 0 {
            return Err(SetupError::NoDecks);
        }
        if self.stock_len() > self.deck_len() {
            return Err(SetupError::StockTooLarge);
        }
        if !matches!(self.foundation_rule, FoundationRule::None)
            && self.foundations * RANKS_PER_SUIT < self.deck_len()
        {
            return Err(SetupError::NotEnoughFoundations);
        }
        Ok(())
    }

    /// Sets the number of tableau piles.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_tableau_piles(8);
    /// assert_eq!(options.tableau_piles, 8);
    /// ```
    #[must_use]
    pub const fn with_tableau_piles(mut self, piles: usize) -> Self {
        self.tableau_piles = piles;
        self
    }

    /// Sets the suits in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{GameOptions, SuitSet};
    ///
    /// let options = GameOptions::default().with_suits(SuitSet::Two);
    /// assert_eq!(options.suits, SuitSet::Two);
    /// ```
    #[must_use]
    pub const fn with_suits(mut self, suits: SuitSet) -> Self {
        self.suits = suits;
        self
    }

    /// Sets how many times each suit is repeated.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_copies(1);
    /// assert_eq!(options.deck_len(), 52);
    /// ```
    #[must_use]
    pub const fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Sets the number of stock sets.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_stock_sets(0);
    /// assert_eq!(options.stock_len(), 0);
    /// ```
    #[must_use]
    pub const fn with_stock_sets(mut self, sets: usize) -> Self {
        self.stock_sets = sets;
        self
    }

    /// Sets whether dealt cards start face down.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_conceal_dealt(false);
    /// assert!(!options.conceal_dealt);
    /// ```
    #[must_use]
    pub const fn with_conceal_dealt(mut self, conceal: bool) -> Self {
        self.conceal_dealt = conceal;
        self
    }

    /// Sets the number of free cells.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::GameOptions;
    ///
    /// let options = GameOptions::freecell().with_free_cells(2);
    /// assert_eq!(options.free_cells, 2);
    /// ```
    #[must_use]
    pub const fn with_free_cells(mut self, cells: usize) -> Self {
        self.free_cells = cells;
        self
    }

    /// Sets the number of foundation piles.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_foundations(10);
    /// assert_eq!(options.foundations, 10);
    /// ```
    #[must_use]
    pub const fn with_foundations(mut self, foundations: usize) -> Self {
        self.foundations = foundations;
        self
    }

    /// Sets the suit rules.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{GameOptions, RuleSet, SuitMatch};
    ///
    /// let rules = RuleSet {
    ///     enforce_suit_on_pickup: true,
    ///     enforce_suit_on_place: true,
    ///     suit_match: SuitMatch::Color,
    /// };
    /// let options = GameOptions::default().with_rules(rules);
    /// assert_eq!(options.rules.suit_match, SuitMatch::Color);
    /// ```
    #[must_use]
    pub const fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the vertical spacing of tableau piles.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{GameOptions, StackLayout};
    ///
    /// let options = GameOptions::default().with_layout(StackLayout::Uniform);
    /// assert_eq!(options.layout, StackLayout::Uniform);
    /// ```
    #[must_use]
    pub const fn with_layout(mut self, layout: StackLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets when the stock may be dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{DealRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_deal_rule(DealRule::Unrestricted);
    /// assert_eq!(options.deal_rule, DealRule::Unrestricted);
    /// ```
    #[must_use]
    pub const fn with_deal_rule(mut self, rule: DealRule) -> Self {
        self.deal_rule = rule;
        self
    }

    /// Sets what the foundations do.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{FoundationRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_foundation_rule(FoundationRule::None);
    /// assert_eq!(options.foundation_rule, FoundationRule::None);
    /// ```
    #[must_use]
    pub const fn with_foundation_rule(mut self, rule: FoundationRule) -> Self {
        self.foundation_rule = rule;
        self
    }
}
