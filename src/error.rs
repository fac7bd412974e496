//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No tableau piles were requested.
    #[error("no tableau piles")]
    NoTableau,
    /// The deck would have no cards.
    #[error("deck has no cards")]
    NoDecks,
    /// The stock needs more cards than the deck holds.
    #[error("stock needs more cards than the deck holds")]
    StockTooLarge,
    /// Too few foundations to hold every run.
    #[error("not enough foundations for every suit run")]
    NotEnoughFoundations,
}

/// Errors that can occur when moving cards between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Pile not found.
    #[error("pile not found")]
    PileNotFound,
    /// Card not found in the source pile.
    #[error("card not found")]
    CardNotFound,
    /// Cards are already being held.
    #[error("cards are already being held")]
    HandOccupied,
    /// The cards cannot be lifted as a run.
    #[error("cannot pick up these cards")]
    CannotPickUp,
    /// The destination does not accept the run.
    #[error("cannot place the run here")]
    CannotPlace,
    /// Source and destination are the same pile.
    #[error("source and destination are the same pile")]
    SamePile,
}

/// Errors that can occur when dealing from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No stock sets remain.
    #[error("no stock left to deal")]
    StockEmpty,
    /// A tableau pile is empty.
    #[error("cannot deal while a tableau pile is empty")]
    EmptyPile,
    /// Cards are being held.
    #[error("cannot deal while cards are held")]
    HandOccupied,
}
