//! A solitaire pile, layout and move-validation engine with optional
//! `no_std` support.
//!
//! The crate provides a [`GameState`] type that owns every pile of a Spider
//! or Freecell style game and turns pointer presses, drags and releases
//! into legal moves. The rules themselves are plain functions in [`rules`]
//! and the stacking geometry lives in [`geometry`], so both can be used
//! without a game.
//!
//! Rendering is left to the caller: [`GameState::draw_list`] returns every
//! card with the rectangle to draw it in.
//!
//! # Example
//!
//! ```
//! use solrs::{GameOptions, GameState, Point};
//!
//! let mut game = GameState::new(GameOptions::default(), 42).unwrap();
//! game.resize(1000, 800);
//!
//! if game.press(Point::new(50, 200)) {
//!     game.drag(Point::new(150, 200));
//!     let _ = game.release(Point::new(150, 200));
//! }
//! assert_eq!(game.total_cards(), 104);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod geometry;
pub mod options;
pub mod pile;
pub mod rules;

// Re-export main types
pub use card::{ACE, Card, Deck, KING, Orientation, RANKS_PER_SUIT, Suit};
pub use error::{DealError, MoveError, SetupError};
pub use game::{DrawItem, GameState, MouseTarget, MoveOutcome, PileId};
pub use geometry::{
    CardSize, Point, Rect, StackOffsets, card_index_at, pile_index_at, resolve_offset,
};
pub use options::{DealRule, FoundationRule, GameOptions, StackLayout, SuitSet};
pub use pile::{Pile, move_run};
pub use rules::{
    RuleSet, SuitMatch, can_pick_up, can_place, can_place_on_cell, can_place_on_foundation,
    find_complete_run,
};
