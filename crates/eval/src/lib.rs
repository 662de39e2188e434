// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier.
//!
//! Classifies a five cards hand into one of the ten standard categories, from
//! [HandCategory::HighCard] to [HandCategory::RoyalFlush], and orders hands
//! by category strength.
//!
//! To classify a hand create a [Hand] from five cards and get its category:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//! ];
//! let hand = Hand::new(&cards)?;
//! assert_eq!(hand.category(), HandCategory::RoyalFlush);
//! # Ok::<(), InvalidHandSize>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Hand, HandCategory, InvalidHandSize};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
