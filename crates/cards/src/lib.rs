// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! to parse them from text:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let th: Card = "10h".parse().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(th.to_string(), "TH");
//! ```
//!
//! and a [Deck] type for iterating all the k-cards hands in the deck:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
