// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates five cards poker hands to find their category, kickers and
//! score, and compares two or more hands to find the winning hands.
//!
//! To use the evaluator create the hands and call [evaluate] to get the
//! winners, more than one hand is returned when hands tie:
//!
//! ```
//! # use showdown_eval::*;
//! let ace_high: Hand = "AS 2C 3D 7H TC".parse().unwrap();
//! let pair_of_sevens: Hand = "7C 7D 3H 2S 8C".parse().unwrap();
//!
//! let winners = evaluate(&[ace_high, pair_of_sevens.clone()]).unwrap();
//! assert_eq!(winners.len(), 1);
//! assert_eq!(winners[0].hand(), &pair_of_sevens);
//! assert_eq!(winners[0].category(), Category::OnePair);
//! ```
//!
//! [standings] returns all the hands grouped by score from the strongest to
//! the weakest:
//!
//! ```
//! # use showdown_eval::*;
//! let hands = ["KS QD JC TH 8H", "5S 4S 3S 2S AS", "KH QC JD TS 8C"]
//!     .iter()
//!     .map(|s| s.parse::<Hand>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let standings = standings(&hands).unwrap();
//! assert_eq!(standings.len(), 2);
//! assert_eq!(standings[0][0].category(), Category::StraightFlush);
//! assert_eq!(standings[1].len(), 2);
//! ```
//!
//! The **`parallel`** feature adds [par_evaluate] and [par_standings] that
//! evaluate the hands with a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod error;
pub mod eval;
pub mod hand;

pub use error::{EvalError, IllegalHandReason};
pub use eval::{Category, Evaluation, Kickers, Score, evaluate, evaluate_hand, standings};
pub use hand::Hand;

#[cfg(feature = "parallel")]
pub use eval::{par_evaluate, par_standings};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
