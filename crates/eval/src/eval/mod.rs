// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand is evaluated in three steps:
//!
//! - the cards are grouped by rank and by suit ([Frequencies]),
//! - the groups fingerprint decides the strongest [Category] of the hand and
//!   the order of its kickers ([classify]),
//! - the category and the kickers give the hand [Score].
//!
//! Hands are then grouped by score to find the winners with [evaluate], or
//! to rank all the hands with [standings].
mod category;
mod classify;
mod evaluation;
mod frequency;
mod score;

#[cfg(feature = "parallel")]
mod parallel;

pub use category::Category;
pub use classify::{Kickers, classify};
pub use evaluation::{Evaluation, evaluate, evaluate_hand, standings};
pub use frequency::Frequencies;
pub use score::Score;

#[cfg(feature = "parallel")]
pub use parallel::{par_evaluate, par_standings};
