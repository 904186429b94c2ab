// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use std::fmt;
use thiserror::Error;

use showdown_cards::Card;

use crate::hand::CARDS_IN_HAND;

/// Errors returned when evaluating hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Not enough hands to determine a winner.
    #[error("at least two hands are required to determine a winning hand, got {hands}")]
    CannotEvaluate {
        /// The number of hands that were given.
        hands: usize,
    },
    /// A hand is not a valid poker hand.
    #[error("illegal hand at position {index}: {reason}")]
    IllegalHand {
        /// The position of the hand in the evaluated hands.
        index: usize,
        /// Why the hand is not valid.
        reason: IllegalHandReason,
    },
}

/// The reason a hand is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalHandReason {
    /// The hand doesn't have exactly five cards.
    CardCount(usize),
    /// The hand has the same card more than once.
    DuplicateCard(Card),
}

impl fmt::Display for IllegalHandReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalHandReason::CardCount(count) => {
                write!(f, "hand must contain exactly {CARDS_IN_HAND} cards, got {count}")
            }
            IllegalHandReason::DuplicateCard(card) => {
                write!(f, "hand must not contain duplicate cards, {card} found twice")
            }
        }
    }
}
