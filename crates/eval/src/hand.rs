// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards poker hand.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use showdown_cards::{Card, ParseCardError};

use crate::error::IllegalHandReason;

/// The number of cards in a poker hand.
pub const CARDS_IN_HAND: usize = 5;

/// The minimum number of hands for a comparison.
pub const MIN_HANDS: usize = 2;

/// A poker hand.
///
/// A hand is a list of cards as given by the caller, it is checked to be
/// exactly five distinct cards when it is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from a list of cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The hand cards in their given order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks this hand has five cards and no card appears twice.
    pub fn validate(&self) -> Result<(), IllegalHandReason> {
        self.five_cards().map(|_| ())
    }

    /// Returns the validated five cards.
    pub(crate) fn five_cards(&self) -> Result<[Card; CARDS_IN_HAND], IllegalHandReason> {
        let cards: [Card; CARDS_IN_HAND] = self
            .cards
            .as_slice()
            .try_into()
            .map_err(|_| IllegalHandReason::CardCount(self.cards.len()))?;

        let mut seen = AHashSet::with_capacity(CARDS_IN_HAND);
        if let Some(card) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(IllegalHandReason::DuplicateCard(*card));
        }

        Ok(cards)
    }
}

impl From<[Card; CARDS_IN_HAND]> for Hand {
    fn from(cards: [Card; CARDS_IN_HAND]) -> Self {
        Self::new(cards.to_vec())
    }
}

impl FromStr for Hand {
    type Err = ParseCardError;

    /// Parses a whitespace or comma separated list of cards, e.g. `AS 2C 3D 7H TC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<Card>, _>>()?;

        Ok(Self::new(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
