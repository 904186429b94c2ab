// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength score.
use std::fmt;

use super::{Category, Kickers};

/// Kicker weights in ten thousandths of a point, from the most significant
/// kicker to the least significant one (1, 0.1, 0.01, 0.001, 0.0001).
const KICKER_WEIGHTS: [u32; 5] = [10_000, 1_000, 100, 10, 1];

/// Number of score units in one point.
const UNITS: u32 = KICKER_WEIGHTS[0];

/// A hand strength score.
///
/// The score is the category base value plus the rank value of each kicker
/// times its position weight:
///
/// ```text
///   score = base + k0 * 1 + k1 * 0.1 + k2 * 0.01 + k3 * 0.001 + k4 * 0.0001
/// ```
///
/// The kickers contribute less than 16 points so a category difference always
/// dominates. Each weight is ten times the next one, which is not enough for a
/// kicker to always dominate the less significant ones: three of a kind with
/// a king and a queen scores the same as the same three of a kind with an ace
/// and a deuce. Apart from that, hands of the same category are ordered by
/// their kickers. The score is stored in ten thousandths of a point so that
/// equal hands have exactly the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    /// Computes the score for a category and its kickers.
    pub fn new(category: Category, kickers: &Kickers) -> Self {
        let kickers = kickers
            .iter()
            .zip(KICKER_WEIGHTS)
            .map(|(card, weight)| u32::from(card.rank().value()) * weight)
            .sum::<u32>();

        Self(category.base_value() * UNITS + kickers)
    }

    /// The score value.
    pub fn value(&self) -> f64 {
        f64::from(self.0) / f64::from(UNITS)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.value())
    }
}
