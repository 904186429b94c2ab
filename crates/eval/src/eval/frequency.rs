// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequency tables.
use ahash::AHashMap;

use showdown_cards::{Card, Rank, Suit};

/// The cards of a hand grouped by rank and by suit.
///
/// The groups hold the cards themselves, not just their count, in the order
/// they appear in the hand.
#[derive(Debug)]
pub struct Frequencies {
    by_rank: AHashMap<Rank, Vec<Card>>,
    by_suit: AHashMap<Suit, Vec<Card>>,
}

impl Frequencies {
    /// Groups the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut by_rank = AHashMap::<Rank, Vec<Card>>::with_capacity(cards.len());
        let mut by_suit = AHashMap::<Suit, Vec<Card>>::with_capacity(cards.len());

        for card in cards {
            by_rank.entry(card.rank()).or_default().push(*card);
            by_suit.entry(card.suit()).or_default().push(*card);
        }

        Self { by_rank, by_suit }
    }

    /// The number of distinct ranks.
    pub fn rank_groups(&self) -> usize {
        self.by_rank.len()
    }

    /// The number of distinct suits.
    pub fn suit_groups(&self) -> usize {
        self.by_suit.len()
    }

    /// The cards with the given rank.
    #[cfg(test)]
    fn rank(&self, rank: Rank) -> &[Card] {
        self.by_rank.get(&rank).map(Vec::as_slice).unwrap_or_default()
    }

    /// The cards with the given suit.
    #[cfg(test)]
    fn suit(&self, suit: Suit) -> &[Card] {
        self.by_suit.get(&suit).map(Vec::as_slice).unwrap_or_default()
    }

    /// All rank groups in no particular order.
    pub fn rank_groups_iter(&self) -> impl Iterator<Item = &[Card]> {
        self.by_rank.values().map(Vec::as_slice)
    }

    /// The rank groups that have exactly `size` cards, in no particular order.
    pub fn groups_of(&self, size: usize) -> impl Iterator<Item = &[Card]> {
        self.rank_groups_iter().filter(move |g| g.len() == size)
    }

    /// Whether a rank group has exactly `size` cards.
    pub fn has_group_of(&self, size: usize) -> bool {
        self.groups_of(size).next().is_some()
    }
}
