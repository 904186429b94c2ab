// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category classification.
//!
//! A hand is tested against one procedure per category, from the strongest
//! category to the weakest, and the first procedure that matches gives the
//! hand category. A procedure only looks at the rank and suit fingerprint
//! that distinguishes its category from the weaker ones, so the order of the
//! procedures table must not change: the rank groups count of a four of a
//! kind is the same as a full house, and a three of a kind is the same as a
//! two pair.
use showdown_cards::{Card, Rank};

use super::{Category, Frequencies};
use crate::hand::CARDS_IN_HAND;

/// The hand cards ordered from the most to the least significant for
/// breaking ties between hands of the same category.
pub type Kickers = [Card; CARDS_IN_HAND];

/// A category test, returns the kickers if the hand matches the category.
type Procedure = fn(&[Card; CARDS_IN_HAND], &Frequencies) -> Option<Kickers>;

/// The category procedures, strongest first. [Category::HighCard] matches
/// when no other procedure does.
const PROCEDURES: [(Category, Procedure); Category::COUNT - 1] = [
    (Category::StraightFlush, straight_flush),
    (Category::FourOfAKind, four_of_a_kind),
    (Category::FullHouse, full_house),
    (Category::Flush, flush),
    (Category::Straight, straight),
    (Category::ThreeOfAKind, three_of_a_kind),
    (Category::TwoPair, two_pair),
    (Category::OnePair, one_pair),
];

/// Returns the strongest category for a five cards hand and its kickers.
///
/// The cards must be distinct.
pub fn classify(cards: &[Card; CARDS_IN_HAND]) -> (Category, Kickers) {
    let frequencies = Frequencies::new(cards);

    PROCEDURES
        .iter()
        .find_map(|(category, procedure)| {
            procedure(cards, &frequencies).map(|kickers| (*category, kickers))
        })
        .unwrap_or_else(|| (Category::HighCard, descending(cards)))
}

fn straight_flush(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    if f.rank_groups() != CARDS_IN_HAND || f.suit_groups() != 1 {
        return None;
    }

    as_straight(cards)
}

fn four_of_a_kind(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    if f.rank_groups() != 2 {
        return None;
    }

    let quads = f.groups_of(4).next()?;
    let single = f.groups_of(1).next()?;
    Some(kickers(cards, quads.iter().chain(single)))
}

fn full_house(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    if f.rank_groups() != 2 {
        return None;
    }

    let trips = f.groups_of(3).next()?;
    let pair = f.groups_of(2).next()?;
    Some(kickers(cards, trips.iter().chain(pair)))
}

fn flush(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    (f.suit_groups() == 1).then(|| descending(cards))
}

fn straight(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    if f.rank_groups() != CARDS_IN_HAND {
        return None;
    }

    as_straight(cards)
}

fn three_of_a_kind(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    // A 3-2 split is a full house, a 2-2-1 split a two pair.
    if f.rank_groups() != 3 || f.has_group_of(2) {
        return None;
    }

    let trips = f.groups_of(3).next()?;
    let singles = sorted_descending(f.groups_of(1).flatten().copied().collect());
    Some(kickers(cards, trips.iter().chain(&singles)))
}

fn two_pair(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    if f.rank_groups() != 3 {
        return None;
    }

    let mut pairs = f.groups_of(2).collect::<Vec<_>>();
    pairs.sort_by(|a, b| b[0].rank().cmp(&a[0].rank()));
    let single = f.groups_of(1).next()?;
    Some(kickers(cards, pairs.into_iter().flatten().chain(single)))
}

fn one_pair(cards: &[Card; CARDS_IN_HAND], f: &Frequencies) -> Option<Kickers> {
    if f.rank_groups() != 4 {
        return None;
    }

    let pair = f.groups_of(2).next()?;
    let singles = sorted_descending(f.groups_of(1).flatten().copied().collect());
    Some(kickers(cards, pair.iter().chain(&singles)))
}

/// Orders five cards of distinct ranks as a straight.
///
/// The ace leads a straight that ends with a king and trails a straight
/// that starts with a five (the wheel), any other gap is not a straight.
fn as_straight(cards: &[Card; CARDS_IN_HAND]) -> Option<Kickers> {
    let mut run = descending(cards);

    if is_run(&run) {
        return Some(run);
    }

    if run[0].rank() == Rank::Ace && run[4].rank() == Rank::Deuce && is_run(&run[1..]) {
        run.rotate_left(1);
        return Some(run);
    }

    None
}

/// Checks the cards ranks are consecutive and descending.
fn is_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].rank().value() == w[1].rank().value() + 1)
}

fn descending(cards: &[Card; CARDS_IN_HAND]) -> Kickers {
    let mut sorted = *cards;
    sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));
    sorted
}

fn sorted_descending(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
    cards
}

/// Collects the ordered cards into kickers.
fn kickers<'a>(cards: &[Card; CARDS_IN_HAND], ordered: impl Iterator<Item = &'a Card>) -> Kickers {
    let mut kickers = *cards;
    let mut count = 0;
    for (slot, card) in kickers.iter_mut().zip(ordered) {
        *slot = *card;
        count += 1;
    }

    debug_assert_eq!(count, CARDS_IN_HAND, "kickers must use all the hand cards");
    kickers
}
