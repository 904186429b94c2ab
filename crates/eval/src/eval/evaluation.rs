// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands evaluation and winners selection.
use ahash::AHashMap;
use log::{debug, warn};
use std::fmt;

use showdown_cards::{Card, Rank};

use super::{Category, Kickers, Score, classify};
use crate::{
    error::EvalError,
    hand::{CARDS_IN_HAND, Hand, MIN_HANDS},
};

/// The evaluation of a poker hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    hand: Hand,
    category: Category,
    kickers: Kickers,
    score: Score,
}

impl Evaluation {
    /// Evaluates a valid hand.
    pub(crate) fn new(hand: &Hand, cards: &[Card; CARDS_IN_HAND]) -> Self {
        let (category, kickers) = classify(cards);
        let score = Score::new(category, &kickers);
        Self {
            hand: hand.clone(),
            category,
            kickers,
            score,
        }
    }

    /// The evaluated hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The strongest category of the hand.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand cards from the most to the least significant for breaking a
    /// tie with hands of the same category.
    pub fn kickers(&self) -> &Kickers {
        &self.kickers
    }

    /// The hand score, a higher score is a stronger hand.
    pub fn score(&self) -> Score {
        self.score
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand: ")?;
        for card in self.hand.cards() {
            write_rank(f, card.rank())?;
            write!(f, "{} ", card.suit().symbol())?;
        }

        write!(f, "\nCategory: {}", self.category)?;

        write!(f, "\nKickers: ")?;
        for card in &self.kickers {
            write_rank(f, card.rank())?;
        }

        Ok(())
    }
}

/// Printed evaluations spell a ten as 10.
fn write_rank(f: &mut fmt::Formatter<'_>, rank: Rank) -> fmt::Result {
    match rank {
        Rank::Ten => write!(f, "10"),
        rank => write!(f, "{rank}"),
    }
}

/// Validates and evaluates a single hand.
pub fn evaluate_hand(hand: &Hand) -> Result<Evaluation, EvalError> {
    let cards = hand
        .five_cards()
        .map_err(|reason| EvalError::IllegalHand { index: 0, reason })?;
    Ok(Evaluation::new(hand, &cards))
}

/// Evaluates two or more hands and returns the winning hands.
///
/// More than one hand is returned when hands tie with the same score, the
/// winners are returned in the same order as the input hands.
///
/// All hands are validated before any hand is evaluated, if a hand is not
/// valid an [EvalError::IllegalHand] error is returned for the first invalid
/// hand and no hand is evaluated.
pub fn evaluate(hands: &[Hand]) -> Result<Vec<Evaluation>, EvalError> {
    let standings = standings(hands)?;
    Ok(standings.into_iter().next().unwrap_or_default())
}

/// Evaluates two or more hands and returns all the evaluations grouped by
/// score, strongest group first.
///
/// Hands in the same group have the same score and tie, the evaluations in a
/// group are in the same order as the input hands.
pub fn standings(hands: &[Hand]) -> Result<Vec<Vec<Evaluation>>, EvalError> {
    let valid = validate(hands)?;
    let evaluations = valid.iter().map(|(hand, cards)| Evaluation::new(hand, cards));
    Ok(group_by_score(evaluations, hands.len()))
}

/// Checks there are enough hands and that every hand is valid.
pub(crate) fn validate(hands: &[Hand]) -> Result<Vec<(&Hand, [Card; CARDS_IN_HAND])>, EvalError> {
    if hands.len() < MIN_HANDS {
        warn!("Cannot evaluate {} hands", hands.len());
        return Err(EvalError::CannotEvaluate { hands: hands.len() });
    }

    hands
        .iter()
        .enumerate()
        .map(|(index, hand)| match hand.five_cards() {
            Ok(cards) => Ok((hand, cards)),
            Err(reason) => {
                warn!("Illegal hand {index} [{hand}]: {reason}");
                Err(EvalError::IllegalHand { index, reason })
            }
        })
        .collect()
}

/// Groups evaluations by score, strongest score first.
pub(crate) fn group_by_score<I>(evaluations: I, num_hands: usize) -> Vec<Vec<Evaluation>>
where
    I: IntoIterator<Item = Evaluation>,
{
    let mut groups = AHashMap::<Score, Vec<Evaluation>>::with_capacity(num_hands);

    for (index, evaluation) in evaluations.into_iter().enumerate() {
        debug!(
            "Hand {index} [{}] {} score {}",
            evaluation.hand, evaluation.category, evaluation.score
        );
        groups.entry(evaluation.score).or_default().push(evaluation);
    }

    let mut groups = groups.into_values().collect::<Vec<_>>();
    groups.sort_by(|a, b| b[0].score.cmp(&a[0].score));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalHandReason;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
    use showdown_cards::{Deck, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn winners(hands: &[&str]) -> Vec<Evaluation> {
        let hands = hands.iter().map(|s| hand(s)).collect::<Vec<_>>();
        evaluate(&hands).unwrap()
    }

    fn eval(s: &str) -> Evaluation {
        evaluate_hand(&hand(s)).unwrap()
    }

    const ACE_HIGH: &str = "AS 2C 3D 7H TC";
    const KING_HIGH: &str = "KS QD JC TH 8H";
    const PAIR_OF_SEVENS: &str = "7C 7D 3H 2S 8C";
    const PAIR_OF_FIVES: &str = "5D 5S 6H QC AH";
    const KINGS_AND_FOURS: &str = "KH KD 4S 4C 9D";
    const JACKS_AND_EIGHTS: &str = "JD JS 8D 8S KC";
    const THREE_NINES: &str = "9C 9H 9S 4H 2H";
    const THREE_SIXES: &str = "6C 6D 6S 3S 2D";
    const ACE_HIGH_STRAIGHT: &str = "TS JH QH KS AD";
    const SIX_HIGH_STRAIGHT: &str = "2S 3C 4D 5H 6D";
    const JACK_HIGH_FLUSH: &str = "3D 4D 8D TD JD";
    const QUEEN_HIGH_FLUSH: &str = "2S 5S 7S 9S QS";
    const ACES_FULL: &str = "AC AD AH 5C 5S";
    const KINGS_FULL: &str = "KC KD KS 4D 4H";
    const FOUR_JACKS_FIVE: &str = "JD JS JC JH 5C";
    const FOUR_JACKS_QUEEN: &str = "JD JS JC JH QH";
    const ROYAL_FLUSH: &str = "AH KH QH JH TH";
    const WHEEL_FLUSH: &str = "5S 4S 3S 2S AS";

    #[test]
    fn pair_beats_high_card() {
        let w = winners(&[ACE_HIGH, PAIR_OF_FIVES]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::OnePair);
        assert_eq!(w[0].hand(), &hand(PAIR_OF_FIVES));
    }

    #[test]
    fn two_pair_beats_pair() {
        let w = winners(&[PAIR_OF_SEVENS, KINGS_AND_FOURS]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::TwoPair);
    }

    #[test]
    fn three_of_a_kind_beats_two_pair() {
        let w = winners(&[THREE_SIXES, JACKS_AND_EIGHTS]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::ThreeOfAKind);
        assert_eq!(w[0].hand(), &hand(THREE_SIXES));
    }

    #[test]
    fn straight_beats_three_of_a_kind() {
        let w = winners(&[THREE_NINES, SIX_HIGH_STRAIGHT]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::Straight);
    }

    #[test]
    fn flush_beats_straight() {
        let w = winners(&[ACE_HIGH_STRAIGHT, JACK_HIGH_FLUSH]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::Flush);
    }

    #[test]
    fn full_house_beats_flush() {
        let w = winners(&[QUEEN_HIGH_FLUSH, KINGS_FULL]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::FullHouse);
    }

    #[test]
    fn four_of_a_kind_beats_full_house() {
        let w = winners(&[ACES_FULL, FOUR_JACKS_FIVE]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::FourOfAKind);
    }

    #[test]
    fn straight_flush_beats_four_of_a_kind() {
        let w = winners(&[FOUR_JACKS_QUEEN, WHEEL_FLUSH]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::StraightFlush);
    }

    #[test]
    fn equal_hands_tie() {
        let w = winners(&[KING_HIGH, KING_HIGH]);
        assert_eq!(w.len(), 2);
        assert_eq!(w[0].category(), Category::HighCard);
        assert_eq!(w[0].score(), w[1].score());
    }

    #[test]
    fn same_ranks_different_suits_tie() {
        let w = winners(&[KINGS_AND_FOURS, "KS KC 4H 4D 9C", PAIR_OF_SEVENS]);
        assert_eq!(w.len(), 2);
        assert_eq!(w[0].hand(), &hand(KINGS_AND_FOURS));
        assert_eq!(w[1].hand(), &hand("KS KC 4H 4D 9C"));
    }

    #[test]
    fn high_card_last_kicker() {
        let w = winners(&["AS KC QD JH 2C", "AH KD QC JS 3D"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::HighCard);
        assert_eq!(w[0].kickers()[4].rank(), Rank::Trey);
    }

    #[test]
    fn one_pair_kicker() {
        let w = winners(&["9S 9C AD KH JC", "9H 9D AC KS QD"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::OnePair);
        assert_eq!(w[0].kickers()[4].rank(), Rank::Queen);
    }

    #[test]
    fn two_pair_kicker() {
        let w = winners(&["QS QC 8D 8H 5C", "QH QD 8C 8S KD"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::TwoPair);
        assert_eq!(w[0].kickers()[4].rank(), Rank::King);
    }

    #[test]
    fn two_pair_high_pair_first() {
        // Aces and deuces beat kings and queens.
        let w = winners(&["KS KC QD QH JC", "2H 2D AC AS 3D"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].kickers()[0].rank(), Rank::Ace);
        assert_eq!(w[0].kickers()[2].rank(), Rank::Deuce);
    }

    #[test]
    fn three_of_a_kind_kicker() {
        let w = winners(&["7S 7C 7D JH 2C", "7H 7S 7D QS 2D"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::ThreeOfAKind);
        assert_eq!(w[0].kickers()[3].rank(), Rank::Queen);
    }

    #[test]
    fn three_of_a_kind_kickers_can_tie() {
        // K*0.001 + Q*0.0001 == A*0.001 + 2*0.0001
        let w = winners(&["3S 3C 3D KH QC", "3H 3C 3D AS 2C", JACKS_AND_EIGHTS]);
        assert_eq!(w.len(), 2);
        assert_eq!(w[0].category(), Category::ThreeOfAKind);
        assert_eq!(w[0].score(), w[1].score());
        assert_eq!(w[0].score().to_string(), "403.3442");
        assert_eq!(w[0].hand(), &hand("3S 3C 3D KH QC"));
    }

    #[test]
    fn two_different_straights() {
        let w = winners(&["7S 8C 9D TH JC", "AS 2C 3D 4H 5C"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::Straight);
        assert_eq!(w[0].kickers()[0].rank(), Rank::Jack);
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let w = winners(&[SIX_HIGH_STRAIGHT, "AS 2C 3D 4H 5C"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].hand(), &hand(SIX_HIGH_STRAIGHT));
    }

    #[test]
    fn two_different_flushes() {
        let w = winners(&["KD 9D 7D 4D 2D", "AC 3C 5C 7C 9C"]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::Flush);
        assert_eq!(w[0].kickers()[0].rank(), Rank::Ace);
    }

    #[test]
    fn two_different_full_houses() {
        let w = winners(&[KINGS_FULL, ACES_FULL]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::FullHouse);
        assert_eq!(w[0].kickers()[0].rank(), Rank::Ace);
    }

    #[test]
    fn same_four_of_a_kind_kicker() {
        let w = winners(&[FOUR_JACKS_FIVE, FOUR_JACKS_QUEEN]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::FourOfAKind);
        assert_eq!(w[0].kickers()[4].rank(), Rank::Queen);
    }

    #[test]
    fn two_different_straight_flushes() {
        let w = winners(&[ROYAL_FLUSH, WHEEL_FLUSH]);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::StraightFlush);
        assert_eq!(w[0].kickers()[0].rank(), Rank::Ace);
        assert!(eval(ROYAL_FLUSH).score() > eval(WHEEL_FLUSH).score());
    }

    #[test]
    fn every_category() {
        let all = [
            ACE_HIGH,
            PAIR_OF_FIVES,
            JACKS_AND_EIGHTS,
            THREE_NINES,
            SIX_HIGH_STRAIGHT,
            QUEEN_HIGH_FLUSH,
            KINGS_FULL,
            FOUR_JACKS_FIVE,
            ROYAL_FLUSH,
        ];

        let w = winners(&all);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].category(), Category::StraightFlush);

        let hands = all.iter().map(|s| hand(s)).collect::<Vec<_>>();
        let groups = standings(&hands).unwrap();
        let categories = groups.iter().map(|g| g[0].category()).collect::<Vec<_>>();
        assert_eq!(categories, Category::categories().collect::<Vec<_>>());
        assert!(groups.windows(2).all(|w| w[0][0].score() > w[1][0].score()));
    }

    #[test]
    fn standings_groups_ties() {
        let hands = [KING_HIGH, ACE_HIGH, KING_HIGH, PAIR_OF_SEVENS, "AH 2D 3S 7C TD"]
            .iter()
            .map(|s| hand(s))
            .collect::<Vec<_>>();

        let groups = standings(&hands).unwrap();
        let sizes = groups.iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(sizes, [1, 2, 2]);
        assert_eq!(groups[0][0].category(), Category::OnePair);
        assert_eq!(groups[1][0].hand(), &hand(ACE_HIGH));
        assert_eq!(groups[2][0].hand(), &hand(KING_HIGH));
    }

    #[test]
    fn not_enough_hands() {
        assert_eq!(evaluate(&[]), Err(EvalError::CannotEvaluate { hands: 0 }));
        assert_eq!(
            evaluate(&[hand(ACE_HIGH)]),
            Err(EvalError::CannotEvaluate { hands: 1 })
        );
        assert_eq!(
            standings(&[hand(ACE_HIGH)]),
            Err(EvalError::CannotEvaluate { hands: 1 })
        );
    }

    #[test]
    fn illegal_hands() {
        let no_cards = Hand::new(Vec::new());
        assert_eq!(
            evaluate(&[hand(ACE_HIGH), no_cards]),
            Err(EvalError::IllegalHand {
                index: 1,
                reason: IllegalHandReason::CardCount(0)
            })
        );

        assert_eq!(
            evaluate(&[hand("AS 2C 3D 7H"), hand(ACE_HIGH)]),
            Err(EvalError::IllegalHand {
                index: 0,
                reason: IllegalHandReason::CardCount(4)
            })
        );

        assert_eq!(
            evaluate(&[hand(ACE_HIGH), hand("AS 2C 3D 7H TC 9C")]),
            Err(EvalError::IllegalHand {
                index: 1,
                reason: IllegalHandReason::CardCount(6)
            })
        );

        assert_eq!(
            evaluate(&[hand(ACE_HIGH), hand("AS 2C 3D 2C TC")]),
            Err(EvalError::IllegalHand {
                index: 1,
                reason: IllegalHandReason::DuplicateCard(Card::new(Rank::Deuce, Suit::Clubs))
            })
        );

        assert!(evaluate_hand(&hand("AS")).is_err());
    }

    #[test]
    fn illegal_hand_aborts_all() {
        // The first illegal hand is reported even if valid hands follow it.
        let hands = [
            hand(ROYAL_FLUSH),
            hand("AS AS 3D 7H TC"),
            hand(PAIR_OF_FIVES),
            hand("2C"),
        ];

        assert_eq!(
            standings(&hands),
            Err(EvalError::IllegalHand {
                index: 1,
                reason: IllegalHandReason::DuplicateCard(Card::new(Rank::Ace, Suit::Spades))
            })
        );
    }

    #[test]
    fn evaluation_to_string() {
        let e = eval(PAIR_OF_FIVES);
        assert_eq!(
            e.to_string(),
            "Hand: 5♦ 5♠ 6♥ Q♣ A♥ \nCategory: One Pair\nKickers: 55AQ6"
        );
    }

    #[test]
    fn evaluation_to_string_ten() {
        let e = eval(ACE_HIGH_STRAIGHT);
        assert_eq!(
            e.to_string(),
            "Hand: 10♠ J♥ Q♥ K♠ A♦ \nCategory: Straight\nKickers: AKQJ10"
        );
        assert_eq!(e.hand().to_string(), ACE_HIGH_STRAIGHT);
    }

    #[test]
    fn evaluation_is_idempotent() {
        for s in [ACE_HIGH, KINGS_AND_FOURS, WHEEL_FLUSH, ACES_FULL] {
            assert_eq!(eval(s), eval(s));
        }
    }

    /// Exchanges the suits of a hand, keeps the same number of suits so flushes
    /// stay flushes.
    fn permute_suits(cards: &[Card], suits: &[Suit]) -> Hand {
        let cards = cards
            .iter()
            .map(|c| {
                let pos = Suit::suits().position(|s| s == c.suit()).unwrap();
                Card::new(c.rank(), suits[pos])
            })
            .collect();
        Hand::new(cards)
    }

    #[test]
    fn score_is_suit_invariant() {
        let mut rng = StdRng::seed_from_u64(101);
        let mut deck = Deck::default().into_iter().collect::<Vec<_>>();

        for _ in 0..2_000 {
            deck.shuffle(&mut rng);
            let mut suits = Suit::suits().collect::<Vec<_>>();
            suits.shuffle(&mut rng);

            let original = evaluate_hand(&Hand::new(deck[..5].to_vec())).unwrap();
            let permuted = evaluate_hand(&permute_suits(&deck[..5], &suits)).unwrap();

            assert_eq!(original.category(), permuted.category());
            assert_eq!(original.score(), permuted.score());
            assert_eq!(original, evaluate_hand(original.hand()).unwrap());
        }
    }

    #[test]
    fn category_order_is_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::default().into_iter().collect::<Vec<_>>();

        let mut evaluations = Vec::new();
        for _ in 0..2_000 {
            deck.shuffle(&mut rng);
            evaluations.push(evaluate_hand(&Hand::new(deck[..5].to_vec())).unwrap());
        }

        for a in &evaluations {
            for b in &evaluations {
                if a.category() > b.category() {
                    assert!(a.score() > b.score());
                } else if a.category() == b.category() {
                    let ka = a.kickers().iter().map(|c| c.rank()).collect::<Vec<_>>();
                    let kb = b.kickers().iter().map(|c| c.rank()).collect::<Vec<_>>();
                    if ka > kb {
                        assert!(a.score() >= b.score());
                    }
                    if a.category() != Category::ThreeOfAKind {
                        assert_eq!(ka.cmp(&kb), a.score().cmp(&b.score()));
                    }
                }
            }
        }
    }
}
