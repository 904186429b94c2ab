// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         1.224s
// Hands/sec:       2123333
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use showdown_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; Category::COUNT];

    Deck::default().for_each(5, |cards| {
        let hand = Hand::new(cards.to_vec());
        if let Ok(evaluation) = evaluate_hand(&hand) {
            counts[evaluation.category() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[Category::HighCard as usize]);
    println!("One  Pair:       {}", counts[Category::OnePair as usize]);
    println!("Two Pairs:       {}", counts[Category::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[Category::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[Category::Straight as usize]);
    println!("Flush:           {}", counts[Category::Flush as usize]);
    println!("Full House:      {}", counts[Category::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[Category::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[Category::StraightFlush as usize]);
}
