// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands evaluation.
use std::thread;

use super::evaluation::{Evaluation, group_by_score, validate};
use crate::{error::EvalError, hand::Hand};

/// Parallel [standings](super::standings), evaluates the hands using
/// `num_tasks` threads.
///
/// Hands are validated before any task starts and the result is the same as
/// the sequential evaluation, ties keep the input hands order.
///
/// Panics if num_tasks is 0.
pub fn par_standings(hands: &[Hand], num_tasks: usize) -> Result<Vec<Vec<Evaluation>>, EvalError> {
    assert!(num_tasks > 0);

    let valid = validate(hands)?;
    let hands_per_task = valid.len().div_ceil(num_tasks);

    let evaluations = thread::scope(|s| {
        let tasks = valid
            .chunks(hands_per_task)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|(hand, cards)| Evaluation::new(hand, cards))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        // Join in spawn order to keep the hands order.
        tasks
            .into_iter()
            .flat_map(|task| match task.join() {
                Ok(evaluations) => evaluations,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Vec<_>>()
    });

    Ok(group_by_score(evaluations, hands.len()))
}

/// Parallel [evaluate](super::evaluate), returns the winning hands.
///
/// Panics if num_tasks is 0.
pub fn par_evaluate(hands: &[Hand], num_tasks: usize) -> Result<Vec<Evaluation>, EvalError> {
    let standings = par_standings(hands, num_tasks)?;
    Ok(standings.into_iter().next().unwrap_or_default())
}
