// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation reports.
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use showdown_eval::{Category, Evaluation};

/// A JSON report entry for a hand.
#[derive(Debug, Serialize)]
struct HandReport {
    /// The hand cards.
    hand: String,
    /// The hand category.
    category: Category,
    /// The kickers from the most to the least significant.
    kickers: Vec<String>,
    /// The hand score.
    score: f64,
}

impl From<&Evaluation> for HandReport {
    fn from(e: &Evaluation) -> Self {
        Self {
            hand: e.hand().to_string(),
            category: e.category(),
            kickers: e.kickers().iter().map(|c| c.to_string()).collect(),
            score: e.score().value(),
        }
    }
}

/// A JSON report, hands grouped by standing, strongest first.
#[derive(Debug, Serialize)]
struct Report {
    standings: Vec<Vec<HandReport>>,
}

/// Formats the standings as JSON.
pub fn json(standings: &[Vec<Evaluation>]) -> Result<String> {
    let report = Report {
        standings: standings
            .iter()
            .map(|group| group.iter().map(HandReport::from).collect())
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Formats the standings as text, if `all` is false only the first
/// standing is reported as the winning hands.
pub fn text(standings: &[Vec<Evaluation>], all: bool) -> String {
    let mut out = String::new();

    for (pos, group) in standings.iter().enumerate() {
        if pos > 0 {
            out.push('\n');
        }

        let _ = match (all, group.len()) {
            (false, 1) => writeln!(out, "Winning hand:"),
            (false, n) => writeln!(out, "Split pot between {n} winning hands:"),
            (true, 1) => writeln!(out, "#{}:", pos + 1),
            (true, n) => writeln!(out, "#{} ({n} hands tie):", pos + 1),
        };

        for evaluation in group {
            let _ = writeln!(out, "{evaluation}\nScore: {}", evaluation.score());
        }
    }

    out.trim_end().to_string()
}
