// File: src/core/synthesizer.rs
//
// Turns a feature vector into a distribution that always ranks the labelled
// category first. This is a scripted stand-in for classifier output, not a
// softmax: the winner is forced and rounding error is pushed into the
// smallest share so the total is exactly 1.00.
use crate::core::types::{FeatureVector, Probability, ProbabilityDistribution};
use crate::error::{DemoError, Result};
use std::collections::HashSet;
use tracing::debug;

/// Keeps any category from scoring zero.
const SCORE_FLOOR: f64 = 0.1;
/// Lead the labelled category gets over the best of the rest.
const WINNER_MARGIN: f64 = 0.5;

/// Builds the demo distribution for `categories` with `true_category` as the
/// guaranteed winner. Output order matches `categories`.
pub fn probabilities<S: AsRef<str>>(
    vector: &FeatureVector,
    categories: &[S],
    true_category: &str,
) -> Result<ProbabilityDistribution> {
    let names: Vec<&str> = categories.iter().map(AsRef::as_ref).collect();
    validate(&names, true_category)?;

    let mut scores: Vec<f64> = (0..names.len())
        .map(|i| raw_score(vector, i) + SCORE_FLOOR)
        .collect();

    let max_incorrect = names
        .iter()
        .zip(&scores)
        .filter(|(name, _)| **name != true_category)
        .fold(0.0_f64, |max, (_, &score)| if score > max { score } else { max });

    for (name, score) in names.iter().zip(scores.iter_mut()) {
        if *name == true_category {
            *score = max_incorrect + WINNER_MARGIN;
        }
    }
    debug!(?scores, true_category, "category scores");

    let total: f64 = scores.iter().sum();
    let hundredths = if total == 0.0 {
        uniform(names.len())
    } else {
        let shares: Vec<f64> = scores.iter().map(|s| s / total).collect();
        absorb_rounding(&shares)
    };

    Ok(ProbabilityDistribution::new(
        names
            .iter()
            .zip(hundredths)
            .map(|(name, h)| (name.to_string(), Probability::from_hundredths(h)))
            .collect(),
    ))
}

fn validate(names: &[&str], true_category: &str) -> Result<()> {
    if names.is_empty() {
        return Err(DemoError::NoCategories);
    }
    let mut seen = HashSet::with_capacity(names.len());
    if let Some(dup) = names.iter().find(|name| !seen.insert(**name)) {
        return Err(DemoError::DuplicateCategory(dup.to_string()));
    }
    if !names.contains(&true_category) {
        return Err(DemoError::UnknownCategory(true_category.to_string()));
    }
    Ok(())
}

/// `|Σ_j v[j] · sin(i·j)|` for the category at index `i`.
fn raw_score(vector: &FeatureVector, i: usize) -> f64 {
    vector
        .iter()
        .enumerate()
        .fold(0.0_f64, |acc, (j, v)| acc + v * ((i * j) as f64).sin())
        .abs()
}

fn uniform(n: usize) -> Vec<i32> {
    let each = to_hundredths(1.0 / n as f64);
    vec![each; n]
}

/// Rounds every share except the smallest; the smallest gets whatever is
/// left of 100. Ties keep input order.
fn absorb_rounding(shares: &[f64]) -> Vec<i32> {
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| shares[b].total_cmp(&shares[a]));

    let mut out = vec![0; shares.len()];
    let mut assigned = 0;
    if let Some((&last, rest)) = order.split_last() {
        for &idx in rest {
            out[idx] = to_hundredths(shares[idx]);
            assigned += out[idx];
        }
        out[last] = 100 - assigned;
    }
    out
}

fn to_hundredths(value: f64) -> i32 {
    (value * 100.0).round() as i32
}
