//! Pairwise similarity between two users.
//!
//! Skill affinity is the cosine of the users' encoded skill vectors:
//!
//!   cos(a, b) = dot(a, b) / (||a|| * ||b||)
//!
//! Interest affinity is the Jaccard index of the raw interest sets:
//!
//!   J(A, B) = |A ∩ B| / |A ∪ B|
//!
//! Both are symmetric and both resolve their degenerate cases (a zero vector,
//! an empty union) to 0.0.

use std::collections::BTreeSet;

use super::encoder::encode;
use super::types::PairScore;
use super::vocabulary::Vocabulary;
use crate::user::User;

/// Computes the cosine similarity between two vectors.
///
/// Returns 0.0 if either vector is the zero vector, or if the lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a_sq: f64 = a.iter().map(|x| x * x).sum();
    let norm_b_sq: f64 = b.iter().map(|x| x * x).sum();

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return 0.0;
    }

    // One square root keeps identical binary vectors at exactly 1.0.
    (dot / (norm_a_sq * norm_b_sq).sqrt()).clamp(0.0, 1.0)
}

/// Computes the Jaccard index of two tag sets.
///
/// Returns 0.0 when both sets are empty.
pub fn jaccard_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Score a pair of users against a shared vocabulary.
pub fn score(a: &User, b: &User, vocabulary: &Vocabulary) -> PairScore {
    let skill = cosine_similarity(&encode(a, vocabulary).skills, &encode(b, vocabulary).skills);
    let interest = jaccard_similarity(&a.interests, &b.interests);
    PairScore { skill, interest }
}
