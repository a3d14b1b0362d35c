//! Peer ranking.
//!
//! For a target user and a roster snapshot:
//!
//! 1. Build the vocabulary from the whole roster plus the target.
//! 2. Score every candidate whose id differs from the target's id.
//! 3. Combine: `score = w_skill * cos(skills) + w_interest * J(interests)`.
//! 4. Sort by score descending, breaking ties by ascending candidate id.
//! 5. Keep the first `top_k`.
//!
//! Vocabulary and vectors live only for the duration of one call.

use std::cmp::Ordering;
use std::iter;

use anyhow::Result;
use ordered_float::OrderedFloat;
use tracing::debug;

use super::encoder::encode;
use super::similarity::{cosine_similarity, jaccard_similarity};
use super::types::{PairScore, Recommendation, SimilarityResult};
use super::vocabulary::Vocabulary;
use crate::config::RankingConfig;
use crate::user::User;

/// Ranks roster members by similarity to a target user.
///
/// Holds only the ranking policy, so one recommender can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct PeerRecommender {
    config: RankingConfig,
}

impl PeerRecommender {
    /// Create a recommender from a ranking policy, rejecting invalid weights
    /// or a zero `top_k`.
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The ranking policy in use.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank the roster for `target`, returning at most `top_k` results.
    ///
    /// Never fails: an empty roster, or one holding only the target, yields an
    /// empty list.
    pub fn recommend(&self, target: &User, roster: &[User]) -> Vec<SimilarityResult> {
        self.ranked(target, roster)
            .into_iter()
            .map(|(result, _)| result)
            .collect()
    }

    /// Like [`recommend`](Self::recommend), but pairs each result with the
    /// candidate's profile for display.
    pub fn recommend_with_profiles<'a>(
        &self,
        target: &User,
        roster: &'a [User],
    ) -> Vec<Recommendation<'a>> {
        self.ranked(target, roster)
            .into_iter()
            .map(|(result, user)| Recommendation { result, user })
            .collect()
    }

    fn ranked<'a>(&self, target: &User, roster: &'a [User]) -> Vec<(SimilarityResult, &'a User)> {
        // The target may be missing from a lagging snapshot; its tags still
        // belong in the coordinate space. Re-adding a present target is a no-op.
        let vocabulary = Vocabulary::from_users(roster.iter().chain(iter::once(target)));
        let target_vec = encode(target, &vocabulary);

        let mut scored: Vec<(SimilarityResult, &User)> = roster
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .filter(|candidate| !(self.config.exclude_restricted && candidate.restricted))
            .map(|candidate| {
                let candidate_vec = encode(candidate, &vocabulary);
                let pair = PairScore {
                    skill: cosine_similarity(&target_vec.skills, &candidate_vec.skills),
                    interest: jaccard_similarity(&target.interests, &candidate.interests),
                };
                let combined_score =
                    pair.combined(self.config.skill_weight, self.config.interest_weight);
                let result = SimilarityResult {
                    candidate_id: candidate.id.clone(),
                    skill_similarity: pair.skill,
                    interest_similarity: pair.interest,
                    combined_score,
                };
                (result, candidate)
            })
            .collect();

        let candidates = scored.len();
        scored.sort_by(|(a, _), (b, _)| rank_order(a, b));
        scored.truncate(self.config.top_k);

        debug!(
            target = %target.id,
            roster = roster.len(),
            candidates,
            returned = scored.len(),
            "ranked peers"
        );

        scored
    }
}

/// Score descending, then candidate id ascending.
fn rank_order(a: &SimilarityResult, b: &SimilarityResult) -> Ordering {
    OrderedFloat(b.combined_score)
        .cmp(&OrderedFloat(a.combined_score))
        .then_with(|| a.candidate_id.cmp(&b.candidate_id))
}

/// Rank with the default weights and an explicit `k`.
///
/// A `k` of zero returns nothing.
pub fn recommend(target: &User, roster: &[User], k: usize) -> Vec<SimilarityResult> {
    let config = RankingConfig {
        top_k: k,
        ..RankingConfig::default()
    };
    PeerRecommender { config }.recommend(target, roster)
}
