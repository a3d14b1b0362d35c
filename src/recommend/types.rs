//! Result types produced by a ranking call.

use serde::{Deserialize, Serialize};

use crate::user::{User, UserId};

/// Skill and interest similarity of one pair of users, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub skill: f64,
    pub interest: f64,
}

impl PairScore {
    /// Weighted sum of the two similarities.
    pub fn combined(&self, skill_weight: f64, interest_weight: f64) -> f64 {
        (skill_weight * self.skill + interest_weight * self.interest).clamp(0.0, 1.0)
    }
}

/// The score of one candidate relative to the target user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub candidate_id: UserId,
    pub skill_similarity: f64,
    pub interest_similarity: f64,
    pub combined_score: f64,
}

/// A ranked candidate together with its profile, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    #[serde(flatten)]
    pub result: SimilarityResult,
    pub user: &'a User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_default_weights() {
        let s = PairScore {
            skill: 1.0,
            interest: 0.5,
        };
        assert!((s.combined(0.7, 0.3) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_combined_stays_in_unit_interval() {
        let s = PairScore {
            skill: 1.0,
            interest: 1.0,
        };
        assert_eq!(s.combined(0.7, 0.3), 1.0);
        let zero = PairScore {
            skill: 0.0,
            interest: 0.0,
        };
        assert_eq!(zero.combined(0.7, 0.3), 0.0);
    }

    #[test]
    fn test_similarity_result_json_shape() {
        let r = SimilarityResult {
            candidate_id: UserId::Int(4),
            skill_similarity: 0.5,
            interest_similarity: 0.25,
            combined_score: 0.425,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["candidateId"], 4);
        assert_eq!(json["combinedScore"], 0.425);
    }
}
