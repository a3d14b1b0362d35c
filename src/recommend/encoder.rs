//! Binary presence encoding of a user's tags over a vocabulary.

use std::collections::BTreeSet;

use super::vocabulary::Vocabulary;
use crate::user::User;

/// A 0/1 vector, one position per vocabulary entry.
pub type FeatureVector = Vec<f64>;

/// A user's skill and interest vectors over one vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedUser {
    pub skills: FeatureVector,
    pub interests: FeatureVector,
}

/// Encode a tag set: position `i` is 1.0 iff `tags` contains `vocabulary[i]`.
///
/// Tags absent from the vocabulary are ignored, so a stale vocabulary gives
/// zeros rather than an error.
pub fn encode_tags(tags: &BTreeSet<String>, vocabulary: &[String]) -> FeatureVector {
    vocabulary
        .iter()
        .map(|tag| if tags.contains(tag) { 1.0 } else { 0.0 })
        .collect()
}

/// Encode both tag categories of a user.
pub fn encode(user: &User, vocabulary: &Vocabulary) -> EncodedUser {
    EncodedUser {
        skills: encode_tags(&user.skills, vocabulary.skills()),
        interests: encode_tags(&user.interests, vocabulary.interests()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_against_roster_vocabulary() {
        let roster = vec![
            User::new(1, ["go", "rust"], ["chess"]),
            User::new(2, ["python"], ["music"]),
        ];
        let vocab = Vocabulary::build(&roster);
        // skills: go, python, rust / interests: chess, music
        let encoded = encode(&roster[0], &vocab);
        assert_eq!(encoded.skills, vec![1.0, 0.0, 1.0]);
        assert_eq!(encoded.interests, vec![1.0, 0.0]);
    }

    #[test]
    fn test_vector_length_matches_vocabulary() {
        let roster = vec![User::new(1, ["a", "b", "c"], ["x"])];
        let vocab = Vocabulary::build(&roster);
        let empty = User::new(2, Vec::<String>::new(), Vec::<String>::new());
        let encoded = encode(&empty, &vocab);
        assert_eq!(encoded.skills.len(), 3);
        assert_eq!(encoded.interests.len(), 1);
        assert!(encoded.skills.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stale_vocabulary_yields_zero_vector() {
        let vocab = Vocabulary::build(&[User::new(1, ["python", "go"], ["chess"])]);
        let newcomer = User::new(9, ["rust"], ["chess"]);
        let encoded = encode(&newcomer, &vocab);
        assert_eq!(encoded.skills, vec![0.0, 0.0]);
        assert_eq!(encoded.interests, vec![1.0]);
    }
}
