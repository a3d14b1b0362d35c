//! Shared tag vocabulary for one ranking call.
//!
//! Every user's tag sets are encoded against the same vocabulary so their
//! feature vectors share one coordinate space. Tags are kept in sorted order,
//! which makes the encoding reproducible for a given roster regardless of
//! the order users arrive in.

use std::collections::BTreeSet;
use tracing::debug;

use crate::user::User;

/// The ordered, deduplicated skill and interest tags observed in a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    skills: Vec<String>,
    interests: Vec<String>,
}

impl Vocabulary {
    /// Build the vocabulary from a roster snapshot.
    ///
    /// An empty roster yields two empty sequences.
    pub fn build(roster: &[User]) -> Self {
        Self::from_users(roster)
    }

    /// Build the vocabulary from any collection of users.
    pub fn from_users<'a, I>(users: I) -> Self
    where
        I: IntoIterator<Item = &'a User>,
    {
        let mut skills: BTreeSet<&str> = BTreeSet::new();
        let mut interests: BTreeSet<&str> = BTreeSet::new();
        let mut count = 0usize;
        for user in users {
            skills.extend(user.skills.iter().map(String::as_str));
            interests.extend(user.interests.iter().map(String::as_str));
            count += 1;
        }

        let vocabulary = Self {
            skills: skills.into_iter().map(str::to_string).collect(),
            interests: interests.into_iter().map(str::to_string).collect(),
        };

        debug!(
            users = count,
            skills = vocabulary.skills.len(),
            interests = vocabulary.interests.len(),
            "built vocabulary"
        );

        vocabulary
    }

    /// The skill vocabulary, in encoding order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// The interest vocabulary, in encoding order.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Returns `true` if neither vocabulary has any tags.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.interests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster() {
        let vocab = Vocabulary::build(&[]);
        assert!(vocab.skills().is_empty());
        assert!(vocab.interests().is_empty());
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_union_is_sorted_and_deduplicated() {
        let roster = vec![
            User::new(1, ["rust", "go"], ["chess"]),
            User::new(2, ["python", "go"], ["music", "chess"]),
        ];
        let vocab = Vocabulary::build(&roster);
        assert_eq!(vocab.skills(), ["go", "python", "rust"]);
        assert_eq!(vocab.interests(), ["chess", "music"]);
    }

    #[test]
    fn test_roster_order_does_not_matter() {
        let a = User::new(1, ["rust"], ["hiking"]);
        let b = User::new(2, ["c", "zig"], ["art"]);
        let forward = Vocabulary::build(&[a.clone(), b.clone()]);
        let backward = Vocabulary::build(&[b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_from_users_includes_extra_user() {
        let roster = vec![User::new(1, ["rust"], ["chess"])];
        let outsider = User::new(2, ["zig"], Vec::<String>::new());
        let vocab = Vocabulary::from_users(roster.iter().chain(std::iter::once(&outsider)));
        assert_eq!(vocab.skills(), ["rust", "zig"]);
        assert_eq!(vocab, Vocabulary::from_users(&[roster[0].clone(), outsider]));
    }
}
