//! User records as served by the user directory.
//!
//! Only `id`, `skills` and `interests` take part in ranking. Every other field
//! is display payload and is carried through untouched, including fields this
//! crate does not know about.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque user identifier.
///
/// The directory may hand out numeric or string identifiers. Identifiers are
/// compared by equality for self-exclusion; the derived ordering (integers
/// numerically, then strings lexicographically) is only used to break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Str(String),
}

impl UserId {
    /// Parse an identifier typed on the command line or in a URL.
    ///
    /// Anything that parses as an integer becomes [`UserId::Int`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Str(raw.trim().to_string()),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for UserId {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// A user profile.
///
/// The directory's native `_id` is accepted as the canonical `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,
    #[serde(default, deserialize_with = "tag_set")]
    pub skills: BTreeSet<String>,
    #[serde(default, deserialize_with = "tag_set")]
    pub interests: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Set by administrators to hide a user from other students.
    #[serde(default)]
    pub restricted: bool,
    /// Any other profile fields, passed through as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `null` and absent both mean "no tags".
fn tag_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default().into_iter().collect())
}

impl User {
    /// Create a user with the given tags and no profile payload.
    pub fn new<S, I>(id: impl Into<UserId>, skills: S, interests: I) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            id: id.into(),
            skills: skills.into_iter().map(Into::into).collect(),
            interests: interests.into_iter().map(Into::into).collect(),
            name: None,
            display_name: None,
            email: None,
            profile_picture: None,
            phone: None,
            restricted: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name to show in listings: display name, then name, then the id.
    pub fn label(&self) -> String {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }
}
