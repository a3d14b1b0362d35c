//! In-memory user directory, optionally loaded from a JSON file.
//!
//! Useful offline and in tests: the file holds the same JSON array the REST
//! backend serves from `/api/users`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::traits::UserDirectory;
use crate::user::User;

/// A fixed roster held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: Vec<User>,
}

impl StaticDirectory {
    /// Wrap an existing roster.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Load a roster from a JSON file containing an array of users.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read roster from {}", path.as_ref().display()))?;
        let users: Vec<User> =
            serde_json::from_str(&data).context("Failed to deserialize roster JSON")?;
        info!(
            path = %path.as_ref().display(),
            users = users.len(),
            "Loaded roster"
        );
        Ok(Self { users })
    }

    /// The held roster.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserDirectory for StaticDirectory {
    async fn fetch_roster(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;

    #[tokio::test]
    async fn test_resolve_user() {
        let dir = StaticDirectory::new(vec![
            User::new(1, ["rust"], ["chess"]),
            User::new(2, ["go"], ["music"]),
        ]);
        let found = dir.resolve_user(&UserId::Int(2)).await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(UserId::Int(2)));
        assert!(dir.resolve_user(&UserId::Int(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join("peerlink_test_roster.json");
        std::fs::write(
            &path,
            r#"[
                {"_id": "a1", "name": "Ana", "skills": ["rust"], "interests": ["chess"]},
                {"_id": "b2", "name": "Ben", "skills": ["go"]}
            ]"#,
        )
        .unwrap();

        let dir = StaticDirectory::load_from_file(&path).unwrap();
        assert_eq!(dir.users().len(), 2);
        let roster = dir.fetch_roster().await.unwrap();
        assert!(roster[1].interests.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("peerlink_no_such_roster.json");
        assert!(StaticDirectory::load_from_file(path).is_err());
    }
}
