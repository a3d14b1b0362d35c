//! The user directory interface.
//!
//! The directory owns user records. Recommendation code only ever sees the
//! snapshot a directory hands back; fetch failures belong to the caller.

use anyhow::Result;

use crate::user::{lookup_user, User, UserId};

/// A source of user records.
#[allow(async_fn_in_trait)]
pub trait UserDirectory: Send + Sync {
    /// Fetch the current roster.
    async fn fetch_roster(&self) -> Result<Vec<User>>;

    /// Resolve one user by canonical id.
    ///
    /// Returns `Ok(None)` when the directory has no such user. The default
    /// implementation searches a freshly fetched roster with [`lookup_user`].
    async fn resolve_user(&self, id: &UserId) -> Result<Option<User>> {
        let roster = self.fetch_roster().await?;
        Ok(lookup_user(&roster, id).cloned())
    }
}
