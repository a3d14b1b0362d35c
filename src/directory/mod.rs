//! User directory access and the fetch-then-rank entry point.
//!
//! Implementations:
//! - [`HttpUserDirectory`] reads the roster from the REST backend.
//! - [`StaticDirectory`] serves a roster held in memory or loaded from JSON.

pub mod http;
pub mod roster;
pub mod traits;

pub use http::HttpUserDirectory;
pub use roster::StaticDirectory;
pub use traits::UserDirectory;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::recommend::{PeerRecommender, SimilarityResult};
use crate::user::{lookup_user, User, UserId};

// ---------------------------------------------------------------------------
// AnyDirectory: enum dispatch wrapper for runtime directory selection
// ---------------------------------------------------------------------------

/// Either directory implementation, chosen at runtime without `dyn`.
pub enum AnyDirectory {
    Http(HttpUserDirectory),
    Static(StaticDirectory),
}

impl UserDirectory for AnyDirectory {
    async fn fetch_roster(&self) -> Result<Vec<User>> {
        match self {
            Self::Http(d) => d.fetch_roster().await,
            Self::Static(d) => d.fetch_roster().await,
        }
    }

    async fn resolve_user(&self, id: &UserId) -> Result<Option<User>> {
        match self {
            Self::Http(d) => d.resolve_user(id).await,
            Self::Static(d) => d.resolve_user(id).await,
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch and rank
// ---------------------------------------------------------------------------

/// A ranked candidate with an owned copy of its profile.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPeer {
    #[serde(flatten)]
    pub result: SimilarityResult,
    pub user: User,
}

/// Recommendations for one target, as handed to the display layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerReport {
    pub target: User,
    pub roster_size: usize,
    pub generated_at: DateTime<Utc>,
    pub peers: Vec<RankedPeer>,
}

/// Fetch the roster, resolve the target and rank.
///
/// Returns `Ok(None)` if the directory does not know `target_id`. The target
/// does not have to be present in the roster snapshot. Self-exclusion uses the
/// id of the resolved record, not `target_id` itself.
pub async fn recommend_for<D: UserDirectory>(
    directory: &D,
    recommender: &PeerRecommender,
    target_id: &UserId,
) -> Result<Option<PeerReport>> {
    let roster = directory.fetch_roster().await?;

    let target = match lookup_user(&roster, target_id) {
        Some(user) => user.clone(),
        None => match directory.resolve_user(target_id).await? {
            Some(user) => user,
            None => {
                debug!(target = %target_id, "target user not found");
                return Ok(None);
            }
        },
    };

    let peers = recommender
        .recommend_with_profiles(&target, &roster)
        .into_iter()
        .map(|rec| RankedPeer {
            result: rec.result,
            user: rec.user.clone(),
        })
        .collect();

    Ok(Some(PeerReport {
        target,
        roster_size: roster.len(),
        generated_at: Utc::now(),
        peers,
    }))
}
