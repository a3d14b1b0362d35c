//! Peer recommendation.
//!
//! The pipeline runs per call over an in-memory roster snapshot:
//!
//! 1. **Vocabulary** ([`vocabulary`]) -- the sorted union of skill and interest
//!    tags across the roster.
//! 2. **Encoder** ([`encoder`]) -- binary presence vectors over that vocabulary.
//! 3. **Similarity** ([`similarity`]) -- cosine over skill vectors, Jaccard over
//!    interest sets.
//! 4. **Ranker** ([`ranker`]) -- weighted combination, self-exclusion, ordering
//!    and truncation.
//!
//! Nothing here is cached between calls, and nothing here can fail.

pub mod encoder;
pub mod ranker;
pub mod similarity;
pub mod types;
pub mod vocabulary;

pub use encoder::{encode, EncodedUser, FeatureVector};
pub use ranker::{recommend, PeerRecommender};
pub use similarity::{cosine_similarity, jaccard_similarity, score};
pub use types::{PairScore, Recommendation, SimilarityResult};
pub use vocabulary::Vocabulary;
