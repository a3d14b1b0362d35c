//! PeerLink: peer recommendations for a student networking directory.
//!
//! Ranks every other student by how closely their skills and interests match a
//! target student, combining cosine similarity over skill vectors with Jaccard
//! similarity over interest sets.

pub mod config;
pub mod directory;
pub mod recommend;
pub mod user;
