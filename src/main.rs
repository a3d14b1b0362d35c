//! PeerLink command line.
//!
//! - `recommend`   -- Rank peers for one user
//! - `score`       -- Show the pairwise similarity of two users
//! - `vocabulary`  -- List the skill and interest tags of the roster
//! - `health`      -- Check the REST backend

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use peerlink::config::PeerLinkConfig;
use peerlink::directory::{
    recommend_for, AnyDirectory, HttpUserDirectory, StaticDirectory, UserDirectory,
};
use peerlink::recommend::{score, PeerRecommender, Vocabulary};
use peerlink::user::{lookup_user, UserId};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// PeerLink: recommend study peers by shared skills and interests
#[derive(Parser)]
#[command(name = "peerlink", version, about)]
struct Cli {
    /// Path to a JSON configuration file (uses defaults if not provided).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read the roster from a JSON file instead of the REST backend.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank peers for a user.
    Recommend {
        /// Canonical id of the target user.
        user: String,

        /// Override the configured number of results.
        #[arg(long)]
        top_k: Option<usize>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the skill, interest and combined similarity of two users.
    Score {
        /// First user id.
        a: String,
        /// Second user id.
        b: String,
    },

    /// List the skill and interest vocabularies of the roster.
    Vocabulary,

    /// Check that the REST backend is reachable.
    Health,
}

// ---------------------------------------------------------------------------
// Entrypoint
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (reads RUST_LOG env var, defaults to info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PeerLinkConfig::load_from_file(path)?,
        None => PeerLinkConfig::default(),
    };
    config.apply_env();

    match cli.command {
        Commands::Recommend { user, top_k, json } => {
            if let Some(k) = top_k {
                config.ranking.top_k = k;
            }
            let directory = create_directory(&config, cli.roster.as_ref())?;
            cmd_recommend(&config, &directory, &user, json).await
        }
        Commands::Score { a, b } => {
            let directory = create_directory(&config, cli.roster.as_ref())?;
            cmd_score(&config, &directory, &a, &b).await
        }
        Commands::Vocabulary => {
            let directory = create_directory(&config, cli.roster.as_ref())?;
            cmd_vocabulary(&directory).await
        }
        Commands::Health => cmd_health(&config).await,
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_recommend(
    config: &PeerLinkConfig,
    directory: &AnyDirectory,
    user: &str,
    json: bool,
) -> Result<()> {
    let recommender = PeerRecommender::new(config.ranking.clone())?;
    let target_id = UserId::parse(user);

    let report = recommend_for(directory, &recommender, &target_id)
        .await?
        .with_context(|| format!("User {target_id} not found in the directory"))?;

    info!(
        target = %target_id,
        roster = report.roster_size,
        peers = report.peers.len(),
        "Computed recommendations"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Recommended connections for {}", report.target.label());
    println!();

    if report.peers.is_empty() {
        println!("No recommendations available");
        return Ok(());
    }

    for (rank, peer) in report.peers.iter().enumerate() {
        println!(
            "{:>2}. {} [{}]  score {:.3} (skills {:.3}, interests {:.3})",
            rank + 1,
            peer.user.label(),
            peer.user.id,
            peer.result.combined_score,
            peer.result.skill_similarity,
            peer.result.interest_similarity,
        );
        println!("    Skills: {}", join_tags(&peer.user.skills));
        println!("    Interests: {}", join_tags(&peer.user.interests));
    }

    Ok(())
}

async fn cmd_score(
    config: &PeerLinkConfig,
    directory: &AnyDirectory,
    a: &str,
    b: &str,
) -> Result<()> {
    config.ranking.validate()?;
    let roster = directory.fetch_roster().await?;

    let (a_id, b_id) = (UserId::parse(a), UserId::parse(b));
    let user_a = lookup_user(&roster, &a_id).with_context(|| format!("User {a_id} not found"))?;
    let user_b = lookup_user(&roster, &b_id).with_context(|| format!("User {b_id} not found"))?;

    let vocabulary = Vocabulary::build(&roster);
    let pair = score(user_a, user_b, &vocabulary);
    let combined = pair.combined(config.ranking.skill_weight, config.ranking.interest_weight);

    println!("{} <-> {}", user_a.label(), user_b.label());
    println!("  Skill similarity:    {:.3}", pair.skill);
    println!("  Interest similarity: {:.3}", pair.interest);
    println!("  Combined score:      {combined:.3}");

    Ok(())
}

async fn cmd_vocabulary(directory: &AnyDirectory) -> Result<()> {
    let roster = directory.fetch_roster().await?;
    let vocabulary = Vocabulary::build(&roster);

    println!("Roster: {} users", roster.len());
    println!();
    println!("Skills ({}):", vocabulary.skills().len());
    for tag in vocabulary.skills() {
        println!("  {tag}");
    }
    println!();
    println!("Interests ({}):", vocabulary.interests().len());
    for tag in vocabulary.interests() {
        println!("  {tag}");
    }

    Ok(())
}

async fn cmd_health(config: &PeerLinkConfig) -> Result<()> {
    let directory = HttpUserDirectory::new(&config.directory)?;
    let health = directory.health().await?;
    let mongo_state = health
        .mongo_state
        .map_or_else(|| "unknown".to_string(), |s| s.to_string());
    if health.is_healthy() {
        println!("{} is healthy (mongoState {mongo_state})", directory.api_base());
        Ok(())
    } else {
        anyhow::bail!(
            "{} is unhealthy (ok {}, mongoState {mongo_state})",
            directory.api_base(),
            health.ok
        )
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn create_directory(config: &PeerLinkConfig, roster: Option<&PathBuf>) -> Result<AnyDirectory> {
    match roster {
        Some(path) => {
            info!(path = %path.display(), "Using roster file");
            Ok(AnyDirectory::Static(StaticDirectory::load_from_file(path)?))
        }
        None => {
            info!(api_base = %config.directory.api_base, "Using REST user directory");
            Ok(AnyDirectory::Http(HttpUserDirectory::new(&config.directory)?))
        }
    }
}

fn join_tags<'a>(tags: impl IntoIterator<Item = &'a String>) -> String {
    let joined: Vec<&str> = tags.into_iter().map(String::as_str).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}
