use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`DirectoryConfig::api_base`].
pub const API_BASE_ENV: &str = "PEERLINK_API_BASE";

/// Complete configuration for the recommendation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PeerLinkConfig {
    pub ranking: RankingConfig,
    pub directory: DirectoryConfig,
}

/// Ranking policy.
///
/// Keys are accepted in snake_case or in the camelCase used by the web client
/// (`skillWeight`, `interestWeight`, `topK`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    /// Weight of skill similarity in the combined score (default: 0.7).
    #[serde(alias = "skillWeight")]
    pub skill_weight: f64,
    /// Weight of interest similarity in the combined score (default: 0.3).
    #[serde(alias = "interestWeight")]
    pub interest_weight: f64,
    /// Maximum number of recommendations returned (default: 5).
    #[serde(alias = "topK")]
    pub top_k: usize,
    /// Skip candidates flagged `restricted` by an administrator (default: false).
    #[serde(alias = "excludeRestricted")]
    pub exclude_restricted: bool,
}

/// User directory connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Base URL of the REST backend.
    #[serde(alias = "apiBase")]
    pub api_base: String,
    /// Request timeout in seconds (default: 10).
    #[serde(alias = "timeoutSecs")]
    pub timeout_secs: u64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            interest_weight: 0.3,
            top_k: 5,
            exclude_restricted: false,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".into(),
            timeout_secs: 10,
        }
    }
}

impl RankingConfig {
    /// Check that both weights lie in [0, 1], sum to 1, and that `top_k > 0`.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in [
            ("skill_weight", self.skill_weight),
            ("interest_weight", self.interest_weight),
        ] {
            if !(0.0..=1.0).contains(&w) {
                bail!("{name} must be within [0, 1], got {w}");
            }
        }
        let sum = self.skill_weight + self.interest_weight;
        if (sum - 1.0).abs() > 1e-9 {
            bail!("skill_weight and interest_weight must sum to 1, got {sum}");
        }
        if self.top_k == 0 {
            bail!("top_k must be greater than 0");
        }
        Ok(())
    }
}

impl PeerLinkConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.ranking.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.is_empty() {
                self.directory.api_base = base;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PeerLinkConfig::default();
        assert!(config.ranking.validate().is_ok());
        assert_eq!(config.ranking.top_k, 5);
        assert_eq!(config.ranking.skill_weight, 0.7);
        assert_eq!(config.ranking.interest_weight, 0.3);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = RankingConfig {
            skill_weight: 0.6,
            interest_weight: 0.6,
            ..RankingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weight_out_of_range() {
        let config = RankingConfig {
            skill_weight: 1.5,
            interest_weight: -0.5,
            ..RankingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = RankingConfig {
            top_k: 0,
            ..RankingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PeerLinkConfig =
            serde_json::from_str(r#"{"ranking": {"top_k": 3}}"#).unwrap();
        assert_eq!(config.ranking.top_k, 3);
        assert_eq!(config.ranking.skill_weight, 0.7);
        assert_eq!(config.directory.timeout_secs, 10);
    }

    #[test]
    fn test_load_from_file_validates() {
        let path = std::env::temp_dir().join("peerlink_test_bad_config.json");
        std::fs::write(&path, r#"{"ranking": {"skill_weight": 0.9}}"#).unwrap();
        assert!(PeerLinkConfig::load_from_file(&path).is_err());

        std::fs::write(
            &path,
            r#"{"ranking": {"skill_weight": 0.5, "interest_weight": 0.5}}"#,
        )
        .unwrap();
        let config = PeerLinkConfig::load_from_file(&path).unwrap();
        assert_eq!(config.ranking.skill_weight, 0.5);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_camel_case_keys() {
        let path = std::env::temp_dir().join("peerlink_test_camel_config.json");
        std::fs::write(
            &path,
            r#"{"ranking": {"skillWeight": 0.2, "interestWeight": 0.8, "topK": 2}}"#,
        )
        .unwrap();
        let config = PeerLinkConfig::load_from_file(&path).unwrap();
        assert_eq!(config.ranking.skill_weight, 0.2);
        assert_eq!(config.ranking.interest_weight, 0.8);
        assert_eq!(config.ranking.top_k, 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let misspelt = serde_json::from_str::<PeerLinkConfig>(r#"{"ranking": {"topk": 3}}"#);
        assert!(misspelt.is_err());
        let unknown_section = serde_json::from_str::<PeerLinkConfig>(r#"{"rankng": {}}"#);
        assert!(unknown_section.is_err());
    }
}
