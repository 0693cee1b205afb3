//! Configuration for riskcheck.
//!
//! Everything has a sensible default; environment variables (and a local
//! `.env` file) can override the category weights and the advice cap.

use crate::error::ConfigError;
use crate::risk::Category;

/// Main configuration for the agent.
#[derive(Debug, Clone)]
pub struct Config {
    pub weights: Weights,
    /// Maximum number of advice entries per reply, overall remark included.
    pub max_tips: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            max_tips: 6,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            weights: Weights::from_env()?,
            max_tips: parse_optional_env("RISKCHECK_MAX_TIPS", 6)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tips == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RISKCHECK_MAX_TIPS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.weights.validate()
    }
}

/// Per-category weights for the aggregate score. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    pub health: f64,
    pub travel: f64,
    pub money: f64,
    pub study: f64,
    pub security: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            health: 0.25,
            travel: 0.15,
            money: 0.20,
            study: 0.25,
            security: 0.15,
        }
    }
}

impl Weights {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            health: parse_optional_env("RISKCHECK_W_HEALTH", defaults.health)?,
            travel: parse_optional_env("RISKCHECK_W_TRAVEL", defaults.travel)?,
            money: parse_optional_env("RISKCHECK_W_MONEY", defaults.money)?,
            study: parse_optional_env("RISKCHECK_W_STUDY", defaults.study)?,
            security: parse_optional_env("RISKCHECK_W_SECURITY", defaults.security)?,
        })
    }

    /// Weight for a single category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Health => self.health,
            Category::Travel => self.travel,
            Category::Money => self.money,
            Category::Study => self.study,
            Category::Security => self.security,
        }
    }

    /// Reject negative weights and weight sets that do not sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let w = self.get(category);
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("RISKCHECK_W_{}", category.name().to_uppercase()),
                    message: format!("weight must be a non-negative number, got {w}"),
                });
            }
        }
        let sum: f64 = Category::ALL.iter().map(|&c| self.get(c)).sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}

pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}
