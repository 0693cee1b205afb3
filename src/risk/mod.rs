//! Risk categories, session state, and level labels.

pub mod advice;
pub mod score;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One of the five tracked risk dimensions, each scored 0..=10.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Travel,
    Money,
    Study,
    Security,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Health,
        Category::Travel,
        Category::Money,
        Category::Study,
        Category::Security,
    ];

    /// Lowercase name as typed in `log` lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Money => "money",
            Self::Study => "study",
            Self::Security => "security",
        }
    }

    /// Capitalized display name for status lines.
    pub fn title(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Money => "Money",
            Self::Study => "Study",
            Self::Security => "Security",
        }
    }

    /// Parse a lowercase category name. Unknown names are not categories.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "health" => Some(Self::Health),
            "travel" => Some(Self::Travel),
            "money" => Some(Self::Money),
            "study" => Some(Self::Study),
            "security" => Some(Self::Security),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Health => 0,
            Self::Travel => 1,
            Self::Money => 2,
            Self::Study => 3,
            Self::Security => 4,
        }
    }
}

/// Session-scoped category values.
///
/// Invariant: all five values are always present and clamped to 0..=10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskState {
    values: [u8; 5],
    last_updated: Option<DateTime<Local>>,
}

impl RiskState {
    /// Fresh state: all zeros, no timestamp.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> u8 {
        self.values[category.index()]
    }

    /// Set one category value, clamping to 0..=10.
    pub fn set(&mut self, category: Category, value: u8) {
        self.values[category.index()] = value.min(10);
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Stamp the last-updated time after a mutation.
    pub fn touch(&mut self, now: DateTime<Local>) {
        self.last_updated = Some(now);
    }

    /// Back to the default: all zeros, timestamp cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Discrete label bucket for the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,      // score <= 20
    Moderate, // score <= 40
    High,     // score <= 60
    VeryHigh, // score <= 80
    Critical, // everything above
}

impl RiskLevel {
    /// Bucket a 0..=100 aggregate score. Boundaries are inclusive on the
    /// lower label: exactly 40 is Moderate, not High.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => Self::Low,
            21..=40 => Self::Moderate,
            41..=60 => Self::High,
            61..=80 => Self::VeryHigh,
            _ => Self::Critical,
        }
    }

    /// Plain label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Critical => "Critical",
        }
    }

    /// Label with the emoji badge used in chat replies.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Low => "Low ✅",
            Self::Moderate => "Moderate 🙂",
            Self::High => "High ⚠️",
            Self::VeryHigh => "Very High 🚨",
            Self::Critical => "Critical 🛑",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
