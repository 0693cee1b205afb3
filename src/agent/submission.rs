//! Submission types for the chat loop.
//!
//! Submissions are the different types of input one user line can carry:
//! a recognized command, a batch `log` update, a greeting or checkup
//! trigger phrase, or free text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::risk::{Category, score};

/// Parses user input into Submission types.
pub struct SubmissionParser;

impl SubmissionParser {
    /// Parse one line of message content into a Submission.
    ///
    /// Matching is case-insensitive with surrounding whitespace ignored.
    /// Nothing here fails: anything unrecognized falls through to
    /// [`Submission::Freeform`].
    pub fn parse(content: &str) -> Submission {
        let trimmed = content.trim();
        let lower = trimmed.to_lowercase();

        // Zero-argument commands (exact match, slash aliases included)
        match lower.as_str() {
            "help" | "/help" | "commands" => return Submission::Help,
            "reset" | "/reset" | "clear" => return Submission::Reset,
            "status" | "/status" => return Submission::Status,
            "score" | "/score" => return Submission::Score,
            "advice" | "/advice" => return Submission::Advice,
            _ => {}
        }

        // Batch update: `log key=value ...`, commas tolerated as separators.
        // Commas are replaced before the keyword check, so `log,health=3`
        // still counts as a log line.
        let normalized = lower.replace(',', " ");
        let normalized = normalized.trim();
        if let Some(rest) = normalized.strip_prefix("log")
            && rest.starts_with(char::is_whitespace)
        {
            return Submission::Log {
                updates: Self::parse_log_updates(rest),
            };
        }

        if GREETINGS.contains(&lower.as_str()) {
            return Submission::Greeting;
        }

        // Checkup trigger: free text mentioning both words, e.g.
        // "health check" or "check my health".
        if lower.contains("health") && lower.contains("check") {
            return Submission::StartCheckup;
        }

        Submission::Freeform {
            content: trimmed.to_string(),
        }
    }

    /// Parse the body of a `log` line into category updates.
    ///
    /// Tokens without `=`, unknown category keys, and non-numeric values
    /// are silently dropped. Values are rounded to the nearest integer and
    /// clamped to 0..=10. The result may be empty, which is distinct from
    /// "not a log line" at the caller.
    fn parse_log_updates(body: &str) -> BTreeMap<Category, u8> {
        let mut updates = BTreeMap::new();
        for token in body.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            let Some(category) = Category::parse(key.trim()) else {
                continue;
            };
            let Ok(number) = value.trim().parse::<f64>() else {
                continue;
            };
            updates.insert(category, score::clamp(number.round() as i64));
        }
        updates
    }
}

/// Greeting phrases recognized as a whole line.
const GREETINGS: [&str; 6] = ["hi", "hello", "hey", "yo", "good morning", "good evening"];

/// One parsed user line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Submission {
    /// Show the command list.
    Help,

    /// Restore all categories to zero and clear the timestamp.
    Reset,

    /// Show all category values.
    Status,

    /// Show the aggregate score and level.
    Score,

    /// Show the advice list.
    Advice,

    /// Batch category update. `updates` may be empty when no token on the
    /// line survived parsing.
    Log { updates: BTreeMap<Category, u8> },

    /// A recognized greeting phrase.
    Greeting,

    /// The health checkup trigger phrase.
    StartCheckup,

    /// Anything else; answered with generic guidance.
    Freeform { content: String },
}
