//! Chat-style daily life risk tracking agent.
//!
//! A [`agent::Session`] holds five category scores (health, travel, money,
//! study, security), each in 0..=10. Each user line is parsed into a
//! [`agent::Submission`] and dispatched: `log` updates mutate the scores,
//! `score`/`advice`/`status` render the weighted 0..=100 aggregate, and a
//! free-text trigger phrase starts a fixed five-question health checkup.
//! Every call produces exactly one markdown reply string; malformed input
//! degrades to guidance text instead of an error.

pub mod agent;
pub mod config;
pub mod error;
pub mod risk;

pub use agent::Session;
pub use config::Config;
pub use error::Error;
