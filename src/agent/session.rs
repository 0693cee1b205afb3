//! Session orchestration: one struct owns the risk state, the checkup
//! progress, and the transcript, and turns each user line into exactly
//! one reply string.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::agent::checkup::{self, CheckupState, StepOutcome};
use crate::agent::submission::{Submission, SubmissionParser};
use crate::config::Config;
use crate::risk::{Category, RiskLevel, RiskState, advice, score};

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Display-only: nothing downstream consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One chat session. Holds all state for the lifetime of the conversation;
/// nothing persists across sessions.
pub struct Session {
    config: Config,
    risk: RiskState,
    checkup: CheckupState,
    transcript: Vec<Message>,
    clock: Box<dyn Fn() -> DateTime<Local> + Send>,
}

impl Session {
    /// New session with a welcome message already in the transcript.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(Local::now))
    }

    /// New session with an injected clock, so tests can pin timestamps.
    pub fn with_clock(config: Config, clock: Box<dyn Fn() -> DateTime<Local> + Send>) -> Self {
        Self {
            config,
            risk: RiskState::new(),
            checkup: CheckupState::Idle,
            transcript: vec![Message::assistant(WELCOME)],
            clock,
        }
    }

    /// Current category values.
    pub fn risk(&self) -> &RiskState {
        &self.risk
    }

    /// The visible conversation so far.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether a checkup is waiting for an answer.
    pub fn checkup_running(&self) -> bool {
        self.checkup.is_awaiting()
    }

    /// Handle one user line and produce the reply. Never fails: malformed
    /// input degrades to guidance text.
    pub fn handle_line(&mut self, line: &str) -> String {
        self.transcript.push(Message::user(line));
        let reply = self.dispatch(line);
        self.transcript.push(Message::assistant(reply.clone()));
        reply
    }

    fn dispatch(&mut self, line: &str) -> String {
        // A running checkup consumes every line, commands included.
        if self.checkup.is_awaiting() {
            return self.handle_checkup_answer(line);
        }

        let submission = SubmissionParser::parse(line);
        tracing::debug!(?submission, "dispatching submission");

        match submission {
            Submission::Help => HELP.to_string(),
            Submission::Reset => self.handle_reset(),
            Submission::Status => format!("### Current status\n{}", self.format_status()),
            Submission::Score => self.render_score(),
            Submission::Advice => self.render_advice(),
            Submission::Log { updates } if updates.is_empty() => {
                "I couldn't find valid values. Use 0-10 like: `log study=8`".to_string()
            }
            Submission::Log { updates } => self.apply_log(updates),
            Submission::Greeting => GREETING_REPLY.to_string(),
            Submission::StartCheckup => self.start_checkup(),
            Submission::Freeform { .. } => FALLBACK.to_string(),
        }
    }

    fn handle_reset(&mut self) -> String {
        self.risk.reset();
        tracing::info!("session reset");
        "✅ Reset done. Type `log health=...` to start again.".to_string()
    }

    fn apply_log(&mut self, updates: std::collections::BTreeMap<Category, u8>) -> String {
        for (&category, &value) in &updates {
            self.risk.set(category, value);
        }
        self.risk.touch((self.clock)());
        let aggregate = score::compute_score(&self.risk, &self.config.weights);
        tracing::debug!(updated = updates.len(), score = aggregate, "log applied");
        format!(
            "✅ Updated.\n\n### Risk Score: **{aggregate}/100**\n**Level:** {}\n\n\
             Type `advice` for tips or `status` to view categories.",
            RiskLevel::from_score(aggregate).badge()
        )
    }

    fn render_score(&self) -> String {
        let aggregate = score::compute_score(&self.risk, &self.config.weights);
        format!(
            "### Risk Score: **{aggregate}/100**\n**Level:** {}\n\n{}",
            RiskLevel::from_score(aggregate).badge(),
            self.format_status()
        )
    }

    fn render_advice(&self) -> String {
        let aggregate = score::compute_score(&self.risk, &self.config.weights);
        let tips = advice::tips(&self.risk, aggregate, self.config.max_tips);
        let mut reply = format!(
            "### Advice (Score {aggregate}/100 • {})\n",
            RiskLevel::from_score(aggregate).badge()
        );
        for tip in tips {
            reply.push_str("- ");
            reply.push_str(tip);
            reply.push('\n');
        }
        reply.pop();
        reply
    }

    fn start_checkup(&mut self) -> String {
        let (state, prompt) = CheckupState::start();
        self.checkup = state;
        tracing::debug!("checkup started");
        format!("Let's run a quick health checkup: 5 short questions, answer freely.\n\n{prompt}")
    }

    fn handle_checkup_answer(&mut self, line: &str) -> String {
        match self.checkup.record(line) {
            StepOutcome::NextPrompt(prompt) => prompt.to_string(),
            StepOutcome::Complete(answers) => self.finish_checkup(&answers),
            StepOutcome::NotRunning => FALLBACK.to_string(),
        }
    }

    fn finish_checkup(&mut self, answers: &[String]) -> String {
        let health = checkup::derive_health_score(answers);
        self.risk.set(Category::Health, health);
        self.risk.touch((self.clock)());
        let aggregate = score::compute_score(&self.risk, &self.config.weights);
        tracing::info!(health, score = aggregate, "checkup complete");
        format!(
            "✅ Checkup complete. Health risk set to **{health}/10**.\n\n\
             ### Risk Score: **{aggregate}/100**\n**Level:** {}\n\n\
             Type `advice` for tips.",
            RiskLevel::from_score(aggregate).badge()
        )
    }

    fn format_status(&self) -> String {
        let mut lines: Vec<String> = Category::ALL
            .iter()
            .map(|&c| format!("- **{}**: {}/10", c.title(), self.risk.get(c)))
            .collect();
        if let Some(when) = self.risk.last_updated() {
            lines.push(format!("- **Last updated**: {}", when.format("%Y-%m-%d %H:%M")));
        }
        lines.join("\n")
    }
}

const WELCOME: &str = "Hi! I'm your **Daily Life Risk Checker Agent** 🛡️\n\n\
    Type `help` to see commands.\n\
    Example: `log health=6 travel=2 money=4 study=8 security=5`";

const GREETING_REPLY: &str = "Hey! 👋 I track your daily risks and calculate a score.\n\
    Type `help` for commands, or `health check` for a quick checkup.";

const FALLBACK: &str = "I can track your daily risks and calculate a score.\n\n\
    Type `help` to see commands.\n\
    Example: `log health=6 travel=2 money=4 study=8 security=5`\n\
    Then type: `score` or `advice`.";

const HELP: &str = "### Commands you can type\n\
    - `log health=7 travel=3 money=5 study=8 security=6`  (each 0-10)\n\
    - `score`  - show your current risk score\n\
    - `advice` - show simple advice\n\
    - `status` - show all category values\n\
    - `reset`  - clear everything\n\
    - `health check` - run the 5-question health checkup\n\n\
    ### Tips\n\
    - You can update only one value too: `log study=9`\n\
    - Higher number = higher risk.";
