//! Five-question health checkup state machine.
//!
//! A fixed ordered sequence of prompts. While a checkup is running every
//! user line is accepted verbatim as the answer for the current step; the
//! derivation heuristics tolerate free text. Step indices stay in range by
//! construction: the only way to advance is through [`CheckupState::record`].

use crate::risk::score;

/// The fixed question sequence: (answer key, prompt text).
pub const QUESTIONS: [(&str, &str); 5] = [
    (
        "sleep",
        "**Q1/5** — How many hours did you sleep last night?",
    ),
    (
        "symptoms",
        "**Q2/5** — Any symptoms today? (none / mild / moderate / severe)",
    ),
    ("stress", "**Q3/5** — Stress level right now, 0-10?"),
    (
        "water",
        "**Q4/5** — How was your water intake? (low / normal / high)",
    ),
    (
        "activity",
        "**Q5/5** — Physical activity today? (none / light / moderate / intense)",
    ),
];

/// Checkup conversation state.
#[derive(Debug, Clone, Default)]
pub enum CheckupState {
    /// No checkup running; lines go through normal command dispatch.
    #[default]
    Idle,

    /// Waiting for the answer to `QUESTIONS[step]`. Answers collected so
    /// far are stored in question order.
    Awaiting { step: usize, answers: Vec<String> },
}

/// What happened after recording one answer.
#[derive(Debug)]
pub enum StepOutcome {
    /// More questions remain; emit this prompt.
    NextPrompt(&'static str),

    /// All five answers are in; the state is back to Idle.
    Complete(Vec<String>),

    /// `record` was called while Idle; nothing to do.
    NotRunning,
}

impl CheckupState {
    /// Start a fresh checkup. Returns the new state and the first prompt.
    pub fn start() -> (Self, &'static str) {
        (
            Self::Awaiting {
                step: 0,
                answers: Vec::with_capacity(QUESTIONS.len()),
            },
            QUESTIONS[0].1,
        )
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Awaiting { .. })
    }

    /// Accept `line` verbatim as the answer for the current step and
    /// advance. On the last step the machine returns to Idle and hands
    /// back the collected answers.
    pub fn record(&mut self, line: &str) -> StepOutcome {
        let Self::Awaiting { step, mut answers } = std::mem::take(self) else {
            return StepOutcome::NotRunning;
        };
        answers.push(line.to_string());

        let next = step + 1;
        if next < QUESTIONS.len() {
            *self = Self::Awaiting {
                step: next,
                answers,
            };
            StepOutcome::NextPrompt(QUESTIONS[next].1)
        } else {
            StepOutcome::Complete(answers)
        }
    }
}

/// Derive the health category value from the five collected answers.
///
/// Start at 0 and add fixed penalties: +3 for under 5 hours of sleep,
/// +4 for "severe" symptoms (else +2 for "moderate"), +3 for stress
/// above 7, +1 for "low" water intake, +1 for "none" activity. Answers
/// that fail to parse contribute nothing. Final value clamped to 0..=10.
pub fn derive_health_score(answers: &[String]) -> u8 {
    let answer = |i: usize| answers.get(i).map(String::as_str).unwrap_or("").trim();

    let mut value: i64 = 0;

    if answer(0).parse::<f64>().is_ok_and(|hours| hours < 5.0) {
        value += 3;
    }

    let symptoms = answer(1).to_lowercase();
    if symptoms.contains("severe") {
        value += 4;
    } else if symptoms.contains("moderate") {
        value += 2;
    }

    if answer(2).parse::<i64>().is_ok_and(|stress| stress > 7) {
        value += 3;
    }

    if answer(3).to_lowercase().contains("low") {
        value += 1;
    }

    if answer(4).to_lowercase().contains("none") {
        value += 1;
    }

    score::clamp(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(list: [&str; 5]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_start_emits_first_prompt() {
        let (state, prompt) = CheckupState::start();
        assert!(state.is_awaiting());
        assert_eq!(prompt, QUESTIONS[0].1);
    }

    #[test]
    fn test_five_answers_complete_in_order() {
        let (mut state, _) = CheckupState::start();
        for expected_next in 1..QUESTIONS.len() {
            match state.record("answer") {
                StepOutcome::NextPrompt(prompt) => {
                    assert_eq!(prompt, QUESTIONS[expected_next].1);
                }
                other => panic!("expected next prompt, got {other:?}"),
            }
        }
        match state.record("final answer") {
            StepOutcome::Complete(collected) => {
                assert_eq!(collected.len(), 5);
                assert_eq!(collected[4], "final answer");
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(!state.is_awaiting());
    }

    #[test]
    fn test_record_while_idle_is_a_no_op() {
        let mut state = CheckupState::Idle;
        assert!(matches!(state.record("hello"), StepOutcome::NotRunning));
        assert!(!state.is_awaiting());
    }

    #[test]
    fn test_derive_all_clear() {
        let collected = answers(["8", "none", "2", "normal", "light"]);
        assert_eq!(derive_health_score(&collected), 0);
    }

    #[test]
    fn test_derive_worst_case_clamps() {
        // 3 + 4 + 3 + 1 + 1 = 12, clamped to 10.
        let collected = answers(["3", "severe headache", "9", "low", "none at all"]);
        assert_eq!(derive_health_score(&collected), 10);
    }

    #[test]
    fn test_derive_severe_beats_moderate() {
        let collected = answers(["8", "severe and moderate", "2", "normal", "light"]);
        assert_eq!(derive_health_score(&collected), 4);
    }

    #[test]
    fn test_derive_moderate_symptoms() {
        let collected = answers(["8", "Moderate cough", "2", "normal", "light"]);
        assert_eq!(derive_health_score(&collected), 2);
    }

    #[test]
    fn test_derive_unparseable_numbers_add_nothing() {
        let collected = answers(["not sure", "none", "plenty", "normal", "light"]);
        assert_eq!(derive_health_score(&collected), 0);
    }

    #[test]
    fn test_derive_sleep_boundary() {
        let short = answers(["4.5", "none", "0", "normal", "light"]);
        assert_eq!(derive_health_score(&short), 3);
        let enough = answers(["5", "none", "0", "normal", "light"]);
        assert_eq!(derive_health_score(&enough), 0);
    }

    #[test]
    fn test_derive_stress_boundary() {
        let calm = answers(["8", "none", "7", "normal", "light"]);
        assert_eq!(derive_health_score(&calm), 0);
        let stressed = answers(["8", "none", "8", "normal", "light"]);
        assert_eq!(derive_health_score(&stressed), 3);
    }
}
