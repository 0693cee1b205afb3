//! Canned advice derived from the current state and score.

use crate::risk::{Category, RiskState};

/// Build the advice list: a score-band remark first, then per-category
/// tips in display order. A category earns the strong tip at value >= 7
/// and the mild tip at 4..=6. The list is capped at `max_tips` entries
/// and the overall remark always survives the cap.
pub fn tips(state: &RiskState, score: u8, max_tips: usize) -> Vec<&'static str> {
    let mut out = vec![overall_remark(score)];
    for category in Category::ALL {
        let value = state.get(category);
        if value >= 7 {
            out.push(strong_tip(category));
        } else if value >= 4 {
            out.push(mild_tip(category));
        }
    }
    out.truncate(max_tips.max(1));
    out
}

/// Overall remark for the same 20/40/60/80 bands as the risk level.
fn overall_remark(score: u8) -> &'static str {
    match score {
        0..=20 => "✅ Overall: You're safe today. Just maintain your routine.",
        21..=40 => "🙂 Overall: Some risk is building. Fix 1-2 areas today.",
        41..=60 => "⚠️ Overall: Prioritize your highest category and reduce optional stress.",
        61..=80 => {
            "🚨 Overall: Take action now. Reduce workload, avoid risky travel, tighten spending."
        }
        _ => {
            "🛑 Overall: Critical level. Pause non-essential activities and focus on safety essentials."
        }
    }
}

fn strong_tip(category: Category) -> &'static str {
    match category {
        Category::Health => {
            "🩺 Health: Sleep, hydration, and a 10-20 min walk today. Avoid junk food and late-night screens."
        }
        Category::Travel => {
            "🚗 Travel: Avoid peak traffic, keep your phone charged, and share live location if going far."
        }
        Category::Money => {
            "💸 Money: Freeze non-essential spending for 48 hours. Track expenses today."
        }
        Category::Study => {
            "📚 Study: Do a 25-min focus sprint now. List deadlines and pick the closest one first."
        }
        Category::Security => {
            "🔐 Security: Change important passwords, enable 2FA, and avoid unknown links."
        }
    }
}

fn mild_tip(category: Category) -> &'static str {
    match category {
        Category::Health => "🩺 Health: Keep your routine steady. Drink water and take short breaks.",
        Category::Travel => "🚗 Travel: Leave early and keep emergency cash and a powerbank.",
        Category::Money => "💸 Money: Set a daily spending limit and note all purchases.",
        Category::Study => "📚 Study: Make a 3-task plan for today (small and doable).",
        Category::Security => "🔐 Security: Review privacy settings and update your apps.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(values: [(Category, u8); 5]) -> RiskState {
        let mut state = RiskState::new();
        for (category, value) in values {
            state.set(category, value);
        }
        state
    }

    #[test]
    fn test_remark_always_first() {
        let state = RiskState::new();
        let out = tips(&state, 0, 6);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("Overall"));
    }

    #[test]
    fn test_strong_and_mild_thresholds() {
        let mut state = RiskState::new();
        state.set(Category::Health, 7);
        state.set(Category::Money, 4);
        let out = tips(&state, 26, 6);
        assert_eq!(out.len(), 3);
        assert!(out[1].contains("walk today"), "health >= 7 gets the strong tip");
        assert!(out[2].contains("spending limit"), "money in 4..7 gets the mild tip");
    }

    #[test]
    fn test_value_three_earns_no_tip() {
        let mut state = RiskState::new();
        state.set(Category::Study, 3);
        let out = tips(&state, 8, 6);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_tips_in_category_order() {
        let state = state_with([
            (Category::Health, 8),
            (Category::Travel, 8),
            (Category::Money, 8),
            (Category::Study, 8),
            (Category::Security, 8),
        ]);
        let out = tips(&state, 80, 6);
        assert_eq!(out.len(), 6);
        assert!(out[1].contains("Health:"));
        assert!(out[2].contains("Travel:"));
        assert!(out[5].contains("Security:"));
    }

    #[test]
    fn test_cap_keeps_remark() {
        let state = state_with([
            (Category::Health, 8),
            (Category::Travel, 8),
            (Category::Money, 8),
            (Category::Study, 8),
            (Category::Security, 8),
        ]);
        let out = tips(&state, 80, 3);
        assert_eq!(out.len(), 3);
        assert!(out[0].contains("Overall"));
        let out = tips(&state, 80, 0);
        assert_eq!(out.len(), 1, "cap of zero still keeps the remark");
    }

    #[test]
    fn test_remark_bands_match_level_bands() {
        assert!(overall_remark(20).contains("safe today"));
        assert!(overall_remark(21).contains("risk is building"));
        assert!(overall_remark(40).contains("risk is building"));
        assert!(overall_remark(41).contains("Prioritize"));
        assert!(overall_remark(80).contains("Take action"));
        assert!(overall_remark(81).contains("Critical"));
    }
}
