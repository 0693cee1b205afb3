//! End-to-end session scenarios driven line by line.

use chrono::TimeZone;
use pretty_assertions::assert_eq;

use riskcheck::agent::Session;
use riskcheck::config::Config;
use riskcheck::risk::Category;

fn session() -> Session {
    let fixed = chrono::Local
        .with_ymd_and_hms(2026, 8, 26, 18, 30, 0)
        .unwrap();
    Session::with_clock(Config::default(), Box::new(move || fixed))
}

#[test]
fn log_then_score_round_trip() {
    let mut session = session();

    let reply = session.handle_line("log health=6 travel=2 money=4 study=8 security=5");
    // round((6*.25 + 2*.15 + 4*.20 + 8*.25 + 5*.15) * 10) = round(53.5) = 54
    assert!(reply.contains("**54/100**"), "reply was: {reply}");
    assert!(reply.contains("High ⚠️"));

    let reply = session.handle_line("score");
    assert_eq!(
        reply,
        "### Risk Score: **54/100**\n**Level:** High ⚠️\n\n\
         - **Health**: 6/10\n\
         - **Travel**: 2/10\n\
         - **Money**: 4/10\n\
         - **Study**: 8/10\n\
         - **Security**: 5/10\n\
         - **Last updated**: 2026-08-26 18:30"
    );
}

#[test]
fn advice_lists_remark_then_category_tips() {
    let mut session = session();
    session.handle_line("log health=8 money=5");

    let reply = session.handle_line("advice");
    let lines: Vec<&str> = reply.lines().collect();
    assert!(lines[0].starts_with("### Advice (Score 30/100"));
    assert!(lines[1].contains("Overall:"));
    assert!(lines[2].contains("🩺 Health:"), "strong health tip expected");
    assert!(lines[3].contains("💸 Money:"), "mild money tip expected");
    assert_eq!(lines.len(), 4);
}

#[test]
fn advice_on_fresh_session_is_just_the_remark() {
    let mut session = session();
    let reply = session.handle_line("advice");
    assert!(reply.contains("Score 0/100"));
    assert!(reply.contains("You're safe today"));
    assert_eq!(reply.lines().count(), 2);
}

#[test]
fn reset_clears_scores_and_timestamp() {
    let mut session = session();
    session.handle_line("log health=9 travel=9 money=9 study=9 security=9");
    session.handle_line("reset");

    let reply = session.handle_line("status");
    assert_eq!(
        reply,
        "### Current status\n\
         - **Health**: 0/10\n\
         - **Travel**: 0/10\n\
         - **Money**: 0/10\n\
         - **Study**: 0/10\n\
         - **Security**: 0/10"
    );
}

#[test]
fn partial_log_applies_valid_tokens_only() {
    let mut session = session();
    session.handle_line("log health=15, foo=3, study=bad, money=2");
    assert_eq!(session.risk().get(Category::Health), 10);
    assert_eq!(session.risk().get(Category::Money), 2);
    assert_eq!(session.risk().get(Category::Study), 0);
}

#[test]
fn checkup_runs_five_prompts_and_updates_score() {
    let mut session = session();
    session.handle_line("log travel=4");

    let intro = session.handle_line("health check");
    assert!(intro.contains("Q1/5"));

    let prompts = [
        session.handle_line("6"),
        session.handle_line("mild"),
        session.handle_line("9"),
        session.handle_line("normal"),
    ];
    assert!(prompts[0].contains("Q2/5"));
    assert!(prompts[1].contains("Q3/5"));
    assert!(prompts[2].contains("Q4/5"));
    assert!(prompts[3].contains("Q5/5"));

    // stress 9 is the only penalty: health becomes 3.
    let done = session.handle_line("light jog");
    assert!(done.contains("Health risk set to **3/10**"));
    assert_eq!(session.risk().get(Category::Health), 3);
    assert!(!session.checkup_running());

    // 3*.25 + 4*.15 = 1.35 -> 14 -> Low
    assert!(done.contains("**14/100**"));
    assert!(done.contains("Low ✅"));
}

#[test]
fn greeting_and_fallback_replies() {
    let mut session = session();
    let greeting = session.handle_line("hello");
    assert!(greeting.contains("daily risks"));

    let fallback = session.handle_line("what's the weather?");
    assert!(fallback.contains("Type `help`"));
}

#[test]
fn transcript_records_both_sides_in_order() {
    let mut session = session();
    session.handle_line("hi");
    session.handle_line("score");

    let roles: Vec<_> = session
        .transcript()
        .iter()
        .map(|m| format!("{:?}", m.role))
        .collect();
    assert_eq!(
        roles,
        ["Assistant", "User", "Assistant", "User", "Assistant"]
    );
    assert_eq!(session.transcript()[1].content, "hi");
}
