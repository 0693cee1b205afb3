//! Interactive terminal shell for the riskcheck agent.
//!
//! Owns session lifetime and rendering: reads one line at a time, feeds
//! it to the session, and prints the markdown reply. Exit with `quit`,
//! `exit`, or Ctrl-D.

use clap::Parser;
use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use riskcheck::agent::Session;
use riskcheck::config::Config;
use riskcheck::error::ShellError;

#[derive(Debug, clap::Parser)]
#[command(name = "riskcheck", version, about = "Chat-style daily life risk tracker")]
struct Cli {
    /// Print replies as plain text instead of rendered markdown.
    #[arg(long)]
    plain: bool,

    /// Write the transcript as JSON to this file on exit.
    #[arg(long, value_name = "PATH")]
    transcript: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("riskcheck=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env()?;
    let mut session = Session::new(config);
    let skin = termimad::MadSkin::default();

    // The session seeds its transcript with a welcome message; show it.
    if let Some(welcome) = session.transcript().last() {
        print_reply(&skin, &welcome.content, cli.plain);
    }

    let mut editor = rustyline::DefaultEditor::new().map_err(ShellError::from)?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = editor.add_history_entry(line);
                let reply = session.handle_line(line);
                print_reply(&skin, &reply, cli.plain);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(ShellError::from(e).into()),
        }
    }

    if let Some(path) = cli.transcript {
        let json = serde_json::to_string_pretty(session.transcript())?;
        std::fs::write(&path, json).map_err(ShellError::from)?;
        tracing::info!(path = %path.display(), "transcript written");
    }

    Ok(())
}

fn print_reply(skin: &termimad::MadSkin, text: &str, plain: bool) {
    if plain {
        println!("{text}\n");
    } else {
        println!("{}", skin.term_text(text));
    }
}
