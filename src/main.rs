//! The Dragon's Quest - Entry Point
//!
//! Sets up logging, loads the rules, and runs one interactive session
//! on stdin/stdout.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use dragons_quest::data::DEFAULT_RULES_PATH;
use dragons_quest::{GameRules, LineConsole, Session};

fn main() -> Result<()> {
    // Log to a file so log lines never mix with the game text
    let log_target: Box<dyn Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("dragons_quest.log")
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(log_target))
    .init();

    log::info!("Starting The Dragon's Quest v{}", env!("CARGO_PKG_VERSION"));

    let rules = GameRules::load_or_default(Path::new(DEFAULT_RULES_PATH));

    let stdin = io::stdin();
    let console = LineConsole::new(stdin.lock(), io::stdout());
    let mut session = Session::new(console, rules);

    let result = session.run();
    if let Err(ref e) = result {
        log::error!("Session ended with error: {:#}", e);
        eprintln!("Error: {:#}", e);
    }

    log::info!("The Dragon's Quest shut down cleanly");
    result.map(|_| ())
}
