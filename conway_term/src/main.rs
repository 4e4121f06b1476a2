// main.rs - Terminal Game of Life entry point

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use conway_term::commands::{Flow, Session};
use conway_term::config::{Cli, LaunchConfig};
use conway_term::console::Console;
use conway_term::script::Script;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = LaunchConfig::resolve(Cli::parse());
    let engine = config.build_engine().into_shared();
    let mut session = Session::new(engine, Console::stdout(), BufReader::new(tokio::io::stdin()));

    if let Some(path) = &config.script {
        match Script::load(path).await {
            Ok(script) => {
                if session.apply_script(script).await == Flow::Quit {
                    return Ok(());
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "script not applied"),
        }
    }

    if let Some(name) = &config.pattern {
        session.stamp_pattern(name).await;
    }

    if config.show_help {
        session.help().await;
    }
    session.show().await;

    session.interact().await;
    Ok(())
}
