// config.rs - Command-line parsing and launch configuration

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::grid::{DEFAULT_COLUMNS, DEFAULT_INTERVAL, DEFAULT_ROWS, GridEngine};

#[derive(Parser, Debug)]
#[command(name = "conway_term")]
#[command(about = "Conway's Game of Life on a wrap-around grid, in the terminal")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Do not print the help banner at startup
    #[arg(long)]
    pub nohelp: bool,

    /// Milliseconds between generations in run mode
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
    pub delay: u64,

    /// Seed the board with a named pattern at the cursor
    #[arg(long, value_name = "NAME")]
    pub pattern: Option<String>,

    /// A script file, then HEIGHT [WIDTH]; a lone number sets both
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub show_help: bool,
    pub script: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    pub interval: Duration,
    pub pattern: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            show_help: true,
            script: None,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            interval: DEFAULT_INTERVAL,
            pattern: None,
        }
    }
}

impl LaunchConfig {
    /// Every positional argument that opens as a file becomes the script
    /// (the last one wins); the rest are read as sizes.
    pub fn resolve(cli: Cli) -> Self {
        let mut config = LaunchConfig {
            show_help: !cli.nohelp,
            interval: Duration::from_millis(cli.delay.max(1)),
            pattern: cli.pattern,
            ..Default::default()
        };

        let mut sizes = Vec::new();
        for arg in cli.args {
            // Flags after the first positional arrive here unparsed
            if arg == "--nohelp" {
                config.show_help = false;
            } else if opens_as_file(Path::new(&arg)) {
                config.script = Some(PathBuf::from(arg));
            } else {
                sizes.push(arg);
            }
        }

        if let Some(height) = sizes.first().and_then(|arg| parse_size(arg)) {
            config.rows = height;
            config.columns = height;
        }
        if let Some(width) = sizes.get(1).and_then(|arg| parse_size(arg)) {
            config.columns = width;
        }
        if sizes.len() > 2 {
            tracing::debug!(ignored = ?&sizes[2..], "extra size arguments");
        }

        config
    }

    /// Engine of the configured size, or the default size when the
    /// configured one cannot be allocated.
    pub fn build_engine(&self) -> GridEngine {
        let mut engine = GridEngine::new(self.rows, self.columns).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using the default {DEFAULT_ROWS}x{DEFAULT_COLUMNS} grid");
            GridEngine::default()
        });
        engine.set_interval(self.interval);
        engine
    }
}

fn opens_as_file(path: &Path) -> bool {
    File::open(path)
        .and_then(|file| file.metadata())
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

fn parse_size(arg: &str) -> Option<usize> {
    match arg.trim().parse::<i64>() {
        Ok(size) if size < 1 => {
            tracing::warn!(size, "grid size below 1, using 1");
            Some(1)
        }
        Ok(size) => Some(size as usize),
        Err(_) => {
            tracing::debug!(arg, "ignoring non-numeric argument");
            None
        }
    }
}
