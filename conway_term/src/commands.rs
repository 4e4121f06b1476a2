// commands.rs - Single-character command dispatch and the foreground loop

use std::io::ErrorKind;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::console::Console;
use crate::grid::SharedEngine;
use crate::patterns;
use crate::render;
use crate::script::{self, Script};
use crate::stepper::AutoStepper;

/// Pause after a failed read before trying the input again.
const READ_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Where a command character came from. Run mode reads its stop line
/// differently for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Foreground side of the program: owns the interactive input and mutates
/// the shared engine one command at a time.
pub struct Session<R> {
    engine: SharedEngine,
    console: Console,
    input: R,
}

impl<R> Session<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(engine: SharedEngine, console: Console, input: R) -> Self {
        Self { engine, console, input }
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Reads and dispatches one byte at a time until `q` or end of input.
    pub async fn interact(&mut self) {
        loop {
            let byte = match self.input.read_u8().await {
                Ok(byte) => byte,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    tracing::debug!("input closed");
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    tokio::time::sleep(READ_RETRY_DELAY).await;
                    continue;
                }
            };

            if self.dispatch(byte as char, Origin::Interactive).await == Flow::Quit {
                return;
            }
        }
    }

    pub async fn dispatch(&mut self, c: char, origin: Origin) -> Flow {
        match c {
            ' ' | '\n' => {}
            'w' => self.engine.lock().await.move_cursor(-1, 0),
            'a' => self.engine.lock().await.move_cursor(0, -1),
            's' => self.engine.lock().await.move_cursor(1, 0),
            'd' => self.engine.lock().await.move_cursor(0, 1),
            'x' => self.engine.lock().await.toggle_at_cursor(),
            'f' => self.engine.lock().await.step(),
            'v' => self.engine.lock().await.toggle_cursor_visibility(),
            'c' => self.engine.lock().await.clear(),
            'i' => self.engine.lock().await.resize(-1, 0),
            'k' => self.engine.lock().await.resize(1, 0),
            'j' => self.engine.lock().await.resize(0, -1),
            'l' => self.engine.lock().await.resize(0, 1),
            '.' => {
                self.engine.lock().await.speed_up();
            }
            ',' => {
                self.engine.lock().await.slow_down();
            }
            'r' => self.run(origin).await,
            'h' => self.help().await,
            'z' => {
                let info = render::debug_info(&*self.engine.lock().await);
                self.console.emit(&info).await;
            }
            '\r' => self.show().await,
            'q' => return Flow::Quit,
            other => {
                let message = format!("Unrecognized character: {} #{}\n", other, other as u32);
                self.console.emit(&message).await;
            }
        }
        Flow::Continue
    }

    /// Dispatches every character of a command script, skipping comments.
    pub async fn run_commands(&mut self, lines: &[String]) -> Flow {
        for line in lines {
            for c in script::command_chars(line) {
                if self.dispatch(c, Origin::Script).await == Flow::Quit {
                    return Flow::Quit;
                }
            }
        }
        Flow::Continue
    }

    pub async fn apply_script(&mut self, script: Script) -> Flow {
        match script {
            Script::Commands(lines) => self.run_commands(&lines).await,
            board => {
                if let Err(e) = board.apply_board(&mut *self.engine.lock().await) {
                    tracing::warn!(error = %e, "board script not applied");
                }
                Flow::Continue
            }
        }
    }

    /// Stamps a named pattern at the cursor. Unknown names are logged.
    pub async fn stamp_pattern(&mut self, name: &str) {
        let Some(pattern) = patterns::find(name) else {
            let known: Vec<_> = patterns::names().collect();
            tracing::warn!(name, known = ?known, "unknown pattern");
            return;
        };
        let mut engine = self.engine.lock().await;
        let cursor = engine.cursor();
        engine.stamp(pattern, cursor.row, cursor.column);
    }

    pub async fn show(&self) {
        let frame = render::frame(&*self.engine.lock().await);
        self.console.emit(&frame).await;
    }

    pub async fn help(&self) {
        self.console.emit(&render::help_text()).await;
    }

    /// Runs the auto-stepper until a stop line arrives on the input.
    async fn run(&mut self, origin: Origin) {
        let stepper = AutoStepper::start(self.engine.clone(), self.console.clone());

        // Typed input still holds the rest of the line that carried the `r`
        let open = origin == Origin::Script || self.read_stop_line().await;
        if open {
            self.read_stop_line().await;
        }

        stepper.stop().await;
    }

    /// Waits for one line of input. Returns false once the input is closed.
    async fn read_stop_line(&mut self) -> bool {
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line).await {
            Ok(0) => false,
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stop signal");
                true
            }
        }
    }
}
