// stepper.rs - Background task that keeps stepping and rendering the board

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::console::Console;
use crate::grid::SharedEngine;
use crate::render;

const HISTORY_LEN: usize = 10;

/// Handle to a running auto-stepper. Created by [`AutoStepper::start`] and
/// consumed by [`AutoStepper::stop`], so a caller holds at most one at a time.
pub struct AutoStepper {
    cancel: CancellationToken,
    handle: JoinHandle<u64>,
}

impl AutoStepper {
    pub fn start(engine: SharedEngine, console: Console) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(step_loop(engine, console, cancel.clone()));
        tracing::debug!("auto-stepper started");
        Self { cancel, handle }
    }

    /// Requests a stop and waits for the loop to finish its current
    /// iteration. Returns the number of generations the run produced.
    pub async fn stop(self) -> u64 {
        self.cancel.cancel();
        match self.handle.await {
            Ok(steps) => {
                tracing::debug!(steps, "auto-stepper stopped");
                steps
            }
            Err(e) => {
                tracing::warn!(error = %e, "auto-stepper task failed");
                0
            }
        }
    }
}

async fn step_loop(engine: SharedEngine, console: Console, cancel: CancellationToken) -> u64 {
    let mut steps = 0;
    let mut cycles = CycleWatch::default();

    while !cancel.is_cancelled() {
        let (frame, interval, fingerprint, generation) = {
            let mut engine = engine.lock().await;
            if cancel.is_cancelled() {
                break;
            }
            // Re-read every iteration so speed changes apply on the next cycle
            let interval = engine.interval();
            engine.step();
            (
                render::frame(&engine),
                interval,
                engine.fingerprint(),
                engine.generation(),
            )
        };
        steps += 1;

        if cycles.observe(fingerprint) {
            tracing::info!(generation, "board repeats a recent state");
        }

        console.emit(&format!("\n{frame}")).await;

        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(interval) => {}
        }
    }

    steps
}

/// Remembers the last few board fingerprints and reports the first time a
/// board repeats one of them.
#[derive(Default)]
struct CycleWatch {
    history: [u64; HISTORY_LEN],
    count: usize,
    reported: bool,
}

impl CycleWatch {
    fn observe(&mut self, fingerprint: u64) -> bool {
        let seen = self.history[..self.count.min(HISTORY_LEN)].contains(&fingerprint);
        self.history[self.count % HISTORY_LEN] = fingerprint;
        self.count += 1;

        if seen && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }
}
