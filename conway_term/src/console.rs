// console.rs - Output sink shared by the command loop and the auto-stepper

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Cloneable handle to the display. Each `emit` writes and flushes one whole
/// chunk under the lock, so frames from the two sides never interleave.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<Box<dyn AsyncWrite + Send + Unpin>>>,
}

impl Console {
    pub fn new(out: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(out))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }

    pub async fn emit(&self, text: &str) {
        let mut out = self.out.lock().await;
        let written = match out.write_all(text.as_bytes()).await {
            Ok(()) => out.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write to display");
        }
    }
}
