use class2ff::engine::progress::{Progress, ProgressCallback};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, info};

/// Turns workflow progress events into log lines with per-phase timings.
pub struct CliProgressHandler {
    current: Mutex<Option<(&'static str, Instant)>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn handle(&self, progress: Progress) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        match progress {
            Progress::PhaseStart { name } => {
                info!("{}...", name);
                *current = Some((name, Instant::now()));
            }
            Progress::PhaseFinish => {
                if let Some((name, started)) = current.take() {
                    info!(elapsed_ms = started.elapsed().as_millis() as u64, "{} done.", name);
                }
            }
            Progress::Message(msg) => debug!("{}", msg),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'_> {
        Box::new(move |progress: Progress| self.handle(progress))
    }
}
