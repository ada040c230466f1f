//! Search input debouncing.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

enum Input {
    Text(String),
    Submit(String),
}

/// Coalesces bursts of search input into one emission.
///
/// Each [`push`](Debouncer::push) restarts the quiet interval; when it
/// elapses the latest text is emitted and earlier texts of the burst are
/// dropped. [`submit`](Debouncer::submit) emits immediately and discards
/// anything pending. Requires a running tokio runtime.
pub struct Debouncer {
    input: mpsc::UnboundedSender<Input>,
    task: JoinHandle<()>,
    quiet: Duration,
}

impl Debouncer {
    /// Spawn the debouncer. Emitted texts arrive on the returned receiver.
    pub fn spawn(quiet: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run(quiet, input_rx, output_tx));

        (
            Self {
                input: input_tx,
                task,
                quiet,
            },
            output_rx,
        )
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Record a keystroke's worth of input. Returns `false` once the
    /// debouncer has stopped.
    pub fn push(&self, text: impl Into<String>) -> bool {
        self.input.send(Input::Text(text.into())).is_ok()
    }

    /// Emit `text` now (Enter key), cancelling any pending input.
    pub fn submit(&self, text: impl Into<String>) -> bool {
        self.input.send(Input::Submit(text.into())).is_ok()
    }

    /// Stop accepting input, emit whatever is pending and wait for the
    /// task to finish.
    pub async fn close(self) {
        drop(self.input);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "debounce task ended abnormally");
        }
    }
}

async fn run(
    quiet: Duration,
    mut input: mpsc::UnboundedReceiver<Input>,
    output: mpsc::UnboundedSender<String>,
) {
    let mut pending: Option<String> = None;
    let timer = sleep(quiet);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            message = input.recv() => match message {
                Some(Input::Text(text)) => {
                    pending = Some(text);
                    timer.as_mut().reset(Instant::now() + quiet);
                }
                Some(Input::Submit(text)) => {
                    pending = None;
                    if output.send(text).is_err() {
                        break;
                    }
                }
                None => {
                    if let Some(text) = pending.take() {
                        let _ = output.send(text);
                    }
                    break;
                }
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(text) = pending.take() {
                    tracing::trace!(%text, "debounced search emitted");
                    if output.send(text).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_latest_once() {
        let (debouncer, mut rx) = Debouncer::spawn(QUIET);
        let started = Instant::now();

        for text in ["p", "pc", "pc2"] {
            assert!(debouncer.push(text));
            sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(rx.recv().await.as_deref(), Some("pc2"));
        assert!(started.elapsed() >= Duration::from_millis(500));

        let nothing = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(nothing.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_emit_separately() {
        let (debouncer, mut rx) = Debouncer::spawn(QUIET);

        debouncer.push("komatsu");
        sleep(Duration::from_millis(400)).await;
        debouncer.push("hitachi");

        assert_eq!(rx.recv().await.as_deref(), Some("komatsu"));
        assert_eq!(rx.recv().await.as_deref(), Some("hitachi"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_bypasses_and_cancels_pending() {
        let (debouncer, mut rx) = Debouncer::spawn(QUIET);
        let started = Instant::now();

        debouncer.push("pc");
        debouncer.submit("pc200");

        assert_eq!(rx.recv().await.as_deref(), Some("pc200"));
        assert!(started.elapsed() < QUIET);

        let nothing = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(nothing.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_flushes_pending() {
        let (debouncer, mut rx) = Debouncer::spawn(QUIET);
        debouncer.push("zx200");
        debouncer.close().await;

        assert_eq!(rx.recv().await.as_deref(), Some("zx200"));
        assert_eq!(rx.recv().await, None);
    }
}
