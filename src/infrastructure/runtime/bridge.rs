//! Runtime bridge - connects the sync TUI thread with the async poll loops
//!
//! The TUI thread sends [`RuntimeCommand`]s; poll loops answer with
//! [`Message::Metric`] on the same channel that carries keyboard input, so the
//! event loop sees one ordered stream.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Builder;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::core::Message;
use crate::domain::Domain;
use crate::infrastructure::collector::Collector;
use crate::infrastructure::runtime::worker::run_poll_worker;

/// Fixed refresh period of every poll loop
pub const POLL_PERIOD: Duration = Duration::from_secs(1);

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeCommand {
    /// Start the domain's poll loop unless it is already running
    StartPolling { domain: Domain },
    /// Stop every loop and the worker
    Shutdown,
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: UnboundedSender<RuntimeCommand>,
}

impl RuntimeBridge {
    /// Spawn the worker thread with its own Tokio runtime
    pub fn new(collector: Arc<dyn Collector>, events: Sender<Message>) -> anyhow::Result<Self> {
        Self::with_period(collector, events, POLL_PERIOD)
    }

    pub(crate) fn with_period(
        collector: Arc<dyn Collector>,
        events: Sender<Message>,
        period: Duration,
    ) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<RuntimeCommand>();

        let runtime = Builder::new_multi_thread()
            .enable_time()
            .thread_name("tabtop-poll")
            .build()
            .context("failed to create Tokio runtime")?;

        thread::Builder::new()
            .name("tabtop-runtime".to_string())
            .spawn(move || {
                runtime.block_on(run_poll_worker(collector, period, cmd_rx, events));
                // In-flight collector calls are abandoned, not awaited.
                runtime.shutdown_background();
            })
            .context("failed to spawn runtime thread")?;

        Ok(Self { cmd_tx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
