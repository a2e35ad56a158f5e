//! Async worker - owns one self-perpetuating poll loop per domain

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::Message;
use crate::domain::{Domain, FetchFailure, Snapshot};
use crate::infrastructure::collector::Collector;
use crate::infrastructure::runtime::bridge::RuntimeCommand;

/// Run the worker until `Shutdown` arrives or the bridge is dropped
pub async fn run_poll_worker(
    collector: Arc<dyn Collector>,
    period: Duration,
    mut cmd_rx: UnboundedReceiver<RuntimeCommand>,
    events: Sender<Message>,
) {
    let mut loops: HashMap<Domain, JoinHandle<()>> = HashMap::new();

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            RuntimeCommand::Shutdown => break,

            RuntimeCommand::StartPolling { domain } => {
                if loops.contains_key(&domain) {
                    debug!(%domain, "poll loop already running");
                    continue;
                }
                info!(%domain, period_ms = period.as_millis() as u64, "starting poll loop");
                let task = tokio::spawn(poll_domain(
                    domain,
                    Arc::clone(&collector),
                    period,
                    events.clone(),
                ));
                loops.insert(domain, task);
            }
        }
    }

    for task in loops.into_values() {
        task.abort();
    }
    info!("poll worker stopped");
}

/// Wait a period, fetch, report; forever. Failures are reported like any
/// other reading and never end the loop.
async fn poll_domain(
    domain: Domain,
    collector: Arc<dyn Collector>,
    period: Duration,
    events: Sender<Message>,
) {
    loop {
        tokio::time::sleep(period).await;

        let snapshot = fetch(domain, Arc::clone(&collector)).await;
        if let Snapshot::Failure(failure) = &snapshot {
            warn!(%domain, error = %failure.message, "fetch failed");
        }
        if events.send(snapshot.into()).is_err() {
            debug!(%domain, "event loop gone, poll loop exiting");
            return;
        }
    }
}

/// Run the blocking collector call off the async threads
async fn fetch(domain: Domain, collector: Arc<dyn Collector>) -> Snapshot {
    tokio::task::spawn_blocking(move || collector.collect(domain))
        .await
        .unwrap_or_else(|err| {
            Snapshot::Failure(FetchFailure {
                domain,
                message: format!("collector task failed: {err}"),
            })
        })
}
