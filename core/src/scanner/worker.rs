use std::sync::Arc;

use bugscan_common::{error, warn};

use crate::ctx::Ctx;
use crate::job::JobQueue;
use crate::probe::Probe;

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct WorkerTally {
    pub attempted: usize,
    pub faulted: usize,
}

impl WorkerTally {
    pub fn merge(&mut self, other: WorkerTally) {
        self.attempted += other.attempted;
        self.faulted += other.faulted;
    }
}

/// Pulls jobs until the queue is empty, one probe at a time.
pub(super) async fn run(queue: Arc<JobQueue>, probe: Arc<dyn Probe>, ctx: Arc<Ctx>) -> WorkerTally {
    let mut tally: WorkerTally = WorkerTally::default();

    while let Some(job) = queue.pop() {
        let key: String = job.name().to_string();
        tally.attempted += 1;

        let task = tokio::spawn({
            let probe: Arc<dyn Probe> = probe.clone();
            let ctx: Arc<Ctx> = ctx.clone();
            async move { probe.probe(ctx, job).await }
        });

        if let Err(e) = task.await {
            tally.faulted += 1;
            if e.is_panic() {
                warn!("Probe for '{key}' panicked, skipping it");
            } else {
                error!("Probe for '{key}' was cancelled: {e}");
            }
        }

        ctx.clear_status(&key);
    }

    tally
}
