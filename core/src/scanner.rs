//! # Queue Scanner
//!
//! Runs a fixed number of workers over a FIFO of [`Job`]s. Every worker pulls
//! the next job, hands it to the configured [`Probe`] and waits for it before
//! pulling again, so at most `threads` probes are ever in flight.
//!
//! Each probe runs in its own task. A probe that panics only loses its own
//! job; the worker logs it and moves on.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bugscan_common::{error, warn};
use tokio::task::JoinSet;

use crate::console::{Console, PlainConsole};
use crate::ctx::Ctx;
use crate::job::{Job, JobQueue};
use crate::probe::Probe;
use crate::sink::OutputSink;

mod worker;

use worker::WorkerTally;

/// What a finished run looked like.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Jobs handed to the probe. Always equal to the number of jobs added.
    pub attempted: usize,
    /// Jobs whose probe panicked or was cancelled.
    pub faulted: usize,
    /// Successful rows in completion order.
    pub successes: Vec<String>,
    pub elapsed: Duration,
}

pub struct QueueScanner {
    threads: usize,
    probe: Arc<dyn Probe>,
    queue: VecDeque<Job>,
    output: Option<PathBuf>,
    console: Box<dyn Console>,
}

impl QueueScanner {
    /// Creates a scanner running `threads` workers. Zero is raised to one.
    pub fn new<P>(threads: usize, probe: P) -> Self
    where
        P: Probe + 'static,
    {
        let threads: usize = if threads == 0 {
            warn!("Thread count must be at least 1, using 1");
            1
        } else {
            threads
        };

        Self {
            threads,
            probe: Arc::new(probe),
            queue: VecDeque::new(),
            output: None,
            console: Box::new(PlainConsole),
        }
    }

    /// Replaces the default stdout console.
    pub fn with_console<C>(mut self, console: C) -> Self
    where
        C: Console + 'static,
    {
        self.console = Box::new(console);
        self
    }

    pub fn add(&mut self, job: Job) {
        self.queue.push_back(job);
    }

    /// Persists successes to `path`. An empty path disables persistence.
    pub fn set_output_file(&mut self, path: impl Into<PathBuf>) {
        let path: PathBuf = path.into();
        self.output = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drains the queue and returns once every job has been attempted exactly once.
    ///
    /// The output file, if any, is complete and closed when this returns.
    pub async fn start(self) -> ScanSummary {
        let started: Instant = Instant::now();

        let sink: Option<OutputSink> = self.output.as_ref().and_then(|path| {
            OutputSink::open(path)
                .inspect_err(|e| warn!("{e}; results will only be shown on screen"))
                .ok()
        });

        let ctx: Arc<Ctx> = Arc::new(Ctx::new(self.console, sink));
        let workers: usize = self.threads.min(self.queue.len()).max(1);
        let queue: Arc<JobQueue> = Arc::new(JobQueue::new(self.queue));

        let mut pool: JoinSet<WorkerTally> = JoinSet::new();
        for _ in 0..workers {
            pool.spawn(worker::run(queue.clone(), self.probe.clone(), ctx.clone()));
        }

        let mut tally: WorkerTally = WorkerTally::default();
        while let Some(res) = pool.join_next().await {
            match res {
                Ok(worker_tally) => tally.merge(worker_tally),
                Err(e) => error!("Worker stopped unexpectedly: {e}"),
            }
        }

        ScanSummary {
            attempted: tally.attempted,
            faulted: tally.faulted,
            successes: ctx.finish(),
            elapsed: started.elapsed(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
