use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// One unit of scan work.
///
/// `name` is what progress and result lines show. The payload is opaque to
/// the engine; only the probe that the job was built for knows its type and
/// reads it back with [`Job::payload`].
pub struct Job {
    name: String,
    payload: Box<dyn Any + Send + Sync>,
}

impl Job {
    pub fn new<T>(name: impl Into<String>, payload: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            name: name.into(),
            payload: Box::new(payload),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload if it is a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Shared FIFO the workers drain.
#[derive(Debug, Default)]
pub(crate) struct JobQueue {
    jobs: Mutex<VecDeque<Job>>,
}

impl JobQueue {
    pub(crate) fn new(jobs: VecDeque<Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
        }
    }

    pub(crate) fn pop(&self) -> Option<Job> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}
