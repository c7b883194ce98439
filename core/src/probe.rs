//! The contract every scan mode implements to plug into the engine.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{Ctx, Job};

/// A protocol-specific check run against one [`Job`].
///
/// There is no return value. A probe signals a positive result through
/// [`Ctx::scan_success`] (and usually [`Ctx::log`]) and simply returns on
/// failure; failures never surface to the operator.
///
/// Any `Fn(Arc<Ctx>, Job) -> impl Future<Output = ()>` is a probe as well:
///
/// ```
/// use std::sync::Arc;
/// use bugscan_core::{Ctx, Job, QueueScanner};
///
/// let scanner = QueueScanner::new(4, |ctx: Arc<Ctx>, job: Job| async move {
///     ctx.log(job.name());
/// });
/// ```
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, ctx: Arc<Ctx>, job: Job);
}

#[async_trait]
impl<F, Fut> Probe for F
where
    F: Fn(Arc<Ctx>, Job) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send,
{
    async fn probe(&self, ctx: Arc<Ctx>, job: Job) {
        (self)(ctx, job).await
    }
}
