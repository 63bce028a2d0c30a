//! Job source port
//!
//! The trait seam orchestration consumes. Implementations must recover from
//! upstream failures themselves; `fetch` cannot fail.

use async_trait::async_trait;

use crate::model::JobFeed;

/// Trait for collaborators that can produce a batch of job records
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Source name, for logs
    fn name(&self) -> &str;

    /// Fetch the current feed
    ///
    /// Never fails: implementations fall back to static data rather than
    /// propagate upstream errors past this boundary.
    async fn fetch(&self) -> JobFeed;
}
