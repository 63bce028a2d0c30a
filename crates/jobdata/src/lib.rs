//! Job market data access
//!
//! Provides the job record model, the [`JobSource`] port that orchestration
//! consumes, and an HTTP repository that falls back to a static dataset when
//! the upstream feed is unreachable or unusable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jobdata::{JobRepository, JobSource};
//!
//! # async fn demo() {
//! let repo = JobRepository::new("https://api.example.com/job-data", std::time::Duration::from_secs(30));
//! let feed = repo.fetch().await;
//! assert!(!feed.jobs.is_empty());
//! # }
//! ```

mod fallback;
mod model;
mod repository;
mod source;

pub use fallback::fallback_feed;
pub use model::{FeedMetadata, JobFeed, JobRecord};
pub use repository::JobRepository;
pub use source::JobSource;
