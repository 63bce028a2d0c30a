//! HTTP job feed repository
//!
//! Fetches job market data from a configured endpoint. A single attempt is
//! made per call; on network failure, a non-2xx status, or an unusable body
//! the repository returns the static fallback feed instead of erroring.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::Deserialize;

use crate::model::{FeedMetadata, JobFeed, JobRecord};

/// Accepted upstream payload shapes
///
/// The feed is either a bare JSON array of records or a wrapped
/// `{jobs: [...], metadata: {...}}` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedPayload {
    Wrapped {
        jobs: Vec<JobRecord>,
        #[serde(default)]
        metadata: FeedMetadata,
    },
    List(Vec<JobRecord>),
}

/// Job market data repository
#[derive(Debug)]
pub struct JobRepository {
    api_url: String,
    timeout: Duration,
    fetch_count: AtomicUsize,
}

impl JobRepository {
    /// Create a repository for the given endpoint
    pub fn new(api_url: &str, timeout: Duration) -> Self {
        Self {
            api_url: api_url.to_string(),
            timeout,
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Endpoint this repository reads from
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Number of fetch attempts made so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// Parse an upstream body into a feed
    ///
    /// Returns `None` when the body is unusable: not JSON, neither accepted
    /// shape, or an empty record list. Callers fall back in that case.
    fn parse_payload(body: &str) -> Option<JobFeed> {
        let feed = match serde_json::from_str::<FeedPayload>(body).ok()? {
            FeedPayload::Wrapped { jobs, metadata } => JobFeed { jobs, metadata },
            FeedPayload::List(jobs) => JobFeed::from_jobs(jobs),
        };

        if feed.jobs.is_empty() {
            return None;
        }
        Some(feed)
    }

    /// Attempt a live fetch
    ///
    /// `None` covers every failure mode: client build, transport, status,
    /// body read, parse.
    #[cfg(feature = "fetch")]
    async fn fetch_live(&self) -> Option<JobFeed> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .ok()?;

        let response = client.get(&self.api_url).send().await.ok()?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), url = %self.api_url, "job feed returned non-success status");
            return None;
        }

        let body = response.text().await.ok()?;
        Self::parse_payload(&body)
    }
}

#[cfg(feature = "fetch")]
#[async_trait::async_trait]
impl crate::source::JobSource for JobRepository {
    fn name(&self) -> &str {
        "job-feed-http"
    }

    async fn fetch(&self) -> JobFeed {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);

        match self.fetch_live().await {
            Some(feed) => {
                tracing::debug!(jobs = feed.jobs.len(), "fetched live job feed");
                feed
            }
            None => {
                tracing::warn!(url = %self.api_url, "job feed unavailable, serving static fallback");
                crate::fallback::fallback_feed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_list() {
        let body = r#"[
            {"category": "Engineering", "salary": 100000},
            {"category": "Marketing", "salary": 80000, "location": "Mumbai"}
        ]"#;

        let feed = JobRepository::parse_payload(body).unwrap();
        assert_eq!(feed.jobs.len(), 2);
        assert_eq!(feed.jobs[1].location.as_deref(), Some("Mumbai"));
        // Bare lists get live-feed defaults
        assert_eq!(feed.metadata.source, "live");
    }

    #[test]
    fn test_parse_wrapped_feed() {
        let body = r#"{
            "jobs": [{"category": "Sales", "salary": 65000}],
            "metadata": {"region": "India", "currency": "INR"}
        }"#;

        let feed = JobRepository::parse_payload(body).unwrap();
        assert_eq!(feed.jobs.len(), 1);
        assert_eq!(feed.metadata.region, "India");
        assert_eq!(feed.metadata.currency, "INR");
    }

    #[test]
    fn test_parse_wrapped_feed_without_metadata() {
        let body = r#"{"jobs": [{"category": "Design", "salary": 70000}]}"#;
        let feed = JobRepository::parse_payload(body).unwrap();
        assert_eq!(feed.metadata.region, "Global");
    }

    #[test]
    fn test_parse_rejects_garbled_body() {
        assert!(JobRepository::parse_payload("not json").is_none());
        assert!(JobRepository::parse_payload(r#"{"unexpected": true}"#).is_none());
        assert!(JobRepository::parse_payload(r#"[{"category": "X"}]"#).is_none());
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(JobRepository::parse_payload("[]").is_none());
        assert!(JobRepository::parse_payload(r#"{"jobs": []}"#).is_none());
    }

    #[cfg(feature = "fetch")]
    mod fetch {
        use super::*;
        use crate::source::JobSource;

        #[tokio::test]
        async fn test_fetch_falls_back_when_unreachable() {
            // Nothing listens on this port; the request fails fast
            let repo = JobRepository::new("http://127.0.0.1:9/job-data", Duration::from_millis(500));

            let feed = repo.fetch().await;

            assert!(!feed.jobs.is_empty());
            assert_eq!(feed.metadata.source, "static_fallback");
            assert_eq!(feed.metadata.region, "India");
        }

        #[tokio::test]
        async fn test_fetch_count_increments() {
            let repo = JobRepository::new("http://127.0.0.1:9/job-data", Duration::from_millis(500));
            assert_eq!(repo.fetch_count(), 0);

            repo.fetch().await;
            repo.fetch().await;

            assert_eq!(repo.fetch_count(), 2);
        }
    }
}
