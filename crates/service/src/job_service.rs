//! Job service orchestration
//!
//! The fetch → validate → compute → cache → respond pipeline behind every
//! front-end operation.

use std::collections::BTreeMap;

use analytics::forecast::{Forecast, Forecaster, PredictionRequest};
use analytics::stats::{analyze_trends, summarize, CategoryStats, MarketStatistics};
use analytics::Result;
use cache::TtlCache;
use jobdata::{JobRepository, JobSource};

use crate::config::AppConfig;

/// Fixed key the computed trends live under
pub const TRENDS_CACHE_KEY: &str = "job_trends";

/// Orchestrates the data source, analytics core and cache
pub struct JobService<S> {
    source: S,
    forecaster: Forecaster,
    trends_cache: TtlCache<BTreeMap<String, CategoryStats>>,
}

impl JobService<JobRepository> {
    /// Wire a service from configuration, with the HTTP repository as source
    pub fn from_config(config: &AppConfig) -> Self {
        let source = JobRepository::new(&config.job_data_api_url, config.api_timeout);
        let forecaster = Forecaster::new(config.model_type)
            .with_polynomial_degree(config.polynomial_degree);
        let trends_cache = if config.cache_enabled {
            TtlCache::new(config.cache_ttl)
        } else {
            TtlCache::disabled()
        };

        tracing::info!(
            source = source.api_url(),
            model = %config.model_type,
            cache_enabled = config.cache_enabled,
            "job service initialized"
        );

        Self::new(source, forecaster, trends_cache)
    }
}

impl<S: JobSource> JobService<S> {
    /// Assemble a service from explicit collaborators
    pub fn new(
        source: S,
        forecaster: Forecaster,
        trends_cache: TtlCache<BTreeMap<String, CategoryStats>>,
    ) -> Self {
        Self {
            source,
            forecaster,
            trends_cache,
        }
    }

    /// The injected data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Per-category salary statistics, cached under [`TRENDS_CACHE_KEY`]
    ///
    /// Within a TTL window repeated calls return the cached aggregate
    /// without re-invoking the data source.
    pub async fn get_job_trends(&self) -> Result<BTreeMap<String, CategoryStats>> {
        if let Some(cached) = self.trends_cache.get(TRENDS_CACHE_KEY) {
            return Ok(cached);
        }

        let feed = self.source.fetch().await;
        let trends = analyze_trends(&feed.jobs)?;
        self.trends_cache.set(TRENDS_CACHE_KEY, trends.clone());

        tracing::debug!(categories = trends.len(), "computed job trends");
        Ok(trends)
    }

    /// Forecast future salaries; bypasses the cache entirely
    pub fn predict_job_trends(&self, request: &PredictionRequest) -> Result<Forecast> {
        self.forecaster.forecast(request)
    }

    /// Market-wide aggregate; fetched fresh on every call
    pub async fn get_statistics(&self) -> Result<MarketStatistics> {
        let feed = self.source.fetch().await;
        summarize(&feed.jobs)
    }

    /// Drop every cached aggregate
    pub fn clear_cache(&self) {
        self.trends_cache.clear();
    }
}
