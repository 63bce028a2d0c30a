//! Job market data models

use serde::{Deserialize, Serialize};

/// A single job posting observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job category (e.g. "Engineering", "Marketing")
    pub category: String,
    /// Annual salary in the feed's currency
    pub salary: f64,
    /// Posting location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Experience level (e.g. "Entry", "Mid", "Senior")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl JobRecord {
    /// Create a record with only the required fields
    pub fn new(category: &str, salary: f64) -> Self {
        Self {
            category: category.to_string(),
            salary,
            location: None,
            experience: None,
        }
    }

    /// Attach a location
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Attach an experience level
    pub fn with_experience(mut self, experience: &str) -> Self {
        self.experience = Some(experience.to_string());
        self
    }
}

/// Provenance attached to a batch of job records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    /// Geographic region the salaries refer to
    pub region: String,
    /// Currency code for the salary figures
    pub currency: String,
    /// Survey period label, when the feed provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_survey_period: Option<String>,
    /// Where the records came from ("live" or "static_fallback")
    pub source: String,
}

impl Default for FeedMetadata {
    fn default() -> Self {
        Self {
            region: "Global".to_string(),
            currency: "USD".to_string(),
            salary_survey_period: None,
            source: "live".to_string(),
        }
    }
}

/// A batch of job records plus provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFeed {
    /// The records themselves
    pub jobs: Vec<JobRecord>,
    /// Feed provenance
    pub metadata: FeedMetadata,
}

impl JobFeed {
    /// Wrap a bare list of records with default (live) metadata
    pub fn from_jobs(jobs: Vec<JobRecord>) -> Self {
        Self {
            jobs,
            metadata: FeedMetadata::default(),
        }
    }
}
