//! Static fallback dataset
//!
//! Used whenever the live feed is unreachable or returns an unusable body.
//! Figures are annual salaries in INR from a fixed survey snapshot.

use crate::model::{FeedMetadata, JobFeed, JobRecord};

const SURVEY_PERIOD: &str = "2024-2025";

/// Build the static fallback feed
///
/// Always non-empty; every record carries category and salary, so downstream
/// validation never trips on fallback data.
pub fn fallback_feed() -> JobFeed {
    let jobs = vec![
        JobRecord::new("Engineering", 1_250_000.0)
            .with_location("Bangalore")
            .with_experience("Mid"),
        JobRecord::new("Engineering", 2_100_000.0)
            .with_location("Bangalore")
            .with_experience("Senior"),
        JobRecord::new("Engineering", 700_000.0)
            .with_location("Pune")
            .with_experience("Entry"),
        JobRecord::new("Data Science", 1_500_000.0)
            .with_location("Hyderabad")
            .with_experience("Mid"),
        JobRecord::new("Data Science", 2_400_000.0)
            .with_location("Bangalore")
            .with_experience("Senior"),
        JobRecord::new("Data Science", 850_000.0)
            .with_location("Chennai")
            .with_experience("Entry"),
        JobRecord::new("Marketing", 800_000.0)
            .with_location("Mumbai")
            .with_experience("Mid"),
        JobRecord::new("Marketing", 1_400_000.0)
            .with_location("Delhi")
            .with_experience("Senior"),
        JobRecord::new("Sales", 650_000.0)
            .with_location("Delhi")
            .with_experience("Entry"),
        JobRecord::new("Sales", 1_100_000.0)
            .with_location("Mumbai")
            .with_experience("Mid"),
        JobRecord::new("Product", 1_800_000.0)
            .with_location("Bangalore")
            .with_experience("Mid"),
        JobRecord::new("Product", 2_800_000.0)
            .with_location("Bangalore")
            .with_experience("Senior"),
        JobRecord::new("Design", 900_000.0)
            .with_location("Pune")
            .with_experience("Mid"),
        JobRecord::new("Design", 550_000.0)
            .with_location("Chennai")
            .with_experience("Entry"),
        JobRecord::new("Human Resources", 600_000.0)
            .with_location("Mumbai")
            .with_experience("Mid"),
        JobRecord::new("Finance", 1_300_000.0)
            .with_location("Mumbai")
            .with_experience("Senior"),
    ];

    JobFeed {
        jobs,
        metadata: FeedMetadata {
            region: "India".to_string(),
            currency: "INR".to_string(),
            salary_survey_period: Some(SURVEY_PERIOD.to_string()),
            source: "static_fallback".to_string(),
        },
    }
}
