//! Job market service orchestration
//!
//! Coordinates the data source, analytics core and cache behind a single
//! [`JobService`] object. Services are constructed explicitly from
//! [`AppConfig`] at process start and injected into whatever front end is in
//! use (HTTP handlers, CLI); there are no global singletons.

mod config;
mod job_service;

pub use config::AppConfig;
pub use job_service::{JobService, TRENDS_CACHE_KEY};
