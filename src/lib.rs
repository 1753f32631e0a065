//! Export last week's download statistics of an App Annie app into a CSV file.
//!
//! The export resolves an account and an app by name prefix, downloads the
//! sales of the trailing seven days and writes a single row report. See
//! [`service::StatsLoader`] for the entry point.

pub mod config;
pub mod error;
pub mod model;
mod progress;
pub mod report;
pub mod service;
