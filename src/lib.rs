pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileLogSink, MemorySink};
pub use config::ImportConfig;
pub use core::{runner::BatchRunner, submitter::HttpUserApi, validator::RecordValidator};
pub use domain::model::{Record, SubmissionOutcome};
pub use utils::error::{ImportError, Result};
