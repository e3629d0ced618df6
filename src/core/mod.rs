pub mod runner;
pub mod submitter;
pub mod validator;

pub use crate::domain::model::{LogEntry, LogLevel, Record, SubmissionOutcome};
pub use crate::domain::ports::{ConfigProvider, CreateUserApi, LogSink};
pub use crate::utils::error::Result;
