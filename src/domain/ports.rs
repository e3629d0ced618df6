use crate::domain::model::{LogLevel, Record, SubmissionOutcome};
use async_trait::async_trait;

/// Destination for the durable run journal. Passed explicitly into each
/// component so tests can capture entries without reading a shared file.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Remote user-creation service. One call per record, no retries; transport
/// problems come back as a `SubmissionOutcome` variant, never a panic.
#[async_trait]
pub trait CreateUserApi: Send + Sync {
    async fn create_user(&self, record: &Record) -> SubmissionOutcome;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn log_path(&self) -> &str;
    fn required_fields(&self) -> &[String];
    fn timeout_secs(&self) -> u64;
}
