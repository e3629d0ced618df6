use crate::core::validator::RecordValidator;
use crate::core::{ConfigProvider, CreateUserApi, LogSink, Record, Result, SubmissionOutcome};
use std::path::Path;

const NO_EMAIL: &str = "no-email-provided";

/// Drives the per-row pipeline: read row, validate required fields, submit
/// to the API, journal the disposition. Strictly sequential; one terminal
/// journal entry per processed row, in file order.
pub struct BatchRunner<A, C, L> {
    api: A,
    config: C,
    sink: L,
    validator: RecordValidator,
}

impl<A, C, L> BatchRunner<A, C, L>
where
    A: CreateUserApi,
    C: ConfigProvider,
    L: LogSink,
{
    pub fn new(api: A, config: C, sink: L) -> Self {
        let validator = RecordValidator::new(config.required_fields());
        Self {
            api,
            config,
            sink,
            validator,
        }
    }

    /// Processes the configured input file once. All row-level problems are
    /// journal entries, not errors; a missing file or a mid-run parse
    /// failure is journaled once and ends the run without an `Err`.
    pub async fn run(&self) -> Result<()> {
        let input = self.config.input_path();
        if !Path::new(input).exists() {
            self.sink
                .error(&format!("Input file does not exist: {}", input));
            return Ok(());
        }

        tracing::info!("Processing {}", input);
        if let Err(e) = self.process_rows(input).await {
            self.sink.error(&format!("Unexpected error: {}", e));
        }
        Ok(())
    }

    async fn process_rows(&self, input: &str) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(input)?;
        let headers = reader.headers()?.clone();

        for (index, row) in reader.records().enumerate() {
            let row_num = index + 1;
            let row = row?;
            // Ragged rows are tolerated: a short row simply lacks its
            // trailing keys, which the validator then reports as missing.
            let record = Record::from_pairs(
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            );

            if !self.validator.is_valid(&record, row_num, &self.sink) {
                continue;
            }

            let email = record.get("email").unwrap_or(NO_EMAIL);
            match self.api.create_user(&record).await {
                SubmissionOutcome::Created => self.sink.info(&format!(
                    "Successfully created user {} (row {})",
                    email, row_num
                )),
                SubmissionOutcome::RejectedByServer(status) => self.sink.error(&format!(
                    "Failed to create user {} (row {}): server returned {}",
                    email, row_num, status
                )),
                SubmissionOutcome::TransportFailed(cause) => self.sink.error(&format!(
                    "API call failed for row {} ({}): {}",
                    row_num, email, cause
                )),
            }
        }

        Ok(())
    }
}
