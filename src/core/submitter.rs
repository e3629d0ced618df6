use crate::core::{ConfigProvider, CreateUserApi, Record, Result, SubmissionOutcome};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Submits one record at a time to the remote user-creation endpoint.
/// Stateless across calls apart from the shared connection pool.
pub struct HttpUserApi {
    client: Client,
    endpoint: String,
}

impl HttpUserApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
        })
    }
}

#[async_trait]
impl CreateUserApi for HttpUserApi {
    async fn create_user(&self, record: &Record) -> SubmissionOutcome {
        tracing::debug!("POST {}", self.endpoint);

        match self.client.post(&self.endpoint).json(record).send().await {
            Ok(response) => {
                let status = response.status();
                tracing::debug!("API response status: {}", status);
                // Only 201 counts as a creation; a 200 or 204 is not one.
                if status == StatusCode::CREATED {
                    SubmissionOutcome::Created
                } else {
                    SubmissionOutcome::RejectedByServer(status.as_u16())
                }
            }
            Err(e) => SubmissionOutcome::TransportFailed(e.to_string()),
        }
    }
}
