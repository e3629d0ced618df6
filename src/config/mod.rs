use crate::core::ConfigProvider;
use crate::utils::validation::{
    self, validate_non_empty_string, validate_path, validate_positive_number, validate_url,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-loader")]
#[command(about = "Bulk-create users from a CSV file via an HTTP API")]
pub struct ImportConfig {
    /// CSV file with a header row; one user per data row.
    #[arg(long, default_value = "users.csv")]
    pub input: String,

    // Default carried over from the production constant, hostname included.
    #[arg(long, default_value = "http://zlocalhost/api/create_user")]
    pub api_endpoint: String,

    /// Append-only run journal.
    #[arg(long, default_value = "error_log.txt")]
    pub log_file: String,

    /// Per-request timeout for the create-user call.
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Fields that must be present and non-blank for a row to be submitted.
    #[arg(long, value_delimiter = ',', default_value = "email")]
    pub required_fields: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for ImportConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn log_path(&self) -> &str {
        &self.log_file
    }

    fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl validation::Validate for ImportConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("input", &self.input)?;
        validate_path("log_file", &self.log_file)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;

        if self.required_fields.is_empty() {
            return Err(crate::utils::error::ImportError::MissingConfigError {
                field: "required_fields".to_string(),
            });
        }
        for field in &self.required_fields {
            validate_non_empty_string("required_fields", field)?;
        }

        Ok(())
    }
}
