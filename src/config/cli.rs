use crate::domain::model::DataRecord;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DigestError, Result};
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const INPUT_EXTENSIONS: &[&str] = &["json", "csv", "toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "record-digest")]
#[command(about = "Formats name/value records into processing lines")]
pub struct CliConfig {
    /// Read records from a .json, .csv or .toml file
    #[arg(short, long, conflicts_with_all = ["name", "value"])]
    pub input: Option<String>,

    /// Name of a single record to process
    #[arg(long)]
    pub name: Option<String>,

    /// Value of a single record to process
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn inline_record(&self) -> Option<DataRecord> {
        match (&self.name, self.value) {
            (Some(name), Some(value)) => Some(DataRecord::new(name.clone(), value)),
            _ => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
            validate_file_extensions("input", &[input.as_str()], INPUT_EXTENSIONS)?;
        }

        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        match (&self.name, self.value) {
            (Some(_), None) => Err(DigestError::MissingConfigError {
                field: "value".to_string(),
            }),
            (None, Some(_)) => Err(DigestError::MissingConfigError {
                field: "name".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
