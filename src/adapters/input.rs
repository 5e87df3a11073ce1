use crate::config::toml_config::TomlConfig;
use crate::domain::model::DataRecord;
use crate::utils::error::{DigestError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            Some("toml") => Ok(InputFormat::Toml),
            _ => Err(DigestError::UnsupportedFormatError {
                path: path.to_string(),
            }),
        }
    }
}

/// Decodes `bytes` into records using the format implied by `path`'s extension.
pub fn load_records(path: &str, bytes: &[u8]) -> Result<Vec<DataRecord>> {
    let records = match InputFormat::from_path(path)? {
        InputFormat::Json => serde_json::from_slice(bytes)?,
        InputFormat::Csv => read_csv(bytes)?,
        InputFormat::Toml => {
            let content =
                std::str::from_utf8(bytes).map_err(|e| DigestError::ConfigValidationError {
                    field: "input".to_string(),
                    message: format!("TOML input is not valid UTF-8: {}", e),
                })?;
            TomlConfig::from_toml_str(content)?.into_records()
        }
    };

    tracing::debug!("Loaded {} records from {}", records.len(), path);
    Ok(records)
}

fn read_csv(bytes: &[u8]) -> Result<Vec<DataRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(bytes);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(InputFormat::from_path("a.json").unwrap(), InputFormat::Json);
        assert_eq!(InputFormat::from_path("dir/a.CSV").unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_path("a.toml").unwrap(), InputFormat::Toml);
        assert!(InputFormat::from_path("a.yaml").is_err());
        assert!(InputFormat::from_path("records").is_err());
    }

    #[test]
    fn test_load_json() {
        let records = load_records(
            "in.json",
            br#"[{"name":"test","value":42},{"name":"half","value":0.5}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![DataRecord::new("test", 42.0), DataRecord::new("half", 0.5)]
        );
    }

    #[test]
    fn test_load_csv() {
        let records = load_records("in.csv", b"name,value\ntest, 42\nneg,-1.25\n").unwrap();
        assert_eq!(
            records,
            vec![DataRecord::new("test", 42.0), DataRecord::new("neg", -1.25)]
        );
    }

    #[test]
    fn test_load_csv_bad_value() {
        let err = load_records("in.csv", b"name,value\ntest,forty-two\n").unwrap_err();
        assert!(matches!(err, DigestError::CsvError(_)));
    }

    #[test]
    fn test_load_json_wrong_shape() {
        let err = load_records("in.json", br#"{"name":"test","value":42}"#).unwrap_err();
        assert!(matches!(err, DigestError::SerializationError(_)));
    }

    #[test]
    fn test_load_toml() {
        let records = load_records("in.toml", b"[[records]]\nname = \"t\"\nvalue = 3\n").unwrap();
        assert_eq!(records, vec![DataRecord::new("t", 3.0)]);
    }
}
