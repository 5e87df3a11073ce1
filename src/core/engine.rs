use crate::adapters::input::load_records;
use crate::core::processor::RecordProcessor;
use crate::domain::model::{DataRecord, TEST_CONFIG};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct DigestEngine<S: Storage> {
    storage: S,
    processor: RecordProcessor,
}

impl<S: Storage> DigestEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            processor: RecordProcessor::new(),
        }
    }

    /// Input file first, then an inline record, then the sample record.
    pub async fn collect_records<C: ConfigProvider>(&self, config: &C) -> Result<Vec<DataRecord>> {
        if let Some(input) = config.input_path() {
            tracing::info!("📥 Reading records from {}", input);
            let bytes = self.storage.read_file(input).await?;
            return load_records(input, &bytes);
        }

        if let Some(record) = config.inline_record() {
            return Ok(vec![record]);
        }

        tracing::info!("No input given, using the sample record");
        Ok(vec![TEST_CONFIG])
    }

    /// Collects, validates and renders records. The rendered text is always
    /// returned; it is also written out when the config names an output file.
    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<String> {
        let records = self.collect_records(config).await?;
        for record in &records {
            record.validate()?;
        }

        let rendered = self.processor.render(&records);
        tracing::info!("Processed {} records", records.len());

        if let Some(output) = config.output_path() {
            self.storage.write_file(output, rendered.as_bytes()).await?;
            tracing::info!("📁 Output saved to: {}", output);
        }

        Ok(rendered)
    }
}
