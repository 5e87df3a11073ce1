use crate::domain::model::DataRecord;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// File to read records from (json, csv or toml).
    fn input_path(&self) -> Option<&str>;
    /// File to write processing lines to; stdout when absent.
    fn output_path(&self) -> Option<&str>;
    /// A single record given directly, used when there is no input file.
    fn inline_record(&self) -> Option<DataRecord>;
}
