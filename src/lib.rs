pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use core::{
    engine::DigestEngine,
    processor::{format_value, process_data, RecordProcessor},
};
pub use domain::model::{DataRecord, TEST_CONFIG};
pub use utils::error::{DigestError, Result};
