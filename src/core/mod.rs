pub mod engine;
pub mod processor;

pub use crate::domain::model::{DataRecord, TEST_CONFIG};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
