use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A named numeric sample.
///
/// `name` borrows for `'static` literals so records can live in `const` items,
/// and owns its text once read from a file or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub name: Cow<'static, str>,
    pub value: f64,
}

impl DataRecord {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            value,
        }
    }
}

/// Sample record used when no input is supplied.
pub const TEST_CONFIG: DataRecord = DataRecord {
    name: Cow::Borrowed("test"),
    value: 42.0,
};

impl Validate for DataRecord {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("record.name", &self.name)?;
        validate_finite_number("record.value", self.value)?;
        Ok(())
    }
}
