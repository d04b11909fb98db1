use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Reference to a table column.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Column name.
    pub name: Cow<'static, str>,
}

impl ColumnRef {
    pub const fn new(name: Cow<'static, str>) -> Self {
        Self { name }
    }
}

impl From<&'static str> for ColumnRef {
    fn from(value: &'static str) -> Self {
        ColumnRef::new(value.into())
    }
}

impl From<String> for ColumnRef {
    fn from(value: String) -> Self {
        ColumnRef::new(value.into())
    }
}

/// Logical type of a column, as shown in the datasource browser.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Boolean,
    Integer,
    Number,
    Date,
    Datetime,
    Time,
    #[default]
    Unknown,
}
