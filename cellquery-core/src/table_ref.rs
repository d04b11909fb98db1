use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Where the table data lives.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Dataframe defined in the notebook.
    #[default]
    Local,
    /// Table of the in-process engine.
    Duckdb,
    /// Table reached through a user defined connection.
    Connection,
}

/// Kind of relation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    #[default]
    Table,
    View,
}

/// Table reference.
#[derive(Default, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TableRef {
    /// Table name, never empty.
    pub name: Cow<'static, str>,
    /// Source of the table.
    pub source_type: SourceType,
    /// Table or view.
    pub table_type: TableType,
}

impl TableRef {
    /// New local table reference.
    pub const fn new(name: Cow<'static, str>) -> Self {
        Self {
            name,
            source_type: SourceType::Local,
            table_type: TableType::Table,
        }
    }
    /// Set the source type.
    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }
    /// Set the table type.
    pub fn with_table_type(mut self, table_type: TableType) -> Self {
        self.table_type = table_type;
        self
    }
    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl From<&'static str> for TableRef {
    fn from(value: &'static str) -> Self {
        TableRef::new(value.into())
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        TableRef::new(value.into())
    }
}
