use crate::{ColumnRef, DEFAULT_ENGINE, DataType, SourceType, SqlTableContext, TableRef, TableType};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::borrow::Cow;

/// Column of a table listed in the datasource browser.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTableColumn {
    pub name: Cow<'static, str>,
    /// Logical type.
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Type name as reported by the engine.
    #[serde(default)]
    pub external_type: Cow<'static, str>,
    /// A handful of values to show next to the column.
    #[serde(default)]
    pub sample_values: Vec<JsonValue>,
}

impl DataTableColumn {
    pub fn column_ref(&self) -> ColumnRef {
        ColumnRef::new(self.name.clone())
    }
}

/// Table listed in the datasource browser.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub source_type: SourceType,
    /// Name of the source (e.g. `memory`, the dialect or the dataframe library).
    pub source: Cow<'static, str>,
    /// Table name.
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub num_rows: Option<u64>,
    #[serde(default)]
    pub num_columns: Option<u64>,
    /// Notebook variable holding the table, for local dataframes.
    #[serde(default)]
    pub variable_name: Option<Cow<'static, str>>,
    #[serde(default)]
    pub columns: Vec<DataTableColumn>,
    /// Engine the table belongs to, `None` for the default one.
    #[serde(default)]
    pub engine: Option<Cow<'static, str>>,
    #[serde(rename = "type", default)]
    pub table_type: TableType,
    #[serde(default)]
    pub primary_keys: Option<Vec<Cow<'static, str>>>,
    #[serde(default)]
    pub indexes: Option<Vec<Cow<'static, str>>>,
}

impl DataTable {
    pub fn table_ref(&self) -> TableRef {
        TableRef {
            name: self.name.clone(),
            source_type: self.source_type,
            table_type: self.table_type,
        }
    }
    pub fn column(&self, name: &str) -> Option<&DataTableColumn> {
        self.columns.iter().find(|v| v.name == name)
    }
    /// Engine name, `DEFAULT_ENGINE` when the table does not declare one.
    pub fn engine(&self) -> &str {
        self.engine.as_deref().unwrap_or(DEFAULT_ENGINE)
    }
}

/// Schema of a database.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub tables: Vec<DataTable>,
}

/// Database reachable through a connection.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub name: Cow<'static, str>,
    pub dialect: Cow<'static, str>,
    #[serde(default)]
    pub schemas: Vec<Schema>,
    #[serde(default)]
    pub engine: Option<Cow<'static, str>>,
}

impl Database {
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|v| v.name == name)
    }
}

/// Connection registered in the notebook, and the catalog it exposes.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConnection {
    /// Library providing the connection (e.g. `duckdb`, `sqlalchemy`).
    pub source: Cow<'static, str>,
    /// SQL dialect spoken by the engine.
    pub dialect: Cow<'static, str>,
    /// Engine variable name.
    pub name: Cow<'static, str>,
    pub display_name: Cow<'static, str>,
    #[serde(default)]
    pub databases: Vec<Database>,
    #[serde(default)]
    pub default_database: Option<Cow<'static, str>>,
    #[serde(default)]
    pub default_schema: Option<Cow<'static, str>>,
}

impl DataSourceConnection {
    /// The in-process DuckDB engine every notebook has.
    pub fn internal_duckdb() -> Self {
        Self {
            source: "duckdb".into(),
            dialect: "duckdb".into(),
            name: DEFAULT_ENGINE.into(),
            display_name: "duckdb (In-Memory)".into(),
            databases: Vec::new(),
            default_database: Some("memory".into()),
            default_schema: Some("main".into()),
        }
    }
    pub fn is_default_engine(&self) -> bool {
        self.name == DEFAULT_ENGINE
    }
    pub fn database(&self, name: &str) -> Option<&Database> {
        self.databases.iter().find(|v| v.name == name)
    }
    pub fn find_table(&self, database: &str, schema: &str, table: &str) -> Option<&DataTable> {
        self.database(database)?
            .schema(schema)?
            .tables
            .iter()
            .find(|v| v.name == table)
    }
    /// Context of a table located in `database`.`schema` of this connection.
    pub fn table_context(
        &self,
        database: impl Into<Cow<'static, str>>,
        schema: impl Into<Cow<'static, str>>,
    ) -> SqlTableContext {
        SqlTableContext {
            engine: self.name.clone(),
            schema: schema.into(),
            default_schema: self.default_schema.clone().unwrap_or_default(),
            database: database.into(),
            default_database: self.default_database.clone().unwrap_or_default(),
        }
    }
}
