use crate::{
    ColumnRef, DataSourceConnection, DataTable, Error, ErrorContext, Result, SqlTableContext,
    sql_code, truncate_long,
};
use serde::{Deserialize, Serialize};

/// Payload listing the connections of a notebook.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DataSourceConnections {
    connections: Vec<DataSourceConnection>,
}

/// Connections known to the notebook, keyed by engine name.
///
/// Keeps the registration order, which is the order the browser lists them.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DataSources {
    connections: Vec<DataSourceConnection>,
}

impl DataSources {
    pub fn new() -> Self {
        Self::default()
    }
    /// Registry containing only the in-process engine.
    pub fn with_internal_duckdb() -> Self {
        let mut result = Self::new();
        result.add(DataSourceConnection::internal_duckdb());
        result
    }
    /// Load the `data-source-connections` payload: `{ "connections": [...] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: DataSourceConnections = serde_json::from_str(json)
            .with_context(|| format!("While parsing the connections `{}`", truncate_long!(json)))
            .inspect_err(|e| log::error!("{e:#}"))?;
        let mut result = Self::new();
        for connection in payload.connections {
            result.add(connection);
        }
        Ok(result)
    }
    pub fn to_json(&self) -> Result<String> {
        let payload = DataSourceConnections {
            connections: self.connections.clone(),
        };
        serde_json::to_string(&payload).context("While serializing the connections")
    }
    /// Register a connection, replacing the one with the same engine name.
    pub fn add(&mut self, connection: DataSourceConnection) {
        if let Some(existing) = self
            .connections
            .iter_mut()
            .find(|v| v.name == connection.name)
        {
            log::debug!("Replacing the connection `{}`", connection.name);
            *existing = connection;
        } else {
            self.connections.push(connection);
        }
    }
    pub fn get(&self, engine: &str) -> Option<&DataSourceConnection> {
        self.connections.iter().find(|v| v.name == engine)
    }
    pub fn remove(&mut self, engine: &str) -> Option<DataSourceConnection> {
        let position = self.connections.iter().position(|v| v.name == engine)?;
        Some(self.connections.remove(position))
    }
    pub fn iter(&self) -> impl Iterator<Item = &DataSourceConnection> {
        self.connections.iter()
    }
    pub fn len(&self) -> usize {
        self.connections.len()
    }
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
    /// Context of a table located in `database`.`schema` of the connection named `engine`.
    pub fn table_context(
        &self,
        engine: &str,
        database: &str,
        schema: &str,
    ) -> Result<SqlTableContext> {
        let Some(connection) = self.get(engine) else {
            let error = Error::msg(format!("Unknown engine `{engine}`")).context(format!(
                "While resolving the context of `{database}`.`{schema}`"
            ));
            log::error!("{:#}", error);
            return Err(error);
        };
        Ok(connection.table_context(database.to_string(), schema.to_string()))
    }
    /// Code previewing `column` of `table`.
    ///
    /// `location` is the `(database, schema)` the table was browsed in, `None`
    /// for dataframes and tables listed outside of a connection.
    pub fn preview_code(
        &self,
        table: &DataTable,
        column: &ColumnRef,
        location: Option<(&str, &str)>,
    ) -> Result<String> {
        let table_ref = table.table_ref();
        let Some((database, schema)) = location else {
            return Ok(sql_code(&table_ref, column, None));
        };
        let context = self
            .table_context(table.engine(), database, schema)
            .with_context(|| format!("While previewing `{}`.`{}`", table.name, column.name))?;
        Ok(sql_code(&table_ref, column, Some(&context)))
    }
}

impl<'a> IntoIterator for &'a DataSources {
    type Item = &'a DataSourceConnection;
    type IntoIter = std::slice::Iter<'a, DataSourceConnection>;
    fn into_iter(self) -> Self::IntoIter {
        self.connections.iter()
    }
}

impl FromIterator<DataSourceConnection> for DataSources {
    fn from_iter<T: IntoIterator<Item = DataSourceConnection>>(iter: T) -> Self {
        let mut result = Self::new();
        for connection in iter {
            result.add(connection);
        }
        result
    }
}
