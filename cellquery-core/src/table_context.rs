use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Engine name of the in-process DuckDB connection.
///
/// Queries targeting it are emitted without an `engine=` argument.
pub const DEFAULT_ENGINE: &str = "__marimo_duckdb";

/// Connection context active when a preview query is generated.
///
/// Holds the engine, the database and schema the user navigated to, and the
/// defaults that the engine resolves unqualified names against. An empty string
/// is a valid value (e.g. a schemaless source) and differs from having no
/// context at all.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTableContext {
    /// Engine variable name.
    pub engine: Cow<'static, str>,
    /// Current schema.
    pub schema: Cow<'static, str>,
    /// Schema used when a name is not qualified.
    pub default_schema: Cow<'static, str>,
    /// Current database.
    pub database: Cow<'static, str>,
    /// Database used when a name is not qualified.
    pub default_database: Cow<'static, str>,
}

impl SqlTableContext {
    /// Context on the default engine where the current database and schema are the defaults.
    pub fn new(database: Cow<'static, str>, schema: Cow<'static, str>) -> Self {
        Self {
            engine: Cow::Borrowed(DEFAULT_ENGINE),
            schema: schema.clone(),
            default_schema: schema,
            database: database.clone(),
            default_database: database,
        }
    }
    pub fn with_engine(mut self, engine: impl Into<Cow<'static, str>>) -> Self {
        self.engine = engine.into();
        self
    }
    /// Navigate to `schema`, keeping the default.
    pub fn with_schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = schema.into();
        self
    }
    /// Navigate to `database`, keeping the default.
    pub fn with_database(mut self, database: impl Into<Cow<'static, str>>) -> Self {
        self.database = database.into();
        self
    }
    /// True if the engine is the in-process one.
    pub fn is_default_engine(&self) -> bool {
        self.engine == DEFAULT_ENGINE
    }
    /// Database qualifier, if the current database differs from the default.
    pub fn database_qualifier(&self) -> Option<&str> {
        if self.database != self.default_database {
            Some(&self.database)
        } else {
            None
        }
    }
    /// Schema qualifier, if the current schema must be spelled out.
    pub fn schema_qualifier(&self) -> Option<&str> {
        if !self.schema.is_empty() && self.schema != self.default_schema {
            Some(&self.schema)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifiers() {
        let context = SqlTableContext::new("mydb".into(), "public".into());
        assert!(context.is_default_engine());
        assert_eq!(context.database_qualifier(), None);
        assert_eq!(context.schema_qualifier(), None);

        let context = context.with_schema("sales").with_database("remote");
        assert_eq!(context.database_qualifier(), Some("remote"));
        assert_eq!(context.schema_qualifier(), Some("sales"));

        let context = context.with_schema("");
        assert_eq!(context.schema_qualifier(), None);

        let context = context.with_database("");
        assert_eq!(context.database_qualifier(), Some(""));

        let context = SqlTableContext::new("".into(), "".into());
        assert_eq!(context.database_qualifier(), None);
    }

    #[test]
    fn camel_case_json() {
        let context = SqlTableContext::new("memory".into(), "main".into()).with_engine("pg");
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["defaultSchema"], "main");
        assert_eq!(json["defaultDatabase"], "memory");
        assert_eq!(json["engine"], "pg");
        let back: SqlTableContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, context);
    }
}
