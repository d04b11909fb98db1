use cellquery::{
    DataSourceConnection, DataSources, DataTable, DataTableColumn, DataType, Database, Schema,
    SourceType, TableType,
};

pub fn users_table(source_type: SourceType, engine: Option<&'static str>) -> DataTable {
    DataTable {
        source_type,
        source: "postgresql".into(),
        name: "users".into(),
        num_rows: Some(3),
        num_columns: Some(2),
        variable_name: None,
        columns: vec![
            DataTableColumn {
                name: "id".into(),
                data_type: DataType::Integer,
                external_type: "INTEGER".into(),
                sample_values: vec![1i64.into(), 2i64.into(), 3i64.into()],
            },
            DataTableColumn {
                name: "email".into(),
                data_type: DataType::String,
                external_type: "VARCHAR".into(),
                sample_values: Vec::new(),
            },
        ],
        engine: engine.map(Into::into),
        table_type: TableType::Table,
        primary_keys: Some(vec!["id".into()]),
        indexes: None,
    }
}

/// Postgres connection `pg` exposing `mydb.public.users` and `mydb.sales.users`.
pub fn postgres_connection() -> DataSourceConnection {
    let table = users_table(SourceType::Connection, Some("pg"));
    DataSourceConnection {
        source: "sqlalchemy".into(),
        dialect: "postgresql".into(),
        name: "pg".into(),
        display_name: "postgresql (pg)".into(),
        databases: vec![Database {
            name: "mydb".into(),
            dialect: "postgresql".into(),
            schemas: vec![
                Schema {
                    name: "public".into(),
                    tables: vec![table.clone()],
                },
                Schema {
                    name: "sales".into(),
                    tables: vec![table],
                },
            ],
            engine: Some("pg".into()),
        }],
        default_database: Some("mydb".into()),
        default_schema: Some("public".into()),
    }
}

/// In-process engine plus `postgres_connection`.
pub fn data_sources() -> DataSources {
    let mut result = DataSources::with_internal_duckdb();
    result.add(postgres_connection());
    result
}
