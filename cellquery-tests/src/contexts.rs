use cellquery::{DEFAULT_ENGINE, SqlTableContext};

/// Default engine, `public` schema of `mydb`, nothing navigated away from the defaults.
pub fn default_context() -> SqlTableContext {
    SqlTableContext {
        engine: DEFAULT_ENGINE.into(),
        schema: "public".into(),
        default_schema: "public".into(),
        database: "mydb".into(),
        default_database: "mydb".into(),
    }
}

/// Same as `default_context` on the external engine `engine`.
pub fn engine_context(engine: &'static str) -> SqlTableContext {
    default_context().with_engine(engine)
}
