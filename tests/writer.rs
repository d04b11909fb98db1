#[cfg(test)]
mod tests {
    use cellquery::{
        CellWriter, ColumnRef, Context, GenericCellWriter, PREVIEW_LIMIT, TableRef, write_escaped,
    };
    use cellquery_tests::{default_context, engine_context, init_logs};

    const WRITER: GenericCellWriter = GenericCellWriter::new();

    /// Writer naming the result `preview` and quoting columns with backticks.
    struct BacktickWriter {}

    impl CellWriter for BacktickWriter {
        fn as_dyn(&self) -> &dyn CellWriter {
            self
        }

        fn result_variable(&self) -> &str {
            "preview"
        }

        fn write_identifier(
            &self,
            _context: &mut Context,
            out: &mut String,
            value: &str,
            quoted: bool,
        ) {
            if quoted {
                out.push('`');
                write_escaped(out, value, '`', "``");
                out.push('`');
            } else {
                out.push_str(value);
            }
        }
    }

    #[test]
    fn fragments() {
        init_logs();
        let table: TableRef = "users".into();
        let column: ColumnRef = "email".into();

        let mut out = String::new();
        WRITER.write_column_ref(&mut Context::empty(), &mut out, &column);
        assert_eq!(out, r#""email""#);

        let context = default_context().with_schema("sales");
        let mut out = String::new();
        WRITER.write_table_ref(&mut Context::new(Some(&context)), &mut out, &table);
        assert_eq!(out, "sales.users");

        let mut out = String::new();
        WRITER.write_select(&mut Context::new(Some(&context)), &mut out, &table, &column);
        assert_eq!(out, format!("SELECT email FROM sales.users LIMIT {PREVIEW_LIMIT}"));

        let context = engine_context("pg");
        let mut out = String::new();
        WRITER.write_engine_argument(&mut Context::new(Some(&context)), &mut out);
        assert_eq!(out, ", engine=pg");

        let mut out = String::new();
        WRITER.write_engine_argument(&mut Context::new(Some(&default_context())), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn context_quoting() {
        let context = default_context();
        let with = Context::new(Some(&context));
        assert!(!with.quote_identifiers);
        assert_eq!(with.string_quote, '"');
        assert_eq!(with.engine(), None);
        let without = Context::default();
        assert!(without.quote_identifiers);
        assert_eq!(without.string_quote, '\'');
        assert_eq!(without.engine(), None);
    }

    #[test]
    fn quoted_column_with_quotes() {
        init_logs();
        let mut out = String::new();
        WRITER.write_sql_cell(&mut out, &"t".into(), &r#"say "hi""#.into(), None);
        assert_eq!(out, r#"_df = mo.sql(f'SELECT "say ""hi""" FROM t LIMIT 100')"#);
    }

    #[test]
    fn custom_writer() {
        init_logs();
        let writer = BacktickWriter {};
        let mut out = String::new();
        writer
            .as_dyn()
            .write_sql_cell(&mut out, &"users".into(), &"email".into(), None);
        assert_eq!(out, "preview = mo.sql(f'SELECT `email` FROM users LIMIT 100')");

        let context = engine_context("bigquery").with_database("remote");
        let mut out = String::new();
        writer.write_sql_cell(&mut out, &"users".into(), &"email".into(), Some(&context));
        assert_eq!(
            out,
            r#"preview = mo.sql(f"SELECT email FROM remote.users LIMIT 100", engine=bigquery)"#
        );
    }

    #[test]
    fn escaped() {
        let mut out = String::new();
        write_escaped(&mut out, "a'b'ç'", '\'', "''");
        assert_eq!(out, "a''b''ç''");
    }
}
