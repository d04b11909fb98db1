mod context;

pub use context::*;

use crate::{ColumnRef, SqlTableContext, TableRef, separated_by, truncate_long};
use std::fmt::Write;

/// Row cap applied to every preview query.
pub const PREVIEW_LIMIT: u32 = 100;

/// Writes the notebook cell code previewing a column.
///
/// Every method has a default implementation producing the stock output, a
/// writer overrides only the fragments it renders differently.
pub trait CellWriter {
    fn as_dyn(&self) -> &dyn CellWriter;

    /// Variable receiving the result dataframe.
    fn result_variable(&self) -> &str {
        "_df"
    }

    fn write_identifier(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &str,
        quoted: bool,
    ) {
        if quoted {
            out.push('"');
            write_escaped(out, value, '"', "\"\"");
            out.push('"');
        } else {
            out.push_str(value);
        }
    }

    fn write_column_ref(&self, context: &mut Context, out: &mut String, value: &ColumnRef) {
        let quoted = context.quote_identifiers;
        self.write_identifier(context, out, &value.name, quoted);
    }

    /// Write `[database.][schema.]name`, qualifiers only when they differ from the defaults.
    fn write_table_ref(&self, context: &mut Context, out: &mut String, value: &TableRef) {
        let (database, schema) = context
            .table_context
            .map(|v| (v.database_qualifier(), v.schema_qualifier()))
            .unwrap_or_default();
        separated_by(
            out,
            [database, schema, Some(&*value.name)]
                .into_iter()
                .flatten(),
            |out, v| self.write_identifier(context, out, v, false),
            ".",
        );
    }

    fn write_select(
        &self,
        context: &mut Context,
        out: &mut String,
        table: &TableRef,
        column: &ColumnRef,
    ) {
        out.push_str("SELECT ");
        self.write_column_ref(context, out, column);
        out.push_str(" FROM ");
        self.write_table_ref(context, out, table);
        let _ = write!(out, " LIMIT {PREVIEW_LIMIT}");
    }

    fn write_engine_argument(&self, context: &mut Context, out: &mut String) {
        if let Some(engine) = context.engine() {
            let _ = write!(out, ", engine={engine}");
        }
    }

    /// Write the full cell: `_df = mo.sql(f"<statement>"[, engine=<engine>])`.
    fn write_sql_cell(
        &self,
        out: &mut String,
        table: &TableRef,
        column: &ColumnRef,
        table_context: Option<&SqlTableContext>,
    ) {
        if table.is_empty() {
            log::warn!("Writing a preview query for a table without name");
        }
        let mut context = Context::new(table_context);
        let _ = write!(out, "{} = mo.sql(f{}", self.result_variable(), context.string_quote);
        self.write_select(&mut context, out, table, column);
        out.push(context.string_quote);
        self.write_engine_argument(&mut context, out);
        out.push(')');
    }
}

/// Stock cell writer.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericCellWriter {}

impl GenericCellWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl CellWriter for GenericCellWriter {
    fn as_dyn(&self) -> &dyn CellWriter {
        self
    }
}

/// Code of a notebook cell selecting `column` from `table`, capped at `PREVIEW_LIMIT` rows.
///
/// Without a context the column is quoted and the statement goes in single
/// quotes. With a context the column is bare, the statement goes in double
/// quotes, database and schema qualify the table when not the defaults, and
/// a non default engine is passed as `engine=`.
///
/// A quoted column name has its embedded `"` doubled, so `say "hi"` is written
/// as `"say ""hi"""` and stays a single SQL identifier. Other characters,
/// including `'`, `{` and `}`, are written as they are.
///
/// # Examples
/// ```
/// use cellquery_core::sql_code;
/// assert_eq!(
///     sql_code(&"users".into(), &"email".into(), None),
///     r#"_df = mo.sql(f'SELECT "email" FROM users LIMIT 100')"#,
/// );
/// ```
pub fn sql_code(
    table: &TableRef,
    column: &ColumnRef,
    context: Option<&SqlTableContext>,
) -> String {
    let mut out = String::with_capacity(64 + table.name.len() + column.name.len());
    GenericCellWriter::new().write_sql_cell(&mut out, table, column, context);
    log::debug!("Generated preview code: {}", truncate_long!(out));
    out
}

/// Write, escaping occurrences of `search` char with `replace` while copying into buffer.
pub fn write_escaped(out: &mut String, value: &str, search: char, replace: &str) {
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == search {
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + c.len_utf8();
        }
    }
    out.push_str(&value[position..]);
}
