use crate::SqlTableContext;

/// State threaded through the `CellWriter` methods while a cell is written.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Context<'a> {
    /// Connection context, absent for local and dataset tables.
    pub table_context: Option<&'a SqlTableContext>,
    /// Column identifiers get double quotes.
    pub quote_identifiers: bool,
    /// Quote delimiting the f-string holding the statement.
    pub string_quote: char,
}

impl<'a> Context<'a> {
    pub const fn new(table_context: Option<&'a SqlTableContext>) -> Self {
        match table_context {
            Some(..) => Self {
                table_context,
                quote_identifiers: false,
                string_quote: '"',
            },
            None => Self {
                table_context,
                quote_identifiers: true,
                string_quote: '\'',
            },
        }
    }
    pub const fn empty() -> Self {
        Self::new(None)
    }
    /// Engine to pass as argument, `None` for the default engine.
    pub fn engine(&self) -> Option<&'a str> {
        self.table_context
            .filter(|v| !v.is_default_engine())
            .map(|v| &*v.engine)
    }
}

impl<'a> Default for Context<'a> {
    fn default() -> Self {
        Context::empty()
    }
}
