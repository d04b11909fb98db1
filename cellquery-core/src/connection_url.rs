use crate::{DEFAULT_ENGINE, DataSourceConnection, Error, ErrorContext, Result, truncate_long};
use std::borrow::Cow;
use url::Url;

impl DataSourceConnection {
    /// Describe a connection from a URL.
    ///
    /// Format: `<dialect>://<database>[/<schema>][?name=<engine>&display_name=<..>&source=<..>]`.
    /// The database and schema become the defaults of the connection. Both
    /// `<dialect>://:memory:` and `<dialect>:///:memory:` name the `memory`
    /// database. A `duckdb` URL without `name` is the in-process engine.
    ///
    /// # Examples
    /// ```
    /// use cellquery_core::DataSourceConnection;
    /// let connection =
    ///     DataSourceConnection::from_url("postgresql://warehouse/public?name=pg").unwrap();
    /// assert_eq!(connection.name, "pg");
    /// assert_eq!(connection.default_database.as_deref(), Some("warehouse"));
    /// assert_eq!(connection.default_schema.as_deref(), Some("public"));
    /// ```
    pub fn from_url(url: &str) -> Result<Self> {
        let context = || format!("While parsing the connection url `{}`", truncate_long!(url));
        let mut sanitized = Cow::Borrowed(url);
        if let Some((scheme, rest)) = url.split_once("://")
            && rest.starts_with(":memory:")
        {
            sanitized = format!("{scheme}://memory{}", &rest[8..]).into();
        }
        let parsed = Url::parse(&sanitized)
            .with_context(context)
            .inspect_err(|e| log::error!("{e:#}"))?;
        let dialect = parsed.scheme().to_string();
        let is_duckdb = dialect == "duckdb";
        let param = |key: &str| {
            parsed
                .query_pairs()
                .find_map(|(k, v)| if k == key { Some(v.into_owned()) } else { None })
        };
        let name = match param("name") {
            Some(name) if !name.is_empty() => name,
            _ if is_duckdb => DEFAULT_ENGINE.to_string(),
            _ => {
                let error = Error::msg(format!(
                    "A `{dialect}` connection must declare the engine name with `?name=`"
                ))
                .context(context());
                log::error!("{:#}", error);
                return Err(error);
            }
        };
        let mut segments = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty());
        let mut schema = segments.next();
        let mut default_database = parsed
            .host_str()
            .filter(|v| !v.is_empty())
            .map(|v| Cow::Owned(v.to_string()));
        if default_database.is_none() && schema == Some(":memory:") {
            default_database = Some(Cow::Borrowed("memory"));
            schema = None;
        }
        let default_schema = match schema {
            Some(schema) => Some(Cow::Owned(
                urlencoding::decode(schema).with_context(context)?.into_owned(),
            )),
            None if is_duckdb => Some(Cow::Borrowed("main")),
            None => None,
        };
        let display_name = param("display_name").unwrap_or_else(|| format!("{dialect} ({name})"));
        let source = param("source").unwrap_or_else(|| dialect.clone());
        Ok(Self {
            source: source.into(),
            dialect: dialect.into(),
            name: name.into(),
            display_name: display_name.into(),
            databases: Vec::new(),
            default_database,
            default_schema,
        })
    }
}
