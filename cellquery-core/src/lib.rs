mod column;
mod connection_url;
mod data_source;
mod data_sources;
mod table_context;
mod table_ref;
mod util;
mod writer;

pub use ::anyhow::Context as ErrorContext;
pub use column::*;
pub use data_source::*;
pub use data_sources::*;
pub use table_context::*;
pub use table_ref::*;
pub use util::*;
pub use writer::*;

/// Result type.
pub type Result<T> = anyhow::Result<T>;
/// Error type.
pub type Error = anyhow::Error;
