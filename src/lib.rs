pub use cellquery_core::*;
