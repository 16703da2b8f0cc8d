//! Typed URL query parameters.
//!
//! A schema maps parameter names to compact descriptors (`"number"`,
//! `"number?"`, `"number=-1"`, `"boolean=true"`, `"string=DefaultType"`).
//! Compile it once, then decode any number of URLs against it:
//!
//! ```
//! let schema = typed_params::params([
//!     ("caseId", "number"),
//!     ("clientId", "number?"),
//!     ("debug", "boolean=true"),
//! ])
//! .unwrap();
//!
//! let parsed = schema.parse("https://www.example.com/api?caseId=4").unwrap();
//! assert_eq!(parsed.get_f64("caseId"), Some(4.0));
//! assert_eq!(parsed.get_bool("debug"), Some(true));
//! assert!(!parsed.contains_key("clientId"));
//! ```

pub mod coerce;
pub mod config;
pub mod parser;
pub mod schema;

pub mod core {
    pub mod errors;
    pub mod query_params;
}

pub mod models {
    #[allow(clippy::module_inception)]
    pub mod models;
}

pub use crate::core::errors::{CoercionError, ParseError, SchemaError};
pub use crate::models::models::{CompiledField, Modifier, ParsedParams, TypeKind, Value};
pub use crate::parser::QuerySource;
pub use crate::schema::Schema;

/// Compile a schema from `(name, descriptor)` pairs.
pub fn params<I, K, V>(descriptors: I) -> Result<Schema, SchemaError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    Schema::compile(descriptors)
}
