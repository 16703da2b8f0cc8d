//! Applying a compiled [`Schema`] to raw query values.

use serde::de::value::MapDeserializer;
use serde::de::{self, DeserializeOwned};
use std::collections::{BTreeMap, HashMap};

use crate::coerce::coerce;
use crate::core::errors::ParseError;
use crate::core::query_params::parse_query_params;
use crate::models::models::{Modifier, ParsedParams};
use crate::schema::Schema;

/// Name to raw string lookup, as produced by query-string extraction.
pub trait QuerySource {
    fn raw(&self, name: &str) -> Option<&str>;
}

impl QuerySource for HashMap<String, String> {
    fn raw(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl QuerySource for BTreeMap<String, String> {
    fn raw(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: QuerySource + ?Sized> QuerySource for &T {
    fn raw(&self, name: &str) -> Option<&str> {
        (**self).raw(name)
    }
}

impl Schema {
    /// Extract the query of `url` and decode it against this schema.
    pub fn parse(&self, url: &str) -> Result<ParsedParams, ParseError> {
        let raw = parse_query_params(url);
        self.parse_map(&raw)
    }

    /// Decode already-extracted raw values.
    ///
    /// An empty raw value counts as not supplied, so `?caseId=` behaves like a
    /// query without `caseId`. The first failing field aborts the whole parse.
    pub fn parse_map<Q: QuerySource + ?Sized>(&self, raw: &Q) -> Result<ParsedParams, ParseError> {
        let mut result = ParsedParams::new();

        for (name, field) in self.iter() {
            match raw.raw(name).filter(|value| !value.is_empty()) {
                Some(value) => {
                    let coerced =
                        coerce(value, field.kind()).map_err(|source| ParseError::InvalidValue {
                            field: name.to_string(),
                            source,
                        })?;
                    result.insert(name, coerced);
                }
                None => match field.modifier() {
                    Modifier::Default(value) => result.insert(name, value.clone()),
                    Modifier::Optional => {}
                    Modifier::Required => {
                        return Err(ParseError::MissingRequired {
                            field: name.to_string(),
                        })
                    }
                },
            }
        }

        Ok(result)
    }

    /// Decode `url` and project the record onto `T`.
    ///
    /// Optional fields map naturally onto `Option<_>` members of `T`.
    pub fn parse_into<T: DeserializeOwned>(&self, url: &str) -> Result<T, ParseError> {
        project(self.parse(url)?)
    }

    pub fn parse_map_into<T, Q>(&self, raw: &Q) -> Result<T, ParseError>
    where
        T: DeserializeOwned,
        Q: QuerySource + ?Sized,
    {
        project(self.parse_map(raw)?)
    }
}

fn project<T: DeserializeOwned>(params: ParsedParams) -> Result<T, ParseError> {
    let deserializer: MapDeserializer<'_, _, de::value::Error> =
        MapDeserializer::new(params.into_inner().into_iter());
    T::deserialize(deserializer).map_err(|e| ParseError::Projection(e.to_string()))
}
