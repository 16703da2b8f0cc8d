//! Descriptor compilation.
//!
//! A descriptor is `type`, `type?` or `type=literal` with `type` one of
//! `string`, `number`, `boolean`. Anything after a `?` is ignored. Compiling validates every descriptor,
//! decodes default literals with the same rules used for query values, and
//! stores the fields in name order.

use regex::Regex;
use std::collections::btree_map::{self, BTreeMap};
use std::sync::OnceLock;

use crate::coerce::coerce;
use crate::core::errors::SchemaError;
use crate::models::models::{CompiledField, Modifier, TypeKind};

fn descriptor_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)^(?P<type>string|number|boolean)(?:(?P<modifier>\?).*|=(?P<literal>.*))?$")
            .expect("Regex should compile")
    })
}

/// Decompose a single descriptor for `field`.
pub fn compile_descriptor(field: &str, descriptor: &str) -> Result<CompiledField, SchemaError> {
    let invalid = || SchemaError::InvalidDescriptor {
        field: field.to_string(),
        descriptor: descriptor.to_string(),
    };

    let caps = descriptor_regex().captures(descriptor).ok_or_else(invalid)?;
    let kind = caps
        .name("type")
        .and_then(|m| TypeKind::from_name(m.as_str()))
        .ok_or_else(invalid)?;

    let modifier = if caps.name("modifier").is_some() {
        Modifier::Optional
    } else if let Some(literal) = caps.name("literal") {
        let value = coerce(literal.as_str(), kind).map_err(|source| SchemaError::InvalidDefault {
            field: field.to_string(),
            descriptor: descriptor.to_string(),
            source,
        })?;
        Modifier::Default(value)
    } else {
        Modifier::Required
    };

    Ok(CompiledField::new(kind, modifier))
}

/// A compiled, immutable set of field declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: BTreeMap<String, CompiledField>,
}

impl Schema {
    /// Compile `(name, descriptor)` pairs.
    ///
    /// Pairs are ordered by name before compiling, so the error reported for a
    /// schema with several bad descriptors does not depend on the iteration
    /// order of the input container.
    pub fn compile<I, K, V>(descriptors: I) -> Result<Schema, SchemaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut ordered: BTreeMap<String, V> = BTreeMap::new();
        for (name, descriptor) in descriptors {
            match ordered.entry(name.into()) {
                btree_map::Entry::Occupied(entry) => {
                    return Err(SchemaError::DuplicateField {
                        field: entry.key().clone(),
                    });
                }
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(descriptor);
                }
            }
        }

        let mut fields = BTreeMap::new();
        for (name, descriptor) in ordered {
            let field = compile_descriptor(&name, descriptor.as_ref())?;
            fields.insert(name, field);
        }

        Ok(Schema { fields })
    }

    /// Compile a JSON object such as `{"caseId": "number", "debug": "boolean=true"}`.
    pub fn from_json(text: &str) -> Result<Schema, SchemaError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
        let object = match value {
            serde_json::Value::Object(object) => object,
            other => {
                return Err(SchemaError::InvalidJson(format!(
                    "expected an object, found {}",
                    other
                )))
            }
        };

        let mut pairs = Vec::with_capacity(object.len());
        for (name, descriptor) in object {
            match descriptor {
                serde_json::Value::String(descriptor) => pairs.push((name, descriptor)),
                other => {
                    return Err(SchemaError::InvalidDescriptor {
                        field: name,
                        descriptor: other.to_string(),
                    })
                }
            }
        }

        Schema::compile(pairs)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CompiledField> {
        self.fields.get(name)
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
