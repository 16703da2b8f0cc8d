use serde::de::{self, Deserializer, IntoDeserializer, Visitor};
use serde::{Serialize, Serializer};
use std::marker::PhantomData;
use std::collections::BTreeMap;
use std::fmt;

/// Largest integer an `f64` holds exactly; integral numbers up to this
/// magnitude serialize as JSON integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    String,
    Number,
    Boolean,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Number => "number",
            TypeKind::Boolean => "boolean",
        }
    }

    pub fn from_name(name: &str) -> Option<TypeKind> {
        match name {
            "string" => Some(TypeKind::String),
            "number" => Some(TypeKind::Number),
            "boolean" => Some(TypeKind::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Value {
    pub fn kind(&self) -> TypeKind {
        match self {
            Value::String(_) => TypeKind::String,
            Value::Number(_) => TypeKind::Number,
            Value::Boolean(_) => TypeKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// JSON has no infinity, so non-finite numbers serialize as `null`. Typed
/// projection goes through [`IntoDeserializer`] instead and keeps them.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Feeds a [`Value`] straight into a `Deserialize` impl.
pub struct ValueDeserializer<E> {
    value: Value,
    marker: PhantomData<E>,
}

impl<'de, E: de::Error> IntoDeserializer<'de, E> for Value {
    type Deserializer = ValueDeserializer<E>;

    fn into_deserializer(self) -> Self::Deserializer {
        ValueDeserializer {
            value: self,
            marker: PhantomData,
        }
    }
}

impl<'de, E: de::Error> Deserializer<'de> for ValueDeserializer<E> {
    type Error = E;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, E> {
        match self.value {
            Value::String(s) => visitor.visit_string(s),
            // Integral numbers go through i64 so integer targets accept them.
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                visitor.visit_i64(n as i64)
            }
            Value::Number(n) => visitor.visit_f64(n),
            Value::Boolean(b) => visitor.visit_bool(b),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, E> {
        visitor.visit_some(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    Required,
    Optional,
    Default(Value),
}

/// One schema entry: the declared type plus how a missing value is handled.
///
/// A `Default` modifier always holds a value of `kind`; the compiler is the
/// only producer of these.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledField {
    kind: TypeKind,
    modifier: Modifier,
}

impl CompiledField {
    pub(crate) fn new(kind: TypeKind, modifier: Modifier) -> Self {
        debug_assert!(match &modifier {
            Modifier::Default(value) => value.kind() == kind,
            _ => true,
        });
        CompiledField { kind, modifier }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    pub fn default_value(&self) -> Option<&Value> {
        match &self.modifier {
            Modifier::Default(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.modifier, Modifier::Required)
    }
}

/// Renders the canonical descriptor, e.g. `number=-1` or `boolean?`.
impl fmt::Display for CompiledField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modifier {
            Modifier::Required => write!(f, "{}", self.kind),
            Modifier::Optional => write!(f, "{}?", self.kind),
            Modifier::Default(value) => write!(f, "{}={}", self.kind, value),
        }
    }
}

/// Result of one parse call. Optional fields that were not supplied have no
/// entry at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedParams(BTreeMap<String, Value>);

impl ParsedParams {
    pub fn new() -> Self {
        ParsedParams(BTreeMap::new())
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}
