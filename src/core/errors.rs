use thiserror::Error;

/// A raw string that does not read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("could not parse number: {raw:?}")]
    InvalidNumber { raw: String },
    #[error("could not parse boolean: {raw:?}")]
    InvalidBoolean { raw: String },
}

impl CoercionError {
    pub fn raw(&self) -> &str {
        match self {
            CoercionError::InvalidNumber { raw } | CoercionError::InvalidBoolean { raw } => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("invalid descriptor for `{field}`: {descriptor:?}")]
    InvalidDescriptor { field: String, descriptor: String },
    #[error("invalid default for `{field}` in {descriptor:?}")]
    InvalidDefault {
        field: String,
        descriptor: String,
        #[source]
        source: CoercionError,
    },
    #[error("field `{field}` declared more than once")]
    DuplicateField { field: String },
    #[error("schema is not a JSON object of descriptors: {0}")]
    InvalidJson(String),
}

impl SchemaError {
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::InvalidDescriptor { field, .. }
            | SchemaError::InvalidDefault { field, .. }
            | SchemaError::DuplicateField { field } => Some(field),
            SchemaError::InvalidJson(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing param: {field}")]
    MissingRequired { field: String },
    #[error("invalid value for `{field}`")]
    InvalidValue {
        field: String,
        #[source]
        source: CoercionError,
    },
    #[error("parsed params do not fit the target type: {0}")]
    Projection(String),
}

impl ParseError {
    pub fn field(&self) -> Option<&str> {
        match self {
            ParseError::MissingRequired { field } | ParseError::InvalidValue { field, .. } => {
                Some(field)
            }
            ParseError::Projection(_) => None,
        }
    }

    pub fn coercion(&self) -> Option<&CoercionError> {
        match self {
            ParseError::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}
