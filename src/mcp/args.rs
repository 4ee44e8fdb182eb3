//! Typed extraction of tool arguments.
//!
//! Tools receive the raw argument object so that a missing or mistyped
//! parameter becomes a tool-level error result rather than a protocol error.
//! Each tool declares an argument struct that derives [`JsonSchema`] for its
//! advertised input schema and implements [`ToolArgs`] to populate itself
//! through [`Arguments`].

use std::fmt;
use std::sync::Arc;

use miette::Diagnostic;
use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema};
use serde_json::Value;
use thiserror::Error;

/// Parameter types a tool can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Number,
    String,
    Boolean,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Number => write!(f, "a number"),
            ParamType::String => write!(f, "a string"),
            ParamType::Boolean => write!(f, "a boolean"),
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{name} is required and must be {expected}")]
    #[diagnostic(code(vikunja_mcp::mcp::missing_parameter))]
    Missing {
        name: &'static str,
        expected: ParamType,
    },

    #[error("{name} must be {expected}")]
    #[diagnostic(code(vikunja_mcp::mcp::wrong_type))]
    WrongType {
        name: &'static str,
        expected: ParamType,
    },
}

/// A value that can be read out of a single JSON argument.
pub trait FromArgument: Sized {
    const TYPE: ParamType;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromArgument for i64 {
    const TYPE: ParamType = ParamType::Number;

    // Agents send ids as 3, 3.0 or "3".
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromArgument for String {
    const TYPE: ParamType = ParamType::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromArgument for bool {
    const TYPE: ParamType = ParamType::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

/// Read-only view over an invocation's argument object.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    inner: &'a JsonObject,
}

impl<'a> Arguments<'a> {
    pub fn new(inner: &'a JsonObject) -> Self {
        Self { inner }
    }

    /// `null` counts as not supplied.
    fn supplied(&self, name: &str) -> Option<&'a Value> {
        self.inner.get(name).filter(|value| !value.is_null())
    }

    pub fn required<T: FromArgument>(&self, name: &'static str) -> Result<T, ValidationError> {
        self.supplied(name)
            .and_then(T::from_value)
            .ok_or(ValidationError::Missing {
                name,
                expected: T::TYPE,
            })
    }

    pub fn optional<T: FromArgument>(
        &self,
        name: &'static str,
    ) -> Result<Option<T>, ValidationError> {
        match self.supplied(name) {
            None => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .ok_or(ValidationError::WrongType {
                    name,
                    expected: T::TYPE,
                }),
        }
    }
}

/// Statically typed arguments of one tool.
pub trait ToolArgs: JsonSchema + Sized {
    fn from_arguments(args: &Arguments<'_>) -> Result<Self, ValidationError>;

    fn parse(raw: &JsonObject) -> Result<Self, ValidationError> {
        Self::from_arguments(&Arguments::new(raw))
    }
}

/// Input schema advertised for a tool, derived from its argument struct.
pub fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(schema)) => Arc::new(schema),
        _ => Arc::new(JsonObject::new()),
    }
}
