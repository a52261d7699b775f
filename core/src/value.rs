//! Dynamically typed values carried by instructions, options and results.
//!
//! Gremlin arguments and results can be of any kind. They are modelled as a
//! closed set of variants so the rest of the crate can match on them instead
//! of inspecting types at runtime. Value kinds only matter again at the
//! serialization boundary.

use crate::bytecode::Bytecode;
use crate::error::{CoreError, CoreResult};
use crate::strategy::{OptionsStrategy, TraversalStrategy};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A value that can appear as an instruction argument, an option value or a
/// traverser object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type", content = "@value")]
pub enum GremlinValue {
    #[serde(rename = "g:Null")]
    Null,
    #[serde(rename = "g:Boolean")]
    Boolean(bool),
    #[serde(rename = "g:Int32")]
    Int(i32),
    #[serde(rename = "g:Int64")]
    Long(i64),
    #[serde(rename = "g:Float")]
    Float(f32),
    #[serde(rename = "g:Double")]
    Double(f64),
    #[serde(rename = "g:String")]
    String(String),
    #[serde(rename = "g:UUID")]
    Uuid(Uuid),
    #[serde(rename = "g:Date")]
    Date(DateTime<Utc>),
    #[serde(rename = "g:List")]
    List(Vec<GremlinValue>),
    #[serde(rename = "g:Set")]
    Set(Vec<GremlinValue>),
    /// Key/value pairs in insertion order. Keys may be of any kind.
    #[serde(rename = "g:Map")]
    Map(Vec<(GremlinValue, GremlinValue)>),
    /// A nested (anonymous) traversal.
    #[serde(rename = "g:Bytecode")]
    Bytecode(Bytecode),
    #[serde(rename = "g:Strategy")]
    Strategy(TraversalStrategy),
}

impl GremlinValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Uuid(_) => "uuid",
            Self::Date(_) => "date",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Bytecode(_) => "bytecode",
            Self::Strategy(_) => "strategy",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Build a map value from string keys and string values.
    pub fn string_map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (Self::String(k.into()), Self::String(v.into())))
                .collect(),
        )
    }

    /// Look up a map entry by string key.
    pub fn get(&self, key: &str) -> Option<&GremlinValue> {
        match self {
            Self::Map(entries) => entries
                .iter()
                .find(|(k, _)| matches!(k, Self::String(s) if s == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Borrow the options strategy if this value is one.
    pub fn as_options_strategy(&self) -> Option<&OptionsStrategy> {
        match self {
            Self::Strategy(TraversalStrategy::Options(options)) => Some(options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert into serde_json for logging and debugging output.
    pub fn to_json(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

fn write_double(f: &mut fmt::Formatter<'_>, d: f64, suffix: &str) -> fmt::Result {
    if d.is_nan() {
        f.write_str("NaN")
    } else if d.is_infinite() {
        f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" })
    } else if d.fract() == 0.0 && d.abs() < 1e16 {
        write!(f, "{d:.1}{suffix}")
    } else {
        write!(f, "{d}{suffix}")
    }
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a GremlinValue>,
{
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

/// Renders the value as a Gremlin literal.
impl fmt::Display for GremlinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}L"),
            Self::Float(x) => write_double(f, f64::from(*x), "f"),
            Self::Double(d) => write_double(f, *d, "d"),
            Self::String(s) => write_string_literal(f, s),
            Self::Uuid(u) => write!(f, "UUID('{u}')"),
            Self::Date(dt) => write!(
                f,
                "datetime('{}')",
                dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            ),
            Self::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Self::Set(items) => {
                f.write_str("{")?;
                write_joined(f, items)?;
                f.write_str("}")
            }
            Self::Map(entries) if entries.is_empty() => f.write_str("[:]"),
            Self::Map(entries) => {
                f.write_str("[")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
            Self::Bytecode(bytecode) => bytecode.write_anonymous(f),
            Self::Strategy(strategy) => write!(f, "{strategy}"),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for GremlinValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Uuid => Uuid,
    DateTime<Utc> => Date,
    Vec<GremlinValue> => List,
    Bytecode => Bytecode,
    TraversalStrategy => Strategy,
}

impl From<&str> for GremlinValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<OptionsStrategy> for GremlinValue {
    fn from(value: OptionsStrategy) -> Self {
        Self::Strategy(TraversalStrategy::Options(value))
    }
}

impl<V: Into<GremlinValue>> From<Option<V>> for GremlinValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<HashMap<String, GremlinValue>> for GremlinValue {
    fn from(value: HashMap<String, GremlinValue>) -> Self {
        Self::Map(
            value
                .into_iter()
                .map(|(k, v)| (Self::String(k), v))
                .collect(),
        )
    }
}

/// Conversion from a [`GremlinValue`] into a typed result element.
pub trait FromGremlinValue: Sized {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self>;
}

fn unexpected<T>(expected: &'static str, value: &GremlinValue) -> CoreResult<T> {
    Err(CoreError::UnexpectedValue {
        expected,
        actual: value.kind(),
    })
}

impl FromGremlinValue for GremlinValue {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        Ok(value)
    }
}

impl FromGremlinValue for bool {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Boolean(b) => Ok(b),
            other => unexpected("boolean", &other),
        }
    }
}

impl FromGremlinValue for i32 {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Int(i) => Ok(i),
            other => unexpected("int", &other),
        }
    }
}

impl FromGremlinValue for i64 {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Int(i) => Ok(i64::from(i)),
            GremlinValue::Long(l) => Ok(l),
            other => unexpected("long", &other),
        }
    }
}

impl FromGremlinValue for f64 {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Float(x) => Ok(f64::from(x)),
            GremlinValue::Double(d) => Ok(d),
            other => unexpected("double", &other),
        }
    }
}

impl FromGremlinValue for String {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::String(s) => Ok(s),
            other => unexpected("string", &other),
        }
    }
}

impl FromGremlinValue for Uuid {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Uuid(u) => Ok(u),
            other => unexpected("uuid", &other),
        }
    }
}

impl FromGremlinValue for DateTime<Utc> {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Date(dt) => Ok(dt),
            other => unexpected("date", &other),
        }
    }
}

impl<T: FromGremlinValue> FromGremlinValue for Option<T> {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::Null => Ok(None),
            other => T::from_gremlin(other).map(Some),
        }
    }
}

impl<T: FromGremlinValue> FromGremlinValue for Vec<T> {
    fn from_gremlin(value: GremlinValue) -> CoreResult<Self> {
        match value {
            GremlinValue::List(items) | GremlinValue::Set(items) => {
                items.into_iter().map(T::from_gremlin).collect()
            }
            other => unexpected("list", &other),
        }
    }
}
