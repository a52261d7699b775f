//! Traversal strategies that can be declared on a traversal source.

use crate::value::GremlinValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Name the server uses for [`OptionsStrategy`].
pub const OPTIONS_STRATEGY: &str = "OptionsStrategy";

/// A strategy passed as an argument of a `withStrategies` source instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraversalStrategy {
    /// Per-request options, some of which are lifted into request arguments.
    Options(OptionsStrategy),
    /// Any other decoration strategy, forwarded inside the bytecode as-is.
    Decoration {
        name: String,
        configuration: HashMap<String, GremlinValue>,
    },
}

impl TraversalStrategy {
    /// Create a decoration strategy with no configuration.
    pub fn decoration(name: impl Into<String>) -> Self {
        Self::Decoration {
            name: name.into(),
            configuration: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Options(_) => OPTIONS_STRATEGY,
            Self::Decoration { name, .. } => name,
        }
    }

    pub fn configuration(&self) -> &HashMap<String, GremlinValue> {
        match self {
            Self::Options(options) => &options.configuration,
            Self::Decoration { configuration, .. } => configuration,
        }
    }
}

/// Arbitrary key/value options supplied by the caller for a single traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsStrategy {
    pub configuration: HashMap<String, GremlinValue>,
}

impl OptionsStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, replacing any previous value under the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<GremlinValue>) -> Self {
        self.configuration.insert(key.into(), value.into());
        self
    }
}

impl FromIterator<(String, GremlinValue)> for OptionsStrategy {
    fn from_iter<I: IntoIterator<Item = (String, GremlinValue)>>(iter: I) -> Self {
        Self {
            configuration: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let configuration = self.configuration();
        f.write_str(self.name())?;
        if configuration.is_empty() {
            return Ok(());
        }
        // keys sorted for stable output
        let mut keys: Vec<&String> = configuration.keys().collect();
        keys.sort();
        f.write_str("(")?;
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", key, configuration[key])?;
        }
        f.write_str(")")
    }
}
