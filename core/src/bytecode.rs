//! Traversal bytecode: the serializable form of a traversal.
//!
//! A [`Bytecode`] is two ordered lists of [`Instruction`]s. Source
//! instructions configure the traversal source (strategies, side-effects,
//! bulk settings) and step instructions describe the traversal itself.

use crate::error::CoreResult;
use crate::tokens::WITH_STRATEGIES;
use crate::value::GremlinValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named operation with positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub operator_name: String,
    pub arguments: Vec<GremlinValue>,
}

impl Instruction {
    pub fn new(operator_name: impl Into<String>, arguments: Vec<GremlinValue>) -> Self {
        Self {
            operator_name: operator_name.into(),
            arguments,
        }
    }

    /// First argument, if any.
    pub fn first_argument(&self) -> Option<&GremlinValue> {
        self.arguments.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bytecode {
    source_instructions: Vec<Instruction>,
    step_instructions: Vec<Instruction>,
}

impl Bytecode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source instruction.
    pub fn add_source<I>(&mut self, operator_name: impl Into<String>, arguments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<GremlinValue>,
    {
        self.source_instructions.push(Instruction::new(
            operator_name,
            arguments.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Append a step instruction.
    pub fn add_step<I>(&mut self, operator_name: impl Into<String>, arguments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<GremlinValue>,
    {
        self.step_instructions.push(Instruction::new(
            operator_name,
            arguments.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Consuming variant of [`add_source`](Self::add_source).
    pub fn with_source<I>(mut self, operator_name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GremlinValue>,
    {
        self.add_source(operator_name, arguments);
        self
    }

    /// Consuming variant of [`add_step`](Self::add_step).
    pub fn with_step<I>(mut self, operator_name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GremlinValue>,
    {
        self.add_step(operator_name, arguments);
        self
    }

    /// Convenience for a `withStrategies` source instruction.
    pub fn with_strategies<I>(self, strategies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GremlinValue>,
    {
        self.with_source(WITH_STRATEGIES, strategies)
    }

    pub fn source_instructions(&self) -> &[Instruction] {
        &self.source_instructions
    }

    pub fn step_instructions(&self) -> &[Instruction] {
        &self.step_instructions
    }

    pub fn is_empty(&self) -> bool {
        self.source_instructions.is_empty() && self.step_instructions.is_empty()
    }

    pub fn to_json(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as an anonymous traversal (`__.out('knows')`).
    pub(crate) fn write_anonymous(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("__")?;
        write_instructions(f, &self.source_instructions)?;
        write_instructions(f, &self.step_instructions)
    }
}

fn write_instructions(f: &mut fmt::Formatter<'_>, instructions: &[Instruction]) -> fmt::Result {
    for instruction in instructions {
        write!(f, ".{}(", instruction.operator_name)?;
        for (i, arg) in instruction.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")?;
    }
    Ok(())
}

/// Renders the traversal as a Gremlin script rooted at `g`.
impl fmt::Display for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("g")?;
        write_instructions(f, &self.source_instructions)?;
        write_instructions(f, &self.step_instructions)
    }
}
