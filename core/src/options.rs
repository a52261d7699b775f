//! Selection of per-request options from a traversal's `OptionsStrategy`.
//!
//! Callers may put anything in an `OptionsStrategy`. Only the keys in
//! [`ALLOWED_KEYS`] are lifted into request arguments; everything else stays
//! inside the bytecode and is never sent as a request argument. Unknown keys
//! are dropped silently.

use crate::bytecode::Bytecode;
use crate::strategy::OptionsStrategy;
use crate::tokens::{
    ARGS_BATCH_SIZE, ARGS_EVAL_TIMEOUT, ARGS_SCRIPT_EVAL_TIMEOUT, ARGS_USER_AGENT, REQUEST_ID,
    WITH_STRATEGIES,
};
use crate::value::GremlinValue;

/// Option keys forwarded to the server as request arguments.
///
/// `scriptEvaluationTimeout` is the deprecated name of `evaluationTimeout`
/// and is still forwarded as-is.
pub const ALLOWED_KEYS: &[&str] = &[
    ARGS_EVAL_TIMEOUT,
    ARGS_SCRIPT_EVAL_TIMEOUT,
    ARGS_BATCH_SIZE,
    REQUEST_ID,
    ARGS_USER_AGENT,
];

/// Whether `key` is forwarded to the server as a request argument.
pub fn is_allowed_key(key: &str) -> bool {
    ALLOWED_KEYS.contains(&key)
}

/// Find the options strategy declared on the traversal source.
///
/// Only the first `withStrategies` instruction whose first argument is an
/// options strategy counts. Later ones are ignored, not merged.
pub fn find_options_strategy(bytecode: &Bytecode) -> Option<&OptionsStrategy> {
    bytecode
        .source_instructions()
        .iter()
        .filter(|inst| inst.operator_name == WITH_STRATEGIES)
        .find_map(|inst| inst.first_argument()?.as_options_strategy())
}

/// Options of the traversal that may be sent as request arguments.
pub fn allowed_options(bytecode: &Bytecode) -> impl Iterator<Item = (&str, &GremlinValue)> {
    find_options_strategy(bytecode)
        .into_iter()
        .flat_map(|options| options.configuration.iter())
        .filter_map(|(key, value)| {
            if is_allowed_key(key) {
                Some((key.as_str(), value))
            } else {
                tracing::trace!(key = %key, "Dropping option not forwarded to server");
                None
            }
        })
}
