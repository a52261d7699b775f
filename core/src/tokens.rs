//! Protocol tokens shared by every request sent to a Gremlin server.
//!
//! Names are case-sensitive and must match what the server expects.

/// Operation that evaluates traversal bytecode.
pub const OPS_BYTECODE: &str = "bytecode";

/// Operation that lists the side-effect keys of a traversal.
pub const OPS_KEYS: &str = "keys";

/// Operation that gathers a single side-effect value.
pub const OPS_GATHER: &str = "gather";

/// Operation that releases the side-effects held by the server.
pub const OPS_CLOSE: &str = "close";

/// Processor that handles traversal operations.
pub const PROCESSOR_TRAVERSAL: &str = "traversal";

/// Argument holding the traversal bytecode.
pub const ARGS_GREMLIN: &str = "gremlin";

/// Argument holding the traversal source alias bindings.
pub const ARGS_ALIASES: &str = "aliases";

/// Per-request evaluation timeout in milliseconds.
pub const ARGS_EVAL_TIMEOUT: &str = "evaluationTimeout";

/// Deprecated name of [`ARGS_EVAL_TIMEOUT`], still honoured by servers.
pub const ARGS_SCRIPT_EVAL_TIMEOUT: &str = "scriptEvaluationTimeout";

/// Number of results the server sends per response frame.
pub const ARGS_BATCH_SIZE: &str = "batchSize";

/// Caller-supplied request id override.
pub const REQUEST_ID: &str = "requestId";

/// User agent reported to the server.
pub const ARGS_USER_AGENT: &str = "userAgent";

/// Request id whose side-effects are addressed.
pub const ARGS_SIDE_EFFECT: &str = "sideEffect";

/// Name of the side-effect to gather.
pub const ARGS_SIDE_EFFECT_KEY: &str = "sideEffectKey";

/// Collection type the gathered side-effect is aggregated into.
pub const ARGS_AGGREGATE_TO: &str = "aggregateTo";

/// Aggregate gathered side-effects into a list.
pub const VAL_AGGREGATE_TO_LIST: &str = "list";

/// Source instruction that declares traversal strategies.
pub const WITH_STRATEGIES: &str = "withStrategies";

/// Alias under which the traversal source is bound on the server.
pub const DEFAULT_ALIAS: &str = "g";

/// Traversal source used when none is configured.
pub const DEFAULT_TRAVERSAL_SOURCE: &str = "g";
