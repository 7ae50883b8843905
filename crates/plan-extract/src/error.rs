use thiserror::Error;

/// Why a response yielded no plan. Callers treat every variant the same
/// way (substitute the default plan); the distinction exists for logs.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing or non-array workstreams field")]
    MissingWorkstreams,

    #[error("no workstreams survived normalization")]
    EmptyPlan,
}
