use thiserror::Error;

/// Custom error types for the analysis engine.
///
/// Every failure path in the engine is classified into exactly one of these
/// variants before it reaches the caller. Callers should match on the variant
/// for control flow; the messages are for display and logging only.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No API credential was configured. Fatal per call; retrying without
    /// operator action cannot succeed.
    #[error("API key is missing")]
    MissingApiKey,
    /// The network round trip failed or the provider returned a non-success
    /// status. `status` is `None` when no HTTP response was received, which
    /// includes a cancelled call. Potentially transient.
    #[error("transport failure: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// The provider answered successfully but the payload carried no usable
    /// text. Safe to retry.
    #[error("provider returned an empty completion")]
    EmptyCompletion,
    /// The completion text did not contain a valid, shape-complete JSON
    /// object. Carries a bounded excerpt of the raw text for diagnostics.
    /// Repeated occurrence suggests a prompt-contract mismatch rather than a
    /// network issue.
    #[error("malformed model output: {excerpt}")]
    MalformedOutput { excerpt: String },
    /// Anything that does not fit the taxonomy above, such as a failed HTTP
    /// client build or an empty request.
    #[error("{0}")]
    Unknown(String),
}
