pub mod gemini;

use crate::{errors::AnalysisError, types::GenerationConfig};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a generative-text provider.
///
/// One call is one network round trip: no retries, no caching, no shared
/// state between calls. Resilience policies (timeout, retry) are composed by
/// the caller around this method.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends a prompt with the given generation parameters and returns the
    /// raw completion text.
    ///
    /// Implementations must return `EmptyCompletion` instead of a blank
    /// string, and `MissingApiKey` before any I/O when no credential is
    /// configured.
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, AnalysisError>;
}

dyn_clone::clone_trait_object!(AiProvider);
