//! # Lagrange Critical-Analysis Engine
//!
//! This crate turns a critical-analysis request into a structured result by
//! way of a generative model: it assembles a deterministic prompt from the
//! request plus a read-only content graph, performs a single completion round
//! trip against a configurable provider, and extracts a validated JSON object
//! from the unstructured reply. Every failure surfaces as one variant of
//! [`AnalysisError`]; nothing provider-specific crosses the crate boundary.
//!
//! The engine is stateless: each call builds its own prompt, holds no cache,
//! and performs no retries. Timeout and retry policies belong to the caller.

pub mod context;
pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod types;

pub use context::{Axis, DomainContext, Node, SocraticQuestion};
pub use errors::AnalysisError;
pub use types::{
    AnalysisClient, AnalysisClientBuilder, AnalysisLevel, AnalysisRequest, AnalysisResult,
    FrictionResult, GenerationConfig, TensionLevel,
};

use prompts::{build_analysis_prompt, build_friction_prompt};
use tokio::sync::oneshot;
use tracing::{debug, info};

impl AnalysisClient {
    fn check_request(request: &AnalysisRequest) -> Result<(), AnalysisError> {
        if request.text.trim().is_empty() {
            return Err(AnalysisError::Unknown(
                "analysis request text is empty".into(),
            ));
        }
        Ok(())
    }

    /// Runs one standard critical analysis.
    ///
    /// Single pass: build the prompt, one round trip, extract. The same
    /// request issued twice produces two independent network calls.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        context: &DomainContext,
    ) -> Result<AnalysisResult, AnalysisError> {
        Self::check_request(request)?;
        info!("[analyze] running critical analysis");
        let prompt = build_analysis_prompt(request, context);
        debug!(prompt = %prompt, "--> Sending analysis prompt");
        let raw = self.provider.complete(&prompt, &self.config).await?;
        debug!("<-- Completion: {raw}");
        extract::extract_analysis(&raw)
    }

    /// Like [`analyze`](Self::analyze), but aborts when the cancellation
    /// signal fires (or its sender is dropped).
    ///
    /// A cancelled call resolves to a `Transport` error with no status; no
    /// partial extraction is attempted.
    pub async fn analyze_with_cancellation(
        &self,
        request: &AnalysisRequest,
        context: &DomainContext,
        cancel: oneshot::Receiver<()>,
    ) -> Result<AnalysisResult, AnalysisError> {
        Self::check_request(request)?;
        info!("[analyze] running cancellable critical analysis");
        let prompt = build_analysis_prompt(request, context);
        debug!(prompt = %prompt, "--> Sending analysis prompt");
        tokio::select! {
            raw = self.provider.complete(&prompt, &self.config) => {
                let raw = raw?;
                debug!("<-- Completion: {raw}");
                extract::extract_analysis(&raw)
            }
            _ = cancel => {
                info!("[analyze] request cancelled in flight");
                Err(AnalysisError::Transport {
                    status: None,
                    message: "request cancelled".to_string(),
                })
            }
        }
    }

    /// Runs one friction analysis.
    ///
    /// Always uses the friction generation preset; the prompt asks for the
    /// affirmation/contradiction/open-question shape plus suggested nodes.
    pub async fn friction(
        &self,
        request: &AnalysisRequest,
        context: &DomainContext,
    ) -> Result<FrictionResult, AnalysisError> {
        Self::check_request(request)?;
        info!("[friction] running friction analysis");
        let prompt = build_friction_prompt(request, context);
        debug!(prompt = %prompt, "--> Sending friction prompt");
        let raw = self
            .provider
            .complete(&prompt, &GenerationConfig::friction())
            .await?;
        debug!("<-- Completion: {raw}");
        extract::extract_friction(&raw)
    }
}
