#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared fixtures for the integration tests: a scripted mock provider and a
//! small content graph, so tests are isolated and repeatable.

use async_trait::async_trait;
use dotenvy::dotenv;
use lagrange_lab::{
    providers::ai::AiProvider, AnalysisError, AnalysisLevel, Axis, DomainContext,
    GenerationConfig, Node, SocraticQuestion, TensionLevel,
};
use std::sync::{Arc, Once, RwLock};
use std::time::Duration;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

/// A mock completion provider that replays a scripted response queue and
/// records every completed call with the prompt and config it received.
///
/// An empty string in the queue (or an exhausted queue) yields
/// `EmptyCompletion`, matching the provider contract that a blank success is
/// never returned. An optional delay keeps the call in flight for
/// cancellation tests; calls are recorded only once the delay has elapsed.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, GenerationConfig)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
    pub delay: Option<Duration>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls that ran to completion.
    pub fn completed_calls(&self) -> usize {
        self.call_history.read().unwrap().len()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, AnalysisError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.call_history
            .write()
            .unwrap()
            .push((prompt.to_string(), *config));

        match self.responses.write().unwrap().pop() {
            Some(response) if !response.trim().is_empty() => Ok(response),
            _ => Err(AnalysisError::EmptyCompletion),
        }
    }
}

/// A small content graph in the shape of the real one: three axes of the
/// miedo → control → legitimidad chain, a few map nodes, one question.
pub fn lagrange_context() -> DomainContext {
    DomainContext::new(
        vec![
            Axis {
                id: "miedo".into(),
                label: "Miedo".into(),
            },
            Axis {
                id: "control".into(),
                label: "Control".into(),
            },
            Axis {
                id: "legitimidad".into(),
                label: "Legitimidad".into(),
            },
        ],
        vec![
            Node {
                id: "n-miedo-origen".into(),
                axis: "miedo".into(),
                title: "El miedo como origen".into(),
            },
            Node {
                id: "n-control-vigilancia".into(),
                axis: "control".into(),
                title: "Vigilancia y consentimiento".into(),
            },
            Node {
                id: "n-legitimidad-relato".into(),
                axis: "legitimidad".into(),
                title: "El relato que legitima".into(),
            },
        ],
        vec![SocraticQuestion {
            id: "q-control-1".into(),
            axis: "control".into(),
            level: AnalysisLevel::Institucional,
            tension: TensionLevel::Politica,
            text: "¿Quién vigila a quien diseña la vigilancia?".into(),
        }],
    )
}
