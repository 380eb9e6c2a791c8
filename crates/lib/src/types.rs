use crate::{errors::AnalysisError, providers::ai::AiProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The analytical register of a request, fixed vocabulary.
///
/// Wire names are the Spanish lowercase forms used across the content graph.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensionLevel {
    #[serde(rename = "ética")]
    Etica,
    #[serde(rename = "política")]
    Politica,
    #[serde(rename = "psicológica")]
    Psicologica,
    #[serde(rename = "simbólica")]
    Simbolica,
}

impl TensionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TensionLevel::Etica => "ética",
            TensionLevel::Politica => "política",
            TensionLevel::Psicologica => "psicológica",
            TensionLevel::Simbolica => "simbólica",
        }
    }
}

impl fmt::Display for TensionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scope at which the analysis operates, fixed vocabulary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisLevel {
    #[serde(rename = "individual")]
    Individual,
    #[serde(rename = "institucional")]
    Institucional,
    #[serde(rename = "sistémico")]
    Sistemico,
}

impl AnalysisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisLevel::Individual => "individual",
            AnalysisLevel::Institucional => "institucional",
            AnalysisLevel::Sistemico => "sistémico",
        }
    }
}

impl fmt::Display for AnalysisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to the analysis engine.
///
/// Deserializes from the JSON shape the laboratory form submits, so it can be
/// built directly from an API payload.
#[derive(Deserialize, Debug, Clone)]
pub struct AnalysisRequest {
    /// Free-form user input or corpus excerpt. Required, non-empty after trim.
    #[serde(rename = "texto")]
    pub text: String,
    /// Selected axis ids. An empty selection means "all axes in the context".
    #[serde(rename = "ejes", default)]
    pub axes: Vec<String>,
    #[serde(rename = "nivel")]
    pub level: AnalysisLevel,
    pub tension: TensionLevel,
    /// Reference into the domain context. An unresolved id is skipped, never
    /// an error.
    #[serde(rename = "preguntaId", default)]
    pub linked_question_id: Option<String>,
}

/// The validated structured output of a critical analysis.
///
/// Wire field names follow the output contract the prompt dictates to the
/// model. Every field is a non-empty string; the extractor enforces that.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    #[serde(rename = "supuesto")]
    pub assumption: String,
    #[serde(rename = "contradiccion")]
    pub contradiction: String,
    #[serde(rename = "eje")]
    pub axis_activated: String,
    pub tension: String,
    #[serde(rename = "preguntaEvita")]
    pub avoided_question: String,
}

/// The friction variant of an analysis: affirmation, contradiction and open
/// question, plus suggested concept-map nodes to explore next.
///
/// `suggested_nodes` may be empty; the three text fields must not be.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FrictionResult {
    pub affirmation: String,
    pub contradiction: String,
    #[serde(rename = "openQuestion")]
    pub open_question: String,
    #[serde(rename = "suggestedNodes")]
    pub suggested_nodes: Vec<String>,
}

/// Sampling parameters for one completion call, serialized camelCase into the
/// request's `generationConfig` object.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: i32,
    pub top_p: f32,
    pub max_output_tokens: i32,
}

impl Default for GenerationConfig {
    /// The standard analysis preset.
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

impl GenerationConfig {
    /// The friction preset. Hotter sampling on purpose: formulaic phrasing
    /// defeats the point of the exercise.
    pub fn friction() -> Self {
        Self {
            temperature: 0.9,
            max_output_tokens: 1024,
            ..Self::default()
        }
    }
}

/// A client that runs the full analysis pipeline: prompt construction, one
/// completion round trip, extraction and validation.
#[derive(Clone)]
pub struct AnalysisClient {
    pub(crate) provider: Box<dyn AiProvider>,
    pub(crate) config: GenerationConfig,
}

impl fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("provider", &self.provider)
            .field("config", &self.config)
            .finish()
    }
}

/// A builder for creating `AnalysisClient` instances.
#[derive(Default)]
pub struct AnalysisClientBuilder {
    provider: Option<Box<dyn AiProvider>>,
    config: Option<GenerationConfig>,
}

impl AnalysisClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completion provider.
    pub fn provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Overrides the default generation parameters used by `analyze`.
    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the `AnalysisClient`, failing if no provider was configured.
    pub fn build(self) -> Result<AnalysisClient, AnalysisError> {
        let provider = self
            .provider
            .ok_or_else(|| AnalysisError::Unknown("no completion provider configured".into()))?;
        Ok(AnalysisClient {
            provider,
            config: self.config.unwrap_or_default(),
        })
    }
}
