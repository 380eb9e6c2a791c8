//! # Core Prompt Templates
//!
//! The invariant directives sent ahead of every request, and the builders
//! that splice the dynamic context in. The directives carry the editorial
//! rules of the laboratory; changing them changes the register of every
//! analysis, so they live here as versioned constants rather than caller
//! input.

use crate::{
    context::{Axis, DomainContext},
    types::AnalysisRequest,
};

/// The analyst persona and ground rules for the standard analysis.
pub const ANALYSIS_DIRECTIVE: &str = r#"Actúa como analista crítico del Sistema Lagrange.

Reglas:
- No valides emocionalmente.
- No moralices.
- No busques consenso.
- Trata el input como síntoma, no como verdad.
- Devuelve el análisis desde el sistema, no desde el individuo.

Reglas éticas del Laboratorio:
1. El sistema no es terapeuta.
2. El sistema no es juez.
3. El sistema no acompaña: confronta.
4. El malestar no se corrige, se interpreta.
5. Si el análisis incomoda, está funcionando."#;

/// The output contract for the standard analysis. The extractor depends on
/// the model honoring exactly this field set.
pub const ANALYSIS_OUTPUT_CONTRACT: &str = r#"Responde ÚNICAMENTE con un objeto JSON válido siguiendo este formato exacto:
{
  "supuesto": "<supuesto implícito detectado>",
  "contradiccion": "<contradicción principal>",
  "eje": "<eje activado>",
  "tension": "<tensión dominante>",
  "preguntaEvita": "<pregunta que el sistema evita>"
}"#;

/// The friction persona: no summary, no comfort, find the tension.
pub const FRICTION_DIRECTIVE: &str = r#"Actúa como agente de fricción del Sistema Lagrange.
Lee el contexto proporcionado y genera fricción intelectual:
- No resumas.
- No simplifiques.
- Encuentra la tensión.
- Formula la pregunta incómoda.
- Termina con una pregunta, no una conclusión."#;

/// The output contract for the friction analysis.
pub const FRICTION_OUTPUT_CONTRACT: &str = r#"Analiza este contexto y responde SOLO con un objeto JSON válido siguiendo este formato exacto:
{
  "affirmation": "Una afirmación del corpus o contexto",
  "contradiction": "Una contradicción estructural o conceptual",
  "openQuestion": "Una pregunta socrática sin respuesta fácil",
  "suggestedNodes": ["nodo1", "nodo2"]
}"#;

/// Resolves the request's axis selection against the context.
///
/// Unresolved ids are skipped. An empty selection expands to every axis the
/// context knows; callers that want no axis context at all must say so by
/// passing an explicit set.
fn resolved_axes<'a>(request: &AnalysisRequest, context: &'a DomainContext) -> Vec<&'a Axis> {
    if request.axes.is_empty() {
        context.axes.iter().collect()
    } else {
        request
            .axes
            .iter()
            .filter_map(|id| context.axis(id))
            .collect()
    }
}

/// Renders the shared context block: axes, linked question, level, tension
/// and the user's text, in that fixed order.
fn context_block(request: &AnalysisRequest, context: &DomainContext) -> String {
    let labels: Vec<&str> = resolved_axes(request, context)
        .iter()
        .map(|a| a.label.as_str())
        .collect();

    let mut block = String::new();
    block.push_str(&format!("Ejes: {}\n", labels.join(", ")));
    if let Some(id) = &request.linked_question_id {
        if let Some(q) = context.question(id) {
            block.push_str(&format!(
                "Pregunta socrática: {} (eje: {}, nivel: {}, tensión: {})\n",
                q.text, q.axis, q.level, q.tension
            ));
        }
    }
    block.push_str(&format!("Nivel: {}\n", request.level));
    block.push_str(&format!("Tensión: {}\n", request.tension));
    block.push_str(&format!("Texto usuario: {}\n", request.text));
    block
}

/// Builds the full prompt for a standard critical analysis.
///
/// Pure and deterministic: identical request and context always produce a
/// byte-identical string.
pub fn build_analysis_prompt(request: &AnalysisRequest, context: &DomainContext) -> String {
    format!(
        "{ANALYSIS_DIRECTIVE}\n\n---\nContexto de análisis:\n{block}\n{ANALYSIS_OUTPUT_CONTRACT}",
        block = context_block(request, context)
    )
}

/// Builds the full prompt for a friction analysis.
///
/// On top of the shared context block it offers the ids of the concept-map
/// nodes belonging to the resolved axes as candidates for `suggestedNodes`,
/// so the model suggests nodes that actually exist.
pub fn build_friction_prompt(request: &AnalysisRequest, context: &DomainContext) -> String {
    let axes = resolved_axes(request, context);
    let node_ids: Vec<&str> = context
        .nodes
        .iter()
        .filter(|n| axes.iter().any(|a| a.id == n.axis))
        .map(|n| n.id.as_str())
        .collect();

    let mut block = context_block(request, context);
    if !node_ids.is_empty() {
        block.push_str(&format!("Nodos disponibles: {}\n", node_ids.join(", ")));
    }

    format!(
        "{FRICTION_DIRECTIVE}\n\n---\nContexto de análisis:\n{block}\n{FRICTION_OUTPUT_CONTRACT}"
    )
}
