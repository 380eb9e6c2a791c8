//! # Prompt Builder Tests
//!
//! Validates the determinism and context-resolution rules of the prompt
//! builders: axis fallback, unresolved-reference tolerance, and the fixed
//! ordering of the context block.

mod common;

use common::lagrange_context;
use lagrange_lab::prompts::{build_analysis_prompt, build_friction_prompt};
use lagrange_lab::{AnalysisLevel, AnalysisRequest, DomainContext, TensionLevel};

fn request() -> AnalysisRequest {
    AnalysisRequest {
        text: "¿Qué es el control?".into(),
        axes: vec!["miedo".into()],
        level: AnalysisLevel::Individual,
        tension: TensionLevel::Etica,
        linked_question_id: None,
    }
}

/// Identical inputs must produce byte-identical prompts.
#[test]
fn test_prompt_is_deterministic() {
    let context = lagrange_context();
    let request = request();
    assert_eq!(
        build_analysis_prompt(&request, &context),
        build_analysis_prompt(&request, &context)
    );
    assert_eq!(
        build_friction_prompt(&request, &context),
        build_friction_prompt(&request, &context)
    );
}

/// An empty axis selection expands to every axis the context knows.
#[test]
fn test_empty_axes_falls_back_to_all_axes() {
    let context = lagrange_context();
    let mut request = request();
    request.axes = vec![];
    let prompt = build_analysis_prompt(&request, &context);
    assert!(prompt.contains("Miedo"));
    assert!(prompt.contains("Control"));
    assert!(prompt.contains("Legitimidad"));
}

/// An explicit selection resolves only those axes, in context order of lookup.
#[test]
fn test_selected_axes_are_resolved_to_labels() {
    let context = lagrange_context();
    let prompt = build_analysis_prompt(&request(), &context);
    assert!(prompt.contains("Ejes: Miedo\n"));
    assert!(!prompt.contains("Legitimidad"));
}

/// Unknown axis ids are skipped silently rather than failing the build.
#[test]
fn test_unresolved_axis_ids_are_skipped() {
    let context = lagrange_context();
    let mut request = request();
    request.axes = vec!["miedo".into(), "no-existe".into()];
    let prompt = build_analysis_prompt(&request, &context);
    assert!(prompt.contains("Ejes: Miedo\n"));
    assert!(!prompt.contains("no-existe"));
}

/// A linked question that resolves contributes its text and metadata.
#[test]
fn test_resolved_linked_question_is_included() {
    let context = lagrange_context();
    let mut request = request();
    request.linked_question_id = Some("q-control-1".into());
    let prompt = build_analysis_prompt(&request, &context);
    assert!(prompt.contains("¿Quién vigila a quien diseña la vigilancia?"));
    assert!(prompt.contains("nivel: institucional"));
    assert!(prompt.contains("tensión: política"));
}

/// A linked question that does not resolve is treated as absent, not an error.
#[test]
fn test_unresolved_linked_question_is_omitted() {
    let context = lagrange_context();
    let mut request = request();
    request.linked_question_id = Some("q-fantasma".into());
    let prompt = build_analysis_prompt(&request, &context);
    assert!(!prompt.contains("Pregunta socrática"));
    assert!(prompt.contains("¿Qué es el control?"));
}

/// The prompt carries the user text, the level/tension vocabulary, and the
/// JSON output contract the extractor depends on.
#[test]
fn test_prompt_carries_text_and_output_contract() {
    let context = lagrange_context();
    let prompt = build_analysis_prompt(&request(), &context);
    assert!(prompt.contains("Texto usuario: ¿Qué es el control?"));
    assert!(prompt.contains("Nivel: individual"));
    assert!(prompt.contains("Tensión: ética"));
    assert!(prompt.contains("\"supuesto\""));
    assert!(prompt.contains("\"preguntaEvita\""));
    assert!(prompt.contains("JSON"));
}

/// The friction prompt offers only the node ids of the resolved axes as
/// `suggestedNodes` candidates.
#[test]
fn test_friction_prompt_lists_nodes_of_selected_axes() {
    let context = lagrange_context();
    let prompt = build_friction_prompt(&request(), &context);
    assert!(prompt.contains("Nodos disponibles: n-miedo-origen\n"));
    assert!(!prompt.contains("n-control-vigilancia"));
    assert!(prompt.contains("\"suggestedNodes\""));
    assert!(prompt.contains("\"openQuestion\""));
}

/// With an empty context there are no axes to expand to and no node list;
/// the build still succeeds.
#[test]
fn test_empty_context_still_builds() {
    let context = DomainContext::default();
    let mut request = request();
    request.axes = vec![];
    let prompt = build_friction_prompt(&request, &context);
    assert!(prompt.contains("Ejes: \n"));
    assert!(!prompt.contains("Nodos disponibles"));
}
