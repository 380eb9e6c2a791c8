//! # Domain Context Store
//!
//! The read-only content graph of the Lagrange system: conceptual axes, map
//! nodes, and socratic questions. The engine only ever looks entities up by
//! exact id; it never mutates the graph. The data itself is editorial content
//! loaded by the application layer (typically from a versioned JSON file) and
//! handed in pre-built.

use crate::types::{AnalysisLevel, TensionLevel};
use serde::Deserialize;

/// A thematic axis of the content graph, e.g. `miedo` → "Miedo".
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub id: String,
    pub label: String,
}

/// A node of the concept map, tagged with the axis it belongs to.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    #[serde(rename = "eje")]
    pub axis: String,
    #[serde(rename = "titulo")]
    pub title: String,
}

/// An open, unresolved question associated with an axis and a tension.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocraticQuestion {
    pub id: String,
    #[serde(rename = "eje")]
    pub axis: String,
    #[serde(rename = "nivel")]
    pub level: AnalysisLevel,
    pub tension: TensionLevel,
    #[serde(rename = "texto")]
    pub text: String,
}

/// The pre-loaded content graph supplied to the prompt builder.
///
/// Axes and nodes keep their insertion order; the prompt builder depends on
/// that for deterministic output.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DomainContext {
    #[serde(rename = "ejes", default)]
    pub axes: Vec<Axis>,
    #[serde(rename = "nodos", default)]
    pub nodes: Vec<Node>,
    #[serde(rename = "preguntas", default)]
    pub questions: Vec<SocraticQuestion>,
}

impl DomainContext {
    pub fn new(axes: Vec<Axis>, nodes: Vec<Node>, questions: Vec<SocraticQuestion>) -> Self {
        Self {
            axes,
            nodes,
            questions,
        }
    }

    /// Looks up an axis by exact id.
    pub fn axis(&self, id: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    /// Looks up a map node by exact id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up a socratic question by exact id.
    pub fn question(&self, id: &str) -> Option<&SocraticQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}
