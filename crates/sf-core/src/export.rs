//! JSON wire format for space-field packages.
//!
//! The exported schema is renderer-agnostic and intentionally minimal:
//! tokens and expansions carry only identity, text/glyph, position and RGB —
//! internal scoring fields (weight, energy, intensity, …) never leave the
//! engine. Import accepts the export schema or a looser superset, requiring
//! only that `tokens` is present and sequence-typed.

use serde::{Deserialize, Serialize};

use crate::field::{Edge, SpaceField, Triangle};
use crate::graph::Graph;
use crate::retrieval::Retrieval;
use crate::time::now_iso8601;

pub const CURRENT_VERSION: &str = "0.0.1";

// --- Wire format types ---

#[derive(Serialize, Deserialize, Debug)]
pub struct WirePackage {
    pub version: String,
    pub exported_at: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub trace_summary: String,
    pub space_field: WireField,
    #[serde(default)]
    pub retrieval: Option<Vec<String>>,
    #[serde(default)]
    pub graph: Option<WireGraph>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct WireField {
    pub tokens: Vec<WireToken>,
    #[serde(default)]
    pub expansions: Vec<WireExpansion>,
    #[serde(default)]
    pub triangles: Vec<Triangle>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireToken {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_glyph")]
    pub glyph: char,
    /// Missing positions backfill to the origin on import.
    #[serde(default)]
    pub pos: [f64; 2],
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_token_color")]
    pub color: [f64; 3],
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireExpansion {
    pub id: String,
    #[serde(default)]
    pub of: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_glyph")]
    pub glyph: char,
    #[serde(default)]
    pub pos: [f64; 2],
    #[serde(default = "default_expansion_color")]
    pub color: [f64; 3],
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct WireGraph {
    pub nodes: Vec<WireGraphNode>,
    pub edges: Vec<WireGraphEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireGraphNode {
    pub id: String,
    pub pos: [f64; 2],
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireGraphEdge {
    pub id: String,
    pub a: String,
    pub b: String,
    pub k: f64,
}

fn default_glyph() -> char {
    '?'
}

fn default_radius() -> f64 {
    24.0
}

fn default_token_color() -> [f64; 3] {
    [0.5, 0.5, 0.5]
}

fn default_expansion_color() -> [f64; 3] {
    [0.4, 0.4, 0.4]
}

// --- Conversion: domain → wire ---

/// Project a space field into the minimal export schema.
pub fn export_field(field: &SpaceField) -> WireField {
    WireField {
        tokens: field
            .tokens
            .iter()
            .map(|t| WireToken {
                id: t.id.clone(),
                text: t.text.clone(),
                glyph: t.glyph,
                pos: t.pos,
                radius: t.radius,
                color: t.rgb,
            })
            .collect(),
        expansions: field
            .expansions
            .iter()
            .map(|e| WireExpansion {
                id: e.id.clone(),
                of: e.of.clone(),
                text: e.text.clone(),
                glyph: e.glyph,
                pos: e.pos,
                color: e.rgb,
            })
            .collect(),
        triangles: field.triangles.clone(),
        edges: field.edges.clone(),
    }
}

/// Wrap a wire field with package metadata.
pub fn bundle(
    field: WireField,
    retrieval: Option<&Retrieval>,
    graph: Option<&Graph>,
    prompt: &str,
    answer: &str,
    trace_summary: &str,
) -> WirePackage {
    WirePackage {
        version: CURRENT_VERSION.to_string(),
        exported_at: now_iso8601(),
        prompt: prompt.to_string(),
        answer: answer.to_string(),
        trace_summary: trace_summary.to_string(),
        space_field: field,
        retrieval: retrieval.map(|r| r.summary.clone()),
        graph: graph.map(|g| WireGraph {
            nodes: g
                .nodes
                .iter()
                .map(|n| WireGraphNode {
                    id: n.id.clone(),
                    pos: n.pos,
                })
                .collect(),
            edges: g
                .edges
                .iter()
                .map(|e| WireGraphEdge {
                    id: e.id.clone(),
                    a: e.a.clone(),
                    b: e.b.clone(),
                    k: e.k,
                })
                .collect(),
        }),
    }
}

// --- JSON boundary ---

/// Serialize a package to pretty JSON.
pub fn export_json(package: &WirePackage) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(package)
}

/// Deserialize a full package.
pub fn import_package(json: &str) -> Result<WirePackage, serde_json::Error> {
    serde_json::from_str(json)
}

/// Deserialize a wire field from either a bare field object or a full
/// package (the field is lifted out of `space_field`). Fails when `tokens`
/// is missing or not a sequence; every other field defaults.
pub fn import_json(json: &str) -> Result<WireField, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let field_value = match value.get("space_field") {
        Some(inner) => inner.clone(),
        None => value,
    };
    serde_json::from_value(field_value)
}
