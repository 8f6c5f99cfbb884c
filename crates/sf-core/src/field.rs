//! Aggregate records of a pipeline run.
//!
//! A `SpaceField` is the renderable artifact handed to exporters and
//! external renderers: every token and expansion carries a position, a
//! radius, a glyph and a color, every edge resolves to node ids, and every
//! triangle names exactly three resolvable nodes.

use serde::{Deserialize, Serialize};

use crate::expand::ExpansionKind;

/// Fully-assembled token record. Built by layering the tokenizer, quantizer,
/// glyph, color and layout stages; immutable once the run completes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub text: String,
    pub weight: f64,
    pub norm: f64,
    pub energy: f64,
    pub bin: u32,
    pub radius: f64,
    pub intensity: f64,
    pub glyph: char,
    pub hsv: [f64; 3],
    pub rgb: [f64; 3],
    pub alpha: f64,
    pub pos: [f64; 2],
}

/// Fully-assembled expansion record. `of` is a weak reference to the parent
/// token id; resolution always goes through an id index, never a pointer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expansion {
    pub id: String,
    pub of: String,
    #[serde(rename = "type")]
    pub kind: ExpansionKind,
    pub text: String,
    pub v: f64,
    pub glyph: char,
    pub hsv: [f64; 3],
    pub rgb: [f64; 3],
    pub alpha: f64,
    pub pos: [f64; 2],
}

/// Directed association from a token to one of its expansions.
/// `k` is a non-negative weight reused for layout distance and rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub k: f64,
}

/// Decorative grouping of exactly three node ids, chunked from consecutive
/// expansions. Incomplete trailing chunks are dropped at build time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Triangle {
    pub id: String,
    pub nodes: [String; 3],
    pub hsv: [f64; 3],
    pub rgb: [f64; 3],
    pub alpha: f64,
}

/// Axis-aligned bounding box over token discs, used for camera fitting.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// The exported unit of one pipeline run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpaceField {
    pub tokens: Vec<Token>,
    pub expansions: Vec<Expansion>,
    pub triangles: Vec<Triangle>,
    pub edges: Vec<Edge>,
    pub bounds: Bounds,
}

impl SpaceField {
    /// Position of a node (token or expansion) by id, if present.
    pub fn node_pos(&self, id: &str) -> Option<[f64; 2]> {
        self.tokens
            .iter()
            .map(|t| (t.id.as_str(), t.pos))
            .chain(self.expansions.iter().map(|e| (e.id.as_str(), e.pos)))
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, pos)| pos)
    }
}

impl Default for Token {
    fn default() -> Self {
        Self {
            id: String::new(),
            text: String::new(),
            weight: 1.0,
            norm: 0.0,
            energy: 0.0,
            bin: 1,
            radius: crate::constants::RADIUS_BASE + crate::constants::RADIUS_STEP,
            intensity: 0.0,
            glyph: '?',
            hsv: [0.0, 0.0, 0.0],
            rgb: [0.5, 0.5, 0.5],
            alpha: 0.9,
            pos: [0.0, 0.0],
        }
    }
}
