use std::collections::HashMap;

use crate::constants::COHESION_SCALE;
use crate::graph::Graph;

/// Normalized salience per node plus the descending focus list.
#[derive(Clone, Debug, Default)]
pub struct AttentionMap {
    pub scores: HashMap<String, f64>,
    /// (node id, score) sorted by score descending; ties keep node order.
    pub focus: Vec<(String, f64)>,
}

impl AttentionMap {
    /// Id of the highest-attention node, if any.
    pub fn peak(&self) -> Option<&str> {
        self.focus.first().map(|(id, _)| id.as_str())
    }
}

/// Score nodes by edge-length cohesion.
///
/// Every edge adds `1 / (1 + length/120)` to both endpoints, so short edges
/// contribute more. Zero-length edges are measured as length 1. Scores are
/// normalized by the run maximum, floored at 1 to avoid dividing by zero —
/// a run with no edges therefore reports all-zero scores.
pub fn compute_attention(graph: &Graph) -> AttentionMap {
    let mut scores: HashMap<String, f64> =
        graph.nodes.iter().map(|n| (n.id.clone(), 0.0)).collect();

    for (edge, length) in graph.edges.iter().zip(graph.lengths.iter()) {
        let length = if *length == 0.0 { 1.0 } else { *length };
        let contribution = 1.0 / (1.0 + length / COHESION_SCALE);
        *scores.entry(edge.a.clone()).or_insert(0.0) += contribution;
        *scores.entry(edge.b.clone()).or_insert(0.0) += contribution;
    }

    let max = scores.values().fold(1.0_f64, |m, v| m.max(*v));
    for value in scores.values_mut() {
        *value /= max;
    }

    let mut focus: Vec<(String, f64)> = graph
        .nodes
        .iter()
        .map(|n| (n.id.clone(), scores.get(&n.id).copied().unwrap_or(0.0)))
        .collect();
    focus.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    AttentionMap { scores, focus }
}
