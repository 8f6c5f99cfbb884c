use std::collections::HashMap;

use crate::field::SpaceField;

/// Generic positioned node: a token or an expansion.
#[derive(Clone, Debug)]
pub struct GraphNode {
    pub id: String,
    pub pos: [f64; 2],
}

/// Edge in the graph projection, with a synthetic `a->b` id.
#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub id: String,
    pub a: String,
    pub b: String,
    pub k: f64,
}

/// Read-only graph view over a space field with O(1) id lookups and
/// precomputed Euclidean edge lengths.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub lengths: Vec<f64>,
    node_index: HashMap<String, usize>,
    edge_index: HashMap<String, usize>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|i| &self.nodes[*i])
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edge_index.get(id).map(|i| &self.edges[*i])
    }
}

/// Project a space field into the generic node/edge graph view.
pub fn build_graph(field: &SpaceField) -> Graph {
    let nodes: Vec<GraphNode> = field
        .tokens
        .iter()
        .map(|t| GraphNode { id: t.id.clone(), pos: t.pos })
        .chain(field.expansions.iter().map(|e| GraphNode {
            id: e.id.clone(),
            pos: e.pos,
        }))
        .collect();

    let edges: Vec<GraphEdge> = field
        .edges
        .iter()
        .map(|edge| GraphEdge {
            id: format!("{}->{}", edge.a, edge.b),
            a: edge.a.clone(),
            b: edge.b.clone(),
            k: edge.k,
        })
        .collect();

    let node_index: HashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();
    let edge_index: HashMap<String, usize> = edges
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id.clone(), i))
        .collect();

    let pos_or_origin =
        |id: &str| -> [f64; 2] { node_index.get(id).map(|i| nodes[*i].pos).unwrap_or([0.0, 0.0]) };
    let lengths = edges
        .iter()
        .map(|edge| {
            let a = pos_or_origin(&edge.a);
            let b = pos_or_origin(&edge.b);
            (a[0] - b[0]).hypot(a[1] - b[1])
        })
        .collect();

    Graph {
        nodes,
        edges,
        lengths,
        node_index,
        edge_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::ExpansionKind;
    use crate::field::{Edge, Expansion, Token};
    use approx::assert_relative_eq;

    fn field() -> SpaceField {
        SpaceField {
            tokens: vec![Token {
                id: "t0".into(),
                pos: [0.0, 0.0],
                ..Token::default()
            }],
            expansions: vec![Expansion {
                id: "t0-exp-0".into(),
                of: "t0".into(),
                kind: ExpansionKind::Semantic,
                text: "x".into(),
                v: 0.5,
                glyph: 'x',
                hsv: [0.0, 0.0, 0.0],
                rgb: [0.5, 0.5, 0.5],
                alpha: 0.75,
                pos: [3.0, 4.0],
            }],
            edges: vec![Edge {
                a: "t0".into(),
                b: "t0-exp-0".into(),
                k: 0.5,
            }],
            ..SpaceField::default()
        }
    }

    #[test]
    fn test_nodes_cover_tokens_and_expansions() {
        let graph = build_graph(&field());
        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.node("t0").is_some());
        assert!(graph.node("t0-exp-0").is_some());
    }

    #[test]
    fn test_edge_id_and_lookup() {
        let graph = build_graph(&field());
        let edge = graph.edge("t0->t0-exp-0").expect("edge by id");
        assert_eq!(edge.a, "t0");
        assert_relative_eq!(edge.k, 0.5);
    }

    #[test]
    fn test_euclidean_lengths() {
        let graph = build_graph(&field());
        assert_relative_eq!(graph.lengths[0], 5.0);
    }

    #[test]
    fn test_missing_endpoint_measures_from_origin() {
        let mut f = field();
        f.edges.push(Edge {
            a: "absent".into(),
            b: "t0-exp-0".into(),
            k: 0.1,
        });
        let graph = build_graph(&f);
        // Unknown endpoint is treated as the origin.
        assert_relative_eq!(graph.lengths[1], 5.0);
    }

    #[test]
    fn test_unknown_lookups_are_none() {
        let graph = build_graph(&field());
        assert!(graph.node("nope").is_none());
        assert!(graph.edge("nope->nope").is_none());
    }
}
