use std::collections::{HashMap, HashSet};

use crate::constants::SUMMARY_LIMIT;
use crate::field::SpaceField;

/// One entry of the value ranking: parent token, expansion id, value.
#[derive(Clone, Debug)]
pub struct RankedExpansion {
    pub token: String,
    pub expansion: String,
    pub value: f64,
}

/// Retrieval indexes over a space field.
#[derive(Clone, Debug, Default)]
pub struct Retrieval {
    /// Glyph → token id. Collisions resolve last-writer-wins: when two
    /// tokens share a glyph, the later token owns the index entry. This is
    /// intentional, documented policy.
    pub glyph_index: HashMap<char, String>,
    /// Forward adjacency from edge source to edge targets.
    pub adjacency: HashMap<String, HashSet<String>>,
    /// All expansions ranked by value descending.
    pub ranking: Vec<RankedExpansion>,
    /// Human-readable top entries of the ranking.
    pub summary: Vec<String>,
}

/// Build the glyph lookup, adjacency sets and value ranking for a field.
pub fn build_retrieval(field: &SpaceField) -> Retrieval {
    let mut glyph_index = HashMap::new();
    for token in &field.tokens {
        glyph_index.insert(token.glyph, token.id.clone());
    }

    let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();
    for edge in &field.edges {
        adjacency
            .entry(edge.a.clone())
            .or_default()
            .insert(edge.b.clone());
    }

    let mut ranking: Vec<RankedExpansion> = field
        .expansions
        .iter()
        .map(|exp| RankedExpansion {
            token: exp.of.clone(),
            expansion: exp.id.clone(),
            value: exp.v,
        })
        .collect();
    ranking.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap());

    let summary = ranking
        .iter()
        .take(SUMMARY_LIMIT)
        .map(|r| format!("{}:{:.2}", r.expansion, r.value))
        .collect();

    Retrieval {
        glyph_index,
        adjacency,
        ranking,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::ExpansionKind;
    use crate::field::{Edge, Expansion, Token};

    fn token(id: &str, glyph: char) -> Token {
        Token {
            id: id.to_string(),
            glyph,
            ..Token::default()
        }
    }

    fn expansion(id: &str, of: &str, v: f64) -> Expansion {
        Expansion {
            id: id.to_string(),
            of: of.to_string(),
            kind: ExpansionKind::Associative,
            text: id.to_string(),
            v,
            glyph: '?',
            hsv: [0.0, 0.0, 0.0],
            rgb: [0.5, 0.5, 0.5],
            alpha: 0.75,
            pos: [0.0, 0.0],
        }
    }

    fn field() -> SpaceField {
        SpaceField {
            tokens: vec![token("t0", '▲'), token("t1", '●')],
            expansions: vec![
                expansion("t0-exp-0", "t0", 0.9),
                expansion("t0-exp-1", "t0", 0.3),
                expansion("t1-exp-0", "t1", 0.6),
            ],
            edges: vec![
                Edge { a: "t0".into(), b: "t0-exp-0".into(), k: 0.9 },
                Edge { a: "t0".into(), b: "t0-exp-1".into(), k: 0.3 },
                Edge { a: "t1".into(), b: "t1-exp-0".into(), k: 0.6 },
            ],
            ..SpaceField::default()
        }
    }

    #[test]
    fn test_glyph_index_maps_to_token() {
        let r = build_retrieval(&field());
        assert_eq!(r.glyph_index[&'▲'], "t0");
        assert_eq!(r.glyph_index[&'●'], "t1");
    }

    #[test]
    fn test_glyph_collision_last_writer_wins() {
        let mut f = field();
        f.tokens[1].glyph = '▲';
        let r = build_retrieval(&f);
        assert_eq!(r.glyph_index[&'▲'], "t1");
    }

    #[test]
    fn test_adjacency_follows_edges() {
        let r = build_retrieval(&field());
        assert!(r.adjacency["t0"].contains("t0-exp-0"));
        assert!(r.adjacency["t0"].contains("t0-exp-1"));
        assert_eq!(r.adjacency["t1"].len(), 1);
    }

    #[test]
    fn test_ranking_descends_by_value() {
        let r = build_retrieval(&field());
        let ids: Vec<&str> = r.ranking.iter().map(|e| e.expansion.as_str()).collect();
        assert_eq!(ids, vec!["t0-exp-0", "t1-exp-0", "t0-exp-1"]);
    }

    #[test]
    fn test_summary_caps_at_limit_and_formats() {
        let r = build_retrieval(&field());
        assert_eq!(r.summary.len(), 3);
        assert_eq!(r.summary[0], "t0-exp-0:0.90");
    }
}
