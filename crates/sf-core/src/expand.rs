use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_ROTATIONS;
use crate::glyphs::GlyphedToken;

/// How an expansion was produced: a seed-table hit or a fallback permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionKind {
    Semantic,
    Associative,
}

/// Expansion before color and layout: identity, parent reference, text and
/// value density.
#[derive(Clone, Debug)]
pub struct ExpansionSeed {
    pub id: String,
    pub of: String,
    pub kind: ExpansionKind,
    pub text: String,
    pub v: f64,
    pub glyph: char,
}

/// Seed association lookup, keyed by exact token text. Injected into the
/// pipeline so tests can substitute fixed fixtures.
#[derive(Clone, Debug, Default)]
pub struct AssociationTable {
    map: HashMap<String, Vec<String>>,
}

impl AssociationTable {
    /// The built-in association seed set.
    pub fn builtin() -> Self {
        Self::from_pairs([
            ("ai", &["model", "learning"][..]),
            ("engine", &["pipeline", "runtime"]),
            ("space", &["field", "vector"]),
            ("field", &["potential", "charge"]),
            ("vector", &["magnitude", "direction"]),
            ("token", &["glyph", "embedding"]),
            ("prompt", &["intent", "context"]),
            ("glyph", &["symbol", "mark"]),
            ("attention", &["focus", "salience"]),
        ])
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a [&'a str])>) -> Self {
        let map = pairs
            .into_iter()
            .map(|(token, assoc)| {
                (
                    token.to_string(),
                    assoc.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { map }
    }

    pub fn get(&self, text: &str) -> Option<&[String]> {
        self.map.get(text).map(|v| v.as_slice())
    }
}

/// Fallback association list: up to three character rotations (the identity
/// rotation included) plus the reversed string, deduplicated in order.
/// Never empty.
fn permute(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<String> = Vec::new();

    for i in 0..chars.len().min(MAX_ROTATIONS) {
        let rotated: String = chars[i..].iter().chain(chars[..i].iter()).collect();
        if !out.contains(&rotated) {
            out.push(rotated);
        }
    }
    let reversed: String = chars.iter().rev().collect();
    if !out.contains(&reversed) {
        out.push(reversed);
    }
    if out.is_empty() {
        out.push(text.to_string());
    }
    out
}

/// Generate expansions for every token.
///
/// Table hits become `semantic` expansions, permutation fallbacks
/// `associative`. Value decays front-loaded across each token's list
/// (`v = intensity × (1 − index/len)`), and the combined output is sorted by
/// value descending.
pub fn expand(tokens: &[GlyphedToken], table: &AssociationTable) -> Vec<ExpansionSeed> {
    let mut expansions = Vec::new();

    for token in tokens {
        let (assoc, kind) = match table.get(&token.text) {
            Some(list) => (list.to_vec(), ExpansionKind::Semantic),
            None => (permute(&token.text), ExpansionKind::Associative),
        };
        let len = assoc.len() as f64;
        for (idx, text) in assoc.into_iter().enumerate() {
            let v = token.intensity * (1.0 - idx as f64 / len);
            let glyph = text.chars().next().unwrap_or(token.glyph);
            expansions.push(ExpansionSeed {
                id: format!("{}-exp-{idx}", token.id),
                of: token.id.clone(),
                kind,
                text,
                v,
                glyph,
            });
        }
    }

    expansions.sort_by(|a, b| b.v.partial_cmp(&a.v).unwrap());
    expansions
}
