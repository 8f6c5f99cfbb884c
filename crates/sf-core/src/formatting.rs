use serde::{Deserialize, Serialize};

use crate::field::Token;
use crate::regions::Region;

/// Presentation-ready view of a run: bullet narrative, coverage line, and a
/// glyph inspection index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Formatted {
    pub reasoning: String,
    pub bullets: Vec<String>,
    pub region_summary: String,
    pub glyph_map: Vec<String>,
}

/// Turn the reasoning narrative into a bullet list plus coverage summary.
pub fn format_output(reasoning: &str, regions: &[Region], tokens: &[Token]) -> Formatted {
    let bullets = reasoning
        .lines()
        .map(|line| format!("• {line}"))
        .collect();

    let region_summary = format!(
        "{} regions spanning {} tokens",
        regions.len(),
        tokens.len()
    );

    let glyph_map = tokens
        .iter()
        .map(|token| format!("{}:{}", token.glyph, token.text))
        .collect();

    Formatted {
        reasoning: reasoning.to_string(),
        bullets,
        region_summary,
        glyph_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str, text: &str, glyph: char) -> Token {
        Token {
            id: id.to_string(),
            text: text.to_string(),
            glyph,
            ..Token::default()
        }
    }

    fn region(id: &str) -> Region {
        Region {
            id: id.to_string(),
            key: "tier-1".to_string(),
            members: vec![],
            center: [0.0, 0.0],
        }
    }

    #[test]
    fn test_one_bullet_per_line() {
        let out = format_output("Clause 1: a\nClause 2: b", &[], &[]);
        assert_eq!(out.bullets, vec!["• Clause 1: a", "• Clause 2: b"]);
    }

    #[test]
    fn test_region_summary_counts() {
        let out = format_output(
            "",
            &[region("reg-0"), region("reg-1")],
            &[token("t0", "alpha", '▲')],
        );
        assert_eq!(out.region_summary, "2 regions spanning 1 tokens");
    }

    #[test]
    fn test_glyph_map_pairs_glyph_and_text() {
        let out = format_output("", &[], &[token("t0", "alpha", '▲')]);
        assert_eq!(out.glyph_map, vec!["▲:alpha"]);
    }

    #[test]
    fn test_empty_reasoning_has_no_bullets() {
        let out = format_output("", &[], &[]);
        assert!(out.bullets.is_empty());
    }
}
