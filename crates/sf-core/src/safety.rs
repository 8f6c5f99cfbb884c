use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::NOISE_FLOOR;
use crate::field::{Expansion, Token};

static UNSAFE_TERMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"harm|weapon|abuse").unwrap());

/// Advisory safety flags. Ids only — the flags never block the pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SafetyReport {
    pub flagged_tokens: Vec<String>,
    pub flagged_expansions: Vec<String>,
}

impl SafetyReport {
    pub fn is_clean(&self) -> bool {
        self.flagged_tokens.is_empty() && self.flagged_expansions.is_empty()
    }
}

/// Flag tokens matching the heuristic unsafe-term list and expansions whose
/// value falls below the noise floor.
pub fn run_safety_checks(tokens: &[Token], expansions: &[Expansion]) -> SafetyReport {
    let flagged_tokens = tokens
        .iter()
        .filter(|t| UNSAFE_TERMS.is_match(&t.text))
        .map(|t| t.id.clone())
        .collect();

    let flagged_expansions = expansions
        .iter()
        .filter(|e| e.v < NOISE_FLOOR)
        .map(|e| e.id.clone())
        .collect();

    SafetyReport {
        flagged_tokens,
        flagged_expansions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::ExpansionKind;

    fn token(id: &str, text: &str) -> Token {
        Token {
            id: id.to_string(),
            text: text.to_string(),
            ..Token::default()
        }
    }

    fn expansion(id: &str, v: f64) -> Expansion {
        Expansion {
            id: id.to_string(),
            of: "t0".to_string(),
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

    #[test]
    fn test_unsafe_substring_flags_token() {
        let report = run_safety_checks(
            &[token("t0", "weaponized"), token("t1", "harmless? also flagged")],
            &[],
        );
        assert!(report.flagged_tokens.contains(&"t0".to_string()));
        // Substring match is intentionally coarse: "harmless" contains "harm".
        assert!(report.flagged_tokens.contains(&"t1".to_string()));
    }

    #[test]
    fn test_clean_tokens_not_flagged() {
        let report = run_safety_checks(&[token("t0", "garden")], &[]);
        assert!(report.flagged_tokens.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_low_value_expansion_flagged_as_noise() {
        let report = run_safety_checks(&[], &[expansion("e0", 0.01), expansion("e1", 0.5)]);
        assert_eq!(report.flagged_expansions, vec!["e0".to_string()]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let report = run_safety_checks(&[], &[expansion("e0", NOISE_FLOOR)]);
        assert!(report.flagged_expansions.is_empty());
    }
}
