use crate::quantize::ScaledToken;

/// Fixed symbol alphabet for glyph assignment, drawn from the arrow,
/// geometric-shape, math-operator and star blocks. Frozen: reordering or
/// resizing it changes every historical assignment.
pub const ALPHABET: &[char] = &[
    '←', '↑', '→', '↓', '↔', '↕', '↗', '↘', '↙', '↖', '↜', '↝', '↞', '↟', '↠', '↡',
    '■', '□', '▲', '△', '▶', '▷', '▼', '▽', '◀', '◁', '◆', '◇', '●', '○', '◐', '◑',
    '∀', '∂', '∃', '∅', '∇', '∈', '∉', '∑', '∗', '∘', '√', '∞', '∧', '∨', '∩', '∪',
    '★', '☆', '☉', '☌', '✚', '✜', '✠', '✢', '✣', '✤', '✥', '✦', '✧', '✩', '✪', '✫',
];

/// Token after glyph assignment — the shape handed to expansion, color and
/// layout.
#[derive(Clone, Debug)]
pub struct GlyphedToken {
    pub id: String,
    pub text: String,
    pub weight: f64,
    pub norm: f64,
    pub energy: f64,
    pub bin: u32,
    pub radius: f64,
    pub intensity: f64,
    pub glyph: char,
}

/// Run checksum: sum of all token text lengths. Ties every assignment to the
/// full input so the same prompt always maps to the same glyphs.
fn checksum(tokens: &[ScaledToken]) -> usize {
    tokens.iter().map(|t| t.text.chars().count()).sum()
}

/// Deterministically map each token to one symbol of the fixed alphabet via
/// `(checksum + index) mod N`.
pub fn assign(tokens: Vec<ScaledToken>) -> Vec<GlyphedToken> {
    let seed = checksum(&tokens);
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, t)| GlyphedToken {
            glyph: ALPHABET[(seed + index) % ALPHABET.len()],
            id: t.id,
            text: t.text,
            weight: t.weight,
            norm: t.norm,
            energy: t.energy,
            bin: t.bin,
            radius: t.radius,
            intensity: t.intensity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantize::quantize;
    use crate::tokenizer::tokenize;

    fn glyphed(prompt: &str) -> Vec<GlyphedToken> {
        assign(quantize(tokenize(prompt)))
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let a = glyphed("deterministic glyph mapping");
        let b = glyphed("deterministic glyph mapping");
        let ga: Vec<char> = a.iter().map(|t| t.glyph).collect();
        let gb: Vec<char> = b.iter().map(|t| t.glyph).collect();
        assert_eq!(ga, gb);
    }

    #[test]
    fn test_consecutive_tokens_get_consecutive_symbols() {
        let tokens = glyphed("one two three");
        let base = ALPHABET.iter().position(|g| *g == tokens[0].glyph).unwrap();
        assert_eq!(tokens[1].glyph, ALPHABET[(base + 1) % ALPHABET.len()]);
        assert_eq!(tokens[2].glyph, ALPHABET[(base + 2) % ALPHABET.len()]);
    }

    #[test]
    fn test_checksum_shifts_assignment() {
        // Same token count, different total length → different offset.
        let short = glyphed("ab cd");
        let long = glyphed("abcdef ghijkl");
        assert_ne!(short[0].glyph, long[0].glyph);
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for g in ALPHABET {
            assert!(seen.insert(g), "duplicate glyph {g}");
        }
    }
}
