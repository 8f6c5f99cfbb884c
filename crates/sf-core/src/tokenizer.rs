use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::FALLBACK_TOKEN;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());
static APOSTROPHE_TRIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'+|'+$").unwrap());

/// Token skeleton emitted by the tokenizer: stable positional id, the word
/// itself, and a salience weight. Later stages layer fields on top of this.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenSeed {
    pub id: String,
    pub text: String,
    pub weight: f64,
}

/// Split a prompt into lowercase words, preserving in-word apostrophes.
fn words(text: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, " ");
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(|t| APOSTROPHE_TRIM.replace_all(t, "").to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tokenize a prompt into weighted token seeds.
///
/// Weight is length × in-prompt frequency, so longer and repeated words gain
/// salience. Positional ids (`t0`, `t1`, …) are stable for the whole run.
/// Blank or symbol-only input yields a single fallback seed so downstream
/// stages never see an empty sequence.
pub fn tokenize(text: &str) -> Vec<TokenSeed> {
    let words = words(text);

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for w in &words {
        *freq.entry(w.as_str()).or_default() += 1;
    }

    let seeds: Vec<TokenSeed> = words
        .iter()
        .enumerate()
        .map(|(i, w)| TokenSeed {
            id: format!("t{i}"),
            text: w.clone(),
            weight: (w.chars().count() * freq[w.as_str()]) as f64,
        })
        .collect();

    if seeds.is_empty() {
        return vec![TokenSeed {
            id: "t0".to_string(),
            text: FALLBACK_TOKEN.to_string(),
            weight: 1.0,
        }];
    }
    seeds
}
