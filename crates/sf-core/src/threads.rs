use serde::{Deserialize, Serialize};

use crate::attention::AttentionMap;
use crate::constants::MAX_THREADS;
use crate::field::Expansion;

/// Expansion reference carried inside a thread.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThreadEntry {
    pub id: String,
    pub text: String,
    pub value: f64,
}

/// Narrative thread seeded from a high-salience node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub seed: String,
    pub entries: Vec<ThreadEntry>,
}

/// Seed at most four threads from the top of the focus list and populate
/// each with the expansions whose parent equals the seed, sorted by value
/// descending. Expansions matching no seed are dropped.
pub fn build_threads(attention: &AttentionMap, expansions: &[Expansion]) -> Vec<Thread> {
    let mut threads: Vec<Thread> = attention
        .focus
        .iter()
        .take(MAX_THREADS)
        .enumerate()
        .map(|(index, (seed, _))| Thread {
            id: format!("thr-{index}"),
            seed: seed.clone(),
            entries: Vec::new(),
        })
        .collect();

    for exp in expansions {
        if let Some(thread) = threads.iter_mut().find(|t| t.seed == exp.of) {
            thread.entries.push(ThreadEntry {
                id: exp.id.clone(),
                text: exp.text.clone(),
                value: exp.v,
            });
        }
    }

    for thread in &mut threads {
        thread
            .entries
            .sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap());
    }

    threads
}
