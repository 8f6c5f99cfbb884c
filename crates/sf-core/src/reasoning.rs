use crate::threads::Thread;

/// Convert threads into a newline-delimited narrative.
///
/// Each thread contributes one clause built from its highest-value entry
/// (`"<seed>:<text>"`, or a `no-entry` placeholder), numbered in thread
/// order, then ranked by thread depth so the richest threads lead.
pub fn synthesize_reasoning(threads: &[Thread]) -> String {
    let statements: Vec<String> = threads
        .iter()
        .map(|thread| match thread.entries.first() {
            Some(top) => format!("{}:{}", thread.seed, top.text),
            None => format!("{}:no-entry", thread.seed),
        })
        .collect();

    let mut scored: Vec<(String, usize)> = statements
        .into_iter()
        .enumerate()
        .map(|(index, stmt)| {
            (
                format!("Clause {}: {stmt}", index + 1),
                threads[index].entries.len(),
            )
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .map(|(clause, _)| clause)
        .collect::<Vec<_>>()
        .join("\n")
}
