use std::collections::HashSet;

use crate::models::domain::ProcessedSentence;

/// Drops sentences of a section whose text already appeared earlier in it, keeping the first.
///
/// Every label of a sentence is tagged separately, so this also leaves a single label per
/// sentence. Nothing is dropped when `duplicate_sentences` is set.
pub fn deduplicate_sentences(
    section: Vec<ProcessedSentence>,
    duplicate_sentences: bool,
) -> Vec<ProcessedSentence> {
    if duplicate_sentences {
        return section;
    }
    let mut seen = HashSet::new();
    section
        .into_iter()
        .filter(|processed| seen.insert(processed.context.sentence.clone()))
        .collect()
}
