use std::collections::HashMap;

use futures::future::try_join_all;
use log::debug;

use crate::{clients::TopicSearch, errors::AppResult, models::domain::ProcessedSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTopic {
    pub name: String,
    pub count: usize,
}

/// Counts every name-like entity, most frequent first. Ties keep the order the names were first
/// seen in.
pub fn rank_by_frequency(sections: &[ProcessedSection]) -> Vec<RankedTopic> {
    let mut ranked: Vec<RankedTopic> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    let names = sections
        .iter()
        .flatten()
        .filter(|processed| processed.label.is_nameable())
        .flat_map(|processed| processed.names.iter());
    for name in names {
        match positions.get(name.as_str()) {
            Some(&position) => ranked[position].count += 1,
            None => {
                positions.insert(name.as_str(), ranked.len());
                ranked.push(RankedTopic {
                    name: name.clone(),
                    count: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Topics related to the `sections`, most relevant first. Only names the `search` resolves to an
/// article of exactly the same title are kept, so each can have a quiz generated for it.
pub async fn rank_related_topics(
    sections: &[ProcessedSection],
    search: &dyn TopicSearch,
) -> AppResult<Vec<String>> {
    let ranked = rank_by_frequency(sections);
    let results = try_join_all(ranked.iter().map(|topic| search.search(&topic.name))).await?;

    let related: Vec<String> = ranked
        .into_iter()
        .zip(results)
        .filter(|(topic, results)| results.iter().any(|result| result.title == topic.name))
        .map(|(topic, _)| topic.name)
        .collect();
    debug!("Found {} related topics", related.len());
    Ok(related)
}
