//! Trending topic catalogue

pub const TRENDING_TOPICS: [&str; 10] = [
    "Quantum Computing Advancements",
    "Climate Change Mitigation Strategies",
    "Artificial Intelligence Ethics",
    "Neuroscience and Consciousness",
    "Sustainable Energy Technologies",
    "Genetic Engineering Breakthroughs",
    "Space Exploration and Colonization",
    "Cybersecurity in the Digital Age",
    "Nanotechnology Applications",
    "Global Pandemic Response Tactics",
];

/// Number of topics offered by the header menu.
pub const MENU_TOPIC_COUNT: usize = 5;

pub fn menu_topics() -> &'static [&'static str] {
    &TRENDING_TOPICS[..MENU_TOPIC_COUNT]
}

/// Topics whose title contains `query` (case-insensitive), paired with their
/// 1-based rank in the full list.
pub fn search_topics(query: &str) -> Vec<(usize, &'static str)> {
    let needle = query.trim().to_lowercase();
    TRENDING_TOPICS
        .iter()
        .enumerate()
        .filter(|(_, topic)| needle.is_empty() || topic.to_lowercase().contains(&needle))
        .map(|(index, topic)| (index + 1, *topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_query_lists_everything() {
        let all = search_topics("  ");
        assert_eq!(all.len(), TRENDING_TOPICS.len());
        assert_eq!(all[0], (1, "Quantum Computing Advancements"));
    }

    #[test]
    fn test_search_is_case_insensitive_and_keeps_rank() {
        assert_eq!(
            search_topics("ENERGY"),
            vec![(5, "Sustainable Energy Technologies")]
        );
        assert!(search_topics("astrology").is_empty());
    }

    #[test]
    fn test_menu_topics() {
        assert_eq!(menu_topics().len(), 5);
        assert_eq!(menu_topics()[4], "Sustainable Energy Technologies");
    }
}
