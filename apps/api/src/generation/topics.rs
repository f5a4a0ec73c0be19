//! "Surprise me" topic picker — a curated pool of starting topics for
//! callers who don't have one in mind.

use rand::seq::SliceRandom;

/// Curated topic pool. Ordering carries no meaning.
const SURPRISE_TOPICS: &[&str] = &[
    "a lighthouse keeper who collects messages in bottles",
    "the last bookshop on a drowned street",
    "a cartographer mapping a city that rearranges itself at night",
    "two rival street magicians forced to share an audience",
    "a retired astronaut who keeps receiving postcards from orbit",
    "a village where everyone forgets one day each year",
    "an apprentice clockmaker who finds a gear that ticks backwards",
    "a chef cooking the final meal on a generation ship",
    "a translator for a language only spoken in dreams",
    "a detective whose only witness is a weather vane",
    "a gardener tending the hedge maze between two feuding estates",
    "an archivist cataloguing objects that remember their owners",
];

/// Picks one topic uniformly at random from the pool.
pub fn pick_surprise_topic() -> &'static str {
    let mut rng = rand::thread_rng();
    SURPRISE_TOPICS
        .choose(&mut rng)
        .copied()
        .unwrap_or(SURPRISE_TOPICS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_non_empty_and_topics_are_usable() {
        assert!(!SURPRISE_TOPICS.is_empty());
        for topic in SURPRISE_TOPICS {
            assert!(!topic.trim().is_empty());
        }
    }

    #[test]
    fn test_picked_topic_comes_from_the_pool() {
        for _ in 0..20 {
            let topic = pick_surprise_topic();
            assert!(SURPRISE_TOPICS.contains(&topic));
        }
    }
}
