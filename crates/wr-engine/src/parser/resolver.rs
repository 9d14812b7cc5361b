//! Item name resolution and verb suggestions.

use strsim::jaro_winkler;
use wr_core::Catalog;

use super::command::ALL_VERBS;

/// Minimum similarity score for suggesting a verb (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Resolve a player-typed item name against a list of item ids.
///
/// Case-insensitive. Matches a substring of the display name, the exact id,
/// or an exact alias. The first match in list order wins.
pub fn resolve_item<'a>(catalog: &Catalog, name: &str, ids: &'a [String]) -> Option<&'a str> {
    let query = name.trim().to_lowercase();
    ids.iter()
        .find(|id| {
            catalog
                .item(id)
                .is_some_and(|item| item.matches(id, &query))
        })
        .map(String::as_str)
}

/// Find the known verb closest to `word`, if any is close enough.
pub fn suggest_verb(word: &str) -> Option<&'static str> {
    let word = word.to_lowercase();
    let mut best: Option<(&'static str, f64)> = None;
    for &verb in ALL_VERBS.iter().flat_map(|group| group.iter()) {
        // Single letters match too loosely to be useful.
        if verb.len() < 2 {
            continue;
        }
        let score = jaro_winkler(&word, verb);
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((verb, score));
        }
    }
    best.map(|(verb, _)| verb)
}
