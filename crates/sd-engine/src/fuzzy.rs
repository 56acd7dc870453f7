//! Write-in resolution with diacritic-insensitive fuzzy matching.

use std::collections::HashMap;

use strsim::normalized_levenshtein;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Default minimum similarity score for a write-in to match (0.0-1.0).
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Fold a string for comparison: canonical decomposition, combining marks
/// stripped, lower-cased. `"Zoë Saldaña"` becomes `"zoe saldana"`.
pub fn normalize(s: &str) -> String {
    s.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Similarity of two already-normalized strings, in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Index of the candidate closest to `input`, if it scores at least `cutoff`.
///
/// Candidates that normalize to the same text collapse onto the last one.
/// Only the single best match is reported; equal scores go to the candidate
/// seen first.
pub fn best_match<S: AsRef<str>>(input: &str, candidates: &[S], cutoff: f64) -> Option<usize> {
    let needle = normalize(input);
    if needle.is_empty() {
        return None;
    }

    let mut folded: Vec<(String, usize)> = Vec::with_capacity(candidates.len());
    let mut slot: HashMap<String, usize> = HashMap::new();
    for (index, candidate) in candidates.iter().enumerate() {
        let key = normalize(candidate.as_ref());
        match slot.get(&key) {
            Some(&pos) => folded[pos].1 = index,
            None => {
                slot.insert(key.clone(), folded.len());
                folded.push((key, index));
            }
        }
    }

    let mut best: Option<(usize, f64)> = None;
    for (key, index) in &folded {
        let score = similarity(&needle, key);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((*index, score));
        }
    }

    best.filter(|(_, score)| *score >= cutoff)
        .map(|(index, _)| index)
}

/// Resolve free text to the original spelling of the closest candidate.
pub fn resolve<S: AsRef<str>>(input: &str, candidates: &[S], cutoff: f64) -> Option<String> {
    best_match(input, candidates, cutoff).map(|i| candidates[i].as_ref().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_diacritics_and_case() {
        assert_eq!(normalize("Zoë Saldaña"), "zoe saldana");
        assert_eq!(normalize("  Amélie "), "amelie");
        assert_eq!(normalize("ZOE"), "zoe");
    }

    #[test]
    fn diacritic_insensitive_match() {
        let candidates = ["Zoë Saldaña", "Zoe Kravitz"];
        assert_eq!(
            resolve("Zoe Saldana", &candidates, DEFAULT_CUTOFF).as_deref(),
            Some("Zoë Saldaña")
        );
    }

    #[test]
    fn garbage_does_not_match() {
        let candidates = ["Zoë Saldaña", "Zoe Kravitz"];
        assert_eq!(resolve("xyz123", &candidates, DEFAULT_CUTOFF), None);
    }

    #[test]
    fn typo_matches_closest_title() {
        let titles = ["Ocean's Eleven", "Ocean's Twelve", "Solaris"];
        assert_eq!(
            resolve("oceans elevn", &titles, DEFAULT_CUTOFF).as_deref(),
            Some("Ocean's Eleven")
        );
    }

    #[test]
    fn cutoff_is_inclusive_and_tunable() {
        let names = ["Kael Stormborn"];
        assert!(resolve("Kael Stormbon", &names, 0.9).is_some());
        assert!(resolve("Kael", &names, 0.9).is_none());
        assert!(resolve("Kael", &names, 0.0).is_some());
    }

    #[test]
    fn empty_inputs() {
        let none: [&str; 0] = [];
        assert_eq!(resolve("anything", &none, DEFAULT_CUTOFF), None);
        assert_eq!(resolve("   ", &["A"], DEFAULT_CUTOFF), None);
    }

    #[test]
    fn colliding_normal_forms_keep_last_candidate() {
        let candidates = ["Amelie", "Amélie"];
        assert_eq!(best_match("amelie", &candidates, DEFAULT_CUTOFF), Some(1));
    }
}
