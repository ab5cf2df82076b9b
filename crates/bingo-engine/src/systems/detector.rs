use std::collections::{HashMap, HashSet};

/// True when the byte range [start, end) in `text` sits on word
/// boundaries: the characters immediately before and after must not be
/// alphanumeric. Keeps "AI" from firing inside "said".
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

/// Earliest boundary-respecting occurrence of `needle` in `haystack`.
/// Works for multi-word phrases too ("circle back"): only the outer
/// ends of the phrase need a boundary.
fn find_bounded(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .match_indices(needle)
        .find(|(pos, m)| on_word_boundary(haystack, *pos, pos + m.len()))
        .map(|(pos, _)| pos)
}

/// Expand one lower-cased surface form into its simple plural/singular
/// variants (trailing "s"/"es"). Short forms skip stripping so "ais"
/// never degrades to nonsense.
fn inflections(form: &str) -> Vec<String> {
    let mut out = vec![form.to_string()];
    if !form.ends_with('s') {
        out.push(format!("{form}s"));
        out.push(format!("{form}es"));
    }
    if form.len() > 4 {
        if let Some(stripped) = form.strip_suffix("es") {
            out.push(stripped.to_string());
        }
    }
    if form.len() > 3 {
        if let Some(stripped) = form.strip_suffix('s') {
            out.push(stripped.to_string());
        }
    }
    out
}

/// Map a raw transcript fragment to the canonical card words it mentions.
///
/// Matching is case-insensitive and boundary-respecting. A word counts
/// as heard if the fragment contains the canonical word, one of its
/// registered aliases, or a simple plural/singular variant of either.
/// Words already in `filled_words` (lower-cased canonical forms) are
/// skipped, so repeated mentions stay idempotent.
///
/// Returns canonical words ordered by first match position, one entry
/// per word. Pure function: the caller applies the result to the card.
pub fn detect_words(
    fragment: &str,
    card_words: &[String],
    aliases: &HashMap<String, Vec<String>>,
    filled_words: &HashSet<String>,
) -> Vec<String> {
    let haystack = fragment.to_lowercase();
    if haystack.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<(usize, &String)> = Vec::new();
    for word in card_words {
        let canonical = word.to_lowercase();
        if filled_words.contains(&canonical) {
            continue;
        }

        let mut forms = inflections(&canonical);
        if let Some(alts) = aliases.get(word) {
            for alt in alts {
                forms.extend(inflections(&alt.to_lowercase()));
            }
        }

        let earliest = forms
            .iter()
            .filter_map(|form| find_bounded(&haystack, form))
            .min();
        if let Some(pos) = earliest {
            hits.push((pos, word));
        }
    }

    hits.sort_by_key(|&(pos, _)| pos);
    hits.into_iter().map(|(_, word)| word.clone()).collect()
}
