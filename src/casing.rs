// Case preservation - re-applies the casing of a matched source span onto its replacement
// Used by the phrase tables, the base translator and the -ize rewriter

/// Casing shape of a source span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseShape {
    /// Every letter uppercase ("COLOR", "ZIP CODE")
    Upper,
    /// Every letter lowercase ("color")
    Lower,
    /// Every word capitalised, remainder lowercase ("Zip Code")
    Title,
    /// First letter uppercase, every other letter lowercase ("Zip code")
    Sentence,
    /// Anything else ("iPhone", "zIP")
    Mixed,
}

fn classify(source: &str) -> Option<CaseShape> {
    let letters: Vec<char> = source.chars().filter(|c| c.is_alphabetic()).collect();
    let first = *letters.first()?;

    if letters.iter().all(|c| !c.is_lowercase()) && letters.iter().any(|c| c.is_uppercase()) {
        return Some(CaseShape::Upper);
    }
    if letters.iter().all(|c| !c.is_uppercase()) {
        return Some(CaseShape::Lower);
    }

    let title = source
        .split_whitespace()
        .filter(|word| word.chars().any(char::is_alphabetic))
        .all(is_capitalised);
    if title {
        return Some(CaseShape::Title);
    }

    if first.is_uppercase() && letters[1..].iter().all(|c| !c.is_uppercase()) {
        return Some(CaseShape::Sentence);
    }

    Some(CaseShape::Mixed)
}

/// True when the word's first letter is uppercase and the rest are not
fn is_capitalised(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    match letters.next() {
        Some(first) => first.is_uppercase() && letters.all(|c| !c.is_uppercase()),
        None => false,
    }
}

/// Uppercase the first letter of `word`, leaving the rest as written
fn capitalise_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every whitespace-separated word (first letter upper, rest lower),
/// keeping the original whitespace between words
fn title_case_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Re-case a single-word replacement from its source word.
///
/// Unlike [`match_phrase_case`], a lowercase source leaves the replacement
/// exactly as written, so replacements like "API" keep their own casing.
pub fn match_case(source: &str, replacement: &str) -> String {
    match classify(source) {
        Some(CaseShape::Upper) => replacement.to_uppercase(),
        Some(CaseShape::Title) => title_case_words(replacement),
        Some(CaseShape::Sentence) => capitalise_first(replacement),
        _ => replacement.to_string(),
    }
}

/// Re-case a replacement from a (possibly multi-word) source span.
///
/// Rules, in order:
/// 1. all-uppercase source: uppercase the replacement
/// 2. all-lowercase source: lowercase the replacement
/// 3. title-case source: title-case every word of the replacement
/// 4. source starting with a capital, rest lowercase: capitalise the first letter
/// 5. otherwise the replacement is returned unchanged
pub fn match_phrase_case(source: &str, replacement: &str) -> String {
    match classify(source) {
        Some(CaseShape::Upper) => replacement.to_uppercase(),
        Some(CaseShape::Lower) => replacement.to_lowercase(),
        Some(CaseShape::Title) => title_case_words(replacement),
        Some(CaseShape::Sentence) => capitalise_first(replacement),
        Some(CaseShape::Mixed) | None => replacement.to_string(),
    }
}

#[cfg(test)]
#[path = "casing_test.rs"]
mod tests;
