// Suffix rewriter - dictionary-validated -ize -> -ise conversion
//
// A word is only rewritten when the US dictionary knows the -ize form AND the GB
// dictionary knows the -ise form. Anything else is left exactly as written.

use regex::Captures;

use crate::casing::match_case;
use crate::lexicon::{re_word, Dictionary};

/// Suffix pairs, longest first so the first match is the most specific
const ISE_SUFFIXES: [(&str, &str); 8] = [
    ("izations", "isations"),
    ("ization", "isation"),
    ("izers", "isers"),
    ("izer", "iser"),
    ("izing", "ising"),
    ("ized", "ised"),
    ("izes", "ises"),
    ("ize", "ise"),
];

/// Rewrite a single word, or return None to leave it unchanged
fn convert_word(word: &str, us: &dyn Dictionary, gb: &dyn Dictionary) -> Option<String> {
    let lower = word.to_lowercase();
    if gb.contains(&lower) {
        return None;
    }

    let (from, to) = ISE_SUFFIXES
        .iter()
        .find(|(from, _)| lower.ends_with(from))?;
    let candidate = format!("{}{}", &lower[..lower.len() - from.len()], to);

    if us.contains(&lower) && gb.contains(&candidate) {
        Some(match_case(word, &candidate))
    } else {
        crate::trace!("Keeping '{}': dictionaries do not corroborate '{}'", word, candidate);
        None
    }
}

/// Convert every -ize family word in `text` that both dictionaries corroborate
pub fn apply_ise_conversions(text: &str, us: &dyn Dictionary, gb: &dyn Dictionary) -> String {
    re_word()
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            convert_word(word, us, gb).unwrap_or_else(|| word.to_string())
        })
        .into_owned()
}

#[cfg(test)]
#[path = "suffix_test.rs"]
mod tests;
