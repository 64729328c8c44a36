// Character normalization for conversion input
// Handles em-dashes and shields currency symbols from the base translator

const EM_DASH: char = '\u{2014}';
const CURRENCY: char = '$';
// Private-use delimiters around a digit counter: no word pattern can match the sentinel
const SENTINEL_OPEN: char = '\u{E0F0}';
const SENTINEL_CLOSE: char = '\u{E0F1}';

/// Replace every em-dash with a spaced hyphen. Not reversible.
pub fn normalize(text: &str) -> String {
    if !text.contains(EM_DASH) {
        return text.to_string();
    }
    text.replace(EM_DASH, " - ")
}

/// Text with every `$` swapped for a sentinel, plus what is needed to swap it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected {
    text: String,
    sentinel: Option<String>,
}

impl Protected {
    /// The text to hand to the translator
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Turn every sentinel back into `$`
    pub fn restore(&self, translated: &str) -> String {
        match &self.sentinel {
            Some(sentinel) => translated.replace(sentinel.as_str(), "$"),
            None => translated.to_string(),
        }
    }
}

/// Replace every `$` with a letter-free sentinel that does not already occur in `text`
pub fn protect(text: &str) -> Protected {
    if !text.contains(CURRENCY) {
        return Protected {
            text: text.to_string(),
            sentinel: None,
        };
    }

    let sentinel = pick_sentinel(text);
    Protected {
        text: text.replace(CURRENCY, &sentinel),
        sentinel: Some(sentinel),
    }
}

/// `\u{E0F0}0\u{E0F1}`, or the first higher counter the input does not already hold
fn pick_sentinel(text: &str) -> String {
    let mut attempt = 0usize;
    loop {
        let sentinel = format!("{}{}{}", SENTINEL_OPEN, attempt, SENTINEL_CLOSE);
        if !text.contains(&sentinel) {
            return sentinel;
        }
        attempt += 1;
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
