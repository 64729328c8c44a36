// Shield - hides exception replacements from later pipeline stages
// Each replaced span becomes a private-use placeholder that no word pattern can match

use super::table::MappingTable;

/// Private-use area the placeholder delimiters are drawn from
const FIRST_DELIMITER: u32 = 0xE000;
const LAST_DELIMITER: u32 = 0xF8FF;

/// Placeholder bookkeeping for one conversion pass
#[derive(Debug)]
pub struct Shield {
    held: Vec<String>,
    open: char,
    close: char,
}

impl Default for Shield {
    fn default() -> Self {
        Self {
            held: Vec::new(),
            open: '\u{E000}',
            close: '\u{E001}',
        }
    }
}

impl Shield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `table` and replace each re-cased replacement with a placeholder.
    /// Delimiters are chosen so that neither occurs in `text`.
    pub fn apply(&mut self, table: &MappingTable, text: &str) -> String {
        if self.held.is_empty() {
            let (open, close) = pick_delimiters(text);
            self.open = open;
            self.close = close;
        }
        let (open, close) = (self.open, self.close);
        table.apply_with(text, |_, recased| {
            let placeholder = format!("{}{}{}", open, self.held.len(), close);
            self.held.push(recased);
            placeholder
        })
    }

    /// Number of spans currently shielded
    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Put the shielded replacements back. Placeholders that no longer
    /// parse are left as they are.
    pub fn restore(&self, text: &str) -> String {
        if self.held.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(self.open) {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + self.open.len_utf8()..];
            let restored = after_open.find(self.close).and_then(|end| {
                let index: usize = after_open[..end].parse().ok()?;
                let held = self.held.get(index)?;
                Some((held, end))
            });
            match restored {
                Some((held, end)) => {
                    result.push_str(held);
                    rest = &after_open[end + self.close.len_utf8()..];
                }
                None => {
                    result.push(self.open);
                    rest = after_open;
                }
            }
        }
        result.push_str(rest);
        result
    }
}

/// First pair of adjacent private-use characters absent from `text`
fn pick_delimiters(text: &str) -> (char, char) {
    (FIRST_DELIMITER..LAST_DELIMITER)
        .step_by(2)
        .filter_map(|code| Some((char::from_u32(code)?, char::from_u32(code + 1)?)))
        .find(|(open, close)| !text.contains(*open) && !text.contains(*close))
        .unwrap_or(('\u{E000}', '\u{E001}'))
}

#[cfg(test)]
#[path = "shield_test.rs"]
mod tests;
