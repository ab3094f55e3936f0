//! N-gram extraction
//!
//! Text is reduced to lowercase letters separated by single spaces and padded
//! with one space on each side, so that word starts and ends show up as
//! grams like `" th"` and `"he "`.

/// Longest gram produced and stored in profiles
pub const MAX_GRAM_LEN: usize = 3;

/// Extracts 1..=3 character grams from text
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramExtractor;

impl NgramExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract all grams of `text` in order of appearance
    ///
    /// Returns an empty vector when `text` has no letters.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let chars = Self::padded(text);
        if chars.is_empty() {
            return Vec::new();
        }

        let mut grams = Vec::with_capacity(chars.len() * MAX_GRAM_LEN);
        for start in 0..chars.len() {
            for len in 1..=MAX_GRAM_LEN {
                let Some(window) = chars.get(start..start + len) else {
                    break;
                };
                if Self::accept(window) {
                    grams.push(window.iter().collect());
                }
            }
        }
        grams
    }

    /// Lowercased letters, single-space separated, padded; empty if no letters
    fn padded(text: &str) -> Vec<char> {
        let mut chars = vec![' '];
        for ch in text.chars() {
            if ch.is_alphabetic() {
                chars.extend(ch.to_lowercase());
            } else if chars.last() != Some(&' ') {
                chars.push(' ');
            }
        }
        if chars.len() == 1 {
            return Vec::new();
        }
        if chars.last() != Some(&' ') {
            chars.push(' ');
        }
        chars
    }

    fn accept(window: &[char]) -> bool {
        if window.iter().all(|&c| c == ' ') {
            return false;
        }
        // "a b" spans two words and carries no signal of its own
        !(window.len() == 3 && window[1] == ' ')
    }
}
