//! Text filters applied before classification
//!
//! Each filter is a pure function of its input. Removed spans are replaced by
//! a single space so that neighbouring words never merge.

use crate::script::{script_counts, script_of, Script};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// URLs with a reasonably long tail
const URL_PATTERN: &str = r"https?://[-_.?&~;+=/#0-9A-Za-z]{10,}";

const EMAIL_PATTERN: &str = r"[-_.0-9A-Za-z]{1,64}@[-_0-9A-Za-z]{1,255}[-_.0-9A-Za-z]{1,255}";

const MARKUP_PATTERN: &str = r"<[^>]+>";

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKUP_REGEX: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in filter pattern must compile"))
}

/// Replace URLs and e-mail addresses with a space
pub fn strip_urls(text: &str) -> String {
    let without_urls = compiled(&URL_REGEX, URL_PATTERN).replace_all(text, " ");
    compiled(&EMAIL_REGEX, EMAIL_PATTERN)
        .replace_all(&without_urls, " ")
        .into_owned()
}

/// Replace markup tags such as `<b>` or `<a href="...">` with a space
pub fn strip_markup(text: &str) -> String {
    compiled(&MARKUP_REGEX, MARKUP_PATTERN)
        .replace_all(text, " ")
        .into_owned()
}

/// Replace letters of scripts that make up less than `threshold` of all
/// letters with a space
pub fn remove_minority_scripts(text: &str, threshold: f64) -> String {
    let counts = script_counts(text);
    let total: usize = counts.values().sum();
    if total == 0 {
        return text.to_string();
    }

    let minority: HashSet<Script> = counts
        .into_iter()
        .filter(|&(_, count)| (count as f64) / (total as f64) < threshold)
        .map(|(script, _)| script)
        .collect();
    if minority.is_empty() {
        return text.to_string();
    }

    text.chars()
        .map(|ch| match script_of(ch) {
            Some(script) if minority.contains(&script) => ' ',
            _ => ch,
        })
        .collect()
}

/// Trim and collapse every whitespace run to one space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
