//! Writing-script classification of letters
//!
//! Only used to find letters that belong to a minority script of a text.
//! Scripts come from the Unicode Script property; letters whose script is
//! Common, Inherited or Unknown are not attributed to any script.

use std::collections::HashMap;
use unicode_script::UnicodeScript;

pub use unicode_script::Script;

/// Script of `ch`, or `None` if it is not a letter of a specific script
pub fn script_of(ch: char) -> Option<Script> {
    if !ch.is_alphabetic() {
        return None;
    }
    match ch.script() {
        Script::Common | Script::Inherited | Script::Unknown => None,
        script => Some(script),
    }
}

/// Number of letters per script in `text`
pub fn script_counts(text: &str) -> HashMap<Script, usize> {
    let mut counts = HashMap::new();
    for script in text.chars().filter_map(script_of) {
        *counts.entry(script).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_letters_have_no_script() {
        for ch in ['1', ' ', '.', '!', '\n', '€'] {
            assert_eq!(script_of(ch), None, "{ch:?}");
        }
    }

    #[test]
    fn test_common_scripts() {
        assert_eq!(script_of('a'), Some(Script::Latin));
        assert_eq!(script_of('É'), Some(Script::Latin));
        assert_eq!(script_of('ß'), Some(Script::Latin));
        assert_eq!(script_of('λ'), Some(Script::Greek));
        assert_eq!(script_of('ж'), Some(Script::Cyrillic));
        assert_eq!(script_of('ש'), Some(Script::Hebrew));
        assert_eq!(script_of('ب'), Some(Script::Arabic));
        assert_eq!(script_of('क'), Some(Script::Devanagari));
        assert_eq!(script_of('ก'), Some(Script::Thai));
        assert_eq!(script_of('한'), Some(Script::Hangul));
        assert_eq!(script_of('あ'), Some(Script::Hiragana));
        assert_eq!(script_of('カ'), Some(Script::Katakana));
        assert_eq!(script_of('漢'), Some(Script::Han));
    }

    #[test]
    fn test_indic_scripts_are_distinct() {
        assert_eq!(script_of('অ'), Some(Script::Bengali));
        assert_eq!(script_of('த'), Some(Script::Tamil));
        assert_eq!(script_of('క'), Some(Script::Telugu));
        assert_eq!(script_of('ક'), Some(Script::Gujarati));
        assert_eq!(script_of('ሀ'), Some(Script::Ethiopic));
    }

    #[test]
    fn test_script_counts() {
        let counts = script_counts("abc жж 12");
        assert_eq!(counts.get(&Script::Latin), Some(&3));
        assert_eq!(counts.get(&Script::Cyrillic), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_script_counts_keep_small_scripts_apart() {
        let counts = script_counts("অআই தமன");
        assert_eq!(counts.get(&Script::Bengali), Some(&3));
        assert_eq!(counts.get(&Script::Tamil), Some(&3));
    }
}
