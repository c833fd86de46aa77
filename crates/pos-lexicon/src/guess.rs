/// Suffixes that usually mark adjectives.
const JJ_SUFFIXES: [&str; 9] = [
    "ed", "us", "ic", "ble", "ive", "ary", "ful", "ical", "less",
];

/// Guesses a tag for a word absent from the lexicon, from its surface form
/// alone. Rules are checked in order and the first match wins, so a
/// capitalized hyphenated word comes out as NNP, not JJ.
///
/// Returns `None` when no rule matches; the scorer treats that as a
/// guaranteed miss.
pub fn guess_tag(word: &str) -> Option<&'static str> {
    if word.chars().next().is_some_and(char::is_uppercase) {
        return Some("NNP");
    }
    if word.contains('-') {
        return Some("JJ");
    }
    if word.chars().any(|c| c.is_ascii_digit()) {
        return Some("CD");
    }
    if JJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return Some("JJ");
    }
    if word.ends_with('s') {
        return Some("NNS");
    }
    if word.ends_with("ly") {
        return Some("RB");
    }
    if word.ends_with("ing") {
        return Some("VBG");
    }
    None
}
