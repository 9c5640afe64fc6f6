use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Atomic composition of a formula: element symbol -> number of atoms
pub type ElementCount = HashMap<String, usize>;

/// one uppercase letter + optional lowercase letters = element symbol,
/// followed by an optional digit run = multiplicity
fn formula_token() -> &'static Regex {
    static FORMULA_TOKEN: OnceLock<Regex> = OnceLock::new();
    FORMULA_TOKEN.get_or_init(|| Regex::new(r"([A-Z][a-z]*)(\d*)").unwrap())
}

/// Parse a chemical formula into a map "element symbol -> atom count".
/// The formula is scanned left to right; a symbol without digits counts as 1
/// and a symbol occurring in several runs is summed, so "C5H6OOH" gives
/// {"C": 5, "H": 7, "O": 2}. Characters outside the token grammar (brackets,
/// phase marks, charges) are skipped and contribute nothing, and an empty
/// string yields an empty map.
pub fn parse_formula(formula: &str) -> ElementCount {
    let mut counts = ElementCount::new();
    for caps in formula_token().captures_iter(formula) {
        let symbol = &caps[1];
        let count: usize = if caps[2].is_empty() {
            1
        } else {
            caps[2].parse().unwrap_or(1)
        };
        *counts.entry(symbol.to_string()).or_insert(0) += count;
    }
    counts
}
