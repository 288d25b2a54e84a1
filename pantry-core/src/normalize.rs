//! Lookup-key normalization for ingredient names.
//!
//! Keys are lower-cased and reduced to a singular form with a small
//! suffix table. The table is a heuristic, not a lexicon: "molasses"
//! becomes "molass".

/// Endings that are never treated as plural ("hummus", "glass", "anis").
const INVARIANT_SUFFIXES: &[&str] = &["ss", "us", "is"];

/// Plural endings and their singular replacements, tried in order.
const PLURAL_SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("oes", "o"),
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("s", ""),
];

/// Characters that must remain after stripping a plural ending.
const MIN_STEM_LEN: usize = 2;

/// Normalize a raw item name into a catalog lookup key.
///
/// Blank input is returned lower-cased and otherwise untouched.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    if lowered.is_empty() {
        return name.to_lowercase();
    }
    singularize(&lowered)
}

/// Reduce a lower-cased word or phrase to its singular form.
///
/// Only the end of the input is inspected, so "cherry tomatoes" becomes
/// "cherry tomato".
pub fn singularize(word: &str) -> String {
    if INVARIANT_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }

    for (suffix, replacement) in PLURAL_SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM_LEN {
                return format!("{}{}", stem, replacement);
            }
        }
    }

    word.to_string()
}
