use unicode_normalization::UnicodeNormalization;

/// Lowercases, removes accents, and strips special characters for reliable
/// comparison. This is the only equality basis for team and player names;
/// nothing else compares raw strings.
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| c.is_ascii())
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}
