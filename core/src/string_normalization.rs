use unidecode::unidecode;

/// Normalize a name for lookups: ASCII-fold, lowercase, collapse whitespace.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
