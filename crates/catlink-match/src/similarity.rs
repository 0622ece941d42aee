/// Levenshtein edit distance over chars. Comparison is case-sensitive; callers
/// lower-case first when they want otherwise.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// `(max_len - distance) / max_len * 100`, with two empty strings defined as
/// identical (100).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let d = distance(a, b);
    (max_len - d) as f64 / max_len as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pair_is_identical() {
        assert_eq!(similarity("", ""), 100.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance("skłodowska", "sklodowska"), 1);
        assert_eq!(similarity("skłodowska", "sklodowska"), 90.0);
    }
}
