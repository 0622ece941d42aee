use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup pattern"));

/// Drop tags (search-match highlights included) and decode the handful of
/// entities search snippets carry.
pub fn strip_markup(s: &str) -> String {
    MARKUP
        .replace_all(s, "")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Lower-cased alphanumeric runs, in order.
pub fn tokenize(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_highlight_spans() {
        let s = r#"<span class="searchmatch">Marie</span> &quot;Curie&quot;"#;
        assert_eq!(strip_markup(s), "Marie \"Curie\"");
    }

    #[test]
    fn tokenizes_on_punctuation() {
        assert_eq!(tokenize("Skłodowska-Curie, (1867)"), vec!["skłodowska", "curie", "1867"]);
    }
}
