use catlink_core::types::Annotation;

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Reassemble `text` with each annotated span wrapped in a styled element.
/// Text outside the spans, delimiters included, is copied through unchanged.
/// Annotations overlapping an earlier one are skipped.
pub fn render_html(text: &str, annotations: &[Annotation]) -> String {
    let mut ordered: Vec<&Annotation> = annotations.iter().collect();
    ordered.sort_by_key(|a| (a.start, a.end));

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for a in ordered {
        if a.start < cursor || a.end > text.len() || a.start > a.end {
            continue;
        }
        out.push_str(&text[cursor..a.start]);
        out.push_str(&format!(
            r#"<span class="{}" {}="{}">{}</span>"#,
            escape_attribute(&a.class_name),
            a.title_attribute,
            escape_attribute(&a.canonical_title),
            &text[a.start..a.end],
        ));
        cursor = a.end;
    }
    out.push_str(&text[cursor..]);
    out
}
