use catlink_core::types::NameParts;

/// Split "Last, First Middle" at the first comma. Without a comma the whole
/// text is the last name.
pub fn parse_name(text: &str) -> NameParts {
    match text.split_once(',') {
        Some((last, rest)) => NameParts {
            last_name: last.trim().to_string(),
            first_and_middle_names: rest.trim().to_string(),
        },
        None => NameParts { last_name: text.trim().to_string(), first_and_middle_names: String::new() },
    }
}

/// "Last, First Middle" -> "First Middle Last".
pub fn normalize_query(text: &str) -> String {
    parse_name(text).query()
}
