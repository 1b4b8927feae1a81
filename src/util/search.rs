//! Case-insensitive substring matching shared by list screens.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// True when `haystack` contains `query` ignoring case. An empty or
/// whitespace query matches everything, which is how every search box in
/// the app treats a cleared input.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// True when any of the given fields matches the query.
pub fn any_field_matches(fields: &[&str], query: &str) -> bool {
    fields.iter().any(|field| matches_query(field, query))
}
