//! Editing helpers for the chip-style catalog lists (brands, colors,
//! sizes, seed catalogs).

#[cfg(test)]
#[path = "chips_test.rs"]
mod chips_test;

/// Append a trimmed entry, rejecting blanks and case-insensitive
/// duplicates. Returns whether the list changed.
pub fn add_entry(list: &mut Vec<String>, raw: &str) -> bool {
    let entry = raw.trim();
    if entry.is_empty() {
        return false;
    }
    let lowered = entry.to_lowercase();
    if list.iter().any(|existing| existing.to_lowercase() == lowered) {
        return false;
    }
    list.push(entry.to_owned());
    true
}

/// Remove the entry at `index` if it exists. Returns whether the list
/// changed.
pub fn remove_entry(list: &mut Vec<String>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}
