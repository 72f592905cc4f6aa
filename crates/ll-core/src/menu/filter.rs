//! Pure selection logic for the home screen list.
//!
//! Two independent optional criteria narrow the cached list: a free-text
//! search phrase matched against titles, and a category selection. When
//! both are set the search phrase wins and the category is ignored.

use super::MenuItem;

/// Derive the subset of `all` to display for the given criteria.
///
/// Matching is case-insensitive substring containment. Empty criteria
/// select everything; the input order is preserved.
pub fn visible_items(all: &[MenuItem], category: &str, search_phrase: &str) -> Vec<MenuItem> {
    if !search_phrase.is_empty() {
        let phrase = search_phrase.to_lowercase();
        return all
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&phrase))
            .cloned()
            .collect();
    }

    if !category.is_empty() {
        let wanted = category.to_lowercase();
        return all
            .iter()
            .filter(|item| item.category.to_lowercase().contains(&wanted))
            .cloned()
            .collect();
    }

    all.to_vec()
}

/// Apply the exclusive single-select rule for category chips: picking the
/// active category again clears the selection.
pub fn toggle_category(current: &str, selection: &str) -> String {
    if current == selection {
        String::new()
    } else {
        selection.to_string()
    }
}
