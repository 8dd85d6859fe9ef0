//! Expense categories
//!
//! Categories are free-form strings on an expense; this is the list offered
//! by default and used to normalize user input.

/// Built-in categories, in display order
pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Accommodation",
    "Entertainment",
    "Shopping",
    "Utilities",
    "Other",
];

/// Category assigned when none is chosen
pub const DEFAULT_CATEGORY: &str = "Food";

/// Find the built-in spelling of a category, ignoring case
pub fn find_known(name: &str) -> Option<&'static str> {
    let name = name.trim();
    CATEGORIES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))
}

/// Normalize a category: built-in spelling if known, otherwise the trimmed input
pub fn normalize(name: &str) -> String {
    find_known(name)
        .map(str::to_string)
        .unwrap_or_else(|| name.trim().to_string())
}
