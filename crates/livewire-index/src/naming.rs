//! Tag name to class name conventions

use livewire_index_api::ComponentEntry;

/// Convert a kebab-case segment to PascalCase (`user-profile` -> `UserProfile`).
///
/// Empty words (leading, trailing or doubled dashes) are skipped.
pub fn kebab_to_pascal(text: &str) -> String {
    text.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Conventional class name of a component (`admin.user-card` -> `UserCard`).
pub fn class_name(entry: &ComponentEntry) -> String {
    kebab_to_pascal(entry.short_name())
}
