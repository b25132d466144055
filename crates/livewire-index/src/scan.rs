//! Text scanners over registry and class source.
//!
//! Everything here is pattern matching on raw text, not PHP parsing. The
//! known blind spots are accepted:
//! - a `mount` parameter whose type contains `(` cuts the signature short
//! - a default value containing `$` is not special-cased
//! - a view identifier matches anywhere in the class text, comments included

use livewire_index_api::ComponentEntry;
use regex::Regex;
use std::sync::LazyLock;

// 'tag-name' => 'App\\Http\\Livewire\\Tag', with several entries allowed per line
static RE_REGISTRY_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']*)'\s*=>\s*'([^']*)',?").unwrap());

// Captures up to the first ')', not balanced
static RE_MOUNT_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s*mount\s*\(([^)]*)").unwrap());

// Methods without a modifier are implicitly public
static RE_PUBLIC_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:public\s+)?function\s*(\w+)").unwrap());

static RE_PUBLIC_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"public\s+\$(\w+)").unwrap());

/// Scan registry text for `'<name>' => '<path>'` entries, in file order.
pub fn scan_registry(text: &str) -> impl Iterator<Item = ComponentEntry> + '_ {
    RE_REGISTRY_ENTRY
        .captures_iter(text)
        .map(|caps| ComponentEntry::new(&caps[1], &caps[2]))
}

/// Raw parameter list of the first `mount` method, if there is one.
pub fn find_mount_signature(class_text: &str) -> Option<&str> {
    RE_MOUNT_SIGNATURE
        .captures(class_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parameter names from a raw signature such as `int $a, $b = 1`.
///
/// Each comma-separated piece contributes the identifier right after its
/// first `$`. Pieces without a `$` contribute nothing.
pub fn extract_parameter_names(signature: &str) -> Vec<String> {
    signature
        .split(',')
        .filter_map(|piece| {
            let (_, after_sigil) = piece.split_once('$')?;
            let name: String = after_sigil
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// Names of public methods in declaration order, duplicates kept.
pub fn scan_public_methods(class_text: &str) -> impl Iterator<Item = &str> {
    RE_PUBLIC_METHOD
        .captures_iter(class_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Names of `public $name` properties in declaration order, duplicates kept.
pub fn scan_public_properties(class_text: &str) -> impl Iterator<Item = &str> {
    RE_PUBLIC_PROPERTY
        .captures_iter(class_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Dotted identifier of a template path.
///
/// `/srv/app/resources/views/livewire/counter.blade.php` with root
/// `resources/views` and extension `blade.php` gives `livewire.counter`.
/// Backslashes count as separators. The last occurrence of the views root
/// wins. Returns `None` when the path is not shaped like a template.
pub fn dotted_view_identifier(
    view_path: &str,
    views_root: &str,
    view_extension: &str,
) -> Option<String> {
    let normalized = format!("/{}", view_path.replace('\\', "/"));
    let marker = format!("/{}/", views_root.trim_matches('/'));

    let start = normalized.rfind(&marker)? + marker.len();
    let segment = normalized[start..].strip_suffix(&format!(".{view_extension}"))?;
    if segment.is_empty() {
        return None;
    }

    Some(segment.replace('/', "."))
}

/// Whether the class text mentions the dotted view identifier anywhere.
pub fn references_view(class_text: &str, dotted: &str) -> bool {
    class_text.contains(dotted)
}

/// Registry class path as a project-relative file path stem.
///
/// Registry files escape namespace separators (`App\\Http\\Livewire`), so both
/// doubled and single backslashes become `/`.
pub fn normalize_class_path(src_file: &str) -> String {
    src_file
        .replace("\\\\", "/")
        .replace('\\', "/")
        .trim_start_matches('/')
        .to_string()
}
