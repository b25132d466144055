use serde::{Deserialize, Serialize};

/// Configuration for where the indexer looks and what it filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Project-relative path of the generated component manifest
    pub registry_path: String,

    /// Extension appended to registry class paths (without the dot)
    pub class_extension: String,

    /// Project-relative root of the Blade templates
    pub views_root: String,

    /// Template extension (without the leading dot)
    pub view_extension: String,

    /// Method names that are lifecycle hooks, never reported as actions
    pub reserved_actions: Vec<String>,

    /// Maximum file size to read (in bytes)
    /// Larger files are reported as read errors
    pub max_file_size: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            registry_path: "bootstrap/cache/livewire-components.php".to_string(),
            class_extension: "php".to_string(),
            views_root: "resources/views".to_string(),
            view_extension: "blade.php".to_string(),
            reserved_actions: vec!["mount".to_string(), "render".to_string()],
            max_file_size: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl IndexerConfig {
    /// Set the registry location
    pub fn with_registry_path(mut self, path: impl Into<String>) -> Self {
        self.registry_path = path.into();
        self
    }

    /// Set the views root
    pub fn with_views_root(mut self, root: impl Into<String>) -> Self {
        self.views_root = root.into();
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Whether `name` is a lifecycle hook rather than an action
    pub fn is_reserved_action(&self, name: &str) -> bool {
        self.reserved_actions.iter().any(|reserved| reserved == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let config = IndexerConfig::default();
        assert_eq!(
            config.registry_path,
            "bootstrap/cache/livewire-components.php"
        );
        assert_eq!(config.views_root, "resources/views");
        assert_eq!(config.view_extension, "blade.php");
        assert!(config.is_reserved_action("mount"));
        assert!(config.is_reserved_action("render"));
        assert!(!config.is_reserved_action("save"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: IndexerConfig =
            serde_json::from_str(r#"{"views_root": "themes/default/views"}"#).unwrap();
        assert_eq!(config.views_root, "themes/default/views");
        assert_eq!(config.class_extension, "php");
        assert_eq!(config.reserved_actions.len(), 2);
    }

    #[test]
    fn test_builders() {
        let config = IndexerConfig::default()
            .with_registry_path("cache/components.php")
            .with_max_file_size(1024);
        assert_eq!(config.registry_path, "cache/components.php");
        assert_eq!(config.max_file_size, 1024);
    }
}
