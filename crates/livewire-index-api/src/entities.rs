use serde::{Deserialize, Serialize};

/// A component as recorded in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Tag name used in templates (e.g., "admin.user-card")
    pub name: String,

    /// Class path as written in the registry, without extension
    #[serde(rename = "srcFile")]
    pub src_file: String,
}

impl ComponentEntry {
    pub fn new(name: impl Into<String>, src_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src_file: src_file.into(),
        }
    }

    /// Last dotted segment of the tag name ("admin.user-card" -> "user-card")
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// A component together with its mount parameters
///
/// `params` is `None` when the class could not be loaded or declares no
/// `mount` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentParams {
    /// Tag name used in templates
    pub name: String,

    /// Mount parameter names in declaration order
    pub params: Option<Vec<String>>,
}

impl ComponentParams {
    pub fn new(name: impl Into<String>, params: Option<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}
