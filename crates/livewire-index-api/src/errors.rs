use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while indexing components
#[derive(Error, Debug)]
pub enum IndexError {
    /// The component registry could not be read
    #[error("Component registry {0} is unavailable: {1}")]
    RegistryUnavailable(PathBuf, #[source] std::io::Error),

    /// No registry entry carries the requested name
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// The registry points at a class file that does not exist
    #[error("Class file not found: {0}")]
    ClassFileNotFound(PathBuf),

    /// A template path is not shaped like `resources/views/<name>.blade.php`
    #[error("Invalid view path: {0}")]
    InvalidViewPath(String),

    /// The component class declares no `mount` method
    #[error("Component {0} has no mount() method")]
    MountMethodNotFound(String),

    /// No component class references the view
    #[error("No component references view {0}")]
    ViewNotReferenced(String),

    /// Failed to read a file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}

impl IndexError {
    /// Whether this error means "nothing there" rather than a broken read.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ComponentNotFound(_)
                | Self::ClassFileNotFound(_)
                | Self::MountMethodNotFound(_)
                | Self::ViewNotReferenced(_)
        )
    }
}

/// Result type for indexer operations
pub type IndexResult<T> = Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_component_not_found_message() {
        let err = IndexError::ComponentNotFound("counter".to_string());
        assert_eq!(err.to_string(), "Component not found: counter");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = IndexError::Io(
            PathBuf::from("app/Counter.php"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "IO error reading app/Counter.php: denied");
    }

    #[test]
    fn test_invalid_view_path_message() {
        let err = IndexError::InvalidViewPath("/tmp/foo.txt".to_string());
        assert_eq!(err.to_string(), "Invalid view path: /tmp/foo.txt");
    }
}
