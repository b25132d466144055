//! Read-only filesystem collaborators.
//!
//! The indexer never touches `std::fs` directly; it reads project-relative
//! paths through [`ProjectFs`]:
//! - [`DiskFs`]: reads files under a project root on disk
//! - [`MemoryFs`]: in-memory files, for tests and unsaved editor buffers
//!
//! Nothing is cached. Every call goes to the backend again.

use log::trace;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to files addressed relative to a project root.
pub trait ProjectFs {
    /// Read a project-relative file as text.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] with kind [`io::ErrorKind::NotFound`] when the
    /// file does not exist, and any other kind for failed reads.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<T: ProjectFs + ?Sized> ProjectFs for &T {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

impl<T: ProjectFs + ?Sized> ProjectFs for Box<T> {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// Project files on disk, addressed as `{root}/<path>`.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
    max_file_size: Option<u64>,
}

impl DiskFs {
    /// Create a backend rooted at the project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_size: None,
        }
    }

    /// Refuse files larger than `size` bytes.
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = Some(size as u64);
        self
    }

    /// The project root this backend reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProjectFs for DiskFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let full_path = self.root.join(path);
        trace!("Reading {}", full_path.display());

        if let Some(limit) = self.max_file_size {
            let len = fs::metadata(&full_path)?.len();
            if len > limit {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("file exceeds maximum size ({len} > {limit} bytes)"),
                ));
            }
        }

        // Class files are not guaranteed to be UTF-8 (Latin-1 comments are common)
        let bytes = fs::read(full_path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory project files keyed by project-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFs {
    /// Create an empty in-memory project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Remove a file, returning its contents if it existed.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<String> {
        self.files.remove(path.as_ref())
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no files are held.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ProjectFs for MemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        trace!("Reading {} from memory", path.display());
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_missing_file_is_not_found() {
        let fs = MemoryFs::new();
        let err = fs.read_to_string(Path::new("nope.php")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_fs_insert_and_remove() {
        let mut fs = MemoryFs::new().with_file("a.php", "A");
        fs.insert("b.php", "B");
        assert_eq!(fs.len(), 2);
        assert_eq!(fs.read_to_string(Path::new("b.php")).unwrap(), "B");
        assert_eq!(fs.remove("a.php").as_deref(), Some("A"));
        assert_eq!(fs.len(), 1);
    }

    #[test]
    fn test_disk_fs_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("app")).unwrap();
        std::fs::write(dir.path().join("app/Counter.php"), "<?php").unwrap();

        let fs = DiskFs::new(dir.path());
        assert_eq!(
            fs.read_to_string(Path::new("app/Counter.php")).unwrap(),
            "<?php"
        );
        assert_eq!(
            fs.read_to_string(Path::new("app/Missing.php"))
                .unwrap_err()
                .kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_disk_fs_decodes_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Counter.php"),
            b"<?php // Caf\xe9\nfunction mount($count) {}\n",
        )
        .unwrap();

        let text = DiskFs::new(dir.path())
            .read_to_string(Path::new("Counter.php"))
            .unwrap();
        assert!(text.contains("Caf\u{FFFD}"));
        assert!(text.contains("function mount($count)"));
    }

    #[test]
    fn test_disk_fs_enforces_max_size() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("big.php"), "x".repeat(64)).unwrap();

        let fs = DiskFs::new(dir.path()).with_max_file_size(16);
        let err = fs.read_to_string(Path::new("big.php")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_reference_is_a_project_fs() {
        fn read(fs: impl ProjectFs) -> io::Result<String> {
            fs.read_to_string(Path::new("a.php"))
        }
        let fs = MemoryFs::new().with_file("a.php", "A");
        assert_eq!(read(&fs).unwrap(), "A");
    }
}
