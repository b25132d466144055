//! Livewire Index API
//!
//! Shared types for the Livewire component indexer.
//!
//! This crate provides the foundation the indexer and its hosts agree on:
//!
//! - **Entity types**: [`ComponentEntry`] and [`ComponentParams`], the rows handed to an editor
//! - **Configuration**: [`IndexerConfig`], where the registry, class files and views live
//! - **Filesystem seam**: the [`ProjectFs`] trait with disk and in-memory backends
//! - **Error handling**: [`IndexError`] and the [`Degrade`] extension for sentinel results
//!
//! # Example
//!
//! ```rust
//! use livewire_index_api::{MemoryFs, ProjectFs};
//! use std::path::Path;
//!
//! let fs = MemoryFs::new().with_file("app/Counter.php", "<?php class Counter {}");
//! let text = fs.read_to_string(Path::new("app/Counter.php")).unwrap();
//! assert!(text.contains("class Counter"));
//! ```

pub mod config;
pub mod degrade;
pub mod entities;
pub mod errors;
pub mod fs;

// Re-export commonly used types
pub use config::IndexerConfig;
pub use degrade::Degrade;
pub use entities::{ComponentEntry, ComponentParams};
pub use errors::{IndexError, IndexResult};
pub use fs::{DiskFs, MemoryFs, ProjectFs};
