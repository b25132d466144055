//! # livewire-index
//!
//! Component indexer for Livewire projects - powers editor completion and navigation.
//!
//! ## Features
//!
//! - Read the generated component registry (`bootstrap/cache/livewire-components.php`)
//! - Load a component's class source by tag name
//! - Extract `mount()` parameter names for tag attribute completion
//! - Map a Blade template back to the component that renders it
//! - List the actions and public properties available inside a template
//!
//! Everything is a text scan over files read fresh on every call. Results are
//! [`IndexResult`]s; hosts that want "no completion" instead of an error use
//! [`Degrade`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use livewire_index::{ComponentIndexer, Degrade};
//!
//! let indexer = ComponentIndexer::open("/srv/my-app");
//!
//! for component in indexer.list_components(Some("admin.")).degrade_or_default() {
//!     println!("{} -> {}", component.name, component.src_file);
//! }
//!
//! let actions = indexer
//!     .extract_actions("/srv/my-app/resources/views/livewire/counter.blade.php")
//!     .degrade();
//! println!("{actions:?}");
//! ```

mod indexer;
pub mod naming;
pub mod scan;

// Re-export API types for convenience
pub use livewire_index_api::{
    ComponentEntry, ComponentParams, Degrade, DiskFs, IndexError, IndexResult, IndexerConfig,
    MemoryFs, ProjectFs,
};

pub use indexer::ComponentIndexer;
