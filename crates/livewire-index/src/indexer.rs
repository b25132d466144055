//! Component discovery and metadata extraction.

use livewire_index_api::{
    ComponentEntry, ComponentParams, DiskFs, IndexError, IndexResult, IndexerConfig, ProjectFs,
};
use log::{debug, trace, warn};
use std::io;
use std::path::{Path, PathBuf};

use crate::scan;

/// Answers editor queries about the Livewire components of one project.
///
/// Every call reads the registry and class files again through the
/// [`ProjectFs`] backend. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ComponentIndexer<F> {
    fs: F,
    config: IndexerConfig,
}

impl ComponentIndexer<DiskFs> {
    /// Index the project rooted at `root` on disk with the default config.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_config(DiskFs::new(root), IndexerConfig::default())
    }
}

impl<F: ProjectFs> ComponentIndexer<F> {
    pub fn new(fs: F) -> Self {
        Self::with_config(fs, IndexerConfig::default())
    }

    pub fn with_config(fs: F, config: IndexerConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// List registry entries whose name starts with `prefix` (all when `None`).
    ///
    /// Entries keep file order and are not deduplicated.
    ///
    /// # Errors
    /// Returns [`IndexError::RegistryUnavailable`] if the registry cannot be read.
    pub fn list_components(&self, prefix: Option<&str>) -> IndexResult<Vec<ComponentEntry>> {
        let registry_path = Path::new(&self.config.registry_path);
        let text = self
            .read_file(registry_path)
            .map_err(|e| IndexError::RegistryUnavailable(registry_path.to_path_buf(), e))?;

        let entries: Vec<ComponentEntry> = scan::scan_registry(&text)
            .filter(|entry| prefix.map_or(true, |p| entry.name.starts_with(p)))
            .collect();

        debug!(
            "Read {} components from {} (prefix: {:?})",
            entries.len(),
            registry_path.display(),
            prefix
        );
        Ok(entries)
    }

    /// List components with their mount parameters.
    ///
    /// A component whose parameters cannot be extracted gets `params: None`;
    /// only a registry failure fails the whole call.
    pub fn list_components_with_params(
        &self,
        prefix: Option<&str>,
    ) -> IndexResult<Vec<ComponentParams>> {
        let components = self.list_components(prefix)?;

        Ok(components
            .into_iter()
            .map(|entry| {
                let params = match self.extract_mount_params(&entry.name, Some(&entry.src_file)) {
                    Ok(params) => Some(params),
                    Err(e) => {
                        debug!("No mount parameters for {}: {e}", entry.name);
                        None
                    }
                };
                ComponentParams::new(entry.name, params)
            })
            .collect())
    }

    /// Registry class path of the component named exactly `name`.
    pub fn resolve_component_path(&self, name: &str) -> IndexResult<String> {
        self.list_components(None)?
            .into_iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.src_file)
            .ok_or_else(|| IndexError::ComponentNotFound(name.to_string()))
    }

    /// Raw text of a component's class file.
    ///
    /// When `src_file` is `None` or empty the path is looked up in the registry.
    pub fn load_class_source(&self, name: &str, src_file: Option<&str>) -> IndexResult<String> {
        // An empty path counts as absent, and an empty registry path as no entry
        let src_file = match src_file.filter(|path| !path.is_empty()) {
            Some(path) => path.to_string(),
            None => self.resolve_component_path(name)?,
        };
        if src_file.is_empty() {
            return Err(IndexError::ComponentNotFound(name.to_string()));
        }

        let class_path = PathBuf::from(format!(
            "{}.{}",
            scan::normalize_class_path(&src_file),
            self.config.class_extension
        ));

        self.read_file(&class_path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => IndexError::ClassFileNotFound(class_path.clone()),
                _ => IndexError::Io(class_path.clone(), e),
            })
    }

    /// Parameter names of the component's `mount` method, in declaration order.
    pub fn extract_mount_params(
        &self,
        name: &str,
        src_file: Option<&str>,
    ) -> IndexResult<Vec<String>> {
        let class_text = self.load_class_source(name, src_file)?;
        let signature = scan::find_mount_signature(&class_text)
            .ok_or_else(|| IndexError::MountMethodNotFound(name.to_string()))?;

        Ok(scan::extract_parameter_names(signature))
    }

    /// First component, in registry order, whose class references the view.
    ///
    /// Components whose class file cannot be loaded are skipped.
    pub fn resolve_component_from_view(&self, view_path: &str) -> IndexResult<ComponentEntry> {
        let dotted = scan::dotted_view_identifier(
            view_path,
            &self.config.views_root,
            &self.config.view_extension,
        )
        .ok_or_else(|| IndexError::InvalidViewPath(view_path.to_string()))?;

        for entry in self.list_components(None)? {
            let class_text = match self.load_class_source(&entry.name, Some(&entry.src_file)) {
                Ok(text) => text,
                Err(e) if e.is_not_found() => {
                    trace!("Skipping {}: {e}", entry.name);
                    continue;
                }
                Err(e) => {
                    warn!("Skipping {}: {e}", entry.name);
                    continue;
                }
            };

            if scan::references_view(&class_text, &dotted) {
                debug!("View {dotted} belongs to {}", entry.name);
                return Ok(entry);
            }
        }

        Err(IndexError::ViewNotReferenced(dotted))
    }

    /// Public methods of the view's component, minus lifecycle hooks.
    pub fn extract_actions(&self, view_path: &str) -> IndexResult<Vec<String>> {
        let class_text = self.view_class_source(view_path)?;

        Ok(scan::scan_public_methods(&class_text)
            .filter(|name| !self.config.is_reserved_action(name))
            .map(str::to_string)
            .collect())
    }

    /// Public properties of the view's component.
    pub fn extract_properties(&self, view_path: &str) -> IndexResult<Vec<String>> {
        let class_text = self.view_class_source(view_path)?;

        Ok(scan::scan_public_properties(&class_text)
            .map(str::to_string)
            .collect())
    }

    // Reads through the backend, then applies the configured size limit
    fn read_file(&self, path: &Path) -> io::Result<String> {
        let text = self.fs.read_to_string(path)?;
        let limit = self.config.max_file_size;
        if text.len() > limit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file exceeds maximum size ({} > {limit} bytes)", text.len()),
            ));
        }
        Ok(text)
    }

    fn view_class_source(&self, view_path: &str) -> IndexResult<String> {
        let component = self.resolve_component_from_view(view_path)?;
        self.load_class_source(&component.name, Some(&component.src_file))
    }
}
