//! Collections of prompts addressable by name.

use crate::Prompt;
use crate::builtin::BUILTIN_PROMPTS;
use nova_error::{CatalogError, CatalogErrorKind};
use std::path::{Path, PathBuf};

/// A set of prompts with unique names.
///
/// Prompts are kept sorted by category, then name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    prompts: Vec<Prompt>,
}

impl Catalog {
    /// Builds a catalog from prompts, rejecting duplicate names.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        catalog.extend(prompts)?;
        Ok(catalog)
    }

    /// The prompts compiled into this crate.
    #[tracing::instrument]
    pub fn builtin() -> Result<Self, CatalogError> {
        let prompts = BUILTIN_PROMPTS
            .iter()
            .map(|(path, content)| {
                content.parse::<Prompt>().map_err(|e| {
                    tracing::error!(path = %path, error = %e, "Built-in prompt failed to load");
                    e
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(prompts)
    }

    /// Loads every `*.toml` file under `dir`, recursively.
    #[tracing::instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut files = Vec::new();
        collect_toml_files(dir.as_ref(), &mut files)?;
        files.sort();

        let prompts = files
            .iter()
            .map(Prompt::from_file)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(count = prompts.len(), "Loaded prompts from directory");
        Self::new(prompts)
    }

    /// Adds prompts, rejecting any whose name is already taken.
    pub fn extend(&mut self, prompts: impl IntoIterator<Item = Prompt>) -> Result<(), CatalogError> {
        for prompt in prompts {
            if self.prompts.iter().any(|p| p.name() == prompt.name()) {
                return Err(CatalogError::new(CatalogErrorKind::DuplicatePrompt(
                    prompt.name().to_string(),
                )));
            }
            self.prompts.push(prompt);
        }
        self.prompts.sort_by(|a, b| {
            (a.metadata().category(), a.name()).cmp(&(b.metadata().category(), b.name()))
        });
        Ok(())
    }

    /// Merges another catalog into this one.
    pub fn merge(&mut self, other: Catalog) -> Result<(), CatalogError> {
        self.extend(other.prompts)
    }

    /// Looks up a prompt by `name` or `category/name`.
    pub fn get(&self, name: &str) -> Option<&Prompt> {
        self.prompts
            .iter()
            .find(|p| p.name() == name || p.metadata().qualified_name() == name)
    }

    /// Resolves a catalog name or a path to a prompt file.
    ///
    /// Arguments ending in `.toml` that exist on disk are loaded as files;
    /// everything else is looked up by name.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, name_or_path: &str) -> Result<Prompt, CatalogError> {
        let path = Path::new(name_or_path);
        if path.extension().is_some_and(|ext| ext == "toml") && path.is_file() {
            return Prompt::from_file(path);
        }
        self.get(name_or_path)
            .cloned()
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::UnknownPrompt(name_or_path.to_string())))
    }

    /// All prompts, sorted by category then name.
    pub fn list(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Number of prompts.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// True when the catalog holds no prompts.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

fn collect_toml_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CatalogError> {
    let read_err = |e: std::io::Error| {
        CatalogError::new(CatalogErrorKind::FileRead(format!("{}: {}", dir.display(), e)))
    };

    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_dir() {
            collect_toml_files(&path, files)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            files.push(path);
        }
    }
    Ok(())
}
