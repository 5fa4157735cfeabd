//! Provider errors.

use std::path::PathBuf;

/// Error returned by [`AssetProvider::contents_of_file`](super::AssetProvider::contents_of_file).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider has no stylesheet with this name.
    ///
    /// `name` is the name as requested, before any normalization.
    #[error("Could not find stylesheet \"{name}\"")]
    NotFound { name: String },

    /// The name resolves to a path outside the provider's root directory.
    #[error("Stylesheet \"{name}\" resolves outside of {}", root.display())]
    InsecurePath { name: String, root: PathBuf },

    /// The stylesheet exists but could not be read.
    #[error("Failed to read stylesheet \"{}\": {message}", path.display())]
    Read { path: PathBuf, message: String },
}

impl ProviderError {
    /// Shorthand for [`ProviderError::NotFound`].
    pub fn not_found(name: impl Into<String>) -> Self {
        ProviderError::NotFound { name: name.into() }
    }

    /// Whether this error only means "this provider has no such stylesheet".
    ///
    /// [`ProviderList`](super::ProviderList) moves on to its next member for
    /// these and stops for everything else.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }
}
