//! In-memory providers.

use std::collections::HashMap;

use super::{AssetProvider, ProviderError};

/// Leaf provider serving stylesheets registered in memory.
///
/// Names are matched exactly, no prefix stripping or path normalization is
/// applied.
///
/// # Example
///
/// ```rust
/// use css_providers::{AssetProvider, InlineProvider};
///
/// let provider = InlineProvider::new()
///     .with("foo.css", "foo { color: green; }")
///     .with("bar.css", "\n bar { color: red; }\n");
///
/// assert_eq!(provider.contents_of_file("bar.css").unwrap(), "bar { color: red; }");
/// assert!(provider.contents_of_file("baz.css").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineProvider {
    stylesheets: HashMap<String, String>,
}

impl InlineProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stylesheet, consuming and returning the provider.
    pub fn with(mut self, name: impl Into<String>, css: impl Into<String>) -> Self {
        self.add(name, css);
        self
    }

    /// Adds a stylesheet, replacing any previous one with the same name.
    pub fn add(&mut self, name: impl Into<String>, css: impl Into<String>) {
        self.stylesheets.insert(name.into(), css.into());
    }

    /// Returns the number of registered stylesheets.
    pub fn len(&self) -> usize {
        self.stylesheets.len()
    }

    /// Returns true if no stylesheets are registered.
    pub fn is_empty(&self) -> bool {
        self.stylesheets.is_empty()
    }

    /// Returns an iterator over the registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stylesheets.keys().map(|s| s.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InlineProvider {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut provider = Self::new();
        for (name, css) in iter {
            provider.add(name, css);
        }
        provider
    }
}

impl AssetProvider for InlineProvider {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        self.stylesheets
            .get(name)
            .map(|css| css.trim().to_string())
            .ok_or_else(|| ProviderError::not_found(name))
    }
}

/// Provider that never finds anything.
///
/// Stands in where a provider is required but no stylesheets should be
/// inlined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullProvider;

impl AssetProvider for NullProvider {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        Err(ProviderError::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_lookup() {
        let provider = InlineProvider::new().with("valid", "a {}");

        assert_eq!(provider.contents_of_file("valid").unwrap(), "a {}");
        assert_eq!(
            provider.contents_of_file("invalid"),
            Err(ProviderError::not_found("invalid"))
        );
    }

    #[test]
    fn test_inline_trims() {
        let provider = InlineProvider::new().with("a.css", "\n\t a {} \n");
        assert_eq!(provider.find_stylesheet("a.css").as_deref(), Some("a {}"));
    }

    #[test]
    fn test_inline_overwrites() {
        let mut provider = InlineProvider::new();
        provider.add("a.css", "first");
        provider.add("a.css", "second");

        assert_eq!(provider.len(), 1);
        assert_eq!(provider.contents_of_file("a.css").unwrap(), "second");
    }

    #[test]
    fn test_inline_from_iter() {
        let provider: InlineProvider = [("a.css", "a {}"), ("b.css", "b {}")].into_iter().collect();

        let mut names: Vec<&str> = provider.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["a.css", "b.css"]);
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_null_provider_finds_nothing() {
        assert_eq!(NullProvider.find_stylesheet("anything.css"), None);
        assert_eq!(
            NullProvider.contents_of_file("anything.css"),
            Err(ProviderError::not_found("anything.css"))
        );
        assert_eq!(NullProvider.load_css(&[]).unwrap(), "");
    }
}
