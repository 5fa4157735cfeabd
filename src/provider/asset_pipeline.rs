//! Provider backed by a key-based asset store.
//!
//! [`AssetPipelineProvider`] turns a requested stylesheet name such as
//! `"/assets/admin//layout.css"` into a store key (`"admin/layout.css"`) and
//! queries its [`AssetStore`] with it.
//!
//! # Key normalization
//!
//! 1. If the name starts with the provider's prefix, the prefix and the
//!    `/` following it are removed. The prefix only matches whole path segments:
//!    with prefix `/assets`, `"/assets/app.css"` is stripped but
//!    `"/assetsmore.css"` is not.
//! 2. Runs of `/` are collapsed into a single `/`.
//!
//! The prefix itself is normalized once at construction by removing trailing
//! slashes, so `"/prefix"` and `"/prefix/"` behave the same.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use super::{AssetProvider, ProviderError};

/// Prefix assumed by [`AssetPipelineProvider::new`].
pub const DEFAULT_ASSET_PREFIX: &str = "/assets";

/// A named-content store queried by [`AssetPipelineProvider`].
///
/// Implemented for plain maps and forwarded through common pointer types, so a
/// store can be owned by the provider or shared with the rest of the
/// application.
///
/// # Example
///
/// ```rust
/// use css_providers::AssetStore;
///
/// struct Compiled;
///
/// impl AssetStore for Compiled {
///     fn lookup(&self, key: &str) -> Option<String> {
///         (key == "app.css").then(|| "body {}".to_string())
///     }
/// }
///
/// assert_eq!(Compiled.lookup("app.css").as_deref(), Some("body {}"));
/// assert_eq!(Compiled.lookup("other.css"), None);
/// ```
pub trait AssetStore {
    /// Returns the content stored under `key`, or `None` if there is none.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl AssetStore for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl AssetStore for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Box<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Rc<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Arc<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Leaf provider resolving stylesheets through an [`AssetStore`].
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use css_providers::{AssetPipelineProvider, AssetProvider};
///
/// let mut store = HashMap::new();
/// store.insert("admin/layout.css".to_string(), "  .admin {}\n".to_string());
///
/// let provider = AssetPipelineProvider::new(store);
/// assert_eq!(provider.prefix(), "/assets");
/// assert_eq!(
///     provider.contents_of_file("/assets/admin//layout.css").unwrap(),
///     ".admin {}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AssetPipelineProvider<S> {
    /// Prefix as given at construction
    prefix: String,
    /// Prefix used for matching, without trailing slashes
    normalized_prefix: String,
    store: S,
}

impl<S: AssetStore> AssetPipelineProvider<S> {
    /// Creates a provider with the default `"/assets"` prefix.
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_ASSET_PREFIX)
    }

    /// Creates a provider stripping `prefix` from requested names.
    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let normalized_prefix = prefix.trim_end_matches('/').to_string();
        Self {
            prefix,
            normalized_prefix,
            store,
        }
    }

    /// Returns the prefix exactly as it was configured.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Computes the store key for a requested name.
    pub fn asset_key(&self, name: &str) -> String {
        collapse_separators(self.strip_prefix(name))
    }

    fn strip_prefix<'a>(&self, name: &'a str) -> &'a str {
        match name.strip_prefix(self.normalized_prefix.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                rest.trim_start_matches('/')
            }
            _ => name,
        }
    }
}

impl<S: AssetStore> AssetProvider for AssetPipelineProvider<S> {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        let key = self.asset_key(name);
        log::debug!("looking up asset {key:?} for stylesheet {name:?}");
        self.store
            .lookup(&key)
            .map(|css| css.trim().to_string())
            .ok_or_else(|| ProviderError::not_found(name))
    }
}

/// Collapses every run of `/` into a single `/`.
fn collapse_separators(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for c in path.chars() {
        let is_separator = c == '/';
        if !(is_separator && previous_was_separator) {
            collapsed.push(c);
        }
        previous_was_separator = is_separator;
    }
    collapsed
}
