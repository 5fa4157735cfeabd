//! Stylesheet providers.
//!
//! This module defines the [`AssetProvider`] contract and its implementations:
//!
//! - [`AssetPipelineProvider`]: leaf provider over an [`AssetStore`]
//! - [`FilesystemProvider`]: leaf provider over a directory
//! - [`InlineProvider`]: leaf provider over in-memory stylesheets
//! - [`NullProvider`]: leaf provider that resolves nothing
//! - [`ProviderList`]: ordered composite with fallback
//!
//! Every provider only has to implement [`AssetProvider::contents_of_file`].
//! The lenient lookup and the multi-name join are derived from it.

mod asset_pipeline;
mod error;
mod filesystem;
mod inline;
mod list;

use std::rc::Rc;

pub use asset_pipeline::{AssetPipelineProvider, AssetStore, DEFAULT_ASSET_PREFIX};
pub use error::ProviderError;
pub use filesystem::FilesystemProvider;
pub use inline::{InlineProvider, NullProvider};
pub use list::{ProviderList, WrapArg};

/// A provider shared between lists.
///
/// The same provider may be a member of several lists, or of one list more
/// than once. `Rc` keeps lists single-threaded.
pub type SharedProvider = Rc<dyn AssetProvider>;

/// A source of stylesheets addressed by name.
///
/// # Example
///
/// ```rust
/// use css_providers::{AssetProvider, ProviderError};
///
/// struct Reset;
///
/// impl AssetProvider for Reset {
///     fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
///         match name {
///             "reset.css" => Ok("* { margin: 0 }".to_string()),
///             _ => Err(ProviderError::not_found(name)),
///         }
///     }
/// }
///
/// assert_eq!(Reset.find_stylesheet("reset.css").as_deref(), Some("* { margin: 0 }"));
/// assert_eq!(Reset.find_stylesheet("other.css"), None);
/// assert_eq!(
///     Reset.load_css(&["reset.css", "reset.css"]).unwrap(),
///     "* { margin: 0 }\n* { margin: 0 }"
/// );
/// ```
pub trait AssetProvider {
    /// Resolves exactly one stylesheet, trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] carrying `name` as requested when
    /// this provider has no such stylesheet. Providers backed by I/O may
    /// return other variants.
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError>;

    /// Resolves a stylesheet, returning `None` instead of failing.
    fn find_stylesheet(&self, name: &str) -> Option<String> {
        match self.contents_of_file(name) {
            Ok(css) => Some(css),
            Err(err) if err.is_not_found() => None,
            Err(err) => {
                log::warn!("ignoring error while looking up stylesheet {name:?}: {err}");
                None
            }
        }
    }

    /// Resolves every name in order and joins the contents with `"\n"`.
    ///
    /// Names are resolved independently, duplicates included. The first
    /// failure is returned unchanged.
    fn load_css(&self, names: &[&str]) -> Result<String, ProviderError> {
        let contents = names
            .iter()
            .map(|name| self.contents_of_file(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(contents.join("\n"))
    }
}

impl<P: AssetProvider + ?Sized> AssetProvider for Rc<P> {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        (**self).contents_of_file(name)
    }

    fn find_stylesheet(&self, name: &str) -> Option<String> {
        (**self).find_stylesheet(name)
    }

    fn load_css(&self, names: &[&str]) -> Result<String, ProviderError> {
        (**self).load_css(names)
    }
}

impl<P: AssetProvider + ?Sized> AssetProvider for &P {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        (**self).contents_of_file(name)
    }

    fn find_stylesheet(&self, name: &str) -> Option<String> {
        (**self).find_stylesheet(name)
    }

    fn load_css(&self, names: &[&str]) -> Result<String, ProviderError> {
        (**self).load_css(names)
    }
}
