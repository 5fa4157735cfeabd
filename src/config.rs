//! Declarative provider configuration.
//!
//! A [`ProvidersConfig`] lists providers in precedence order and builds the
//! matching [`ProviderList`]. It is usually loaded from YAML:
//!
//! ```yaml
//! providers:
//!   - type: inline
//!     stylesheets:
//!       reset.css: "* { margin: 0 }"
//!   - type: asset_pipeline
//!     prefix: /static
//!   - type: filesystem
//!     root: public/stylesheets
//! ```
//!
//! `asset_pipeline` entries need a store, passed to [`ProvidersConfig::build`].
//! Their `prefix` defaults to `"/assets"`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::provider::{
    AssetPipelineProvider, AssetStore, FilesystemProvider, InlineProvider, NullProvider,
    ProviderList, SharedProvider, DEFAULT_ASSET_PREFIX,
};

/// Error returned when loading or building a [`ProvidersConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The YAML document is malformed or does not match the schema.
    #[error("invalid provider configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is malformed or does not match the schema.
    #[error("invalid provider configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// An `asset_pipeline` provider was configured but no store was given.
    #[error("provider #{index} is an asset pipeline provider but no asset store was supplied")]
    MissingStore { index: usize },
}

/// One configured provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderSpec {
    /// An [`AssetPipelineProvider`] over the store given to `build`.
    AssetPipeline {
        #[serde(default = "default_prefix")]
        prefix: String,
    },
    /// A [`FilesystemProvider`] rooted at `root`.
    Filesystem { root: PathBuf },
    /// An [`InlineProvider`] with the given stylesheets.
    Inline {
        #[serde(default)]
        stylesheets: BTreeMap<String, String>,
    },
    /// A [`NullProvider`].
    Null,
}

fn default_prefix() -> String {
    DEFAULT_ASSET_PREFIX.to_string()
}

/// An ordered list of provider declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Providers in precedence order.
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
}

impl ProvidersConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document does not describe providers.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document does not describe providers.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builds the configured providers into a list, keeping declaration order.
    ///
    /// Every `asset_pipeline` entry shares `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingStore`] if an `asset_pipeline` entry is
    /// declared and `store` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use std::rc::Rc;
    /// use css_providers::{AssetProvider, AssetStore, ProvidersConfig};
    ///
    /// let config = ProvidersConfig::from_yaml(
    ///     "providers:\n  - type: asset_pipeline\n    prefix: /static\n",
    /// )?;
    ///
    /// let mut assets = HashMap::new();
    /// assets.insert("app.css".to_string(), "a {}".to_string());
    /// let store: Rc<dyn AssetStore> = Rc::new(assets);
    ///
    /// let list = config.build(Some(store))?;
    /// assert_eq!(list.find_stylesheet("/static/app.css").as_deref(), Some("a {}"));
    /// # Ok::<(), css_providers::ConfigError>(())
    /// ```
    pub fn build(&self, store: Option<Rc<dyn AssetStore>>) -> Result<ProviderList, ConfigError> {
        let mut list = ProviderList::default();
        for (index, spec) in self.providers.iter().enumerate() {
            let provider: SharedProvider = match spec {
                ProviderSpec::AssetPipeline { prefix } => {
                    let store = store
                        .clone()
                        .ok_or(ConfigError::MissingStore { index })?;
                    Rc::new(AssetPipelineProvider::with_prefix(store, prefix.clone()))
                }
                ProviderSpec::Filesystem { root } => Rc::new(FilesystemProvider::new(root.clone())),
                ProviderSpec::Inline { stylesheets } => {
                    Rc::new(stylesheets.iter().collect::<InlineProvider>())
                }
                ProviderSpec::Null => Rc::new(NullProvider),
            };
            list.push(provider);
        }
        log::debug!("built provider list with {} providers", list.len());
        Ok(list)
    }
}
