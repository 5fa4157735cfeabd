//! # css-providers - stylesheet lookup for CSS inlining
//!
//! `css-providers` resolves named stylesheets to their text for an HTML/CSS
//! inlining pipeline. Stylesheets can come from any number of back-ends, each
//! one exposed through the same [`AssetProvider`] contract:
//!
//! - [`AssetPipelineProvider`]: bridges to a key-based asset store
//! - [`FilesystemProvider`]: reads stylesheets below a root directory
//! - [`InlineProvider`]: stylesheets registered in memory
//! - [`NullProvider`]: never resolves anything
//! - [`ProviderList`]: an ordered composite of the above, itself a provider
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::rc::Rc;
//! use css_providers::{
//!     AssetPipelineProvider, AssetProvider, InlineProvider, ProviderList, SharedProvider,
//! };
//!
//! let mut assets = HashMap::new();
//! assets.insert("app.css".to_string(), "body { margin: 0 }\n".to_string());
//!
//! let list = ProviderList::new(vec![
//!     Rc::new(InlineProvider::new().with("reset.css", "* { padding: 0 }")) as SharedProvider,
//!     Rc::new(AssetPipelineProvider::new(assets)),
//! ]);
//!
//! assert_eq!(
//!     list.load_css(&["reset.css", "/assets/app.css"]).unwrap(),
//!     "* { padding: 0 }\nbody { margin: 0 }"
//! );
//! assert_eq!(list.find_stylesheet("missing.css"), None);
//! ```
//!
//! ## Error tiers
//!
//! [`AssetProvider::contents_of_file`] is strict and fails with
//! [`ProviderError::NotFound`]. [`AssetProvider::find_stylesheet`] is lenient
//! and returns `None` instead. A [`ProviderList`] treats a member's
//! `NotFound` as "try the next one".
//!
//! ## Configuration
//!
//! Lists can be declared in YAML or JSON, see [`ProvidersConfig`].

pub mod config;
pub mod provider;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ConfigError, ProviderSpec, ProvidersConfig};
pub use provider::{
    AssetPipelineProvider, AssetProvider, AssetStore, FilesystemProvider, InlineProvider,
    NullProvider, ProviderError, ProviderList, SharedProvider, WrapArg, DEFAULT_ASSET_PREFIX,
};
