//! Ordered composite of providers.
//!
//! [`ProviderList`] holds providers in precedence order and is a provider
//! itself: a lookup asks each member in turn and answers with the first hit.
//!
//! # Fallback
//!
//! A member failing with [`ProviderError::NotFound`] has no opinion on the
//! name and the search moves on. Any other error (an unreadable file, an
//! insecure path) stops the search and is returned by
//! [`AssetProvider::contents_of_file`]. When every member misses, the list
//! fails with `NotFound` for the requested name and
//! [`AssetProvider::find_stylesheet`] returns `None`.
//!
//! [`AssetProvider::load_css`] keeps the strict contract: each name goes
//! through the fallback above, and the first name no member resolves fails
//! the whole call.
//!
//! # Building lists
//!
//! [`ProviderList::wrap`] flattens providers, provider vectors and other lists
//! one level deep into a single list:
//!
//! ```rust
//! use std::rc::Rc;
//! use css_providers::{InlineProvider, ProviderList, SharedProvider, WrapArg};
//!
//! let p: SharedProvider = Rc::new(InlineProvider::new());
//! let existing = ProviderList::new(vec![p.clone(), p.clone()]);
//!
//! let list = ProviderList::wrap([
//!     WrapArg::from(p.clone()),
//!     WrapArg::from(vec![p.clone()]),
//!     WrapArg::from(existing),
//! ]);
//! assert_eq!(list.len(), 4);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::{AssetProvider, ProviderError, SharedProvider};

/// An ordered, mutable list of providers that is itself a provider.
///
/// Earlier members take precedence. Members are not deduplicated, and the
/// same provider may appear several times.
///
/// The list is not thread-safe; members are shared through [`Rc`].
#[derive(Clone, Default)]
pub struct ProviderList {
    providers: VecDeque<SharedProvider>,
}

/// One argument to [`ProviderList::wrap`].
pub enum WrapArg {
    /// A single provider, contributed as itself.
    Provider(SharedProvider),
    /// A plain sequence of providers, contributed element by element.
    Many(Vec<SharedProvider>),
    /// An existing list, contributed element by element.
    List(ProviderList),
}

impl ProviderList {
    /// Creates a list with the given providers in precedence order.
    pub fn new(providers: impl IntoIterator<Item = SharedProvider>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    /// Builds a list from providers, provider sequences and lists.
    ///
    /// Arguments are flattened exactly one level, left to right. A single
    /// [`WrapArg::List`] argument is returned as is, without copying.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use css_providers::{NullProvider, ProviderList, SharedProvider, WrapArg};
    ///
    /// let p: SharedProvider = Rc::new(NullProvider);
    ///
    /// assert_eq!(ProviderList::wrap([WrapArg::from(p.clone())]).len(), 1);
    /// assert_eq!(
    ///     ProviderList::wrap([WrapArg::from(vec![p.clone(), p.clone()]), WrapArg::from(p)]).len(),
    ///     3
    /// );
    /// ```
    pub fn wrap(args: impl IntoIterator<Item = WrapArg>) -> Self {
        let mut args: Vec<WrapArg> = args.into_iter().collect();

        if args.len() == 1 && matches!(args[0], WrapArg::List(_)) {
            if let Some(WrapArg::List(list)) = args.pop() {
                return list;
            }
        }

        let mut list = Self::default();
        for arg in args {
            match arg {
                WrapArg::Provider(provider) => list.push(provider),
                WrapArg::Many(providers) => list.extend(providers),
                WrapArg::List(other) => list.extend(other),
            }
        }
        list
    }

    /// Returns the number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if the list has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterates the providers in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedProvider> {
        self.providers.iter()
    }

    /// Appends a provider with the lowest precedence.
    pub fn push(&mut self, provider: SharedProvider) {
        self.providers.push_back(provider);
    }

    /// Prepends a provider with the highest precedence.
    pub fn unshift(&mut self, provider: SharedProvider) {
        self.providers.push_front(provider);
    }

    /// Removes and returns the provider with the lowest precedence.
    pub fn pop(&mut self) -> Option<SharedProvider> {
        self.providers.pop_back()
    }

    /// Removes and returns the provider with the highest precedence.
    pub fn shift(&mut self) -> Option<SharedProvider> {
        self.providers.pop_front()
    }

    /// Wraps this list for use as a member of another list.
    pub fn into_shared(self) -> SharedProvider {
        Rc::new(self)
    }
}

impl AssetProvider for ProviderList {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        for (index, provider) in self.providers.iter().enumerate() {
            match provider.contents_of_file(name) {
                Ok(css) => return Ok(css),
                Err(err) if err.is_not_found() => {
                    log::trace!("provider #{index} has no stylesheet {name:?}");
                }
                Err(err) => return Err(err),
            }
        }
        Err(ProviderError::not_found(name))
    }

    fn find_stylesheet(&self, name: &str) -> Option<String> {
        for (index, provider) in self.providers.iter().enumerate() {
            match provider.contents_of_file(name) {
                Ok(css) => return Some(css),
                Err(err) if err.is_not_found() => {
                    log::trace!("provider #{index} has no stylesheet {name:?}");
                }
                Err(err) => {
                    log::warn!("provider #{index} failed on stylesheet {name:?}: {err}");
                }
            }
        }
        None
    }
}

impl fmt::Debug for ProviderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderList")
            .field("len", &self.providers.len())
            .finish()
    }
}

impl From<Vec<SharedProvider>> for ProviderList {
    fn from(providers: Vec<SharedProvider>) -> Self {
        Self::new(providers)
    }
}

impl FromIterator<SharedProvider> for ProviderList {
    fn from_iter<I: IntoIterator<Item = SharedProvider>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<SharedProvider> for ProviderList {
    fn extend<I: IntoIterator<Item = SharedProvider>>(&mut self, iter: I) {
        self.providers.extend(iter);
    }
}

impl IntoIterator for ProviderList {
    type Item = SharedProvider;
    type IntoIter = std::collections::vec_deque::IntoIter<SharedProvider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProviderList {
    type Item = &'a SharedProvider;
    type IntoIter = std::collections::vec_deque::Iter<'a, SharedProvider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

impl From<SharedProvider> for WrapArg {
    fn from(provider: SharedProvider) -> Self {
        WrapArg::Provider(provider)
    }
}

impl From<Vec<SharedProvider>> for WrapArg {
    fn from(providers: Vec<SharedProvider>) -> Self {
        WrapArg::Many(providers)
    }
}

impl From<ProviderList> for WrapArg {
    fn from(list: ProviderList) -> Self {
        WrapArg::List(list)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::provider::NullProvider;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Shape {
        Single,
        Many(usize),
        List(usize),
    }

    fn shape() -> impl Strategy<Value = Shape> {
        prop_oneof![
            Just(Shape::Single),
            (0usize..4).prop_map(Shape::Many),
            (0usize..4).prop_map(Shape::List),
        ]
    }

    proptest! {
        #[test]
        fn wrap_len_is_sum_of_arguments(shapes in prop::collection::vec(shape(), 0..6)) {
            let p: SharedProvider = Rc::new(NullProvider);
            let expected: usize = shapes
                .iter()
                .map(|s| match s {
                    Shape::Single => 1,
                    Shape::Many(n) | Shape::List(n) => *n,
                })
                .sum();

            let args: Vec<WrapArg> = shapes
                .iter()
                .map(|s| match s {
                    Shape::Single => WrapArg::from(p.clone()),
                    Shape::Many(n) => WrapArg::from(vec![p.clone(); *n]),
                    Shape::List(n) => WrapArg::from(ProviderList::new(vec![p.clone(); *n])),
                })
                .collect();

            prop_assert_eq!(ProviderList::wrap(args).len(), expected);
        }
    }
}
