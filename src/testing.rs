//! Contract checks for provider implementations.
//!
//! Enable the `testing` feature to run these against your own providers:
//!
//! ```rust,ignore
//! use css_providers::InlineProvider;
//! use css_providers::testing::assert_provider_contract;
//!
//! let provider = InlineProvider::new().with("valid.css", "a {}");
//! assert_provider_contract(&provider, "valid.css", "invalid.css");
//! ```

use crate::provider::{AssetProvider, ProviderError};

/// Asserts that `provider` behaves like a stylesheet provider.
///
/// `valid_name` must resolve and `invalid_name` must not.
///
/// # Panics
///
/// Panics with a description of the first violated expectation.
pub fn assert_provider_contract<P: AssetProvider + ?Sized>(
    provider: &P,
    valid_name: &str,
    invalid_name: &str,
) {
    let css = match provider.contents_of_file(valid_name) {
        Ok(css) => css,
        Err(err) => panic!("expected {valid_name:?} to resolve, got error: {err}"),
    };
    assert_eq!(
        css.trim(),
        css,
        "contents of {valid_name:?} must be trimmed"
    );

    assert_eq!(
        provider.find_stylesheet(valid_name).as_deref(),
        Some(css.as_str()),
        "find_stylesheet({valid_name:?}) must agree with contents_of_file"
    );

    assert_eq!(
        provider.load_css(&[valid_name]).ok().as_deref(),
        Some(css.as_str()),
        "load_css([{valid_name:?}]) must agree with contents_of_file"
    );

    match provider.contents_of_file(invalid_name) {
        Err(ProviderError::NotFound { name }) => assert_eq!(
            name, invalid_name,
            "NotFound must carry the requested name"
        ),
        Err(err) => panic!("expected NotFound for {invalid_name:?}, got: {err}"),
        Ok(css) => panic!("expected {invalid_name:?} not to resolve, got {css:?}"),
    }

    assert_eq!(
        provider.find_stylesheet(invalid_name),
        None,
        "find_stylesheet({invalid_name:?}) must be None"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{InlineProvider, NullProvider};

    #[test]
    fn test_inline_provider_passes() {
        let provider = InlineProvider::new().with("valid", " a {} ");
        assert_provider_contract(&provider, "valid", "invalid");
    }

    #[test]
    #[should_panic(expected = "to resolve")]
    fn test_null_provider_fails_valid_name() {
        assert_provider_contract(&NullProvider, "valid", "invalid");
    }

    #[test]
    #[should_panic(expected = "not to resolve")]
    fn test_swapped_names_fail() {
        let provider = InlineProvider::new().with("a", "x").with("b", "y");
        assert_provider_contract(&provider, "a", "b");
    }
}
