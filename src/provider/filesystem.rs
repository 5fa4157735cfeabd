//! Provider reading stylesheets from a directory.

use std::path::{Component, Path, PathBuf};

use super::{AssetProvider, ProviderError};

/// Leaf provider resolving names relative to a root directory.
///
/// Names are treated as relative paths below the root, whether or not they
/// start with `/`. A query string (`"app.css?v=3"`) is ignored. Names
/// containing `..` are refused with [`ProviderError::InsecurePath`].
///
/// Files are read on every lookup, so edits show up without restarting.
///
/// # Example
///
/// ```rust,no_run
/// use css_providers::{AssetProvider, FilesystemProvider};
///
/// let provider = FilesystemProvider::new("public/stylesheets");
/// let css = provider.contents_of_file("/admin/layout.css?body=1")?;
/// # Ok::<(), css_providers::ProviderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemProvider {
    root: PathBuf,
}

impl FilesystemProvider {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a provider rooted at the process's working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a stylesheet name to a path below the root.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InsecurePath`] if the name walks up with `..`.
    pub fn file_path(&self, name: &str) -> Result<PathBuf, ProviderError> {
        let relative = name.split('?').next().unwrap_or_default();

        let mut path = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir | Component::RootDir => {}
                Component::ParentDir | Component::Prefix(_) => {
                    return Err(ProviderError::InsecurePath {
                        name: name.to_string(),
                        root: self.root.clone(),
                    })
                }
            }
        }
        Ok(path)
    }
}

impl AssetProvider for FilesystemProvider {
    fn contents_of_file(&self, name: &str) -> Result<String, ProviderError> {
        let path = self.file_path(name)?;
        log::debug!("reading stylesheet {name:?} from {}", path.display());

        if !path.is_file() {
            return Err(ProviderError::not_found(name));
        }

        match std::fs::read_to_string(&path) {
            Ok(css) => Ok(css.trim().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ProviderError::not_found(name))
            }
            Err(e) => Err(ProviderError::Read {
                path,
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.css"), "\n  body { margin: 0 }  \n").unwrap();
        fs::create_dir(dir.path().join("admin")).unwrap();
        fs::write(dir.path().join("admin/layout.css"), ".admin {}").unwrap();
        dir
    }

    #[test]
    fn test_reads_and_trims() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path());

        assert_eq!(provider.contents_of_file("app.css").unwrap(), "body { margin: 0 }");
    }

    #[test]
    fn test_nested_and_absolute_names() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path());

        assert_eq!(provider.contents_of_file("admin/layout.css").unwrap(), ".admin {}");
        assert_eq!(provider.contents_of_file("/admin/layout.css").unwrap(), ".admin {}");
        assert_eq!(provider.contents_of_file("./admin//layout.css").unwrap(), ".admin {}");
    }

    #[test]
    fn test_ignores_query_string() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path());

        assert_eq!(provider.contents_of_file("app.css?v=42").unwrap(), "body { margin: 0 }");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path());

        assert_eq!(
            provider.contents_of_file("gone.css"),
            Err(ProviderError::not_found("gone.css"))
        );
        assert_eq!(provider.find_stylesheet("gone.css"), None);
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path());

        assert!(provider.contents_of_file("admin").unwrap_err().is_not_found());
    }

    #[test]
    fn test_refuses_parent_dir() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path().join("admin"));

        let err = provider.contents_of_file("../app.css").unwrap_err();

        assert!(matches!(err, ProviderError::InsecurePath { ref name, .. } if name == "../app.css"));
        assert_eq!(provider.find_stylesheet("../app.css"), None);
    }

    #[test]
    fn test_rereads_on_every_call() {
        let dir = fixture();
        let provider = FilesystemProvider::new(dir.path());

        assert_eq!(provider.contents_of_file("admin/layout.css").unwrap(), ".admin {}");
        fs::write(dir.path().join("admin/layout.css"), ".admin { color: red }").unwrap();
        assert_eq!(
            provider.contents_of_file("admin/layout.css").unwrap(),
            ".admin { color: red }"
        );
    }
}
