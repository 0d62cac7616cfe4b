//! Listing images from the filesystem.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AdfError;
use crate::listing::{Listing, list_volume_with};
use crate::options::ListOptions;

/// Error listing an image file. Carries the path it was raised for.
#[derive(Debug)]
pub enum ListFileError {
    /// The file could not be read.
    Io {
        /// Image path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The image could not be listed.
    Adf {
        /// Image path.
        path: PathBuf,
        /// Listing error.
        source: AdfError,
    },
}

impl ListFileError {
    /// Path of the image.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Adf { path, .. } => path,
        }
    }
}

impl fmt::Display for ListFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Adf { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ListFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Adf { source, .. } => Some(source),
        }
    }
}

/// Read a whole image file and list its root directory.
pub fn list_file(path: impl AsRef<Path>) -> Result<Listing, ListFileError> {
    list_file_with(path, &ListOptions::default())
}

/// Read a whole image file and list its root directory with `options`.
pub fn list_file_with(
    path: impl AsRef<Path>,
    options: &ListOptions,
) -> Result<Listing, ListFileError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());

    let data = std::fs::read(path).map_err(|source| ListFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    list_volume_with(&data, options).map_err(|source| ListFileError::Adf {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_missing_file() {
        let err = list_file("/nonexistent/dir/disk.adf").unwrap_err();
        assert!(matches!(err, ListFileError::Io { .. }));
        assert_eq!(err.path(), Path::new("/nonexistent/dir/disk.adf"));
        assert!(err.to_string().starts_with("/nonexistent/dir/disk.adf: "));
    }

    #[test]
    fn test_adf_error_carries_path() {
        let dir = std::env::temp_dir().join("adf-list-fs-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("short.adf");
        std::fs::write(&path, [0u8; 512]).unwrap();

        let err = list_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        match err {
            ListFileError::Adf { source, .. } => assert_eq!(
                source,
                AdfError::SectorOutOfRange {
                    sector: 880,
                    sector_count: 1
                }
            ),
            other => panic!("unexpected error: {other}"),
        }
    }
}
