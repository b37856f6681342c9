//! Template and input sources.
//!
//! A gLabels template is handed to the batch tool either as a path on disk or
//! as an in-memory document streamed over the child's stdin. The glabels-3
//! merge input file follows the same two shapes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Positional token telling a batch tool to read from stdin.
pub const STDIN_TOKEN: &str = "-";

/// The label template to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// A `.glabels` project file on disk
    File(PathBuf),
    /// A project document held in memory, sent on stdin
    Bytes(Vec<u8>),
}

/// Merge input file for glabels-3-batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl Template {
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Template::Bytes(_))
    }
}

impl InputFile {
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, InputFile::Bytes(_))
    }
}

macro_rules! impl_source_conversions {
    ($source:ident) => {
        impl From<PathBuf> for $source {
            fn from(path: PathBuf) -> Self {
                $source::File(path)
            }
        }

        impl From<&Path> for $source {
            fn from(path: &Path) -> Self {
                $source::File(path.to_path_buf())
            }
        }

        impl From<Vec<u8>> for $source {
            fn from(bytes: Vec<u8>) -> Self {
                $source::Bytes(bytes)
            }
        }

        impl From<&[u8]> for $source {
            fn from(bytes: &[u8]) -> Self {
                $source::Bytes(bytes.to_vec())
            }
        }
    };
}

impl_source_conversions!(Template);
impl_source_conversions!(InputFile);

/// Fails with `CoreError::FileNotFound` unless `path` exists.
pub fn ensure_exists(path: &Path) -> CoreResult<()> {
    if path.exists() {
        Ok(())
    } else {
        log::debug!("Referenced file does not exist: {}", path.display());
        Err(CoreError::FileNotFound(path.to_path_buf()))
    }
}

/// Renders a path as a command-line token, byte for byte.
pub(crate) fn path_token(path: &Path) -> OsString {
    path.as_os_str().to_os_string()
}
