//! Context handed to rules for each file.

use crate::line_index::LineIndex;
use std::path::{Path, PathBuf};

/// Per-file context shared by every rule evaluation against that file.
///
/// The line index is built once, before any rule sees the file's nodes,
/// and is read-only from then on.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// Path relative to the project root, used in reported locations.
    pub relative_path: PathBuf,
    /// Line index for the file's contents.
    pub index: &'a LineIndex,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, root: &Path, index: &'a LineIndex) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            relative_path,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_strips_root() {
        let index = LineIndex::new("");
        let ctx = FileContext::new(Path::new("/proj/src/lib.rs"), Path::new("/proj"), &index);
        assert_eq!(ctx.relative_path, PathBuf::from("src/lib.rs"));
    }

    #[test]
    fn path_outside_root_kept_as_is() {
        let index = LineIndex::new("");
        let ctx = FileContext::new(Path::new("/other/main.rs"), Path::new("/proj"), &index);
        assert_eq!(ctx.relative_path, PathBuf::from("/other/main.rs"));
    }
}
