use std::collections::HashMap;

use snafu::{ResultExt, Snafu};
use tracing::debug;

use super::node::Node;
use super::path::{InvalidPathError, NodePath};

/// The namespace store: a tree of [`Node`]s under an unnamed root
/// directory. The root is created with the store and only ever mutated,
/// never replaced.
///
/// All four operations validate the full path before any mutation, so a
/// failing call leaves the tree exactly as it was.
#[derive(Debug, Clone)]
pub struct Store {
    root: Node,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Store {
            root: Node::empty_dir(),
        }
    }

    /// Creates an empty directory at `path`.
    ///
    /// Non-recursive: every intermediate directory must already exist.
    /// Fails with [`StoreError::AlreadyExists`] when the final name is
    /// taken by any node kind.
    pub fn mkdir(&mut self, path: &str) -> Result<(), StoreError> {
        let parsed = NodePath::parse_dir(path).context(InvalidPathSnafu { path })?;
        let children = self.resolve_parent_mut(&parsed, path)?;

        if children.contains_key(parsed.leaf()) {
            return AlreadyExistsSnafu { path }.fail();
        }
        children.insert(parsed.leaf().to_string(), Node::empty_dir());
        debug!("Created directory '{}'", path);
        Ok(())
    }

    /// Creates the file at `path` with `content`, or replaces an existing
    /// file's content wholesale. Writing over a directory fails with
    /// [`StoreError::TypeConflict`].
    pub fn write_file(
        &mut self,
        path: &str,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        let parsed = NodePath::parse(path).context(InvalidPathSnafu { path })?;
        let children = self.resolve_parent_mut(&parsed, path)?;

        match children.get_mut(parsed.leaf()) {
            None => {
                children.insert(parsed.leaf().to_string(), Node::file(content));
                debug!("Created file '{}'", path);
            }
            Some(Node::File { content: existing }) => {
                *existing = content.into();
                debug!("Overwrote file '{}'", path);
            }
            Some(Node::Directory { .. }) => {
                return TypeConflictSnafu { path }.fail();
            }
        }
        Ok(())
    }

    /// Returns an owned snapshot of the file's content. Later writes to
    /// the same path are never visible through a previously returned value.
    pub fn read_file(&self, path: &str) -> Result<String, StoreError> {
        let parsed = NodePath::parse(path).context(InvalidPathSnafu { path })?;
        match self.resolve(&parsed, path)? {
            Node::File { content } => Ok(content.clone()),
            Node::Directory { .. } => IsADirectorySnafu { path }.fail(),
        }
    }

    /// Lists a directory's immediate child names, sorted ascending. For a
    /// file the listing is the file's own name, mirroring what `ls` does
    /// when handed a file argument.
    pub fn ls(&self, path: &str) -> Result<Vec<String>, StoreError> {
        let parsed = NodePath::parse(path).context(InvalidPathSnafu { path })?;
        match self.resolve(&parsed, path)? {
            Node::File { .. } => Ok(vec![parsed.leaf().to_string()]),
            Node::Directory { children } => {
                let mut names = children.keys().cloned().collect::<Vec<_>>();
                names.sort_unstable();
                Ok(names)
            }
        }
    }

    /// Full resolve: walks every segment and returns the addressed node.
    fn resolve<'a>(&'a self, parsed: &NodePath, path: &str) -> Result<&'a Node, StoreError> {
        let mut current = &self.root;
        let mut walked = "/";

        for segment in parsed.segments() {
            let children = current.children().ok_or_else(|| StoreError::NotADirectory {
                path: path.to_string(),
                segment: walked.to_string(),
            })?;
            current = children
                .get(segment.as_str())
                .ok_or_else(|| StoreError::NotFound {
                    path: path.to_string(),
                    segment: segment.clone(),
                })?;
            walked = segment.as_str();
        }

        Ok(current)
    }

    /// Parent resolve: walks every segment but the last and returns the
    /// parent directory's child map. Whether the leaf name exists is the
    /// caller's decision.
    fn resolve_parent_mut<'a>(
        &'a mut self,
        parsed: &NodePath,
        path: &str,
    ) -> Result<&'a mut HashMap<String, Node>, StoreError> {
        let mut current = &mut self.root;
        let mut walked = "/";

        for segment in parsed.parents() {
            let children = current
                .children_mut()
                .ok_or_else(|| StoreError::NotADirectory {
                    path: path.to_string(),
                    segment: walked.to_string(),
                })?;
            current = children
                .get_mut(segment.as_str())
                .ok_or_else(|| StoreError::NotFound {
                    path: path.to_string(),
                    segment: segment.clone(),
                })?;
            walked = segment.as_str();
        }

        current
            .children_mut()
            .ok_or_else(|| StoreError::NotADirectory {
                path: path.to_string(),
                segment: walked.to_string(),
            })
    }
}

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[snafu(display("Invalid path '{}': {}", path, source))]
    InvalidPath {
        path: String,
        source: InvalidPathError,
    },
    #[snafu(display("'{}' does not exist in '{}'", segment, path))]
    NotFound { path: String, segment: String },
    #[snafu(display("'{}' in '{}' is a file, not a directory", segment, path))]
    NotADirectory { path: String, segment: String },
    #[snafu(display("'{}' is a directory", path))]
    IsADirectory { path: String },
    #[snafu(display("'{}' already exists", path))]
    AlreadyExists { path: String },
    #[snafu(display("Cannot write file over existing directory '{}'", path))]
    TypeConflict { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn populated() -> Store {
        let mut store = Store::new();
        store.mkdir("/a").unwrap();
        store.mkdir("/a/b").unwrap();
        store.write_file("/a/b/f.txt", "x").unwrap();
        store
    }

    #[test]
    fn mkdir_makes_the_name_visible_in_the_parent() {
        let mut store = Store::new();
        store.mkdir("/a").unwrap();
        store.mkdir("/a/docs").unwrap();
        assert_eq!(store.ls("/a").unwrap(), ["docs"]);
    }

    #[test]
    fn write_then_read_round_trips_content() {
        let mut store = Store::new();
        store.write_file("/f.txt", "Hello World").unwrap();
        assert_eq!(store.read_file("/f.txt").unwrap(), "Hello World");
    }

    #[test]
    fn overwrite_replaces_content_wholesale() {
        let mut store = Store::new();
        store.write_file("/f.txt", "first, much longer").unwrap();
        store.write_file("/f.txt", "second").unwrap();
        assert_eq!(store.read_file("/f.txt").unwrap(), "second");
    }

    #[test]
    fn nested_creation_and_listing() {
        let store = populated();
        assert_eq!(store.read_file("/a/b/f.txt").unwrap(), "x");
        assert_eq!(store.ls("/a/b").unwrap(), ["f.txt"]);
    }

    #[test]
    fn ls_output_is_sorted_without_duplicates() {
        let mut store = Store::new();
        store.mkdir("/dir").unwrap();
        for name in ["zeta", "alpha", "mid"] {
            store.mkdir(&format!("/dir/{name}")).unwrap();
        }
        store.write_file("/dir/beta", "").unwrap();
        assert_eq!(store.ls("/dir").unwrap(), ["alpha", "beta", "mid", "zeta"]);
    }

    #[test]
    fn ls_on_a_file_echoes_its_own_name() {
        let store = populated();
        assert_eq!(store.ls("/a/b/f.txt").unwrap(), ["f.txt"]);
    }

    #[test]
    fn mkdir_twice_fails_with_already_exists() {
        let mut store = Store::new();
        store.mkdir("/a").unwrap();
        assert!(matches!(
            store.mkdir("/a").unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));
    }

    #[test]
    fn mkdir_over_an_existing_file_fails_with_already_exists() {
        let mut store = Store::new();
        store.write_file("/f.txt", "v").unwrap();
        assert!(matches!(
            store.mkdir("/f.txt").unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));
    }

    #[test]
    fn write_over_an_existing_directory_fails_with_type_conflict() {
        let mut store = Store::new();
        store.mkdir("/a").unwrap();
        assert!(matches!(
            store.write_file("/a", "v").unwrap_err(),
            StoreError::TypeConflict { .. }
        ));
    }

    #[test]
    fn write_under_a_missing_parent_fails_and_leaves_the_tree_unchanged() {
        let mut store = Store::new();
        store.mkdir("/a").unwrap();
        let before = store.clone();

        let err = store.write_file("/missing/x.txt", "y").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref segment, .. } if segment == "missing"));
        assert_eq!(store.ls("/a").unwrap(), before.ls("/a").unwrap());
        assert!(matches!(
            store.read_file("/missing/x.txt").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn mkdir_is_not_recursive() {
        let mut store = Store::new();
        assert!(matches!(
            store.mkdir("/a/b/c").unwrap_err(),
            StoreError::NotFound { ref segment, .. } if segment == "a"
        ));
        // The intermediate was not silently created either.
        assert!(matches!(
            store.ls("/a").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn read_on_a_directory_fails_with_is_a_directory() {
        let store = populated();
        assert!(matches!(
            store.read_file("/a").unwrap_err(),
            StoreError::IsADirectory { .. }
        ));
    }

    #[test]
    fn file_in_the_middle_of_a_path_fails_with_not_a_directory() {
        let mut store = Store::new();
        store.write_file("/f.txt", "v").unwrap();

        let err = store.read_file("/f.txt/deeper").unwrap_err();
        assert!(matches!(err, StoreError::NotADirectory { ref segment, .. } if segment == "f.txt"));

        let err = store.mkdir("/f.txt/sub").unwrap_err();
        assert!(matches!(err, StoreError::NotADirectory { ref segment, .. } if segment == "f.txt"));

        let err = store.write_file("/f.txt/g.txt", "w").unwrap_err();
        assert!(matches!(err, StoreError::NotADirectory { ref segment, .. } if segment == "f.txt"));
    }

    #[rstest]
    #[case("")]
    #[case("/")]
    #[case("relative/path")]
    #[case("/a//b")]
    fn all_operations_reject_malformed_paths(#[case] path: &str) {
        let mut store = populated();
        assert!(matches!(
            store.mkdir(path).unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
        assert!(matches!(
            store.write_file(path, "v").unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
        assert!(matches!(
            store.read_file(path).unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
        assert!(matches!(
            store.ls(path).unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
    }

    #[test]
    fn trailing_separator_is_rejected_for_file_operations_only() {
        let mut store = populated();
        assert!(matches!(
            store.read_file("/a/b/f.txt/").unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
        assert!(matches!(
            store.write_file("/a/g.txt/", "v").unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
        assert!(matches!(
            store.ls("/a/").unwrap_err(),
            StoreError::InvalidPath { .. }
        ));
        // mkdir tolerates the trailing separator.
        store.mkdir("/a/c/").unwrap();
        assert_eq!(store.ls("/a").unwrap(), ["b", "c"]);
    }

    #[test]
    fn read_returns_a_snapshot_not_a_view() {
        let mut store = Store::new();
        store.write_file("/f.txt", "before").unwrap();
        let snapshot = store.read_file("/f.txt").unwrap();
        store.write_file("/f.txt", "after").unwrap();
        assert_eq!(snapshot, "before");
        assert_eq!(store.read_file("/f.txt").unwrap(), "after");
    }

    #[test]
    fn directories_and_files_share_one_namespace_per_parent() {
        let mut store = Store::new();
        store.mkdir("/x").unwrap();
        store.write_file("/y", "v").unwrap();
        // Occupied either way, regardless of kind.
        assert!(store.mkdir("/y").is_err());
        assert!(store.write_file("/x", "v").is_err());
        assert_eq!(store.ls("/x").unwrap(), Vec::<String>::new());
    }
}
