use std::collections::HashMap;

use derive_more::IsVariant;

/// A single node in the namespace tree.
///
/// The variant is fixed at creation: a file never becomes a directory and
/// vice versa. Directories exclusively own their children, so no node is
/// ever reachable through two different paths.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Node {
    File {
        content: String,
    },
    Directory {
        children: HashMap<String, Node>,
    },
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Directory {
            children: HashMap::new(),
        }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    pub(crate) fn children(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut HashMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }
}
