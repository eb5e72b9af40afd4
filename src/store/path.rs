use snafu::Snafu;

pub const SEPARATOR: char = '/';

/// A parsed, validated path: a non-empty sequence of non-empty segments.
///
/// Parsing rejects everything that cannot address a node: the empty string,
/// non-rooted strings, the root itself and empty segments. The root is only
/// ever the starting point of a traversal, never an addressable target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// Parses a path for operations that address an existing or future
    /// file: a trailing separator is rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidPathError> {
        if raw.ends_with(SEPARATOR) && raw.len() > 1 {
            return Err(InvalidPathError::TrailingSeparator {
                path: raw.to_string(),
            });
        }
        Self::parse_segments(raw)
    }

    /// Parses a directory path. One trailing separator is tolerated, as
    /// `mkdir /a/b/` plainly means `mkdir /a/b`.
    pub fn parse_dir(raw: &str) -> Result<Self, InvalidPathError> {
        let trimmed = match raw.strip_suffix(SEPARATOR) {
            Some(rest) if !rest.is_empty() => rest,
            _ => raw,
        };
        Self::parse_segments(trimmed)
    }

    fn parse_segments(raw: &str) -> Result<Self, InvalidPathError> {
        if raw.is_empty() {
            return Err(InvalidPathError::Empty);
        }
        let Some(rest) = raw.strip_prefix(SEPARATOR) else {
            return Err(InvalidPathError::NotRooted {
                path: raw.to_string(),
            });
        };
        if rest.is_empty() {
            return Err(InvalidPathError::RootOnly);
        }

        let segments = rest
            .split(SEPARATOR)
            .map(|segment| {
                if segment.is_empty() {
                    Err(InvalidPathError::EmptySegment {
                        path: raw.to_string(),
                    })
                } else {
                    Ok(segment.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NodePath { segments })
    }

    /// All segments, in traversal order. Never empty.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Every segment except the last; empty for a direct child of the root.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The final segment: the name the operation acts on.
    pub fn leaf(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum InvalidPathError {
    #[snafu(display("path is empty"))]
    Empty,
    #[snafu(display("path '{}' does not start with '/'", path))]
    NotRooted { path: String },
    #[snafu(display("'/' does not address a node"))]
    RootOnly,
    #[snafu(display("path '{}' ends with a separator", path))]
    TrailingSeparator { path: String },
    #[snafu(display("path '{}' contains an empty segment", path))]
    EmptySegment { path: String },
}
