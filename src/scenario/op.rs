use std::borrow::Cow;

use derive_more::Display;
use hashlink::LinkedHashMap;
use saphyr::{Scalar, Yaml};
use tracing::warn;

/// One namespace operation from a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Op {
    #[display("mkdir {path}")]
    Mkdir { path: String },
    #[display("write {path}")]
    Write { path: String, content: String },
    #[display("read {path}")]
    Read { path: String },
    #[display("ls {path}")]
    Ls { path: String },
}

impl Op {
    /// Parses one `ops` entry: a one-key mapping naming the operation.
    ///
    /// `mkdir`/`read`/`ls` take the path as a scalar value; `write` takes a
    /// mapping with `path` and `content` keys. Anything else is skipped.
    pub fn from_yaml_entry(entry: &Yaml) -> Option<Self> {
        let Some(mapping) = entry.as_mapping() else {
            warn!("Skipping scenario entry that is not a mapping: {:?}", entry);
            return None;
        };
        let mut pairs = mapping.iter();
        let (key, value) = pairs.next()?;
        if pairs.next().is_some() {
            warn!("Skipping scenario entry with more than one key: {:?}", entry);
            return None;
        }

        let op = match key.as_str() {
            Some("mkdir") => value.as_str().map(|path| Op::Mkdir {
                path: path.to_string(),
            }),
            Some("read") => value.as_str().map(|path| Op::Read {
                path: path.to_string(),
            }),
            Some("ls") => value.as_str().map(|path| Op::Ls {
                path: path.to_string(),
            }),
            Some("write") => value.as_mapping().and_then(Self::parse_write),
            other => {
                warn!("Unknown operation {:?}. Skipping.", other);
                return None;
            }
        };
        if op.is_none() {
            warn!("Skipping malformed scenario entry: {:?}", entry);
        }
        op
    }

    fn parse_write(fields: &LinkedHashMap<Yaml, Yaml>) -> Option<Self> {
        let path = fields
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed("path"))))?
            .as_str()?
            .to_string();
        let content = fields
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed("content"))))?
            .as_str()?
            .to_string();
        Some(Op::Write { path, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saphyr::LoadableYamlNode;

    fn parse_first(yaml: &str) -> Option<Op> {
        let docs = Yaml::load_from_str(yaml).unwrap();
        let entries = docs.first().unwrap().as_sequence().unwrap();
        Op::from_yaml_entry(entries.first().unwrap())
    }

    #[test]
    fn parses_scalar_valued_operations() {
        assert_eq!(
            parse_first("- mkdir: /a"),
            Some(Op::Mkdir { path: "/a".into() })
        );
        assert_eq!(
            parse_first("- read: /a/f.txt"),
            Some(Op::Read {
                path: "/a/f.txt".into()
            })
        );
        assert_eq!(parse_first("- ls: /a"), Some(Op::Ls { path: "/a".into() }));
    }

    #[test]
    fn parses_write_with_path_and_content() {
        assert_eq!(
            parse_first("- write:\n    path: /a/f.txt\n    content: hello"),
            Some(Op::Write {
                path: "/a/f.txt".into(),
                content: "hello".into()
            })
        );
    }

    #[test]
    fn rejects_write_missing_content() {
        assert_eq!(parse_first("- write:\n    path: /a/f.txt"), None);
    }

    #[test]
    fn rejects_unknown_operations_and_shapes() {
        assert_eq!(parse_first("- delete: /a"), None);
        assert_eq!(parse_first("- just a string"), None);
        assert_eq!(parse_first("- mkdir: /a\n  ls: /b"), None);
    }

    #[test]
    fn display_names_the_operation_and_path() {
        let op = Op::Write {
            path: "/a/f.txt".into(),
            content: "hello".into(),
        };
        assert_eq!(op.to_string(), "write /a/f.txt");
        assert_eq!(Op::Ls { path: "/a".into() }.to_string(), "ls /a");
    }
}
