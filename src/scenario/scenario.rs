use std::{borrow::Cow, io::Cursor, path::Path};

use compio::{fs::File, io::AsyncReadExt, io::BufReader};
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::scenario::Op;

const OPS_KEY: &str = "ops";

/// An ordered sequence of namespace operations loaded from a YAML file.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    ops: Vec<Op>,
}

impl Scenario {
    pub async fn read(path: &Path) -> Result<Self, ScenarioLoadError> {
        debug!("Opening scenario file: {}", path.display());
        let file = File::open(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;

        debug!("Reading scenario file");
        let cursor = Cursor::new(file);
        let mut reader = BufReader::new(cursor);
        let res = reader.read_to_string(String::new()).await;
        match res.0 {
            Ok(n) => debug!("Successfully read scenario file: {n} bytes"),
            _ => {
                res.0.context(ReadSnafu {
                    file_path: path.display().to_string(),
                })?;
            }
        }
        res.1.as_str().try_into()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl TryFrom<&str> for Scenario {
    type Error = ScenarioLoadError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents)
            .map_err(|e| ScenarioLoadError::ParseError { source: e })?;
        let document = documents
            .first()
            .ok_or(ScenarioLoadError::MalformedScenario)?;

        let top_level = document
            .as_mapping()
            .ok_or(ScenarioLoadError::TopLevelNotMap)?;

        let ops = top_level
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed(OPS_KEY))))
            .unwrap_or(&Yaml::Sequence(Vec::new()))
            .as_sequence()
            .ok_or(ScenarioLoadError::OpsNotSequence)?
            .iter()
            .filter_map(Op::from_yaml_entry)
            .collect::<Vec<_>>();

        Ok(Scenario { ops })
    }
}

#[derive(Debug, Snafu)]
pub enum ScenarioLoadError {
    #[snafu(display("Failed to read the scenario file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the scenario file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted scenario file"))]
    MalformedScenario,
    #[snafu(display("Top level of a scenario should be a map"))]
    TopLevelNotMap,
    #[snafu(display("The 'ops' section should be a sequence"))]
    OpsNotSequence,
}
