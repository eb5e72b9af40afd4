use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::application::RuntimeConfig;
use crate::runner::Runner;
use crate::scenario::{Scenario, ScenarioLoadError};
use crate::store::SharedStore;

pub struct Application;

impl Application {
    pub async fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();
        let scenario = Scenario::read(&config.scenario)
            .await
            .context(ScenarioSnafu)?;
        debug!("Loaded scenario: {:?}", scenario);
        if scenario.is_empty() {
            warn!("Scenario contains no operations");
        }

        let store = SharedStore::new();
        let summary = Runner::new(store).run(&scenario);

        if summary.failed > 0 {
            return FailedOperationsSnafu {
                failed: summary.failed,
                executed: summary.executed,
            }
            .fail();
        }
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the scenario"))]
    ScenarioError { source: ScenarioLoadError },
    #[snafu(display("{} of {} operation(s) failed", failed, executed))]
    FailedOperationsError { failed: usize, executed: usize },
}
