//! Scenario files: a YAML-described sequence of namespace operations that
//! the runner replays against a fresh store.

mod op;
mod scenario;

pub use op::Op;
pub use scenario::{Scenario, ScenarioLoadError};
