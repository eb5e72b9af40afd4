use tracing::{debug, info};

use crate::runner::printer;
use crate::scenario::{Op, Scenario};
use crate::store::{SharedStore, StoreError};

/// Replays a scenario's operations, in order, against one shared store.
///
/// A failed operation is reported and the run continues with the next one,
/// so a scenario always shows every outcome.
pub struct Runner {
    store: SharedStore,
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpOutput {
    Done,
    Content(String),
    Listing(Vec<String>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

impl Runner {
    pub fn new(store: SharedStore) -> Self {
        Runner { store }
    }

    pub fn run(&self, scenario: &Scenario) -> RunSummary {
        let mut summary = RunSummary::default();

        for op in scenario.ops() {
            debug!("Applying operation: {}", op);
            match self.apply(op) {
                Ok(output) => printer::print_op_ok(op, &output),
                Err(err) => {
                    printer::print_op_err(op, &err);
                    summary.failed += 1;
                }
            }
            summary.executed += 1;
        }

        info!(
            "Scenario finished: {} operation(s), {} failed",
            summary.executed, summary.failed
        );
        summary
    }

    fn apply(&self, op: &Op) -> Result<OpOutput, StoreError> {
        match op {
            Op::Mkdir { path } => self.store.mkdir(path).map(|()| OpOutput::Done),
            Op::Write { path, content } => self
                .store
                .write_file(path, content.clone())
                .map(|()| OpOutput::Done),
            Op::Read { path } => self.store.read_file(path).map(OpOutput::Content),
            Op::Ls { path } => self.store.ls(path).map(OpOutput::Listing),
        }
    }
}
