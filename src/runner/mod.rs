mod printer;
mod runner;

pub use printer::install_color_override;
pub use runner::{OpOutput, RunSummary, Runner};
