use colored::Colorize;
use supports_color::Stream;

use crate::runner::OpOutput;
use crate::scenario::Op;
use crate::store::StoreError;

/// Disables colored output when stdout is not a color-capable terminal.
/// `colored` only checks environment variables on its own, so pipes would
/// otherwise still receive escape codes.
pub fn install_color_override() {
    if supports_color::on(Stream::Stdout).is_none() {
        colored::control::set_override(false);
    }
}

pub(crate) fn print_op_ok(op: &Op, output: &OpOutput) {
    println!("{} {}", "ok ".green().bold(), op);
    match output {
        OpOutput::Done => {}
        OpOutput::Content(content) => {
            for line in content.lines() {
                println!("    {line}");
            }
        }
        OpOutput::Listing(names) => {
            for name in names {
                println!("    {}", name.cyan());
            }
        }
    }
}

pub(crate) fn print_op_err(op: &Op, err: &StoreError) {
    println!("{} {}: {}", "err".red().bold(), op, err);
}
