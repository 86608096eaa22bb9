//! List command implementation.
//!
//! Prints the sixteen pattern kinds and whether each has a geometry
//! generator wired in.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::PatternKind;

/// List the known pattern generators
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show generators with geometry wired in
    #[arg(long)]
    pub implemented: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    for kind in PatternKind::ALL {
        if args.implemented && !kind.is_implemented() {
            continue;
        }

        let number = format!("{}", kind.number());
        if kind.is_implemented() {
            printer.info(&number, kind.name());
        } else {
            let suffix = printer.dim("(not implemented)");
            printer.info(&number, &format!("{} {}", kind.name(), suffix));
        }
    }

    Ok(())
}
