//! Strategies command implementation
//!
//! Lists the strategy catalogue and the inputs each entry needs.

use std::io::Write;

use crate::config::OutputFormat;
use crate::output::write_catalogue;
use crate::Result;

/// Run the strategies command
pub fn run(format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut out, format)
}

/// Write the catalogue to `out`
pub fn execute<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    write_catalogue(out, format)
}
