//! List command implementation

use anyhow::Result;
use casefmt_core::FormatKind;
use std::io::Write;

/// Write one line per available case format
pub fn list_formats<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available formats:")?;
    for kind in FormatKind::all() {
        writeln!(
            writer,
            "  {} ({}) - {}",
            kind.name(),
            kind.choice(),
            kind.description()
        )?;
    }
    writer.flush()?;
    Ok(())
}
