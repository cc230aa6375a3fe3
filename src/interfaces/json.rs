use crate::application::report::SettlementReport;
use crate::error::Result;
use std::io::Write;

/// Writes a report as pretty-printed JSON. Amounts stay in minor units.
pub fn write_json<W: Write>(mut sink: W, report: &SettlementReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, report)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}
