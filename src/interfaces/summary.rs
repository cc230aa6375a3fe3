use crate::application::report::SettlementReport;
use crate::domain::money::display_amount;
use crate::error::Result;
use std::fmt::Write as _;
use std::io::Write;

pub const TITLE: &str = "Settlement summary";

/// Renders a report as plain text, one fact per line.
pub fn render_summary(report: &SettlementReport, currency: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "Total spent: {}", display_amount(report.total, currency));
    let _ = writeln!(
        out,
        "Average per person: {}",
        display_amount(report.average, currency)
    );
    let _ = writeln!(out);

    for line in &report.participants {
        let _ = writeln!(out, "{} paid: {}", line.name, display_amount(line.paid, currency));
    }
    let _ = writeln!(out);

    if report.is_balanced() {
        let _ = writeln!(out, "All balanced");
    } else {
        let _ = writeln!(out, "Payments:");
        for payment in &report.payments {
            let _ = writeln!(
                out,
                "{} pays {}: {}",
                payment.from,
                payment.to,
                display_amount(payment.amount, currency)
            );
        }
    }
    out
}

pub fn write_summary<W: Write>(
    mut sink: W,
    report: &SettlementReport,
    currency: Option<&str>,
) -> Result<()> {
    sink.write_all(render_summary(report, currency).as_bytes())?;
    sink.flush()?;
    Ok(())
}
