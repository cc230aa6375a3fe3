use crate::application::report::SettlementReport;
use crate::domain::money;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 3] = ["from", "to", "amount"];

#[derive(Serialize)]
struct PaymentRow<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Writes the payments of a report as CSV (`from,to,amount`).
///
/// The header is always written, so a balanced group yields a header-only
/// document.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
    currency: Option<String>,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self {
            writer,
            currency: None,
        }
    }

    /// Appends `symbol` to every formatted amount.
    pub fn with_currency(mut self, symbol: Option<&str>) -> Self {
        self.currency = symbol.map(str::to_string);
        self
    }

    pub fn write_payments(&mut self, report: &SettlementReport) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for line in &report.payments {
            self.writer.serialize(PaymentRow {
                from: &line.from,
                to: &line.to,
                amount: money::display_amount(line.amount, self.currency.as_deref()),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
