use crate::application::dispatcher::PaymentReport;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Writes payment reports as CSV rows.
///
/// Columns: `provider,operation,order,tax,fee,net,success`. `fee` and `net`
/// are left empty for requests without an amount.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_report(&mut self, report: &PaymentReport) -> Result<()> {
        self.writer.serialize(report)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the `provider,tax` listing of registered providers.
pub fn write_provider_listing<W, I>(sink: W, providers: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (String, Decimal)>,
{
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["provider", "tax"])?;
    for (provider, tax) in providers {
        writer.write_record([provider, tax.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
