use super::{Report, ReportValue};
use crate::Result;
use core::fmt::Write;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use ohno::{IntoAppError, app_err};

/// Write the integer entries of `report` as a header line and a value line.
///
/// Strings and listings are skipped. Labels are written as-is, without quoting.
pub fn generate<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    let (labels, values): (Vec<&str>, Vec<String>) = report
        .entries()
        .iter()
        .filter_map(|(label, value)| match value {
            ReportValue::Int(number) => Some((label.as_str(), number.to_string())),
            ReportValue::Text(_) | ReportValue::Map(_) => None,
        })
        .unzip();

    if labels.is_empty() {
        return Ok(());
    }

    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    csv_writer.write_record(&labels)?;
    csv_writer.write_record(&values)?;

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| app_err!("unable to finish CSV output: {e}"))?;
    let text = String::from_utf8(bytes).into_app_err("CSV output is not valid UTF-8")?;

    write!(writer, "{text}")?;
    Ok(())
}
