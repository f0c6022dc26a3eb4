use super::{Report, ReportValue};
use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Write every entry of `report` as a `label:` line followed by its value.
pub fn generate<W: Write>(report: &Report, use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, (label, value)) in report.entries().iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        if use_colors {
            writeln!(writer, "{}:", label.bold())?;
        } else {
            writeln!(writer, "{label}:")?;
        }

        match value {
            ReportValue::Int(number) => writeln!(writer, "{number}")?,
            ReportValue::Text(text) => writeln!(writer, "{text}")?,
            ReportValue::Map(pairs) => write_pairs(pairs, writer)?,
        }
    }

    Ok(())
}

fn write_pairs<W: Write>(pairs: &[(String, u64)], writer: &mut W) -> Result<()> {
    if pairs.is_empty() {
        writeln!(writer, "  (empty)")?;
        return Ok(());
    }

    // Align the arrows on the longest name
    let max_name_len = pairs.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);

    for (name, metric) in pairs {
        writeln!(writer, "  {name:<max_name_len$} => {metric}")?;
    }

    Ok(())
}
