//! Report buffering and rendering
//!
//! This module holds the labeled results accumulated during a run and turns
//! them into output.
//!
//! # Implementation Model
//!
//! A [`Report`] is an ordered list of label/value pairs with unique labels.
//! Values are integers, strings, or name→metric listings ([`ReportValue`]).
//!
//! Two generators consume a report:
//! - **Text**: every entry as a `label:` line followed by its value, with a
//!   blank line between entries
//! - **CSV**: only the integer entries, as one header line of labels and one
//!   line of values
//!
//! The generator is picked once per run through [`OutputFormat`] and invoked
//! via [`render`]. Both write to a `core::fmt::Write` sink; the caller decides
//! where the text ends up.

mod csv;
mod output_format;
mod report;
mod report_value;
mod text;

pub use csv::generate as generate_csv;
pub use output_format::OutputFormat;
pub use report::{ERROR_LABEL, Report};
pub use report_value::ReportValue;
pub use text::generate as generate_text;

use crate::Result;
use core::fmt::Write;

/// Render `report` with the generator selected by `format`.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn render<W: Write>(report: &Report, format: OutputFormat, use_colors: bool, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => generate_text(report, use_colors, writer),
        OutputFormat::Csv => generate_csv(report, writer),
    }
}
