//! The parse → aggregate → render pipeline.

use super::Host;
use super::common::{ColorMode, LogLevel};
use super::config::Config;
use crate::Result;
use crate::facts::{ItemSource, SummaryReport};
use crate::metrics::Aggregator;
use crate::reports::{OutputFormat, Report, generate_text, render};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::AppError;
use std::io::Write;

const LOG_TARGET: &str = "  commands";

/// Message reported when no summary report path was given
pub const USAGE_ERROR: &str = "Expected arguments were not present. Usage: lloc-report <SOURCE> [DEST]";

/// Arguments of a summarizing run
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the pDepend summary XML report
    #[arg(value_name = "SOURCE")]
    pub source: Option<Utf8PathBuf>,

    /// Output CSV instead of text. The report is still printed to standard output; this path is never written
    #[arg(value_name = "DEST")]
    pub destination: Option<Utf8PathBuf>,

    /// Path to configuration file (default is `lloc-report.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Write the default configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<Utf8PathBuf>,
}

/// Summarize the report named by `args` and print it to the host's output.
///
/// # Errors
///
/// Returns the first fatal error. By then the host has already received a
/// single error entry in place of the report and been asked to exit with status 1.
pub fn summarize<H: Host>(host: &mut H, args: &SummarizeArgs) -> Result<()> {
    let format = OutputFormat::from_destination(args.destination.as_deref());

    match build_report(args) {
        Ok(report) => {
            log::debug!(target: LOG_TARGET, "Rendering {} report entries as {format}", report.len());

            let mut output = String::new();
            render(&report, format, args.color.use_colors(), &mut output)?;
            let _ = write!(host.output(), "{output}");
            Ok(())
        }
        Err(e) => fail(host, e),
    }
}

fn build_report(args: &SummarizeArgs) -> Result<Report> {
    let source = args.source.as_ref().ok_or_else(|| AppError::new(USAGE_ERROR))?;
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    if let Some(destination) = &args.destination {
        log::info!(
            target: LOG_TARGET,
            "'{destination}' selects CSV output; the report goes to standard output and '{destination}' is not written"
        );
    }

    let summary = SummaryReport::load(source, &config.metric_attribute)?;

    let mut report = Report::new();
    let sources: [&dyn ItemSource; 2] = [summary.files(), summary.functions()];
    for item_source in sources {
        Aggregator::new(item_source, config.empty_collections)
            .summarize()?
            .record_into(&mut report);
    }

    Ok(report)
}

/// Replace all output with a single error entry and request exit status 1.
pub(super) fn fail<H: Host>(host: &mut H, error: AppError) -> Result<()> {
    log::error!(target: LOG_TARGET, "{error}");

    let mut output = String::new();
    let _ = generate_text(&Report::error(error.to_string()), false, &mut output);
    let _ = write!(host.output(), "{output}");

    host.exit(1);
    Err(error)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use std::fs;

    const SUMMARY: &str = r#"<metrics>
  <files>
    <file name="a.php" lloc="10"/>
    <file name="b.php" lloc="30"/>
  </files>
  <package name="+global">
    <function name="f" lloc="5"/>
  </package>
</metrics>"#;

    fn args_for(source: Option<Utf8PathBuf>, destination: Option<Utf8PathBuf>) -> SummarizeArgs {
        SummarizeArgs {
            source,
            destination,
            config: None,
            color: ColorMode::Never,
            log_level: LogLevel::None,
            init_config: None,
        }
    }

    fn write_summary(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("summary.xml")).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_missing_source_reports_usage() {
        let mut host = TestHost::new();
        let result = summarize(&mut host, &args_for(None, None));

        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
        let output = host.output_str();
        assert!(output.starts_with("The following error occurred:\n"), "{output}");
        assert!(output.contains(USAGE_ERROR), "{output}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_text_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_summary(&tmp, SUMMARY);

        let mut host = TestHost::new();
        summarize(&mut host, &args_for(Some(path), None)).unwrap();

        let output = host.output_str();
        assert!(output.contains("Max logical lines of code per file:\n30\n"), "{output}");
        assert!(output.contains("file with the most lines of code:\nb.php\n"), "{output}");
        assert!(output.contains("Max logical lines of code per function:\n5\n"), "{output}");
        assert!(output.contains("function with the most lines of code:\nf\n"), "{output}");
        assert_eq!(host.exit_code, None);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_destination_selects_csv_and_is_not_written() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_summary(&tmp, SUMMARY);
        let destination = Utf8PathBuf::try_from(tmp.path().join("out.csv")).unwrap();

        let mut host = TestHost::new();
        summarize(&mut host, &args_for(Some(path), Some(destination.clone()))).unwrap();

        let output = host.output_str();
        let mut lines = output.lines();
        let header = lines.next().unwrap();
        let values = lines.next().unwrap();
        assert!(header.starts_with("Max logical lines of code per file,Average logical lines of code per file,"));
        assert_eq!(values, "30,20,10,5,5,5");
        assert!(!destination.exists());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_empty_section_collapses_to_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_summary(&tmp, r#"<metrics><files/><package><function name="f" lloc="5"/></package></metrics>"#);

        let mut host = TestHost::new();
        let result = summarize(&mut host, &args_for(Some(path), None));

        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
        let output = host.output_str();
        assert!(output.starts_with("The following error occurred:\n"), "{output}");
        assert!(!output.contains("Max logical lines of code"), "{output}");
    }

    #[test]
    fn test_missing_file_collapses_to_error() {
        let mut host = TestHost::new();
        let result = summarize(&mut host, &args_for(Some(Utf8PathBuf::from("no/such/summary.xml")), None));

        assert!(result.is_err());
        assert!(host.output_str().contains("no/such/summary.xml"));
    }
}
