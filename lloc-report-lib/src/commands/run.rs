//! Command dispatch logic for lloc-report

use super::common::init_logging;
use super::summarize::fail;
use super::{Host, SummarizeArgs, init_config, summarize};
use crate::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::error::ErrorKind;
use clap::Parser;
use ohno::app_err;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "lloc-report", version, author, long_about = None)]
#[command(about = "Summarize logical lines of code per file and per function from a pDepend summary report")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: SummarizeArgs,
}

/// Parse command-line arguments and run the tool
///
/// This function is designed to be called from main.rs with the program arguments.
/// Help and version requests are printed to the host's output. Every other
/// failure, including malformed arguments, is reported as a single error entry.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if argument parsing fails or if the run fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(host.output(), "{e}");
            return Ok(());
        }
        Err(e) => return fail(host, app_err!("{}", e.to_string().trim_end())),
    };

    let args = cli.args;
    init_logging(args.log_level);

    if let Some(output) = &args.init_config {
        return match init_config(host, output) {
            Ok(()) => Ok(()),
            Err(e) => fail(host, e),
        };
    }

    summarize(host, &args)
}
