use super::Host;
use super::config::Config;
use crate::Result;
use camino::Utf8Path;
use std::io::Write;

/// Write the default configuration file to `output`.
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn init_config<H: Host>(host: &mut H, output: &Utf8Path) -> Result<()> {
    Config::save_default(output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}
