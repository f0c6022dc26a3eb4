use camino::Utf8Path;
use strum::Display;

/// How a report is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OutputFormat {
    /// Labeled, human-readable blocks
    Text,

    /// A header line and a value line of the integer entries
    Csv,
}

impl OutputFormat {
    /// Pick the format from the optional destination argument.
    ///
    /// Only the presence of a destination matters; its value is never written to.
    #[must_use]
    pub const fn from_destination(destination: Option<&Utf8Path>) -> Self {
        if destination.is_some() { Self::Csv } else { Self::Text }
    }
}
