use strum::Display;

/// The population an item belongs to.
///
/// The lowercase display form is embedded in report labels, e.g.
/// `Max logical lines of code per file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    File,
    Function,
}
