use serde::{Deserialize, Serialize};
use strum::Display;

/// What `average` and `mean` produce for a collection with no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmptyCollectionPolicy {
    /// Fail the run, as there is nothing to divide by or index into
    #[default]
    Error,

    /// Report zero for both statistics
    Zero,
}
