/// A single file or function entry from a summary report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Name as reported; not guaranteed to be unique within a collection.
    pub name: String,

    /// Logical lines of code, or whichever attribute the configuration selects.
    pub metric: u64,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, metric: u64) -> Self {
        Self { name: name.into(), metric }
    }
}
