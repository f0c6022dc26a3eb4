use super::ReportValue;

/// Label of the single entry a failed run reports.
pub const ERROR_LABEL: &str = "The following error occurred";

/// Labeled results in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, ReportValue)>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// A report made of a single error entry.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.record(ERROR_LABEL, ReportValue::Text(message.into()));
        report
    }

    /// Record `value` under `label`.
    ///
    /// Recording a label that is already present replaces its value but keeps
    /// its original position.
    pub fn record(&mut self, label: impl Into<String>, value: ReportValue) {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            entry.1 = value;
        } else {
            self.entries.push((label, value));
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, ReportValue)] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries.iter().find(|(existing, _)| existing == label).map(|(_, value)| value)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
