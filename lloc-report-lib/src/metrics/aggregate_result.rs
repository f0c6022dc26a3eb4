use crate::facts::ItemKind;
use crate::reports::{Report, ReportValue};

/// The five aggregates computed for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateResult {
    pub kind: ItemKind,
    pub max: u64,
    pub all: Vec<(String, u64)>,
    pub max_name: String,
    pub average: u64,
    pub mean: u64,
}

impl AggregateResult {
    /// Append the aggregates to `report` under their labels, in reporting order.
    pub fn record_into(self, report: &mut Report) {
        let kind = self.kind;

        report.record(format!("Max logical lines of code per {kind}"), ReportValue::Int(self.max));
        report.record(format!("All logical lines of code per {kind}"), ReportValue::Map(self.all));
        report.record(format!("{kind} with the most lines of code"), ReportValue::Text(self.max_name));
        report.record(format!("Average logical lines of code per {kind}"), ReportValue::Int(self.average));
        report.record(format!("Mean logical lines of code per {kind}"), ReportValue::Int(self.mean));
    }
}
