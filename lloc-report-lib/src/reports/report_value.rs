/// A value recorded against a report label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportValue {
    Int(u64),
    Text(String),

    /// Name/metric pairs in display order
    Map(Vec<(String, u64)>),
}
