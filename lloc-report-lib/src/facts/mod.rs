//! Loading of item collections from a pDepend summary report
//!
//! This module turns a summary XML document into the two item populations the
//! rest of the tool works on: files and functions. Each item carries a name
//! and a single numeric metric read from a configurable attribute.
//!
//! # Implementation Model
//!
//! [`SummaryReport::load`] reads and parses the document, then extracts:
//! - the `file` children of the first `files` section, and
//! - the `function` children of the first `package` section.
//!
//! Both populations implement the [`ItemSource`] capability so that
//! aggregation code is written once and applied to either of them.

mod item;
mod item_kind;
mod item_source;
mod summary_report;

pub use item::Item;
pub use item_kind::ItemKind;
pub use item_source::{Files, Functions, ItemSource};
pub use summary_report::SummaryReport;
