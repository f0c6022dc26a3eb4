use super::{AggregateResult, EmptyCollectionPolicy};
use crate::Result;
use crate::facts::{Item, ItemSource};
use ohno::{IntoAppError, bail};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

const LOG_TARGET: &str = "   metrics";

/// Name reported when no item has a metric above zero.
const NO_NAME: &str = "none";

/// Computes summary statistics over the items of one collection.
#[derive(Debug)]
pub struct Aggregator<'a, S: ?Sized> {
    source: &'a S,
    empty_policy: EmptyCollectionPolicy,
}

impl<'a, S: ItemSource + ?Sized> Aggregator<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S, empty_policy: EmptyCollectionPolicy) -> Self {
        Self { source, empty_policy }
    }

    fn items(&self) -> &'a [Item] {
        self.source.items()
    }

    /// The largest metric, or 0 for an empty collection.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.items().iter().map(|item| item.metric).max().unwrap_or(0)
    }

    /// Every name with its metric, in ascending metric order.
    ///
    /// Names are keys: a repeated name keeps the position of its first
    /// occurrence and the metric of its last. Equal metrics keep their
    /// relative order.
    #[must_use]
    pub fn all(&self) -> Vec<(String, u64)> {
        let items = self.items();
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(items.len());
        let mut lines: Vec<(String, u64)> = Vec::with_capacity(items.len());

        for item in items {
            match positions.entry(item.name.as_str()) {
                Entry::Occupied(entry) => lines[*entry.get()].1 = item.metric,
                Entry::Vacant(entry) => {
                    let _ = entry.insert(lines.len());
                    lines.push((item.name.clone(), item.metric));
                }
            }
        }

        lines.sort_by_key(|&(_, metric)| metric);
        lines
    }

    /// Name of the item with the largest metric.
    ///
    /// Only a strictly greater metric replaces the running maximum, which
    /// starts at 0. Ties go to the earliest item, and a collection with no
    /// metric above zero yields `"none"`.
    #[must_use]
    pub fn max_name(&self) -> &'a str {
        let mut lines = 0;
        let mut name = NO_NAME;

        for item in self.items() {
            if item.metric > lines {
                lines = item.metric;
                name = &item.name;
            }
        }

        name
    }

    /// Arithmetic mean of the metrics, rounded down.
    ///
    /// # Errors
    ///
    /// Fails on an empty collection unless the policy is [`EmptyCollectionPolicy::Zero`].
    pub fn average(&self) -> Result<u64> {
        let items = self.items();
        if items.is_empty() {
            return self.on_empty("average");
        }

        // Widened so that large metrics cannot overflow the sum
        let total: u128 = items.iter().map(|item| u128::from(item.metric)).sum();
        let average = total / items.len() as u128;
        u64::try_from(average).into_app_err("average logical lines of code out of range")
    }

    /// The metric at index `count / 2` after sorting in descending order.
    ///
    /// For `[10, 20, 30, 40]` this is `20`, not the conventional median of `25`.
    ///
    /// # Errors
    ///
    /// Fails on an empty collection unless the policy is [`EmptyCollectionPolicy::Zero`].
    pub fn mean(&self) -> Result<u64> {
        let mut lines: Vec<u64> = self.items().iter().map(|item| item.metric).collect();
        if lines.is_empty() {
            return self.on_empty("mean");
        }

        lines.sort_unstable_by(|a, b| b.cmp(a));
        Ok(lines[lines.len() / 2])
    }

    /// Compute all five aggregates.
    ///
    /// # Errors
    ///
    /// Propagates the failure of [`Self::average`] or [`Self::mean`].
    pub fn summarize(&self) -> Result<AggregateResult> {
        let kind = self.source.kind();
        log::debug!(target: LOG_TARGET, "Aggregating {} {kind} item(s)", self.items().len());

        Ok(AggregateResult {
            kind,
            max: self.max(),
            all: self.all(),
            max_name: self.max_name().to_string(),
            average: self.average()?,
            mean: self.mean()?,
        })
    }

    fn on_empty(&self, statistic: &str) -> Result<u64> {
        let kind = self.source.kind();
        match self.empty_policy {
            EmptyCollectionPolicy::Error => {
                bail!("cannot compute the {statistic} logical lines of code per {kind}: the report contains no {kind} entries")
            }
            EmptyCollectionPolicy::Zero => {
                log::warn!(target: LOG_TARGET, "No {kind} entries in the report, reporting the {statistic} as 0");
                Ok(0)
            }
        }
    }
}
