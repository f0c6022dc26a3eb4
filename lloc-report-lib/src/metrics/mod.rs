//! Summary statistics over an item collection
//!
//! This module computes the five aggregates reported for each population:
//! maximum, full listing, name of the largest item, average, and "mean".
//!
//! # Implementation Model
//!
//! An [`Aggregator`] borrows any [`ItemSource`](crate::facts::ItemSource) and
//! exposes one method per aggregate. Each method is an independent pass over
//! the items; nothing is cached between calls. [`Aggregator::summarize`]
//! runs all five and returns an [`AggregateResult`], which knows how to
//! record itself into a [`Report`](crate::reports::Report) under the
//! standard labels.
//!
//! The "mean" aggregate is a median-like value: the element at index
//! `count / 2` of the metrics sorted in descending order. For even counts
//! this is the lower of the two middle values.
//!
//! What happens when `average` or `mean` is asked of an empty collection is
//! decided by the [`EmptyCollectionPolicy`].

mod aggregate_result;
mod aggregator;
mod empty_collection_policy;

pub use aggregate_result::AggregateResult;
pub use aggregator::Aggregator;
pub use empty_collection_policy::EmptyCollectionPolicy;
