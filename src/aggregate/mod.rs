//! The aggregation core: pure, single-pass reductions from raw rental
//! records to chart-ready summary tables.
//!
//! Every operation here takes its input by reference, performs no I/O, and
//! returns a fresh table. The four summaries are recomputed from scratch on
//! each call; nothing is cached between calls.

pub mod group_stats;
pub mod hourly;
pub mod types;
pub mod utility;
pub mod weather;
