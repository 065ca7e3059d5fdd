//! Value objects describing loop tallies.

pub mod summary;
pub mod tally;

pub use summary::RunSummary;
pub use tally::LoopTally;
