//! Shared state for concurrent crawl branches
//!
//! The crawl tree mutates exactly two pieces of shared state, and both live
//! here so the engine itself never takes a lock:
//!
//! - `VisitTracker`: the set of URLs already claimed by some branch
//! - `WordTally`: the running word totals across every visited page

mod tally;
mod visited;

// Re-export main types
pub use tally::WordTally;
pub use visited::VisitTracker;
