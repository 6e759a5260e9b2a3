use std::time::Duration;

use thiserror::Error;

/// Isomorphism error.
///
/// Every variant means that the search [`Budget`](crate::Budget) was exhausted
/// before a verdict could be reached:
/// the graphs may or may not be isomorphic.
/// This is distinct from `Ok(false)` / `Ok(None)`, which mean "not isomorphic".
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IsoError {
    /// Too many successive speculative pairings were required
    #[error("Undetermined: recursion deeper than {0} speculative pairings")]
    DepthExceeded(usize),
    /// Too many search steps were required
    #[error("Undetermined: more than {0} search steps")]
    TooManyCalls(usize),
    /// The search took longer than allowed
    #[error("Undetermined: timeout after {0:?}")]
    Timeout(Duration),
}
