//! I define [`Budget`], bounding the search for a bijection.
//!
//! Deciding isomorphism is exponential in the worst case
//! (e.g. for large cliques of indistinguishable blank nodes).
//! A [`Budget`] makes the search give up with an [`IsoError`]
//! rather than run for an unbounded time.
use std::time::{Duration, Instant};

use crate::IsoError;

/// The default value of [`Budget::max_calls`].
pub const DEFAULT_MAX_CALLS: usize = 100_000;

/// Limits applied to the bijection search.
///
/// The search is a recursion where each level speculatively pairs
/// one blank node of each graph;
/// every visited level is one *call*.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Budget {
    max_depth: Option<usize>,
    max_calls: Option<usize>,
    timeout: Option<Duration>,
}

impl Budget {
    /// A budget that never runs out.
    pub const fn unlimited() -> Self {
        Budget {
            max_depth: None,
            max_calls: None,
            timeout: None,
        }
    }

    /// The maximum number of successive speculative pairings, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// The maximum number of search steps, if any.
    pub fn max_calls(&self) -> Option<usize> {
        self.max_calls
    }

    /// The maximum duration of the search, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Change the [`max_depth`](Budget::max_depth) of this budget.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Budget {
            max_depth: Some(max_depth),
            ..self
        }
    }

    /// Change the [`max_calls`](Budget::max_calls) of this budget.
    #[must_use]
    pub fn with_max_calls(self, max_calls: usize) -> Self {
        Budget {
            max_calls: Some(max_calls),
            ..self
        }
    }

    /// Change the [`timeout`](Budget::timeout) of this budget.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Budget {
            timeout: Some(timeout),
            ..self
        }
    }

    pub(crate) fn start(&self) -> Meter<'_> {
        Meter {
            budget: self,
            calls: 0,
            deadline: self.timeout.map(|t| Instant::now() + t),
        }
    }
}

impl Default for Budget {
    /// No depth limit, [`DEFAULT_MAX_CALLS`], no timeout.
    fn default() -> Self {
        Budget {
            max_depth: None,
            max_calls: Some(DEFAULT_MAX_CALLS),
            timeout: None,
        }
    }
}

/// Keeps track of the resources consumed by one search.
#[derive(Debug)]
pub(crate) struct Meter<'a> {
    budget: &'a Budget,
    calls: usize,
    deadline: Option<Instant>,
}

impl Meter<'_> {
    /// Account for one search step at the given depth.
    pub(crate) fn charge(&mut self, depth: usize) -> Result<(), IsoError> {
        self.calls += 1;
        if let Some(max) = self.budget.max_depth {
            if depth > max {
                return Err(IsoError::DepthExceeded(max));
            }
        }
        if let Some(max) = self.budget.max_calls {
            if self.calls > max {
                return Err(IsoError::TooManyCalls(max));
            }
        }
        if let (Some(deadline), Some(timeout)) = (self.deadline, self.budget.timeout) {
            if Instant::now() > deadline {
                return Err(IsoError::Timeout(timeout));
            }
        }
        Ok(())
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }
}
