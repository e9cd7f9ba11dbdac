use crate::error::TraversalError;

/// Upper bound on how much pending work a traversal may queue.
///
/// Both traversals replace native recursion with an explicit stack, so a
/// pathological board grows the heap instead of overflowing the call stack.
/// This caps that growth and turns it into a reportable error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TraversalLimits {
    pub max_pending: usize,
}

impl TraversalLimits {
    pub const DEFAULT_MAX_PENDING: usize = 1 << 20;

    pub fn with_max_pending(mut self, max_pending: usize) -> Self {
        self.max_pending = max_pending;
        self
    }

    pub(crate) fn check(&self, pending: usize) -> Result<(), TraversalError> {
        if pending > self.max_pending {
            return Err(TraversalError::ResourceExhausted {
                pending,
                limit: self.max_pending,
            });
        }
        Ok(())
    }
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_pending: Self::DEFAULT_MAX_PENDING,
        }
    }
}
