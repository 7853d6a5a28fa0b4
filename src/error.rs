/// Errors reported by tree operations that need at least one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AshwoodError {
    /// `minimum`, `maximum`, `delete_minimum` or `delete_maximum` on an empty container.
    #[error("{operation} on empty tree")]
    EmptyTree { operation: &'static str },
}

/// A broken structural invariant, as found by [`Ashwood::validate`](crate::Ashwood::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("keys are not in strictly ascending order")]
    Unordered,
    #[error("node has balance factor {balance}")]
    Unbalanced { balance: isize },
    #[error("node caches height {cached} but its subtree has height {actual}")]
    StaleHeight { cached: usize, actual: usize },
    #[error("tree records {recorded} keys but holds {counted}")]
    SizeMismatch { recorded: usize, counted: usize },
}

#[cfg(test)]
mod tests {
    use super::{AshwoodError, InvariantViolation};

    #[test]
    pub fn messages() {
        let err = AshwoodError::EmptyTree {
            operation: "minimum",
        };
        assert_eq!(err.to_string(), "minimum on empty tree");

        let err = InvariantViolation::SizeMismatch {
            recorded: 3,
            counted: 2,
        };
        assert_eq!(err.to_string(), "tree records 3 keys but holds 2");
    }
}
