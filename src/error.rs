//! Error taxonomy for the presentation core.
//!
//! The core never catches or logs; an `InvalidArgument` propagates to the
//! HTTP layer, which maps it to a 400 with a JSON body. Everything else in
//! the core is total over its declared input domain.

use thiserror::Error;

/// Out-of-domain input handed to a core function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    /// Metric counts are non-negative finite numbers.
    #[error("metric count must be finite and non-negative, got {0}")]
    CountOutOfDomain(f64),

    /// Impact tags come from the closed set {high, medium, low}.
    #[error("unrecognized impact tag {0:?}")]
    UnknownImpact(String),

    /// A credential must contain at least one non-whitespace character.
    #[error("credential is empty after trimming")]
    EmptyCredential,
}
