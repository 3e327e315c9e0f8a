//! Error Taxonomy
//!
//! One canonical error enum covers every recoverable failure the crate can
//! produce: an empty `Optional`, a key/value collision while deriving a map,
//! and cancellation observed by the context-aware combinators. Programmer
//! errors (unwrapping the wrong tag) are deliberately *not* represented here;
//! those panic instead of returning a value of this type.

use std::fmt;

use thiserror::Error;

/// Convenience alias for `Result` carrying [`FxError`].
pub type FxResult<T> = Result<T, FxError>;

/// Errors produced by the container types and collection utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    /// [`Optional::get`](crate::Optional::get) was called on an absent value.
    #[error("optional is empty")]
    Empty,

    /// A key computed while building a map was already present.
    ///
    /// Carries the offending key rendered via `Debug`, since the key type is
    /// erased at this point and the value exists purely for diagnostics.
    #[error("duplicate key encountered: [{0}]")]
    DuplicateKey(String),

    /// Two distinct keys mapped to the same value while reversing a map.
    #[error("duplicate value encountered: [{0}]")]
    DuplicateValue(String),

    /// The signal threaded through a `_ctx` combinator was already cancelled.
    #[error("operation cancelled")]
    Cancelled,

    /// The signal's deadline had already passed when it was sampled.
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl FxError {
    /// Builds a [`FxError::DuplicateKey`] from the offending key.
    pub fn duplicate_key<K: fmt::Debug>(key: &K) -> Self {
        FxError::DuplicateKey(format!("{key:?}"))
    }

    /// Builds a [`FxError::DuplicateValue`] from the offending value.
    pub fn duplicate_value<V: fmt::Debug>(value: &V) -> Self {
        FxError::DuplicateValue(format!("{value:?}"))
    }

    /// True for the collision family (duplicate key or duplicate value).
    pub fn is_collision(&self) -> bool {
        matches!(
            self,
            FxError::DuplicateKey(_) | FxError::DuplicateValue(_)
        )
    }

    /// True for the cancellation family (explicit cancel or expired deadline).
    pub fn is_cancellation(&self) -> bool {
        matches!(self, FxError::Cancelled | FxError::DeadlineExceeded)
    }
}
