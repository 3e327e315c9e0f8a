//! # fxtend
//!
//! Functional utility toolkit built around two algebraic containers and a set
//! of collection transformations layered on top of them.
//!
//! - [`Optional`]: a value or its absence, with a fixed serde wire contract
//!   (absent serializes to `null`).
//! - [`Outcome`]: a value or the error that prevented it, with the
//!   Map/FlatMap combinator family including cancellation-aware `_ctx`
//!   variants driven by a [`Signal`].
//! - [`collections`]: to-map construction, map reversal, group-by and
//!   filter/map helpers, each with an explicit duplicate-handling policy
//!   (fail fast, last-write-wins, or collect-errors-aside).
//!
//! Everything is a pure, synchronous, single-threaded transformation; the
//! crate performs no I/O and spawns nothing. The only shared state is the
//! cancel flag inside a cloned [`Signal`], which combinators sample once at
//! entry.

pub mod builder;
pub mod collections;
pub mod error;
pub mod optional;
pub mod outcome;
pub mod prelude;
pub mod signal;

pub use error::{FxError, FxResult};
pub use optional::Optional;
pub use outcome::{flat_map_err, flat_map_err_ctx, Outcome};
pub use signal::Signal;
