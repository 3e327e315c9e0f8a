//! Collection Transformations
//!
//! Derived-map builders and map/slice helpers layered on [`Outcome`]. Each
//! builder states its duplicate policy explicitly: the fallible forms
//! (`to_map`, `reverse_map`) fail fast on the first collision and discard the
//! partial result, the `_override` forms are total with last-write-wins, and
//! the `map_apply` family never fails outright but accumulates per-entry
//! errors beside a best-effort output.
//!
//! [`Outcome`]: crate::Outcome

mod group_by;
mod map_ops;
mod reverse;
mod slice;
mod to_map;

pub use group_by::group_by;
pub use map_ops::{filter, filter_mut, filter_then_apply, keys, map_apply, values};
pub use reverse::{reverse_map, reverse_map_override};
pub use slice::concat;
pub use to_map::{to_map, to_map_fn, to_map_override, to_map_override_fn};
